//! The AVL tree and its balancing machinery.

use std::cmp::Ordering;
use std::mem;

use crate::error::{AvlError, Result};
use crate::node::{Augment, AvlNode};

type Link<K, V, A> = Option<Box<AvlNode<K, V, A>>>;

/// An ordered map backed by a height-balanced (AVL) binary search tree.
///
/// Keys must carry a strict total order (`Ord`); values are opaque to the
/// tree. Search, insertion, and removal run in O(log n): the tree
/// rebalances bottom-up after every mutation so no node's balance factor
/// ever leaves {-1, 0, 1}.
///
/// Duplicate keys are rejected: `insert` on a present key fails with
/// [`AvlError::DuplicateKey`] and changes nothing. There is no
/// update-on-insert.
///
/// The third type parameter selects an [`Augment`] hook for auxiliary
/// per-subtree data; the default `()` is a no-op.
pub struct AvlTree<K, V, A = ()> {
    root: Link<K, V, A>,
    size: usize,
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Creates an empty tree with the no-op augmentation.
    ///
    /// Defined on the `A = ()` type so plain `AvlTree::new()` infers (the
    /// `HashMap::new`-on-`RandomState` pattern); augmented trees use
    /// [`with_augment`](AvlTree::with_augment).
    pub fn new() -> Self {
        Self::with_augment()
    }
}

impl<K: Ord, V, A: Augment<K, V>> AvlTree<K, V, A> {
    /// Creates an empty tree carrying augmentation `A`.
    pub fn with_augment() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        Self::search(&self.root, key).map(|node| &node.value)
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        Self::search(&self.root, key).is_some()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree: 0 for a single node, -1 when empty.
    pub fn height(&self) -> i32 {
        Self::height_of(&self.root)
    }

    /// Read access to the root node, for custom traversals and audits.
    ///
    /// The tree ships no iterator; walk the public `left`/`right` links
    /// instead. Mutation stays behind [`insert`](Self::insert) and
    /// [`remove`](Self::remove) so the invariants cannot be disturbed.
    pub fn root(&self) -> Option<&AvlNode<K, V, A>> {
        self.root.as_deref()
    }

    /// Returns the entry with the smallest key, if any.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key, if any.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Inserts a new key-value pair.
    ///
    /// Fails with [`AvlError::DuplicateKey`] if `key` is already present,
    /// leaving the tree untouched. Rebalancing may promote a different
    /// node to the root.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if Self::search(&self.root, &key).is_some() {
            return Err(AvlError::DuplicateKey);
        }
        let root = self.root.take();
        self.root = Some(Self::insert_at(root, key, value));
        self.size += 1;
        Ok(())
    }

    /// Removes the entry stored under `key`, dropping its value.
    ///
    /// Fails with [`AvlError::KeyNotFound`] if `key` is absent, leaving
    /// the tree untouched.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        if Self::search(&self.root, key).is_none() {
            return Err(AvlError::KeyNotFound);
        }
        self.root = Self::remove_at(self.root.take(), key);
        self.size -= 1;
        Ok(())
    }

    /// Consuming bulk teardown: frees every node post-order (children
    /// before parent), dropping stored values as it goes. Use when the
    /// tree owns the payload lifetime.
    ///
    /// Equivalent to dropping the tree; taking `self` by value makes
    /// use-after-teardown unrepresentable.
    pub fn teardown(mut self) {
        Self::drop_subtree(self.root.take());
    }

    /// Consuming bulk teardown that frees every node post-order WITHOUT
    /// running value destructors. Use when payload ownership lives
    /// elsewhere (raw handles, arena indices, values deliberately kept
    /// alive); for ordinary owned values this leaks them.
    pub fn teardown_structure(mut self) {
        Self::forget_values(self.root.take());
    }

    fn search<'a>(link: &'a Link<K, V, A>, key: &K) -> Option<&'a AvlNode<K, V, A>> {
        let node = link.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::search(&node.left, key),
            Ordering::Greater => Self::search(&node.right, key),
            Ordering::Equal => Some(node),
        }
    }

    fn insert_at(link: Link<K, V, A>, key: K, value: V) -> Box<AvlNode<K, V, A>> {
        let mut node = match link {
            None => {
                let mut leaf = Box::new(AvlNode::new(key, value));
                Self::refresh(&mut leaf);
                return leaf;
            }
            Some(node) => node,
        };
        // Duplicates were rejected up front, so not-less means greater.
        if key < node.key {
            node.left = Some(Self::insert_at(node.left.take(), key, value));
        } else {
            node.right = Some(Self::insert_at(node.right.take(), key, value));
        }
        Self::refresh(&mut node);
        Self::rebalance(node)
    }

    fn remove_at(link: Link<K, V, A>, key: &K) -> Link<K, V, A> {
        let mut node = link?;
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::remove_at(node.left.take(), key),
            Ordering::Greater => node.right = Self::remove_at(node.right.take(), key),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (Some(left), Some(right)) => {
                    // Two children: the in-order successor (leftmost of the
                    // right subtree) has no left child, so detaching it is
                    // the easy case. Its key and value move into this node;
                    // the node's storage is retained.
                    let (successor, rest) = Self::detach_min(right);
                    let AvlNode { key, value, .. } = *successor;
                    node.key = key;
                    node.value = value;
                    node.left = Some(left);
                    node.right = rest;
                }
            },
        }
        Self::refresh(&mut node);
        Some(Self::rebalance(node))
    }

    /// Splits the minimum node off a subtree, rebalancing the descent path
    /// on the way back up. Returns the detached node and what remains.
    fn detach_min(mut node: Box<AvlNode<K, V, A>>) -> (Box<AvlNode<K, V, A>>, Link<K, V, A>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                Self::refresh(&mut node);
                (min, Some(Self::rebalance(node)))
            }
        }
    }

    /// Recomputes cached height and balance factor from the (already
    /// correct) children, then runs the augmentation hook.
    fn refresh(node: &mut AvlNode<K, V, A>) {
        let left_height = Self::height_of(&node.left);
        let right_height = Self::height_of(&node.right);
        node.height = 1 + left_height.max(right_height);
        node.balance = left_height - right_height;

        let left_aux = node.left.as_deref().map(|n| &n.aux);
        let right_aux = node.right.as_deref().map(|n| &n.aux);
        node.aux.recompute(&node.key, &node.value, left_aux, right_aux);
    }

    /// Restores the AVL invariant at `node` after a single insert or
    /// remove below it. At most one rotation pattern fires: the tree was
    /// balanced before the edit, so |balance| never exceeds 2.
    fn rebalance(mut node: Box<AvlNode<K, V, A>>) -> Box<AvlNode<K, V, A>> {
        if node.balance == 2 {
            // Left heavy by two; a left child must exist.
            if let Some(left) = node.left.take() {
                node.left = if left.balance < 0 {
                    // Left-Right: straighten the kink first.
                    Some(Self::rotate_left(left))
                } else {
                    // Left-Left.
                    Some(left)
                };
            }
            return Self::rotate_right(node);
        }
        if node.balance == -2 {
            // Right heavy by two; mirror image.
            if let Some(right) = node.right.take() {
                node.right = if right.balance > 0 {
                    // Right-Left.
                    Some(Self::rotate_right(right))
                } else {
                    // Right-Right.
                    Some(right)
                };
            }
            return Self::rotate_left(node);
        }
        node
    }

    /// Rotates `node` right: its left child takes its structural position
    /// and `node` becomes that child's right child. Pure ownership
    /// transfer; both local roots are refreshed, displaced root first.
    fn rotate_right(mut node: Box<AvlNode<K, V, A>>) -> Box<AvlNode<K, V, A>> {
        let Some(mut pivot) = node.left.take() else {
            return node;
        };
        node.left = pivot.right.take();
        Self::refresh(&mut node);
        pivot.right = Some(node);
        Self::refresh(&mut pivot);
        pivot
    }

    /// Mirror of [`rotate_right`](Self::rotate_right).
    fn rotate_left(mut node: Box<AvlNode<K, V, A>>) -> Box<AvlNode<K, V, A>> {
        let Some(mut pivot) = node.right.take() else {
            return node;
        };
        node.right = pivot.left.take();
        Self::refresh(&mut node);
        pivot.left = Some(node);
        Self::refresh(&mut pivot);
        pivot
    }

    fn height_of(link: &Link<K, V, A>) -> i32 {
        link.as_deref().map_or(-1, |n| n.height)
    }

    fn drop_subtree(link: Link<K, V, A>) {
        if let Some(node) = link {
            let AvlNode { left, right, value, .. } = *node;
            Self::drop_subtree(left);
            Self::drop_subtree(right);
            drop(value);
        }
    }

    fn forget_values(link: Link<K, V, A>) {
        if let Some(node) = link {
            let AvlNode { left, right, value, .. } = *node;
            Self::forget_values(left);
            Self::forget_values(right);
            mem::forget(value);
        }
    }
}

impl<K: Ord, V, A: Augment<K, V>> Default for AvlTree<K, V, A> {
    fn default() -> Self {
        Self::with_augment()
    }
}
