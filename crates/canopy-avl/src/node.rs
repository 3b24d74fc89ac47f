//! Tree node and the augmentation hook.

/// Auxiliary per-node data recomputed alongside height and balance factor.
///
/// Implementations see the node's key and value plus the (already correct)
/// auxiliary data of both children, so subtree aggregates compose bottom-up
/// the same way heights do. The hook runs at leaf creation and after every
/// structural change below a node, including mid-rotation.
///
/// The default augmentation `()` does nothing, so plain maps pay nothing
/// for the hook.
pub trait Augment<K, V>: Default {
    fn recompute(&mut self, key: &K, value: &V, left: Option<&Self>, right: Option<&Self>);
}

impl<K, V> Augment<K, V> for () {
    fn recompute(&mut self, _key: &K, _value: &V, _left: Option<&Self>, _right: Option<&Self>) {}
}

/// A single tree vertex: one key-value pair, cached height and balance
/// factor, auxiliary data, and exclusively owned child links.
///
/// Pure data holder. Fields are public so callers can run custom read-only
/// traversals and invariant audits; every invariant (BST order, AVL
/// balance, height correctness) is maintained by [`AvlTree`] operations,
/// never by the node itself.
///
/// [`AvlTree`]: crate::AvlTree
#[derive(Debug, Clone)]
pub struct AvlNode<K, V, A = ()> {
    pub key: K,
    pub value: V,
    /// Cached height of the subtree rooted here. Leaf is 0; an absent
    /// subtree counts as -1.
    pub height: i32,
    /// Cached `height(left) - height(right)`.
    pub balance: i32,
    /// Auxiliary data maintained by the [`Augment`] hook.
    pub aux: A,
    pub left: Option<Box<AvlNode<K, V, A>>>,
    pub right: Option<Box<AvlNode<K, V, A>>>,
}

impl<K, V, A: Default> AvlNode<K, V, A> {
    /// Creates a detached leaf node.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 0,
            balance: 0,
            aux: A::default(),
            left: None,
            right: None,
        }
    }
}
