//! Error types for canopy-avl.

use std::fmt;

/// Errors reported by tree mutations.
///
/// Both variants are local and recoverable: the tree is unchanged when
/// either is returned. There are no structural/internal error paths; the
/// balancing machinery maintains its own invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvlError {
    /// Insertion attempted with a key that is already present.
    DuplicateKey,
    /// Removal attempted with a key that is not present.
    KeyNotFound,
}

impl AvlError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, AvlError::DuplicateKey)
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, AvlError::KeyNotFound)
    }
}

impl fmt::Display for AvlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvlError::DuplicateKey => write!(f, "duplicate key"),
            AvlError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for AvlError {}

/// Result type alias for canopy-avl operations.
pub type Result<T> = std::result::Result<T, AvlError>;
