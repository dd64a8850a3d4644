/// Returned by [`RbTree::insert()`](crate::RbTree::insert) when the key is
/// already present in the tree.
///
/// The tree is not modified. The rejected key is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key {0:?} already present")]
pub struct DuplicateKeyError<K>(K);

impl<K> DuplicateKeyError<K> {
    pub(crate) fn new(key: K) -> Self {
        Self(key)
    }

    /// The key that was rejected.
    pub fn key(&self) -> &K {
        &self.0
    }

    /// Take ownership of the rejected key.
    pub fn into_key(self) -> K {
        self.0
    }
}
