use shelf_types::ResourceKey;

/// Errors from resource store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No resource is stored under the key.
    #[error("resource not found: {0}")]
    NotFound(ResourceKey),

    /// A resource is already stored under the key.
    #[error("resource already exists: {0}")]
    AlreadyExists(ResourceKey),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
