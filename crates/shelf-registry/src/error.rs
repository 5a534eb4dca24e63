use shelf_store::StoreError;
use shelf_types::TypeError;
use thiserror::Error;

/// Errors from type resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No definition exists for the plural token in the package.
    #[error("resource type definition not found for package {package:?} and resource type {plural:?}")]
    NotFound { package: String, plural: String },

    /// A stored definition cannot be interpreted.
    #[error("resource type definition {name:?} is malformed: {source}")]
    Malformed { name: String, source: TypeError },

    /// The store failed for a reason other than absence.
    #[error("store error: {0}")]
    Store(StoreError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
