use shelf_patch::PatchError;
use shelf_registry::RegistryError;
use shelf_store::StoreError;
use shelf_types::{ResourceKey, TypeError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("resource type {plural:?} not found in package {package:?}")]
    TypeNotFound { package: String, plural: String },

    #[error("resource not found: {0}")]
    NotFound(ResourceKey),

    #[error("resource already exists: {0}")]
    AlreadyExists(ResourceKey),

    #[error("resource {key} failed schema validation: {}", violations.join("; "))]
    Validation {
        key: ResourceKey,
        violations: Vec<String>,
    },

    #[error("malformed resource type definition {name:?}: {reason}")]
    MalformedTypeDefinition { name: String, reason: String },

    #[error("patch error: {0}")]
    Patch(#[from] PatchError),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => Self::NotFound(key),
            StoreError::AlreadyExists(key) => Self::AlreadyExists(key),
            other => Self::Store(other),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { package, plural } => Self::TypeNotFound { package, plural },
            RegistryError::Malformed { name, source } => Self::MalformedTypeDefinition {
                name,
                reason: source.to_string(),
            },
            RegistryError::Store(err) => err.into(),
        }
    }
}

impl From<TypeError> for ApiError {
    fn from(err: TypeError) -> Self {
        Self::InvalidResource(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
