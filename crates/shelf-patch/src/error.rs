use thiserror::Error;

/// Errors produced while decoding or applying a patch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The pointer string is not a valid RFC 6901 JSON Pointer.
    #[error("invalid pointer {pointer:?}: {reason}")]
    InvalidPointer { pointer: String, reason: String },

    /// The pointer does not resolve to an existing value.
    #[error("path not found: {path:?}")]
    PathNotFound { path: String },

    /// The pointer resolves, but the operation cannot act on that location.
    #[error("invalid target {path:?}: {reason}")]
    InvalidTarget { path: String, reason: String },

    /// A `test` operation found a different value.
    #[error("test failed at {path:?}")]
    TestFailed { path: String },

    /// A `move` whose destination lies inside its source.
    #[error("cannot move {from:?} into its own child {path:?}")]
    MoveIntoChild { from: String, path: String },

    /// An operation in an ordered patch failed; nothing was applied.
    #[error("operation {index} ({op}) failed: {source}")]
    Operation {
        index: usize,
        op: &'static str,
        source: Box<PatchError>,
    },

    /// The ordered-operation body could not be decoded.
    #[error("malformed patch document: {0}")]
    MalformedPatch(String),

    /// The merge-patch body is not a JSON object.
    #[error("malformed merge patch: {0}")]
    MalformedMergePatch(String),

    /// The content type does not name a supported patch format.
    #[error("unsupported patch content type: {0:?}")]
    UnsupportedContentType(String),

    /// The patched document no longer describes a valid resource.
    #[error("patch produced an invalid document: {0}")]
    InvalidResult(String),
}

impl PatchError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn invalid_target(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The innermost error, unwrapping operation context.
    pub fn root_cause(&self) -> &PatchError {
        match self {
            Self::Operation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result alias for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;
