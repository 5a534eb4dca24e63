use std::fmt;

use serde_json::Value;

use crate::error::{PatchError, PatchResult};
use crate::merge::apply_merge_patch;
use crate::ops::{apply_operations, PatchOperation};

/// The two supported patch formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchKind {
    /// Ordered operations, `application/json-patch+json`.
    JsonPatch,
    /// Recursive merge, `application/merge-patch+json`.
    MergePatch,
}

impl PatchKind {
    pub const JSON_PATCH_CONTENT_TYPE: &'static str = "application/json-patch+json";
    pub const MERGE_PATCH_CONTENT_TYPE: &'static str = "application/merge-patch+json";

    /// Select the patch format from a `Content-Type` header value.
    ///
    /// Media type parameters (`; charset=utf-8`) are ignored.
    pub fn from_content_type(content_type: &str) -> PatchResult<Self> {
        let media_type = content_type.split(';').next().unwrap_or_default().trim();
        if media_type.eq_ignore_ascii_case(Self::JSON_PATCH_CONTENT_TYPE) {
            Ok(Self::JsonPatch)
        } else if media_type.eq_ignore_ascii_case(Self::MERGE_PATCH_CONTENT_TYPE) {
            Ok(Self::MergePatch)
        } else {
            Err(PatchError::UnsupportedContentType(content_type.to_string()))
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::JsonPatch => Self::JSON_PATCH_CONTENT_TYPE,
            Self::MergePatch => Self::MERGE_PATCH_CONTENT_TYPE,
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonPatch => write!(f, "json-patch"),
            Self::MergePatch => write!(f, "merge-patch"),
        }
    }
}

/// A decoded patch, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    Ordered(Vec<PatchOperation>),
    Merge(Value),
}

impl Patch {
    /// Decode a raw request body.
    pub fn decode(kind: PatchKind, body: &[u8]) -> PatchResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| match kind {
            PatchKind::JsonPatch => PatchError::MalformedPatch(e.to_string()),
            PatchKind::MergePatch => PatchError::MalformedMergePatch(e.to_string()),
        })?;
        Self::from_value(kind, value)
    }

    /// Interpret an already parsed JSON body.
    pub fn from_value(kind: PatchKind, value: Value) -> PatchResult<Self> {
        match kind {
            PatchKind::JsonPatch => {
                if !value.is_array() {
                    return Err(PatchError::MalformedPatch(
                        "json patch must be an array of operations".into(),
                    ));
                }
                serde_json::from_value(value)
                    .map(Self::Ordered)
                    .map_err(|e| PatchError::MalformedPatch(e.to_string()))
            }
            PatchKind::MergePatch => {
                if !value.is_object() {
                    return Err(PatchError::MalformedMergePatch(
                        "merge patch must be a JSON object".into(),
                    ));
                }
                Ok(Self::Merge(value))
            }
        }
    }

    pub fn kind(&self) -> PatchKind {
        match self {
            Self::Ordered(_) => PatchKind::JsonPatch,
            Self::Merge(_) => PatchKind::MergePatch,
        }
    }

    /// Apply to a copy of `doc`; `doc` itself is never modified.
    pub fn apply(&self, doc: &Value) -> PatchResult<Value> {
        match self {
            Self::Ordered(ops) => apply_operations(doc, ops),
            Self::Merge(patch) => apply_merge_patch(doc, patch),
        }
    }
}
