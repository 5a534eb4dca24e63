//! Patch engine for Shelf.
//!
//! Two mutation modes converge on the same contract: take a JSON document,
//! return a new document or an error, never a half-applied result.
//!
//! - **Ordered operations** ([`PatchOperation`], RFC 6902): `add`, `remove`,
//!   `replace`, `move`, `copy` and `test`, addressed by RFC 6901 JSON
//!   Pointers and applied strictly in order to a working copy. The first
//!   failing operation aborts the whole patch.
//! - **Merge patch** ([`merge_patch`], RFC 7396): a JSON object merged
//!   recursively into the target; `null` deletes a key.
//!
//! The mode is chosen by [`PatchKind`], normally derived from a request
//! content type.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use shelf_patch::{Patch, PatchKind};
//!
//! let doc = json!({"bar": 1, "baz": true});
//! let body = br#"[{"op":"replace","path":"/bar","value":4},{"op":"remove","path":"/baz"}]"#;
//! let patch = Patch::decode(PatchKind::JsonPatch, body).unwrap();
//! assert_eq!(patch.apply(&doc).unwrap(), json!({"bar": 4}));
//! ```

pub mod error;
pub mod merge;
pub mod ops;
pub mod patch;
pub mod pointer;

pub use error::{PatchError, PatchResult};
pub use merge::{apply_merge_patch, merge_patch};
pub use ops::{apply_operations, PatchOperation};
pub use patch::{Patch, PatchKind};
pub use pointer::JsonPointer;
