//! Mutation orchestrator for Shelf.
//!
//! [`Shelf`] is the entry point for embedding the resource store. Each
//! request names a package and a plural type token; the orchestrator
//! resolves the type, validates (on create), stamps identity metadata and
//! commits through the resource store.

pub mod error;
pub mod shelf;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use shelf::Shelf;
pub use validator::{AcceptAll, JsonSchemaValidator, SchemaValidator, ValidationOutcome};

// Re-export key types
pub use shelf_patch::{Patch, PatchKind, PatchOperation};
pub use shelf_store::{InMemoryResourceStore, ResourceStore};
pub use shelf_types::{Metadata, Resource, ResourceKey, ResourceList, ResourceTypeDefinition};
