//! Type registry for Shelf.
//!
//! Resolves a `(package, plural)` pair, as it appears in a request path, to
//! the [`ResourceTypeDefinition`](shelf_types::ResourceTypeDefinition) that
//! governs it.
//!
//! - Package `core` is served from a fixed built-in table. Its single entry,
//!   `resourcetypedefinitions`, is the definition of type definitions, so new
//!   types can be registered without an infinite regress.
//! - Every other package is looked up in the resource store under
//!   `core/ResourceTypeDefinition/<plural>.<package>`.
//!
//! Nothing is cached: a redefined type takes effect on the next request.

pub mod builtin;
pub mod error;
pub mod registry;

pub use builtin::{builtin, builtin_definitions};
pub use error::{RegistryError, RegistryResult};
pub use registry::TypeRegistry;
