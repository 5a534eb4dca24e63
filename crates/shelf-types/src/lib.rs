//! Identity model for Shelf.
//!
//! Every object held by Shelf is a [`Resource`]: a [`Metadata`] envelope plus
//! an open map of JSON payload properties. Resources are addressed by their
//! [`ResourceKey`] (`package/resourceType/name`) and never by anything else.
//!
//! # Key Types
//!
//! - [`Metadata`] — server-stamped identity and timestamps
//! - [`Resource`] — metadata envelope + opaque payload
//! - [`ResourceKey`] — composite key, the sole addressing scheme
//! - [`ResourceList`] — list envelope returned by list operations
//! - [`ResourceTypeDefinition`] — a resource describing another type's schema
//!
//! Type definitions are themselves resources. The definition for
//! `ResourceTypeDefinition` is the only one that does not live in a store;
//! see [`ResourceTypeDefinition::bootstrap`].

pub mod definition;
pub mod error;
pub mod metadata;
pub mod names;
pub mod resource;

pub use definition::{
    definition_name, ResourceTypeDefinition, TypeVersion, CORE_PACKAGE, DEFINITION_PLURAL,
    DEFINITION_TYPE,
};
pub use error::{TypeError, TypeResult};
pub use metadata::{ListMetadata, Metadata};
pub use names::validate_name;
pub use resource::{Resource, ResourceKey, ResourceList, METADATA_KEY};
