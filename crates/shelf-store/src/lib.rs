//! Generic resource repository for Shelf.
//!
//! Resources of every type and package share one associative store keyed by
//! [`ResourceKey`](shelf_types::ResourceKey). The store never interprets
//! payloads; it only enforces key uniqueness.
//!
//! # Storage Backends
//!
//! All backends implement the [`ResourceStore`] trait:
//!
//! - [`InMemoryResourceStore`] -- `HashMap`-based store behind one `RwLock`
//!
//! # Design Rules
//!
//! 1. The composite key is unique across the store.
//! 2. Existence checks and writes happen in one critical section.
//! 3. Writes are serialized store-wide; reads share the lock.
//! 4. `update` replaces the stored value wholesale, never merges.
//! 5. Removal only happens through `delete`.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryResourceStore;
pub use traits::ResourceStore;
