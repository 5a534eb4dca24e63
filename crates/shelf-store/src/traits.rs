use shelf_types::Resource;

use crate::error::StoreResult;

/// Associative store of resources keyed by `package/resourceType/name`.
///
/// All implementations must satisfy these invariants:
/// - The composite key is unique; `create` never overwrites.
/// - `create` and `update` check existence and write atomically.
/// - `update` fully replaces the stored value.
/// - Readers observe either the old or the new value of a resource, never a
///   partially written one.
pub trait ResourceStore: Send + Sync {
    /// All resources in `package` whose type is `resource_type`.
    ///
    /// Returns an empty vector when nothing matches. No ordering is promised.
    fn list(&self, package: &str, resource_type: &str) -> StoreResult<Vec<Resource>>;

    /// Insert a new resource. Fails with `AlreadyExists` if the key is taken.
    fn create(&self, resource: &Resource) -> StoreResult<()>;

    /// Read a resource. Fails with `NotFound` if absent.
    fn get(&self, package: &str, resource_type: &str, name: &str) -> StoreResult<Resource>;

    /// Replace an existing resource. Fails with `NotFound` if absent.
    fn update(&self, resource: &Resource) -> StoreResult<()>;

    /// Remove a resource. Fails with `NotFound` if absent.
    fn delete(&self, package: &str, resource_type: &str, name: &str) -> StoreResult<()>;
}
