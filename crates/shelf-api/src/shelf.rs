use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use shelf_patch::{Patch, PatchError};
use shelf_registry::TypeRegistry;
use shelf_store::{InMemoryResourceStore, ResourceStore};
use shelf_types::{
    validate_name, Metadata, Resource, ResourceKey, ResourceList, ResourceTypeDefinition,
    TypeError, CORE_PACKAGE, DEFINITION_PLURAL,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::validator::{JsonSchemaValidator, SchemaValidator};

/// High-level resource API.
///
/// Every operation names its type by `(package, plural)`; the type is
/// resolved afresh on each call. Only `create` validates against the type's
/// schema. `replace` and `patch` read then write without a version check,
/// so concurrent writers to one resource resolve last-writer-wins.
pub struct Shelf {
    store: Arc<dyn ResourceStore>,
    registry: TypeRegistry,
    validator: Arc<dyn SchemaValidator>,
}

impl Shelf {
    pub fn new(store: Arc<dyn ResourceStore>, validator: Arc<dyn SchemaValidator>) -> Self {
        let registry = TypeRegistry::new(store.clone());
        Self {
            store,
            registry,
            validator,
        }
    }

    /// An empty in-memory shelf validating with JSON Schema.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryResourceStore::new()),
            Arc::new(JsonSchemaValidator),
        )
    }

    // ---- Types ----

    pub fn resolve_type(&self, package: &str, plural: &str) -> ApiResult<ResourceTypeDefinition> {
        Ok(self.registry.resolve(package, plural)?)
    }

    /// Store a type definition under `core`. Shorthand for creating a
    /// `resourcetypedefinitions` resource.
    pub fn register_type(&self, definition: &ResourceTypeDefinition) -> ApiResult<Resource> {
        let mut resource = definition.to_resource();
        resource.metadata.name = definition.storage_name();
        let body = resource.to_value()?;
        self.create_resource(CORE_PACKAGE, "v1", DEFINITION_PLURAL, body)
    }

    // ---- Resources ----

    pub fn list_resources(
        &self,
        package: &str,
        api_version: &str,
        plural: &str,
    ) -> ApiResult<ResourceList> {
        tracing::debug!(package, api_version, plural, "list resources");
        let def = self.resolve_type(package, plural)?;
        let items = self.store.list(package, &def.resource_type)?;
        Ok(ResourceList::new(package, api_version, &def.resource_type, items))
    }

    pub fn create_resource(
        &self,
        package: &str,
        api_version: &str,
        plural: &str,
        body: Value,
    ) -> ApiResult<Resource> {
        tracing::debug!(package, api_version, plural, "create resource");
        let def = self.resolve_type(package, plural)?;
        let mut resource = Resource::from_value(body)?;

        let name = resource.metadata.name.clone();
        validate_name(&name)?;

        let version = def
            .primary_version()
            .ok_or_else(|| ApiError::MalformedTypeDefinition {
                name: def.storage_name(),
                reason: "no versions".into(),
            })?;
        let outcome = self
            .validator
            .validate(&version.schema_value(), &resource.payload_value());
        if !outcome.is_valid() {
            return Err(ApiError::Validation {
                key: ResourceKey::new(package, &def.resource_type, &name),
                violations: outcome.violations,
            });
        }

        let now = Utc::now();
        let metadata = &mut resource.metadata;
        metadata.uid = Uuid::now_v7();
        metadata.stamp_identity(package, api_version, &def.resource_type, &name);
        metadata.created_at = now;
        metadata.updated_at = now;

        self.store.create(&resource)?;
        tracing::info!(key = %resource.key(), uid = %resource.metadata.uid, "resource created");
        Ok(resource)
    }

    pub fn get_resource(&self, package: &str, plural: &str, name: &str) -> ApiResult<Resource> {
        tracing::debug!(package, plural, name, "get resource");
        let def = self.resolve_type(package, plural)?;
        Ok(self.store.get(package, &def.resource_type, name)?)
    }

    /// Replace the payload of an existing resource.
    ///
    /// Identity comes from the path; the `metadata` member of `body` is
    /// discarded unread. `uid` and `createdAt` carry over from the stored
    /// copy.
    pub fn replace_resource(
        &self,
        package: &str,
        api_version: &str,
        plural: &str,
        name: &str,
        body: Value,
    ) -> ApiResult<Resource> {
        tracing::debug!(package, api_version, plural, name, "replace resource");
        let def = self.resolve_type(package, plural)?;
        validate_name(name)?;
        let Value::Object(payload) = body else {
            return Err(TypeError::NotAnObject {
                what: "resource".into(),
            }
            .into());
        };
        let mut resource = Resource::new(Metadata::default(), payload);

        let existing = self.store.get(package, &def.resource_type, name)?;
        restamp(&mut resource, &existing, package, api_version, &def, name);

        self.store.update(&resource)?;
        tracing::info!(key = %resource.key(), "resource replaced");
        Ok(resource)
    }

    /// Apply `patch` to the full stored document, metadata included.
    ///
    /// The patched document is re-stamped afterwards, so a patch cannot
    /// rename, move or re-identify a resource. A failing patch leaves the
    /// stored resource untouched.
    pub fn patch_resource(
        &self,
        package: &str,
        api_version: &str,
        plural: &str,
        name: &str,
        patch: &Patch,
    ) -> ApiResult<Resource> {
        tracing::debug!(package, api_version, plural, name, kind = %patch.kind(), "patch resource");
        let def = self.resolve_type(package, plural)?;
        let existing = self.store.get(package, &def.resource_type, name)?;

        let patched = patch.apply(&existing.to_value()?)?;
        let mut resource = Resource::from_value(patched)
            .map_err(|e| ApiError::Patch(PatchError::InvalidResult(e.to_string())))?;
        restamp(&mut resource, &existing, package, api_version, &def, name);

        self.store.update(&resource)?;
        tracing::info!(key = %resource.key(), "resource patched");
        Ok(resource)
    }

    pub fn delete_resource(&self, package: &str, plural: &str, name: &str) -> ApiResult<()> {
        tracing::debug!(package, plural, name, "delete resource");
        let def = self.resolve_type(package, plural)?;
        self.store.delete(package, &def.resource_type, name)?;
        tracing::info!(package, resource_type = %def.resource_type, name, "resource deleted");
        Ok(())
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Shelf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shelf")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Set identity from the request path and carry `uid`/`createdAt` over
/// from `existing`.
fn restamp(
    resource: &mut Resource,
    existing: &Resource,
    package: &str,
    api_version: &str,
    def: &ResourceTypeDefinition,
    name: &str,
) {
    let metadata = &mut resource.metadata;
    metadata.stamp_identity(package, api_version, &def.resource_type, name);
    metadata.uid = existing.metadata.uid;
    metadata.created_at = existing.metadata.created_at;
    metadata.updated_at = next_update_time(existing.metadata.updated_at);
}

/// `now`, but never earlier than `previous`.
fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
