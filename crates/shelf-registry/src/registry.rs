use std::sync::Arc;

use shelf_store::ResourceStore;
use shelf_types::{
    definition_name, ResourceTypeDefinition, TypeError, CORE_PACKAGE, DEFINITION_TYPE,
};

use crate::builtin::builtin;
use crate::error::{RegistryError, RegistryResult};

/// Resolves plural, package-scoped type tokens to type definitions.
///
/// Read-only: resolution never writes to the store.
#[derive(Clone)]
pub struct TypeRegistry {
    store: Arc<dyn ResourceStore>,
}

impl TypeRegistry {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    /// Resolve `plural` in `package` to its definition.
    ///
    /// A stored definition must describe the package and plural it is
    /// stored under; a mismatch is reported as malformed.
    pub fn resolve(&self, package: &str, plural: &str) -> RegistryResult<ResourceTypeDefinition> {
        if package == CORE_PACKAGE {
            return builtin(plural).ok_or_else(|| not_found(package, plural));
        }

        let name = definition_name(package, plural);
        let stored = match self.store.get(CORE_PACKAGE, DEFINITION_TYPE, &name) {
            Ok(resource) => resource,
            Err(err) if err.is_not_found() => return Err(not_found(package, plural)),
            Err(err) => return Err(RegistryError::Store(err)),
        };

        let definition = ResourceTypeDefinition::from_resource(&stored).map_err(|source| {
            tracing::warn!(definition = %name, error = %source, "malformed type definition");
            RegistryError::Malformed {
                name: name.clone(),
                source,
            }
        })?;

        for (field, expected, found) in [
            ("package", package, definition.package.as_str()),
            ("plural", plural, definition.plural.as_str()),
        ] {
            if expected != found {
                return Err(RegistryError::Malformed {
                    name,
                    source: TypeError::Mismatch {
                        field: field.into(),
                        expected: expected.into(),
                        found: found.into(),
                    },
                });
            }
        }

        tracing::trace!(package, plural, resource_type = %definition.resource_type, "resolved type");
        Ok(definition)
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry").finish_non_exhaustive()
    }
}

fn not_found(package: &str, plural: &str) -> RegistryError {
    RegistryError::NotFound {
        package: package.to_string(),
        plural: plural.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shelf_store::InMemoryResourceStore;
    use shelf_types::{Resource, DEFINITION_PLURAL};

    fn setup() -> (Arc<InMemoryResourceStore>, TypeRegistry) {
        let store = Arc::new(InMemoryResourceStore::new());
        let registry = TypeRegistry::new(store.clone());
        (store, registry)
    }

    fn definition(name: &str, payload: serde_json::Value) -> Resource {
        let mut res = Resource::from_value(payload).unwrap();
        res.metadata.package_name = CORE_PACKAGE.into();
        res.metadata.resource_type = DEFINITION_TYPE.into();
        res.metadata.name = name.into();
        res
    }

    fn foo_definition() -> Resource {
        definition(
            "foos.test",
            json!({
                "package": "test",
                "resourceType": "Foo",
                "plural": "foos",
                "versions": [{"name": "v1", "schema": {"type": "object"}}]
            }),
        )
    }

    #[test]
    fn core_resolves_bootstrap() {
        let (_, registry) = setup();
        let def = registry.resolve("core", DEFINITION_PLURAL).unwrap();
        assert_eq!(def, ResourceTypeDefinition::bootstrap());
    }

    #[test]
    fn unknown_core_token_is_not_found() {
        let (_, registry) = setup();
        let err = registry.resolve("core", "widgets").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[test]
    fn core_is_never_read_from_store() {
        let (store, registry) = setup();
        // A stored definition cannot shadow the built-in one.
        store
            .create(&definition(
                "resourcetypedefinitions.core",
                json!({"package": "core", "resourceType": "Hijack", "plural": "resourcetypedefinitions",
                       "versions": [{"schema": {"not": {}}}]}),
            ))
            .unwrap();
        let def = registry.resolve("core", DEFINITION_PLURAL).unwrap();
        assert_eq!(def.resource_type, DEFINITION_TYPE);
    }

    #[test]
    fn stored_definition_resolves() {
        let (store, registry) = setup();
        store.create(&foo_definition()).unwrap();

        let def = registry.resolve("test", "foos").unwrap();
        assert_eq!(def.resource_type, "Foo");
        assert_eq!(def.metadata.name, "foos.test");
    }

    #[test]
    fn missing_definition_is_not_found() {
        let (_, registry) = setup();
        let err = registry.resolve("test", "foos").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                package: "test".into(),
                plural: "foos".into()
            }
        );
    }

    #[test]
    fn malformed_definition_is_reported() {
        let (store, registry) = setup();
        store
            .create(&definition(
                "foos.test",
                json!({"package": "test", "resourceType": "Foo", "plural": "foos", "versions": "v1"}),
            ))
            .unwrap();

        match registry.resolve("test", "foos").unwrap_err() {
            RegistryError::Malformed { name, source } => {
                assert_eq!(name, "foos.test");
                assert_eq!(source, TypeError::wrong_type("versions", "array"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mismatched_definition_is_malformed() {
        let (store, registry) = setup();
        store
            .create(&definition(
                "foos.test",
                json!({"package": "other", "resourceType": "Foo", "plural": "foos",
                       "versions": [{"schema": {}}]}),
            ))
            .unwrap();
        match registry.resolve("test", "foos").unwrap_err() {
            RegistryError::Malformed { name, source } => {
                assert_eq!(name, "foos.test");
                assert_eq!(
                    source,
                    TypeError::Mismatch {
                        field: "package".into(),
                        expected: "test".into(),
                        found: "other".into(),
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn redefinition_takes_effect_immediately() {
        let (store, registry) = setup();
        store.create(&foo_definition()).unwrap();
        assert_eq!(registry.resolve("test", "foos").unwrap().resource_type, "Foo");

        let mut redefined = foo_definition();
        redefined.payload.insert("resourceType".into(), json!("Fooz"));
        store.update(&redefined).unwrap();
        assert_eq!(registry.resolve("test", "foos").unwrap().resource_type, "Fooz");

        store.delete(CORE_PACKAGE, DEFINITION_TYPE, "foos.test").unwrap();
        assert!(registry.resolve("test", "foos").is_err());
    }
}
