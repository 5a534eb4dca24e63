use serde_json::{json, Map, Value};

use crate::error::{TypeError, TypeResult};
use crate::metadata::Metadata;
use crate::resource::Resource;

/// Package that owns type definitions.
pub const CORE_PACKAGE: &str = "core";
/// Singular type name of type definitions.
pub const DEFINITION_TYPE: &str = "ResourceTypeDefinition";
/// Plural path token of type definitions.
pub const DEFINITION_PLURAL: &str = "resourcetypedefinitions";

/// Storage name of the definition for `plural` in `package`.
///
/// Definitions live at `core/ResourceTypeDefinition/<plural>.<package>`.
pub fn definition_name(package: &str, plural: &str) -> String {
    format!("{plural}.{package}")
}

/// One schema version of a resource type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeVersion {
    pub name: String,
    pub schema: Map<String, Value>,
}

impl TypeVersion {
    pub fn new(name: impl Into<String>, schema: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    pub fn schema_value(&self) -> Value {
        Value::Object(self.schema.clone())
    }
}

/// Describes a resource type: owning package, singular and plural names,
/// and an ordered list of schema versions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceTypeDefinition {
    pub metadata: Metadata,
    pub package: String,
    pub resource_type: String,
    pub plural: String,
    pub versions: Vec<TypeVersion>,
}

impl ResourceTypeDefinition {
    /// The definition of `ResourceTypeDefinition` itself.
    ///
    /// It is synthesized on demand and never stored, which breaks the
    /// bootstrap cycle. Its schema is `{}` so any payload is accepted.
    pub fn bootstrap() -> Self {
        Self {
            metadata: Metadata::new(
                CORE_PACKAGE,
                "v1",
                DEFINITION_TYPE,
                definition_name(CORE_PACKAGE, DEFINITION_PLURAL),
            ),
            package: CORE_PACKAGE.into(),
            resource_type: DEFINITION_TYPE.into(),
            plural: DEFINITION_PLURAL.into(),
            versions: vec![TypeVersion::new("v1", Map::new())],
        }
    }

    /// Interpret a stored resource as a type definition.
    ///
    /// Every field is checked individually; a mismatch names the field.
    pub fn from_resource(resource: &Resource) -> TypeResult<Self> {
        let package = resource.str_field("package")?.to_string();
        let resource_type = resource.str_field("resourceType")?.to_string();
        let plural = resource.str_field("plural")?.to_string();

        let raw_versions = resource.array_field("versions")?;
        if raw_versions.is_empty() {
            return Err(TypeError::MissingField {
                field: "versions[0]".into(),
            });
        }

        let mut versions = Vec::with_capacity(raw_versions.len());
        for (i, raw) in raw_versions.iter().enumerate() {
            let version = raw
                .as_object()
                .ok_or_else(|| TypeError::wrong_type(format!("versions[{i}]"), "object"))?;

            let name = match version.get("name") {
                None => String::new(),
                Some(Value::String(name)) => name.clone(),
                Some(_) => return Err(TypeError::wrong_type(format!("versions[{i}].name"), "string")),
            };

            let schema = version
                .get("schema")
                .ok_or_else(|| TypeError::missing(format!("versions[{i}].schema")))?
                .as_object()
                .ok_or_else(|| TypeError::wrong_type(format!("versions[{i}].schema"), "object"))?
                .clone();

            versions.push(TypeVersion { name, schema });
        }

        Ok(Self {
            metadata: resource.metadata.clone(),
            package,
            resource_type,
            plural,
            versions,
        })
    }

    /// Encode as a resource ready to be stored under package `core`.
    pub fn to_resource(&self) -> Resource {
        let versions: Vec<Value> = self
            .versions
            .iter()
            .map(|v| json!({"name": v.name, "schema": v.schema_value()}))
            .collect();

        let mut payload = Map::new();
        payload.insert("package".into(), Value::String(self.package.clone()));
        payload.insert("resourceType".into(), Value::String(self.resource_type.clone()));
        payload.insert("plural".into(), Value::String(self.plural.clone()));
        payload.insert("versions".into(), Value::Array(versions));

        Resource::new(self.metadata.clone(), payload)
    }

    /// The version used for create-time validation (the first one).
    pub fn primary_version(&self) -> Option<&TypeVersion> {
        self.versions.first()
    }

    /// Storage name of this definition (`<plural>.<package>`).
    pub fn storage_name(&self) -> String {
        definition_name(&self.package, &self.plural)
    }
}
