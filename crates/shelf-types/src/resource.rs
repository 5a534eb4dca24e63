use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{TypeError, TypeResult};
use crate::metadata::{ListMetadata, Metadata};

/// The single payload key reserved for the metadata envelope.
pub const METADATA_KEY: &str = "metadata";

/// Composite key `package/resourceType/name`.
///
/// This is the only way a resource is addressed; there are no secondary
/// indexes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub package: String,
    pub resource_type: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(
        package: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if this key belongs to the given package and type.
    pub fn is_in(&self, package: &str, resource_type: &str) -> bool {
        self.package == package && self.resource_type == resource_type
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceKey({self})")
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.package, self.resource_type, self.name)
    }
}

/// A named, package-scoped, typed JSON object.
///
/// Serialized as `{"metadata": {...}, <payload properties...>}`. The payload
/// never contains [`METADATA_KEY`]: decoding routes that key to the envelope
/// and [`Resource::new`] strips it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Resource {
    pub fn new(metadata: Metadata, mut payload: Map<String, Value>) -> Self {
        payload.remove(METADATA_KEY);
        Self { metadata, payload }
    }

    /// Decode a resource from a JSON document.
    ///
    /// The document must be an object; a malformed `metadata` member is a
    /// serialization error.
    pub fn from_value(value: Value) -> TypeResult<Self> {
        if !value.is_object() {
            return Err(TypeError::NotAnObject {
                what: "resource".into(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Encode metadata and payload into a single JSON document.
    pub fn to_value(&self) -> TypeResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn key(&self) -> ResourceKey {
        self.metadata.key()
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    /// Required string payload field.
    pub fn str_field(&self, field: &str) -> TypeResult<&str> {
        self.payload
            .get(field)
            .ok_or_else(|| TypeError::missing(field))?
            .as_str()
            .ok_or_else(|| TypeError::wrong_type(field, "string"))
    }

    /// Required array payload field.
    pub fn array_field(&self, field: &str) -> TypeResult<&Vec<Value>> {
        self.payload
            .get(field)
            .ok_or_else(|| TypeError::missing(field))?
            .as_array()
            .ok_or_else(|| TypeError::wrong_type(field, "array"))
    }

    /// The payload as a standalone JSON object (metadata excluded).
    pub fn payload_value(&self) -> Value {
        Value::Object(self.payload.clone())
    }
}

/// List envelope: `{"metadata": {..., "resourceType": "FooList"}, "items": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    pub metadata: ListMetadata,
    pub items: Vec<Resource>,
}

impl ResourceList {
    pub fn new(
        package_name: impl Into<String>,
        api_version: impl Into<String>,
        resource_type: &str,
        items: Vec<Resource>,
    ) -> Self {
        Self {
            metadata: ListMetadata {
                package_name: package_name.into(),
                api_version: api_version.into(),
                resource_type: format!("{resource_type}List"),
            },
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
