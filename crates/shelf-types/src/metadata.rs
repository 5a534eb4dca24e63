use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::ResourceKey;

/// Identity envelope attached to every resource.
///
/// `uid` and `created_at` are assigned once at creation. `package_name`,
/// `resource_type` and `name` form the composite key. `api_version` is
/// advisory and never used for dispatch. Every field defaults when absent so
/// request bodies may omit metadata entirely; the server stamps it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub uid: Uuid,
    pub package_name: String,
    pub api_version: String,
    pub resource_type: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    /// Metadata carrying only the identity fields.
    pub fn new(
        package_name: impl Into<String>,
        api_version: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            api_version: api_version.into(),
            resource_type: resource_type.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Overwrite the identity fields, leaving `uid` and timestamps alone.
    pub fn stamp_identity(
        &mut self,
        package_name: &str,
        api_version: &str,
        resource_type: &str,
        name: &str,
    ) {
        self.package_name = package_name.to_string();
        self.api_version = api_version.to_string();
        self.resource_type = resource_type.to_string();
        self.name = name.to_string();
    }

    /// Composite key derived from the identity fields.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.package_name, &self.resource_type, &self.name)
    }

    /// Returns `true` once a uid has been assigned.
    pub fn has_uid(&self) -> bool {
        !self.uid.is_nil()
    }
}

/// Envelope metadata of a [`ResourceList`](crate::ResourceList).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub package_name: String,
    pub api_version: String,
    pub resource_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let meta = Metadata::new("test", "v1", "Foo", "foo1");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["packageName"], "test");
        assert_eq!(json["apiVersion"], "v1");
        assert_eq!(json["resourceType"], "Foo");
        assert_eq!(json["name"], "foo1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn missing_fields_default() {
        let meta: Metadata = serde_json::from_str(r#"{"name":"foo1"}"#).unwrap();
        assert_eq!(meta.name, "foo1");
        assert!(meta.package_name.is_empty());
        assert!(!meta.has_uid());
    }

    #[test]
    fn stamp_identity_keeps_uid_and_timestamps() {
        let mut meta = Metadata::new("a", "v0", "X", "x");
        meta.uid = Uuid::now_v7();
        let uid = meta.uid;
        let created = meta.created_at;

        meta.stamp_identity("test", "v1", "Foo", "foo1");
        assert_eq!(meta.key().to_string(), "test/Foo/foo1");
        assert_eq!(meta.uid, uid);
        assert_eq!(meta.created_at, created);
    }
}
