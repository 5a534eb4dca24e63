//! Merge patches (RFC 7396).

use serde_json::{Map, Value};

use crate::error::{PatchError, PatchResult};

/// Merge `patch` into `target` in place.
///
/// For each key of an object patch: `null` removes the key, an object merges
/// recursively into an object (a non-object target is first replaced by an
/// empty object), anything else replaces the target value wholesale. Keys
/// absent from the patch are left untouched. A non-object patch replaces the
/// whole target.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    if let Value::Object(target_map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                target_map.remove(key);
            } else {
                merge_patch(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

/// Merge an object patch into a copy of `doc`.
///
/// Rejects patches that are not JSON objects.
pub fn apply_merge_patch(doc: &Value, patch: &Value) -> PatchResult<Value> {
    if !patch.is_object() {
        return Err(PatchError::MalformedMergePatch(
            "merge patch must be a JSON object".into(),
        ));
    }
    let mut working = doc.clone();
    merge_patch(&mut working, patch);
    Ok(working)
}
