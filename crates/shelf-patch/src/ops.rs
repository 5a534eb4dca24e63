//! Ordered-operation patches (RFC 6902).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PatchError, PatchResult};
use crate::pointer::{parse_index, JsonPointer};

/// One operation of an ordered patch.
///
/// Wire form: `{"op": "replace", "path": "/bar", "value": 4}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Replace { .. } => "replace",
            Self::Move { .. } => "move",
            Self::Copy { .. } => "copy",
            Self::Test { .. } => "test",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. }
            | Self::Remove { path }
            | Self::Replace { path, .. }
            | Self::Move { path, .. }
            | Self::Copy { path, .. }
            | Self::Test { path, .. } => path,
        }
    }

    /// Apply this operation in place.
    ///
    /// On error `doc` may be partially modified; callers work on a copy.
    pub fn apply_to(&self, doc: &mut Value) -> PatchResult<()> {
        match self {
            Self::Add { path, value } => add(doc, &JsonPointer::parse(path)?, value.clone()),
            Self::Remove { path } => remove(doc, &JsonPointer::parse(path)?).map(drop),
            Self::Replace { path, value } => {
                let target = JsonPointer::parse(path)?
                    .get_mut(doc)
                    .ok_or_else(|| PatchError::not_found(path))?;
                *target = value.clone();
                Ok(())
            }
            Self::Move { from, path } => {
                let from_ptr = JsonPointer::parse(from)?;
                let to_ptr = JsonPointer::parse(path)?;
                if from_ptr.is_proper_prefix_of(&to_ptr) {
                    return Err(PatchError::MoveIntoChild {
                        from: from.clone(),
                        path: path.clone(),
                    });
                }
                let value = remove(doc, &from_ptr)?;
                add(doc, &to_ptr, value)
            }
            Self::Copy { from, path } => {
                let value = JsonPointer::parse(from)?
                    .get(doc)
                    .cloned()
                    .ok_or_else(|| PatchError::not_found(from))?;
                add(doc, &JsonPointer::parse(path)?, value)
            }
            Self::Test { path, value } => {
                let actual = JsonPointer::parse(path)?
                    .get(doc)
                    .ok_or_else(|| PatchError::not_found(path))?;
                if json_equal(actual, value) {
                    Ok(())
                } else {
                    Err(PatchError::TestFailed { path: path.clone() })
                }
            }
        }
    }
}

/// Apply `ops` in order to a copy of `doc`.
///
/// Each operation sees the document as left by the previous ones. If any
/// operation fails the error names its index and `doc` is untouched.
pub fn apply_operations(doc: &Value, ops: &[PatchOperation]) -> PatchResult<Value> {
    let mut working = doc.clone();
    for (index, op) in ops.iter().enumerate() {
        op.apply_to(&mut working)
            .map_err(|source| PatchError::Operation {
                index,
                op: op.name(),
                source: Box::new(source),
            })?;
    }
    Ok(working)
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_equal(x, y)))
        }
        _ => a == b,
    }
}

fn add(doc: &mut Value, ptr: &JsonPointer, value: Value) -> PatchResult<()> {
    let Some((parent_ptr, token)) = ptr.split_last() else {
        *doc = value;
        return Ok(());
    };

    let parent = parent_ptr
        .get_mut(doc)
        .ok_or_else(|| PatchError::not_found(parent_ptr.to_string()))?;

    match parent {
        Value::Object(map) => {
            map.insert(token.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            if token == "-" {
                items.push(value);
                return Ok(());
            }
            match parse_index(token) {
                Some(index) if index <= items.len() => {
                    items.insert(index, value);
                    Ok(())
                }
                _ => Err(PatchError::invalid_target(
                    ptr.to_string(),
                    format!("array index {token:?} out of bounds"),
                )),
            }
        }
        _ => Err(PatchError::invalid_target(
            ptr.to_string(),
            "parent is not an object or array",
        )),
    }
}

fn remove(doc: &mut Value, ptr: &JsonPointer) -> PatchResult<Value> {
    let Some((parent_ptr, token)) = ptr.split_last() else {
        return Err(PatchError::invalid_target("", "cannot remove the document root"));
    };

    let parent = parent_ptr
        .get_mut(doc)
        .ok_or_else(|| PatchError::not_found(ptr.to_string()))?;

    match parent {
        Value::Object(map) => map
            .remove(token)
            .ok_or_else(|| PatchError::not_found(ptr.to_string())),
        Value::Array(items) => match parse_index(token) {
            Some(index) if index < items.len() => Ok(items.remove(index)),
            _ => Err(PatchError::not_found(ptr.to_string())),
        },
        _ => Err(PatchError::not_found(ptr.to_string())),
    }
}
