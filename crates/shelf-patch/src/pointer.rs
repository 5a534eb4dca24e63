//! RFC 6901 JSON Pointers.
//!
//! `""` is the whole document; every other pointer is a sequence of
//! `/`-prefixed reference tokens where `~1` stands for `/` and `~0` for `~`.

use std::fmt;

use serde_json::Value;

use crate::error::{PatchError, PatchResult};

/// A parsed JSON Pointer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    /// The pointer to the whole document.
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse a pointer string.
    pub fn parse(pointer: &str) -> PatchResult<Self> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }

        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(PatchError::InvalidPointer {
                pointer: pointer.to_string(),
                reason: "must be empty or start with '/'".into(),
            });
        };

        let tokens = rest
            .split('/')
            .map(|raw| unescape(raw).ok_or_else(|| PatchError::InvalidPointer {
                pointer: pointer.to_string(),
                reason: format!("invalid escape in token {raw:?}"),
            }))
            .collect::<PatchResult<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Split into the parent pointer and the last token.
    ///
    /// Returns `None` for the root pointer.
    pub fn split_last(&self) -> Option<(JsonPointer, &str)> {
        let (last, parent) = self.tokens.split_last()?;
        Some((
            JsonPointer {
                tokens: parent.to_vec(),
            },
            last.as_str(),
        ))
    }

    /// Returns `true` if `other` lies strictly below this pointer.
    pub fn is_proper_prefix_of(&self, other: &JsonPointer) -> bool {
        self.tokens.len() < other.tokens.len() && other.tokens.starts_with(&self.tokens)
    }

    /// Resolve against a document.
    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        self.tokens.iter().try_fold(doc, |current, token| match current {
            Value::Object(map) => map.get(token),
            Value::Array(items) => array_index(token, items.len()).and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Resolve mutably against a document.
    pub fn get_mut<'a>(&self, doc: &'a mut Value) -> Option<&'a mut Value> {
        self.tokens
            .iter()
            .try_fold(doc, |current, token| match current {
                Value::Object(map) => map.get_mut(token),
                Value::Array(items) => {
                    let len = items.len();
                    array_index(token, len).and_then(move |i| items.get_mut(i))
                }
                _ => None,
            })
    }
}

/// Parse an existing-element array index (`0` .. `len - 1`).
///
/// Leading zeros and `-` are rejected.
pub(crate) fn array_index(token: &str, len: usize) -> Option<usize> {
    let index = parse_index(token)?;
    (index < len).then_some(index)
}

/// Parse a decimal array index without leading zeros.
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", token.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

impl fmt::Debug for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonPointer({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_root() {
        let ptr = JsonPointer::parse("").unwrap();
        assert!(ptr.is_root());
        assert!(ptr.split_last().is_none());
    }

    #[test]
    fn parse_escapes() {
        let ptr = JsonPointer::parse("/a~1b/m~0n").unwrap();
        assert_eq!(ptr.tokens(), ["a/b", "m~n"]);
        assert_eq!(ptr.to_string(), "/a~1b/m~0n");
    }

    #[test]
    fn reject_missing_slash() {
        assert!(JsonPointer::parse("bar").is_err());
    }

    #[test]
    fn reject_bad_escape() {
        assert!(JsonPointer::parse("/a~2").is_err());
        assert!(JsonPointer::parse("/a~").is_err());
    }

    #[test]
    fn resolve_objects_and_arrays() {
        let doc = json!({"foo": ["bar", "baz"], "": 0, "a/b": 1});
        assert_eq!(JsonPointer::parse("/foo/1").unwrap().get(&doc), Some(&json!("baz")));
        assert_eq!(JsonPointer::parse("/").unwrap().get(&doc), Some(&json!(0)));
        assert_eq!(JsonPointer::parse("/a~1b").unwrap().get(&doc), Some(&json!(1)));
        assert!(JsonPointer::parse("/foo/2").unwrap().get(&doc).is_none());
        assert!(JsonPointer::parse("/foo/01").unwrap().get(&doc).is_none());
        assert!(JsonPointer::parse("/foo/-").unwrap().get(&doc).is_none());
        assert!(JsonPointer::parse("/foo/0/x").unwrap().get(&doc).is_none());
    }

    #[test]
    fn resolve_mut() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        *JsonPointer::parse("/a/b/0").unwrap().get_mut(&mut doc).unwrap() = json!(9);
        assert_eq!(doc, json!({"a": {"b": [9, 2]}}));
    }

    #[test]
    fn prefix_relation() {
        let a = JsonPointer::parse("/a").unwrap();
        let ab = JsonPointer::parse("/a/b").unwrap();
        assert!(a.is_proper_prefix_of(&ab));
        assert!(!ab.is_proper_prefix_of(&a));
        assert!(!a.is_proper_prefix_of(&a));
        assert!(JsonPointer::root().is_proper_prefix_of(&a));
    }
}
