//! Resource name validation.
//!
//! A name is embedded in the composite key `package/resourceType/name`, so:
//! - Must be non-empty
//! - Must not contain `/`
//! - Must not contain whitespace or control characters

use crate::error::{TypeError, TypeResult};

/// Validate a resource name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use shelf_types::validate_name;
///
/// assert!(validate_name("foo1").is_ok());
/// assert!(validate_name("foos.test").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("a/b").is_err());
/// ```
pub fn validate_name(name: &str) -> TypeResult<()> {
    if name.is_empty() {
        return Err(TypeError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".into(),
        });
    }

    if name.contains('/') {
        return Err(TypeError::InvalidName {
            name: name.to_string(),
            reason: "name must not contain '/'".into(),
        });
    }

    if let Some(ch) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(TypeError::InvalidName {
            name: name.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_name("foo1").is_ok());
        assert!(validate_name("my-resource").is_ok());
        assert!(validate_name("foos.test").is_ok());
        assert!(validate_name("v1.0_rc").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn reject_slash() {
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("/leading").is_err());
    }

    #[test]
    fn reject_whitespace_and_control() {
        assert!(validate_name("has space").is_err());
        assert!(validate_name("tab\there").is_err());
        assert!(validate_name("nul\u{0}").is_err());
    }
}
