use serde_json::Value;

/// Result of checking a value against a schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub violations: Vec<String>,
}

impl ValidationOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }

    pub fn fail(violations: Vec<String>) -> Self {
        Self {
            valid: false,
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Checks a candidate value against a JSON Schema.
///
/// The orchestrator treats implementations as a black box; they must not
/// panic on arbitrary schemas or values.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &Value, value: &Value) -> ValidationOutcome;
}

/// JSON Schema validation backed by the `jsonschema` crate.
///
/// A schema that does not compile yields a failed outcome naming the
/// compile error.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSchemaValidator;

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, schema: &Value, value: &Value) -> ValidationOutcome {
        let validator = match jsonschema::validator_for(schema) {
            Ok(validator) => validator,
            Err(err) => return ValidationOutcome::fail(vec![format!("invalid schema: {err}")]),
        };

        let violations: Vec<String> = validator.iter_errors(value).map(|e| e.to_string()).collect();
        if violations.is_empty() {
            ValidationOutcome::pass()
        } else {
            ValidationOutcome::fail(violations)
        }
    }
}

/// Accepts every value. Useful for tests and schema-less deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl SchemaValidator for AcceptAll {
    fn validate(&self, _schema: &Value, _value: &Value) -> ValidationOutcome {
        ValidationOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn baz_schema() -> Value {
        json!({
            "type": "object",
            "properties": {"baz": {"type": "boolean"}},
            "required": ["baz"]
        })
    }

    #[test]
    fn empty_schema_accepts_anything() {
        let v = JsonSchemaValidator;
        assert!(v.validate(&json!({}), &json!({"anything": [1, 2]})).is_valid());
    }

    #[test]
    fn valid_payload_passes() {
        let v = JsonSchemaValidator;
        let outcome = v.validate(&baz_schema(), &json!({"bar": 1, "baz": true}));
        assert_eq!(outcome, ValidationOutcome::pass());
    }

    #[test]
    fn violations_are_listed() {
        let v = JsonSchemaValidator;
        let outcome = v.validate(&baz_schema(), &json!({"bar": 1}));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.violations.len(), 1);
        assert!(outcome.violations[0].contains("baz"));

        let outcome = v.validate(&baz_schema(), &json!({"baz": "yes"}));
        assert!(!outcome.is_valid());
    }

    #[test]
    fn uncompilable_schema_fails() {
        let v = JsonSchemaValidator;
        let outcome = v.validate(&json!({"type": 12}), &json!({}));
        assert!(!outcome.is_valid());
        assert!(outcome.violations[0].starts_with("invalid schema"));
    }

    #[test]
    fn accept_all() {
        assert!(AcceptAll.validate(&baz_schema(), &json!(null)).is_valid());
    }
}
