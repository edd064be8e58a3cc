//! Declarative per-field rules. A [`Schema`] checks every field and every rule
//! in one pass and reports all failures, so the form can flag each invalid
//! input at once instead of one per submit.

use super::{FormPayload, ValidationErrors};
use regex::Regex;

/// Accepts `local@domain.tld` shaped addresses with no whitespace.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// A single constraint on a string field.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Rule {
    /// Fails when the field is absent or empty.
    Required { message: String },
    /// Fails when a non-empty value is not an e-mail address.
    Email { message: String },
    /// Fails when a present value has fewer than `min` characters.
    MinLength { min: usize, message: String },
    /// Fails when a present value differs from the `other` field's value.
    EqualsField { other: String, message: String },
}

impl Rule {
    fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::MinLength { message, .. }
            | Rule::EqualsField { message, .. } => message,
        }
    }

    fn accepts(&self, value: Option<&str>, payload: &FormPayload) -> bool {
        match (self, value) {
            (Rule::Required { .. }, value) => value.is_some_and(|v| !v.is_empty()),
            (_, None) => true,
            (Rule::Email { .. }, Some(value)) => value.is_empty() || valid_email(value),
            (Rule::MinLength { min, .. }, Some(value)) => value.chars().count() >= *min,
            (Rule::EqualsField { other, .. }, Some(value)) => payload.get(other) == Some(value),
        }
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

/// Rules for one named string field, checked in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    name: String,
    rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required {
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Email {
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn min(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLength {
            min,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn equals_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(Rule::EqualsField {
            other: other.into(),
            message: message.into(),
        });
        self
    }
}

/// An ordered set of field schemas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Checks every rule of every field; never stops at the first failure.
    /// Fields in the payload that the schema does not name are ignored.
    pub fn validate(&self, payload: &FormPayload) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            let value = payload.get(&field.name);
            for rule in &field.rules {
                if !rule.accepts(value, payload) {
                    errors.push(field.name.as_str(), rule.message());
                }
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldSchema, Schema, valid_email};
    use crate::forms::FormPayload;
    use rstest::rstest;

    fn paths(schema: &Schema, payload: &FormPayload) -> Vec<(String, String)> {
        schema
            .validate(payload)
            .err()
            .map(|errors| {
                errors
                    .failures()
                    .iter()
                    .map(|f| (f.path.clone(), f.message.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last@example.com.br", true)]
    #[case("not-an-email", false)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    #[case("@c.com", false)]
    fn email_format(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(valid_email(email), expected);
    }

    #[test]
    fn required_rejects_absent_and_empty() {
        let schema = Schema::new().field(FieldSchema::string("name").required("missing"));

        assert!(schema.validate(&FormPayload::new()).is_err());
        assert!(schema.validate(&FormPayload::new().with("name", "")).is_err());
        assert!(schema.validate(&FormPayload::new().with("name", "A")).is_ok());
    }

    #[test]
    fn email_rule_skips_empty_values() {
        let schema = Schema::new().field(
            FieldSchema::string("email")
                .required("required")
                .email("format"),
        );

        let failures = paths(&schema, &FormPayload::new().with("email", ""));
        assert_eq!(
            failures,
            vec![("email".to_string(), "required".to_string())]
        );
    }

    #[test]
    fn min_length_counts_characters_and_skips_absent() {
        let schema = Schema::new().field(FieldSchema::string("password").min(6, "short"));

        assert!(schema.validate(&FormPayload::new()).is_ok());
        assert!(schema.validate(&FormPayload::new().with("password", "")).is_err());
        assert!(schema.validate(&FormPayload::new().with("password", "12345")).is_err());
        assert!(schema.validate(&FormPayload::new().with("password", "çãéíóú")).is_ok());
    }

    #[test]
    fn equals_field_compares_exactly() {
        let schema = Schema::new().field(
            FieldSchema::string("passwordConfirmation").equals_field("password", "mismatch"),
        );

        let same = FormPayload::new()
            .with("password", "abc")
            .with("passwordConfirmation", "abc");
        let different = FormPayload::new()
            .with("password", "abc")
            .with("passwordConfirmation", "abc ");

        assert!(schema.validate(&same).is_ok());
        assert!(schema.validate(&different).is_err());
        assert!(schema.validate(&FormPayload::new().with("password", "abc")).is_ok());
    }

    #[test]
    fn collects_all_failures_in_schema_order() {
        let schema = Schema::new()
            .field(FieldSchema::string("name").required("name"))
            .field(FieldSchema::string("email").required("email").email("format"))
            .field(FieldSchema::string("password").min(6, "short"));

        let payload = FormPayload::new()
            .with("password", "1")
            .with("email", "nope")
            .with("name", "");

        let failures = paths(&schema, &payload);
        assert_eq!(
            failures,
            vec![
                ("name".to_string(), "name".to_string()),
                ("email".to_string(), "format".to_string()),
                ("password".to_string(), "short".to_string()),
            ]
        );
    }
}
