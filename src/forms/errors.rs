use std::{collections::BTreeMap, fmt};

/// Message shown under each invalid field, keyed by field path.
pub type FieldErrors = BTreeMap<String, String>;

/// One violated rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFailure {
    /// Dot-addressed field path, e.g. `password`.
    pub path: String,
    pub message: String,
}

/// Every rule a payload violated, in the order the schema checked them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    failures: Vec<FieldFailure>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.failures.push(FieldFailure {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts into a result: `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.len() {
            1 => write!(formatter, "1 field failed validation"),
            count => write!(formatter, "{count} fields failed validation"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<FieldFailure> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

/// Flattens a failure list into one message per field.
///
/// Failures are applied in order and a later failure for the same path
/// replaces the earlier message, so each field shows its last failure.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for failure in errors.failures() {
        map.insert(failure.path.clone(), failure.message.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::{FieldFailure, ValidationErrors, field_errors};

    fn failure(path: &str, message: &str) -> FieldFailure {
        FieldFailure {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn later_failure_for_same_field_wins() {
        let errors: ValidationErrors = [
            failure("password", "first"),
            failure("email", "E-mail obrigatório"),
            failure("password", "second"),
        ]
        .into_iter()
        .collect();

        let map = field_errors(&errors);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("password").map(String::as_str), Some("second"));
        assert_eq!(
            map.get("email").map(String::as_str),
            Some("E-mail obrigatório")
        );
    }

    #[test]
    fn keys_are_exactly_the_failed_paths() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Nome obrigatório");
        errors.push("user.email", "Digite um e-mail válido");

        let map = field_errors(&errors);
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["name", "user.email"]);
    }

    #[test]
    fn empty_failure_list_maps_to_empty_errors() {
        let errors = ValidationErrors::new();
        assert!(field_errors(&errors).is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn display_counts_failures() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "a");
        assert_eq!(errors.to_string(), "1 field failed validation");
        errors.push("email", "b");
        assert_eq!(errors.to_string(), "2 fields failed validation");
    }
}
