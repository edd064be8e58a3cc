use std::collections::BTreeMap;

/// Raw input captured from a form, keyed by field name. Iteration follows
/// field-name order, not the order fields were inserted.
///
/// A field that was never filled in is absent rather than empty; the schema
/// treats the two differently for every rule except `required`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: BTreeMap<String, String>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FormPayload::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (field, value) in iter {
            payload.insert(field, value);
        }
        payload
    }
}
