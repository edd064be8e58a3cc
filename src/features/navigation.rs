//! Navigation inputs and outputs for submission handlers. The current query
//! string is captured once at submit time and passed in explicitly; moving to
//! another screen goes through [`Navigator`].

use url::form_urlencoded;

/// Snapshot of the location a form was submitted from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationContext {
    search: String,
}

impl NavigationContext {
    /// Builds a context from a `location.search` style string, with or
    /// without the leading `?`.
    pub fn from_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    /// First non-empty value of the query parameter `name`, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.search.trim().trim_start_matches('?');
        form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::NavigationContext;
    use rstest::rstest;

    #[rstest]
    #[case("?token=abc", Some("abc"))]
    #[case("token=abc", Some("abc"))]
    #[case("?other=1&token=a%2Bb", Some("a+b"))]
    #[case("?token=&token=second", Some("second"))]
    #[case("?token=", None)]
    #[case("", None)]
    #[case("?tokens=abc", None)]
    fn token_lookup(#[case] search: &str, #[case] expected: Option<&str>) {
        let context = NavigationContext::from_search(search);
        assert_eq!(context.query_param("token").as_deref(), expected);
    }
}
