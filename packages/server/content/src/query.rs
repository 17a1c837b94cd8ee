use serde::{Deserialize, Serialize};

/// Cap applied when the caller sends no limit, or a zero/negative one.
pub const DEFAULT_LIMIT: i64 = 5;

const FIRST_NAME_ASC: &str = "data.firstName ASC";

/// Structured query accepted by the content repository: a count cap, a sort
/// spec, a match expression, and the entity types eligible for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub count: i64,
    pub sort: String,
    pub query: String,
    pub content_types: Vec<String>,
}

/// Builds person queries scoped to a single application namespace.
///
/// The namespace is handed in at construction time rather than read from
/// process-global state, so the entity type (`<namespace>:person`) is fixed
/// per instance and visible in one place.
#[derive(Debug, Clone)]
pub struct PeopleQueries {
    namespace: String,
}

impl PeopleQueries {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Query for persons whose first or last name contains `term`, sorted by
    /// first name ascending.
    ///
    /// An empty term produces `'**'` patterns, which the repository treats as
    /// match-all. A missing or non-positive limit falls back to
    /// [`DEFAULT_LIMIT`]; zero is never honored literally. No upper bound is
    /// enforced here - an unreasonable count is the repository's to reject.
    pub fn by_name(&self, term: &str, limit: Option<i64>) -> ContentQuery {
        let count = match limit {
            Some(l) if l > 0 => l,
            _ => DEFAULT_LIMIT,
        };
        let pattern = escape_pattern(term);

        ContentQuery {
            count,
            sort: FIRST_NAME_ASC.to_string(),
            query: format!(
                "data.firstName LIKE '*{pattern}*' OR data.lastName LIKE '*{pattern}*'"
            ),
            content_types: vec![format!("{}:person", self.namespace)],
        }
    }
}

/// Escapes repository pattern metacharacters in a caller-supplied fragment.
///
/// The fragment is interpolated into a quoted LIKE pattern, so a literal
/// `*`, `?`, quote or backslash in user input must not reach the repository
/// with its meta meaning intact.
pub fn escape_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '*' | '?' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries() -> PeopleQueries {
        PeopleQueries::new("com.example.people")
    }

    #[test]
    fn test_limit_passthrough() {
        let query = queries().by_name("an", Some(25));
        assert_eq!(query.count, 25);
    }

    #[test]
    fn test_limit_defaults_when_absent() {
        let query = queries().by_name("an", None);
        assert_eq!(query.count, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_defaults_when_zero_or_negative() {
        assert_eq!(queries().by_name("an", Some(0)).count, DEFAULT_LIMIT);
        assert_eq!(queries().by_name("an", Some(-3)).count, DEFAULT_LIMIT);
    }

    #[test]
    fn test_empty_term_matches_all() {
        let query = queries().by_name("", None);
        assert_eq!(
            query.query,
            "data.firstName LIKE '**' OR data.lastName LIKE '**'"
        );
    }

    #[test]
    fn test_predicate_covers_both_name_fields() {
        let query = queries().by_name("an", Some(2));
        assert_eq!(
            query.query,
            "data.firstName LIKE '*an*' OR data.lastName LIKE '*an*'"
        );
    }

    #[test]
    fn test_sort_is_first_name_ascending() {
        let query = queries().by_name("an", None);
        assert_eq!(query.sort, "data.firstName ASC");
    }

    #[test]
    fn test_entity_type_scoped_to_namespace() {
        let query = PeopleQueries::new("org.acme.crm").by_name("an", None);
        assert_eq!(query.content_types, vec!["org.acme.crm:person"]);
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let query = queries().by_name("O'Bri*en?", None);
        assert_eq!(
            query.query,
            r"data.firstName LIKE '*O\'Bri\*en\?*' OR data.lastName LIKE '*O\'Bri\*en\?*'"
        );
    }

    #[test]
    fn test_escape_is_idempotent_on_plain_text() {
        assert_eq!(escape_pattern("anders"), "anders");
        assert_eq!(escape_pattern(r"a\b"), r"a\\b");
    }
}
