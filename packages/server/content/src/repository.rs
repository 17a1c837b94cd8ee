use crate::query::ContentQuery;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A person as the repository returns it.
///
/// Only the fields this service relies on are typed; anything else the
/// repository attaches is carried through untouched in `extra` so the
/// response forwards records without filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result set of a repository query.
///
/// The repository guarantees `hits` already satisfies the requested sort
/// order and count cap; callers must not re-sort or re-truncate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryHits {
    pub hits: Vec<PersonRecord>,
    pub total: u64,
}

/// Why a repository call failed. All variants surface to callers as the same
/// 500-class response; the kind split exists for logs and for tests.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository unreachable: {0}")]
    Transport(String),
    #[error("repository rejected query: {0}")]
    Rejected(String),
    #[error("malformed repository response: {0}")]
    Decode(String),
}

/// Query execution against the external content repository.
///
/// Implementations are shared across request handlers, so they must be
/// stateless from the caller's perspective and safe to use concurrently.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    async fn execute(&self, query: &ContentQuery) -> Result<QueryHits, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_repository_fields_are_forwarded() {
        let raw = json!({
            "id": "p-1",
            "firstName": "Anna",
            "lastName": "Smith",
            "displayName": "Anna Smith",
            "modifiedTime": "2024-03-01T10:00:00Z"
        });

        let record: PersonRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.first_name, "Anna");
        assert_eq!(record.extra["displayName"], "Anna Smith");

        // Re-serializing must not drop fields this service does not know about.
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_error_rendering_carries_kind_and_message() {
        let err = RepositoryError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "repository unreachable: connection refused");

        let err = RepositoryError::Rejected("400 Bad Request: bad sort".into());
        assert!(err.to_string().contains("rejected"));
    }
}
