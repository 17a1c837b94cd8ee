use crate::query::ContentQuery;
use crate::repository::{ContentRepository, QueryHits, RepositoryError};

/// Content repository reached over HTTP.
///
/// Queries are posted as JSON to `<base>/query`. Timeouts, retries and
/// backpressure are the repository deployment's concern, not handled here.
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ContentRepository for HttpRepository {
    async fn execute(&self, query: &ContentQuery) -> Result<QueryHits, RepositoryError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));
        tracing::debug!("Executing repository query against {}", url);

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Rejected(format!("{status}: {body}")));
        }

        response
            .json::<QueryHits>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))
    }
}
