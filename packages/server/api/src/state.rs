use content::{ContentRepository, PeopleQueries};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContentRepository>,
    pub queries: PeopleQueries,
}
