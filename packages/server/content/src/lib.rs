pub mod http;
pub mod query;
pub mod repository;

pub use http::HttpRepository;
pub use query::{ContentQuery, PeopleQueries};
pub use repository::{ContentRepository, PersonRecord, QueryHits, RepositoryError};
