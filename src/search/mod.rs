//! Public search API: query validation, filtering, sorting, pagination

pub mod query;
pub mod service;

pub use query::{RawSearchParams, SearchQuery, SortBy, DEFAULT_LIMIT, MAX_LIMIT};
pub use service::{search, SearchResponse};
