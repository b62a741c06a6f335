//! Catalog records: model, identity, loading, caching, links

pub mod cache;
pub mod identity;
pub mod links;
pub mod loader;
pub mod types;

pub use cache::{RecordCache, ALL_RECORDS_KEY};
pub use loader::{rank_records, CatalogLoader, PENDING_DESCRIPTION};
pub use types::{
    CatalogRecord, Category, ConnectionConfig, Dependency, EvaluationMeta, Origin,
    ProtocolFeatures, RepoStats,
};
