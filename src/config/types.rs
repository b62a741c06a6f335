use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Catalog data locations and site identity
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(default)]
pub struct CatalogConfig {
    /// Flat JSON array of origin URLs
    pub manifest_path: String,
    /// Directory of `{identity}.json` evaluation documents
    pub evaluations_dir: String,
    /// Public site base, used for detail-page and badge URLs
    #[validate(url)]
    pub site_base_url: String,
    /// Repository holding the evaluation documents, used for edit links
    #[validate(url)]
    pub data_repo_url: String,
    /// Clears the record cache on every load
    pub dev_mode: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            manifest_path: "data/manifest.json".to_string(),
            evaluations_dir: "data/evaluations".to_string(),
            site_base_url: "https://mcpdex.io".to_string(),
            data_repo_url: "https://github.com/mcpdex/catalog-data".to_string(),
            dev_mode: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
