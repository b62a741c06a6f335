//! Catalog record model
//!
//! `CatalogRecord` is the unit of search and scoring. Evaluation
//! documents on disk and all wire JSON use the same camelCase shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cataloged MCP server listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Unique lowercase slug derived from the origin URL, never hand-assigned
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub origin: Origin,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub readme: Option<String>,
    /// `None` means the evaluation has not analyzed protocol support yet
    #[serde(default)]
    pub features: Option<ProtocolFeatures>,
    /// `None` means unanalyzed, `Some(vec![])` means analyzed and none found
    #[serde(default)]
    pub dependencies: Option<Vec<Dependency>>,
    /// 0-100, `None` until an evaluation has run
    #[serde(default)]
    pub quality_score: Option<u8>,
    #[serde(default)]
    pub evaluation: Option<EvaluationMeta>,
    #[serde(default)]
    pub config: Option<ConnectionConfig>,
}

impl CatalogRecord {
    pub fn is_evaluated(&self) -> bool {
        self.quality_score.is_some()
    }

    /// Star count for sorting; remote-only records count as zero
    pub fn stars(&self) -> u64 {
        match &self.origin {
            Origin::Repository { stats, .. } => stats.stars,
            Origin::Remote { .. } => 0,
        }
    }

    /// Lowercased `owner/repo` key, shared by all records in a monorepo
    pub fn repo_key(&self) -> Option<String> {
        match &self.origin {
            Origin::Repository { owner, repo, .. } => {
                Some(format!("{}/{}", owner.to_lowercase(), repo.to_lowercase()))
            }
            Origin::Remote { .. } => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.origin, Origin::Remote { .. })
    }
}

/// Where a record's implementation lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Origin {
    #[serde(rename_all = "camelCase")]
    Repository {
        owner: String,
        repo: String,
        /// Sub-path inside a monorepo, `None` for repo-root servers
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        stats: RepoStats,
    },
    #[serde(rename_all = "camelCase")]
    Remote {
        url: String,
        #[serde(default)]
        docs_url: Option<String>,
    },
}

/// Repository-level metrics attributed to a record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoStats {
    pub stars: u64,
    pub contributors: u64,
    pub issues: u64,
    pub has_releases: bool,
    pub has_ci: bool,
    pub latest_commit: Option<String>,
}

/// MCP capability flags reported by an evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolFeatures {
    pub tools: bool,
    pub prompts: bool,
    pub resources: bool,
    pub sampling: bool,
    pub roots: bool,
    pub logging: bool,
    pub stdio: bool,
    pub http: bool,
    pub oauth2: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    /// 1-10, dependencies at 5 or above count as significant for scoring
    pub importance: u8,
}

/// Closed category set surfaced by `GET /category`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Databases,
    DeveloperTools,
    FileSystems,
    Search,
    Communication,
    Cloud,
    Monitoring,
    Productivity,
    Security,
    Finance,
    Knowledge,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Databases,
        Category::DeveloperTools,
        Category::FileSystems,
        Category::Search,
        Category::Communication,
        Category::Cloud,
        Category::Monitoring,
        Category::Productivity,
        Category::Security,
        Category::Finance,
        Category::Knowledge,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Databases => "databases",
            Category::DeveloperTools => "developer-tools",
            Category::FileSystems => "file-systems",
            Category::Search => "search",
            Category::Communication => "communication",
            Category::Cloud => "cloud",
            Category::Monitoring => "monitoring",
            Category::Productivity => "productivity",
            Category::Security => "security",
            Category::Finance => "finance",
            Category::Knowledge => "knowledge",
            Category::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
    }
}

/// When and how a record was last evaluated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationMeta {
    pub model: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Connection/launch configuration, shape follows the origin kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConnectionConfig {
    #[serde(rename_all = "camelCase")]
    Local {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        env: HashMap<String, String>,
    },
    #[serde(rename_all = "camelCase")]
    Remote { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_tagged_roundtrip() {
        let json = r#"{"kind":"repository","owner":"acme","repo":"widget","stats":{"stars":10}}"#;
        let origin: Origin = serde_json::from_str(json).unwrap();
        match &origin {
            Origin::Repository { owner, repo, path, stats } => {
                assert_eq!(owner, "acme");
                assert_eq!(repo, "widget");
                assert!(path.is_none());
                assert_eq!(stats.stars, 10);
            }
            Origin::Remote { .. } => panic!("expected repository origin"),
        }

        let value = serde_json::to_value(&origin).unwrap();
        assert_eq!(value["kind"], "repository");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("developer-tools"), Some(Category::DeveloperTools));
        assert_eq!(Category::parse("Databases"), None);
        assert_eq!(Category::parse("nonsense"), None);
    }

    #[test]
    fn test_connection_config_shapes() {
        let local: ConnectionConfig = serde_json::from_str(
            r#"{"kind":"local","command":"npx","args":["-y","widget-mcp"],"env":{"TOKEN":"x"}}"#,
        )
        .unwrap();
        match &local {
            ConnectionConfig::Local { command, args, env } => {
                assert_eq!(command, "npx");
                assert_eq!(args.len(), 2);
                assert_eq!(env.get("TOKEN").map(String::as_str), Some("x"));
            }
            ConnectionConfig::Remote { .. } => panic!("expected local config"),
        }

        let remote: ConnectionConfig =
            serde_json::from_str(r#"{"kind":"remote","url":"https://mcp.example.com"}"#).unwrap();
        assert!(matches!(remote, ConnectionConfig::Remote { .. }));
    }

    #[test]
    fn test_repo_key_is_case_insensitive() {
        let record = CatalogRecord {
            name: "acme__widget".to_string(),
            display_name: "widget".to_string(),
            origin: Origin::Repository {
                owner: "Acme".to_string(),
                repo: "Widget".to_string(),
                path: None,
                stats: RepoStats::default(),
            },
            description: String::new(),
            long_description: None,
            category: None,
            language: None,
            framework: None,
            readme: None,
            features: None,
            dependencies: None,
            quality_score: None,
            evaluation: None,
            config: None,
        };
        assert_eq!(record.repo_key().unwrap(), "acme/widget");
    }
}
