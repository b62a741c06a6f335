//! Record loading and merging
//!
//! The manifest (a flat JSON array of origin URLs) is the source of
//! truth for identity and origin; evaluation documents, one per
//! evaluated identity, supply everything else. Per-file failures are
//! logged and skipped so one corrupt document never takes down the
//! catalog; an unreadable manifest yields an empty catalog.

use crate::catalog::cache::{RecordCache, ALL_RECORDS_KEY};
use crate::catalog::identity::{derive_display_name, derive_identity, parse_repo_url};
use crate::catalog::types::{CatalogRecord, Origin, ProtocolFeatures, RepoStats};
use crate::config::CatalogConfig;
use crate::scoring;
use crate::utils::errors::CatalogResult;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Description used for records that have no evaluation document yet
pub const PENDING_DESCRIPTION: &str =
    "This server has not been evaluated yet. A full quality evaluation is pending.";

pub struct CatalogLoader {
    manifest_path: PathBuf,
    evaluations_dir: PathBuf,
    cache: Arc<RecordCache>,
    dev_mode: bool,
}

impl CatalogLoader {
    pub fn new(config: &CatalogConfig, cache: Arc<RecordCache>) -> Self {
        Self {
            manifest_path: PathBuf::from(shellexpand::tilde(&config.manifest_path).to_string()),
            evaluations_dir: PathBuf::from(
                shellexpand::tilde(&config.evaluations_dir).to_string(),
            ),
            cache,
            dev_mode: config.dev_mode,
        }
    }

    /// Load one record by identity (one-element or empty list) or the
    /// whole ranked catalog when `name` is `None`.
    pub async fn load(&self, name: Option<&str>) -> Arc<Vec<CatalogRecord>> {
        if self.dev_mode {
            self.cache.clear();
        }

        let key = name.unwrap_or(ALL_RECORDS_KEY);
        if let Some(cached) = self.cache.get(key) {
            return cached;
        }

        let records = self.load_uncached(name).await;
        self.cache.set(key, records)
    }

    /// Records sharing the repository of `record`; loads the full
    /// catalog when no record set is supplied. Always at least 1.
    pub async fn count_records_in_repo(
        &self,
        record: &CatalogRecord,
        all: Option<&[CatalogRecord]>,
    ) -> usize {
        match all {
            Some(all) => scoring::count_records_in_repo(record, all),
            None => {
                let all = self.load(None).await;
                scoring::count_records_in_repo(record, &all)
            }
        }
    }

    async fn load_uncached(&self, name: Option<&str>) -> Vec<CatalogRecord> {
        let urls = match self.read_manifest().await {
            Ok(urls) => urls,
            Err(e) => {
                error!(
                    "failed to read manifest {}: {}",
                    self.manifest_path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        for url in &urls {
            let identity = derive_identity(url);
            if !seen.insert(identity.clone()) {
                warn!("duplicate identity {} in manifest, skipping {}", identity, url);
                continue;
            }
            if let Some(wanted) = name {
                if identity != wanted {
                    continue;
                }
            }

            records.push(self.build_record(url, &identity).await);

            if name.is_some() {
                break;
            }
        }

        if name.is_none() {
            rank_records(&mut records);
        }
        debug!("loaded {} catalog record(s)", records.len());
        records
    }

    async fn read_manifest(&self) -> CatalogResult<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.manifest_path).await?;
        let urls: Vec<String> = serde_json::from_str(&content)?;
        Ok(urls)
    }

    async fn build_record(&self, url: &str, identity: &str) -> CatalogRecord {
        match self.read_evaluation(identity).await {
            Ok(Some(doc)) => merge_record(url, identity, doc),
            Ok(None) => placeholder_record(url, identity),
            Err(e) => {
                warn!("failed to load evaluation for {}: {}", identity, e);
                placeholder_record(url, identity)
            }
        }
    }

    async fn read_evaluation(&self, identity: &str) -> CatalogResult<Option<CatalogRecord>> {
        let path = self.evaluations_dir.join(format!("{}.json", identity));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Merge an evaluation document with the identity and origin derived
/// from its manifest URL. The manifest wins for identity and
/// owner/repo/path; the document keeps its stats and content.
fn merge_record(url: &str, identity: &str, mut doc: CatalogRecord) -> CatalogRecord {
    doc.name = identity.to_string();
    if doc.display_name.is_empty() {
        doc.display_name = derive_display_name(url);
    }
    doc.quality_score = doc.quality_score.map(|s| s.min(100));

    doc.origin = match parse_repo_url(url) {
        Some(repo_ref) => {
            let stats = match doc.origin {
                Origin::Repository { stats, .. } => stats,
                Origin::Remote { .. } => RepoStats::default(),
            };
            Origin::Repository {
                owner: repo_ref.owner,
                repo: repo_ref.repo,
                path: repo_ref.path,
                stats,
            }
        }
        None => {
            let docs_url = match doc.origin {
                Origin::Remote { docs_url, .. } => docs_url,
                Origin::Repository { .. } => None,
            };
            Origin::Remote {
                url: url.to_string(),
                docs_url,
            }
        }
    };

    doc
}

/// Placeholder for a manifest entry with no evaluation document
fn placeholder_record(url: &str, identity: &str) -> CatalogRecord {
    let origin = match parse_repo_url(url) {
        Some(repo_ref) => Origin::Repository {
            owner: repo_ref.owner,
            repo: repo_ref.repo,
            path: repo_ref.path,
            stats: RepoStats::default(),
        },
        None => Origin::Remote {
            url: url.to_string(),
            docs_url: None,
        },
    };

    CatalogRecord {
        name: identity.to_string(),
        display_name: derive_display_name(url),
        origin,
        description: PENDING_DESCRIPTION.to_string(),
        long_description: None,
        category: None,
        language: None,
        framework: None,
        readme: None,
        features: Some(ProtocolFeatures::default()),
        dependencies: Some(Vec::new()),
        quality_score: None,
        evaluation: None,
        config: None,
    }
}

/// Ranking policy for the full catalog: evaluated records by score
/// descending (ties by stars descending), then unevaluated records
/// alphabetically by display name.
pub fn rank_records(records: &mut [CatalogRecord]) {
    records.sort_by(|a, b| match (a.quality_score, b.quality_score) {
        (Some(score_a), Some(score_b)) => score_b
            .cmp(&score_a)
            .then_with(|| b.stars().cmp(&a.stars())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase()),
    });
}
