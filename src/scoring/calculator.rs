//! Trust Score calculation
//!
//! Pure functions over catalog records. Reproducible for the same
//! inputs; the only population-relative step is the dependency-rarity
//! penalty, which needs the full record set supplied consistently.

use crate::catalog::types::{CatalogRecord, Origin};
use crate::scoring::weights::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// The six sub-scores and their sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub protocol: u32,
    pub community: u32,
    pub deployment: u32,
    pub docs: u32,
    pub deps: u32,
    pub badge: u32,
    pub total: u32,
}

/// Breakdown for remote-endpoint records, bypassing every signal
pub const REMOTE_BREAKDOWN: ScoreBreakdown = ScoreBreakdown {
    protocol: REMOTE_PROTOCOL,
    community: REMOTE_COMMUNITY,
    deployment: REMOTE_DEPLOYMENT,
    docs: REMOTE_DOCS,
    deps: REMOTE_DEPS,
    badge: REMOTE_BADGE,
    total: REMOTE_TOTAL,
};

/// Compute the full breakdown for a record.
///
/// `population` is the loaded record set; it drives the monorepo
/// star-sharing adjustment and the dependency-rarity penalty. Without
/// it the record is scored as the only member of its repository.
pub fn calculate_quality_score(
    record: &CatalogRecord,
    population: Option<&[CatalogRecord]>,
) -> ScoreBreakdown {
    if record.is_remote() {
        return REMOTE_BREAKDOWN;
    }

    let siblings = population
        .map(|all| count_records_in_repo(record, all))
        .unwrap_or(1);

    let protocol = protocol_score(record);
    let community = community_score(record, siblings);
    let deployment = deployment_score(record);
    let docs = documentation_score(record);
    let deps = dependency_score(record, population);
    let badge = badge_usage_score(record);

    ScoreBreakdown {
        protocol,
        community,
        deployment,
        docs,
        deps,
        badge,
        total: protocol + community + deployment + docs + deps + badge,
    }
}

/// Records sharing the given record's org+repo, always at least 1
pub fn count_records_in_repo(record: &CatalogRecord, all: &[CatalogRecord]) -> usize {
    let key = match record.repo_key() {
        Some(key) => key,
        None => return 1,
    };
    all.iter()
        .filter(|r| r.repo_key().as_deref() == Some(key.as_str()))
        .count()
        .max(1)
}

/// Protocol-feature coverage, max 40
pub fn protocol_score(record: &CatalogRecord) -> u32 {
    let features = match &record.features {
        None => return PROTOCOL_UNANALYZED_CREDIT,
        Some(features) => features,
    };

    let mut score = 0;
    if features.tools {
        score += WEIGHT_TOOLS;
    }
    if features.resources {
        score += WEIGHT_RESOURCES;
    }
    if features.prompts {
        score += WEIGHT_PROMPTS;
    }
    if features.sampling {
        score += WEIGHT_SAMPLING;
    }
    if features.stdio {
        score += WEIGHT_STDIO;
    }
    if features.http {
        score += WEIGHT_HTTP;
    }
    if features.roots {
        score += WEIGHT_ROOTS;
    }
    if features.logging {
        score += WEIGHT_LOGGING;
    }
    if features.oauth2 {
        score += WEIGHT_OAUTH2;
    }
    score.min(PROTOCOL_MAX)
}

/// Community metrics, max 20. Repository stats are divided across the
/// records sharing the repository before the step functions apply.
pub fn community_score(record: &CatalogRecord, records_in_repo: usize) -> u32 {
    let stats = match &record.origin {
        Origin::Repository { stats, .. } => stats,
        Origin::Remote { .. } => return 0,
    };

    let divisor = records_in_repo.max(1) as u64;
    let stars = stats.stars / divisor;
    let contributors = stats.contributors / divisor;
    let issues = stats.issues / divisor;

    let score = step(stars, &STAR_STEPS, STAR_STEPS_OVER)
        + step(contributors, &CONTRIBUTOR_STEPS, CONTRIBUTOR_STEPS_OVER)
        + step(issues, &ISSUE_STEPS, ISSUE_STEPS_OVER);
    score.min(COMMUNITY_MAX)
}

fn step(value: u64, steps: &[(u64, u32)], over: u32) -> u32 {
    for (threshold, points) in steps {
        if value <= *threshold {
            return *points;
        }
    }
    over
}

/// Deployment maturity, max 10
pub fn deployment_score(record: &CatalogRecord) -> u32 {
    let stats = match &record.origin {
        Origin::Repository { stats, .. } => stats,
        Origin::Remote { .. } => return 0,
    };

    let mut score = 0;
    if stats.has_ci {
        score += CI_CREDIT;
    }
    if stats.has_releases {
        score += RELEASES_CREDIT;
    }
    score.min(DEPLOYMENT_MAX)
}

/// Documentation, max 8: binary on a substantive readme
pub fn documentation_score(record: &CatalogRecord) -> u32 {
    match &record.readme {
        Some(readme) if readme.chars().count() > README_MIN_CHARS => DOCS_MAX,
        _ => 0,
    }
}

/// Badge adoption, max 2: brand mention anywhere in the readme
pub fn badge_usage_score(record: &CatalogRecord) -> u32 {
    match &record.readme {
        Some(readme) if readme.to_lowercase().contains(&BRAND_NAME.to_lowercase()) => BADGE_MAX,
        _ => 0,
    }
}

/// Dependency hygiene, max 20. Fewer dependencies score strictly
/// better; heavy reliance on rarely-used dependencies is penalized
/// when a large enough population is available for comparison.
pub fn dependency_score(record: &CatalogRecord, population: Option<&[CatalogRecord]>) -> u32 {
    let deps = match &record.dependencies {
        None => return DEPS_UNANALYZED_CREDIT,
        Some(deps) if deps.is_empty() => return DEPS_MAX,
        Some(deps) => deps,
    };

    let significant: Vec<&str> = deps
        .iter()
        .filter(|d| d.importance >= SIGNIFICANT_IMPORTANCE)
        .map(|d| d.name.as_str())
        .collect();

    let mut score = DEPS_MAX as i64;

    if significant.len() > SIGNIFICANT_ALLOWANCE {
        let excess = (significant.len() - SIGNIFICANT_ALLOWANCE) as i64;
        score -= excess.min(COUNT_PENALTY_CAP as i64);
    }

    if let Some(all) = population {
        let others: Vec<&CatalogRecord> = all.iter().filter(|r| r.name != record.name).collect();
        if others.len() >= RARITY_MIN_POPULATION {
            let usage = significant_dependency_usage(&others);
            let mut penalty: i64 = 0;
            for name in &significant {
                if usage.get(*name).copied().unwrap_or(0) < RARITY_MIN_USERS {
                    penalty += RARITY_PENALTY as i64;
                }
            }
            score -= penalty.min(RARITY_PENALTY_CAP as i64);
        } else {
            debug!(
                "dependency rarity penalty skipped: population of {} below {}",
                others.len(),
                RARITY_MIN_POPULATION
            );
        }
    }

    score.clamp(0, DEPS_MAX as i64) as u32
}

/// How many records use each significant dependency name
fn significant_dependency_usage(records: &[&CatalogRecord]) -> HashMap<String, usize> {
    let mut usage: HashMap<String, usize> = HashMap::new();
    for record in records {
        let deps = match &record.dependencies {
            Some(deps) => deps,
            None => continue,
        };
        let mut seen: Vec<&str> = Vec::new();
        for dep in deps {
            if dep.importance >= SIGNIFICANT_IMPORTANCE && !seen.contains(&dep.name.as_str()) {
                seen.push(dep.name.as_str());
                *usage.entry(dep.name.clone()).or_insert(0) += 1;
            }
        }
    }
    usage
}
