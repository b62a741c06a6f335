//! Filtering, sorting and pagination over loaded records

use crate::catalog::types::{CatalogRecord, Origin};
use crate::search::query::{SearchQuery, SortBy};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub servers: Vec<CatalogRecord>,
    pub total_count: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// Run a validated query against the loaded records. Filters are
/// conjunctive; pagination applies strictly after filter and sort.
pub fn search(records: &[CatalogRecord], query: &SearchQuery) -> SearchResponse {
    let mut filtered: Vec<&CatalogRecord> =
        records.iter().filter(|r| matches(r, query)).collect();

    sort_records(&mut filtered, query.sort_by);

    let total_count = filtered.len();
    let servers: Vec<CatalogRecord> = filtered
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();

    SearchResponse {
        servers,
        total_count,
        limit: query.limit,
        offset: query.offset,
        has_more: query.offset + query.limit < total_count,
    }
}

fn matches(record: &CatalogRecord, query: &SearchQuery) -> bool {
    if let Some(q) = &query.q {
        if !matches_text(record, q) {
            return false;
        }
    }

    if let Some(category) = query.category {
        if record.category != Some(category) {
            return false;
        }
    }

    if let Some(language) = &query.language {
        if record.language.as_deref() != Some(language.as_str()) {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match over name, description and the
/// origin owner/repo; any field matching qualifies.
fn matches_text(record: &CatalogRecord, q: &str) -> bool {
    let needle = q.to_lowercase();

    if record.name.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
    {
        return true;
    }

    match &record.origin {
        Origin::Repository { owner, repo, .. } => {
            owner.to_lowercase().contains(&needle) || repo.to_lowercase().contains(&needle)
        }
        Origin::Remote { .. } => false,
    }
}

fn sort_records(records: &mut [&CatalogRecord], sort_by: SortBy) {
    match sort_by {
        // Highest score first, unscored records always last
        SortBy::Quality => records.sort_by(|a, b| match (a.quality_score, b.quality_score) {
            (Some(score_a), Some(score_b)) => score_b.cmp(&score_a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortBy::Stars => records.sort_by(|a, b| b.stars().cmp(&a.stars())),
        SortBy::Name => records.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}
