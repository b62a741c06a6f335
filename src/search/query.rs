//! Search query parameter validation
//!
//! Raw wire parameters are parsed into a typed query; every invalid
//! field is reported as a structured issue, never a panic or a bare
//! 400.

use crate::catalog::types::Category;
use crate::utils::errors::QueryIssue;
use serde::Deserialize;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Query string parameters as received on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Quality,
    Stars,
    Name,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<SortBy> {
        match value {
            "quality" => Some(SortBy::Quality),
            "stars" => Some(SortBy::Stars),
            "name" => Some(SortBy::Name),
            _ => None,
        }
    }
}

/// Validated search query
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<Category>,
    pub language: Option<String>,
    pub sort_by: SortBy,
    pub limit: usize,
    pub offset: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            language: None,
            sort_by: SortBy::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchQuery {
    pub fn parse(raw: &RawSearchParams) -> Result<SearchQuery, Vec<QueryIssue>> {
        let mut issues = Vec::new();
        let mut query = SearchQuery::default();

        query.q = raw
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        if let Some(category) = raw.category.as_deref() {
            match Category::parse(category) {
                Some(parsed) => query.category = Some(parsed),
                None => issues.push(QueryIssue::new(
                    "category",
                    format!("unknown category: {}", category),
                )),
            }
        }

        query.language = raw.language.clone().filter(|l| !l.is_empty());

        if let Some(sort_by) = raw.sort_by.as_deref() {
            match SortBy::parse(sort_by) {
                Some(parsed) => query.sort_by = parsed,
                None => issues.push(QueryIssue::new(
                    "sortBy",
                    "must be one of: quality, stars, name",
                )),
            }
        }

        if let Some(limit) = raw.limit.as_deref() {
            match limit.parse::<usize>() {
                Ok(parsed) if (1..=MAX_LIMIT).contains(&parsed) => query.limit = parsed,
                Ok(_) => issues.push(QueryIssue::new(
                    "limit",
                    format!("must be between 1 and {}", MAX_LIMIT),
                )),
                Err(_) => issues.push(QueryIssue::new("limit", "must be a positive integer")),
            }
        }

        if let Some(offset) = raw.offset.as_deref() {
            match offset.parse::<usize>() {
                Ok(parsed) => query.offset = parsed,
                Err(_) => issues.push(QueryIssue::new("offset", "must be a non-negative integer")),
            }
        }

        if issues.is_empty() {
            Ok(query)
        } else {
            Err(issues)
        }
    }
}
