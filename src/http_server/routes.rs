use crate::badge::{badge_for, render_badge};
use crate::catalog::identity::RepoRef;
use crate::catalog::links;
use crate::catalog::types::{Category, Origin};
use crate::http_server::server::AppState;
use crate::scoring;
use crate::search::{self, RawSearchParams, SearchQuery, SearchResponse};
use crate::utils::errors::CatalogError;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Search the catalog with filtering, sorting and pagination
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawSearchParams>,
) -> Result<Json<SearchResponse>, CatalogError> {
    let query = SearchQuery::parse(&raw).map_err(CatalogError::InvalidQuery)?;
    let records = state.loader.load(None).await;
    Ok(Json(search::search(&records, &query)))
}

/// Render the Trust Score badge for `/badge/quality/{org}/{repo}[/{path}]`
pub async fn badge_handler(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, CatalogError> {
    let identity = parse_badge_path(&path)?;
    let records = state.loader.load(Some(&identity)).await;

    let style = badge_for(records.first());
    let svg = render_badge(&style);

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", style.max_age),
            ),
        ],
        svg,
    )
        .into_response())
}

/// Resolve a badge URL path back to a record identity. The first
/// segment must be the literal `quality`, followed by org and repo;
/// an optional trailing segment carries the monorepo path with `--`
/// in place of `/`.
fn parse_badge_path(path: &str) -> Result<String, CatalogError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.split_first() {
        Some((&"quality", rest)) if rest.len() >= 2 => {
            let owner = rest[0].to_lowercase();
            let repo = rest[1].to_lowercase();
            let sub_path = if rest.len() > 2 {
                Some(
                    rest[2..]
                        .iter()
                        .map(|s| links::decode_badge_path(&s.to_lowercase()))
                        .collect::<Vec<_>>()
                        .join("/"),
                )
            } else {
                None
            };
            Ok(RepoRef {
                owner,
                repo,
                path: sub_path,
            }
            .identity())
        }
        _ => Err(CatalogError::BadgePath(
            "Bad Request: expected /badge/quality/{org}/{repo}".to_string(),
        )),
    }
}

/// `GET /server` without a name segment
pub async fn missing_name_handler() -> CatalogError {
    CatalogError::MissingName
}

/// Full record detail plus computed score breakdown and links
pub async fn server_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, CatalogError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CatalogError::MissingName);
    }

    let records = state.loader.load(Some(&name)).await;
    let record = records.first().cloned().ok_or(CatalogError::RecordNotFound)?;

    // Population-relative scoring needs the whole catalog
    let all = state.loader.load(None).await;
    let breakdown = record
        .quality_score
        .map(|_| scoring::calculate_quality_score(&record, Some(&all)));

    let site = &state.config.catalog.site_base_url;
    let detail_url = links::detail_page_url(site, &record.name);

    let mut body = serde_json::to_value(&record)?;
    body["scoreBreakdown"] = serde_json::to_value(breakdown)?;
    body["detailPageUrl"] = json!(detail_url);
    body["editUrl"] = json!(links::edit_url(
        &state.config.catalog.data_repo_url,
        &record.name
    ));

    match &record.origin {
        Origin::Repository {
            owner,
            repo,
            path,
            stats,
        } => {
            let badge_url = links::badge_absolute_url(site, owner, repo, path.as_deref());
            body["githubUrl"] = json!(links::repository_url(owner, repo, path.as_deref()));
            body["badgeUrl"] = json!(badge_url);
            body["badgeMarkdown"] = json!(links::badge_markdown(&badge_url, &detail_url));
            body["latestCommitUrl"] = match &stats.latest_commit {
                Some(commit) => json!(links::commit_url(owner, repo, commit)),
                None => Value::Null,
            };
        }
        Origin::Remote { .. } => {
            body["githubUrl"] = Value::Null;
            body["badgeUrl"] = Value::Null;
            body["badgeMarkdown"] = Value::Null;
            body["latestCommitUrl"] = Value::Null;
        }
    }

    Ok(Json(body))
}

/// The closed category set
pub async fn category_handler() -> Json<Value> {
    let categories: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    Json(json!({ "categories": categories }))
}
