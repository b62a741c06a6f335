//! Identity derivation from origin URLs
//!
//! The derived identity is the join key between the manifest, the
//! evaluation documents, the badge paths and the detail endpoint, so
//! all normalization lives here and nowhere else.
//!
//! Edge cases handled: trailing slashes, `/tree/<branch>/` and
//! `/blob/<branch>/` markers (the marker and the branch segment are
//! dropped), `.git` suffixes, uppercase input, and URLs missing the
//! owner or repo segment (degraded slug fallback).

use tracing::{debug, warn};
use url::Url;

const REPO_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Parsed source-repository reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    /// Monorepo sub-path with `/` separators, already lowercased
    pub path: Option<String>,
}

impl RepoRef {
    /// `org__repo` or `org__repo__path__segments`
    pub fn identity(&self) -> String {
        match &self.path {
            Some(path) => format!(
                "{}__{}__{}",
                self.owner,
                self.repo,
                path.split('/').collect::<Vec<_>>().join("__")
            ),
            None => format!("{}__{}", self.owner, self.repo),
        }
    }

    /// Human display name: last path segment if present, else repo name
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path
                .rsplit('/')
                .next()
                .unwrap_or(self.repo.as_str())
                .to_string(),
            None => self.repo.clone(),
        }
    }
}

/// Parse a repository-host URL into owner/repo/path, `None` for
/// anything that is not a well-formed repository URL.
pub fn parse_repo_url(raw: &str) -> Option<RepoRef> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    if !REPO_HOSTS.contains(&host.to_lowercase().as_str()) {
        return None;
    }

    let segments: Vec<String> = url
        .path_segments()?
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect();

    if segments.len() < 2 {
        return None;
    }

    let owner = segments[0].clone();
    let repo = segments[1].trim_end_matches(".git").to_string();
    if repo.is_empty() {
        return None;
    }

    let rest = &segments[2..];
    let path_segments: &[String] = match rest.first().map(String::as_str) {
        // tree/blob URLs carry a branch segment before the real path
        Some("tree") | Some("blob") if rest.len() > 1 => &rest[2..],
        Some(_) => rest,
        None => &[],
    };

    let path = if path_segments.is_empty() {
        None
    } else {
        Some(path_segments.join("/"))
    };

    Some(RepoRef { owner, repo, path })
}

/// Derive the unique identity slug for an origin URL.
///
/// Never fails: non-repository and malformed URLs degrade to a slug of
/// the last path segment (or the host) and are logged.
pub fn derive_identity(raw: &str) -> String {
    if let Some(repo_ref) = parse_repo_url(raw) {
        return repo_ref.identity();
    }

    match Url::parse(raw) {
        Ok(url) => {
            debug!("non-repository origin url, using slug identity: {}", raw);
            slug_from_url(&url)
        }
        Err(e) => {
            warn!("malformed origin url {:?}: {}, using degraded identity", raw, e);
            slugify(last_segment_of(raw))
        }
    }
}

/// Display name for an origin URL, used when no evaluation supplies one
pub fn derive_display_name(raw: &str) -> String {
    if let Some(repo_ref) = parse_repo_url(raw) {
        return repo_ref.display_name();
    }
    match Url::parse(raw) {
        Ok(url) => {
            let last = url
                .path_segments()
                .and_then(|mut s| s.rfind(|seg| !seg.is_empty()))
                .map(|s| s.to_string());
            last.unwrap_or_else(|| url.host_str().unwrap_or("unknown").to_string())
        }
        Err(_) => last_segment_of(raw).to_string(),
    }
}

fn slug_from_url(url: &Url) -> String {
    let last = url
        .path_segments()
        .and_then(|mut s| s.rfind(|seg| !seg.is_empty()))
        .map(|s| s.to_string());

    match last {
        Some(segment) => slugify(&segment),
        None => slugify(url.host_str().unwrap_or("unknown")),
    }
}

fn last_segment_of(raw: &str) -> &str {
    raw.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
}

fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
