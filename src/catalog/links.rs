//! Link builders for catalog records
//!
//! Pure string transformations, no state or I/O. Badge URLs embed
//! monorepo sub-paths with `--` separators so they survive as a single
//! URL path segment; `decode_badge_path` restores the `/` form used
//! for identity lookup.

/// Canonical source URL for a repository origin
pub fn repository_url(owner: &str, repo: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => format!("https://github.com/{}/{}/tree/main/{}", owner, repo, path),
        None => format!("https://github.com/{}/{}", owner, repo),
    }
}

/// External link for a specific commit
pub fn commit_url(owner: &str, repo: &str, commit: &str) -> String {
    format!("https://github.com/{}/{}/commit/{}", owner, repo, commit)
}

/// Detail page for a record on the site
pub fn detail_page_url(site_base: &str, name: &str) -> String {
    format!("{}/servers/{}", site_base.trim_end_matches('/'), name)
}

/// Editable evaluation document in the catalog data repository
pub fn edit_url(data_repo_url: &str, name: &str) -> String {
    format!(
        "{}/edit/main/evaluations/{}.json",
        data_repo_url.trim_end_matches('/'),
        name
    )
}

pub fn encode_badge_path(path: &str) -> String {
    path.replace('/', "--")
}

pub fn decode_badge_path(encoded: &str) -> String {
    encoded.replace("--", "/")
}

/// Relative badge endpoint path for a repository origin
pub fn badge_relative_url(owner: &str, repo: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => format!(
            "/badge/quality/{}/{}/{}",
            owner,
            repo,
            encode_badge_path(path)
        ),
        None => format!("/badge/quality/{}/{}", owner, repo),
    }
}

pub fn badge_absolute_url(site_base: &str, owner: &str, repo: &str, path: Option<&str>) -> String {
    format!(
        "{}{}",
        site_base.trim_end_matches('/'),
        badge_relative_url(owner, repo, path)
    )
}

/// Copy-paste Markdown snippet for READMEs
pub fn badge_markdown(badge_absolute_url: &str, detail_page_url: &str) -> String {
    format!(
        "[![Trust Score]({})]({})",
        badge_absolute_url, detail_page_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_relative_url_with_path() {
        assert_eq!(
            badge_relative_url("acme", "widget", Some("pkg/server")),
            "/badge/quality/acme/widget/pkg--server"
        );
    }

    #[test]
    fn test_badge_relative_url_without_path() {
        assert_eq!(
            badge_relative_url("acme", "widget", None),
            "/badge/quality/acme/widget"
        );
    }

    #[test]
    fn test_badge_path_roundtrip() {
        assert_eq!(decode_badge_path(&encode_badge_path("pkg/server")), "pkg/server");
    }

    #[test]
    fn test_badge_markdown_format() {
        let md = badge_markdown(
            "https://mcpdex.io/badge/quality/acme/widget",
            "https://mcpdex.io/servers/acme__widget",
        );
        assert_eq!(
            md,
            "[![Trust Score](https://mcpdex.io/badge/quality/acme/widget)](https://mcpdex.io/servers/acme__widget)"
        );
    }

    #[test]
    fn test_detail_page_url_trims_base() {
        assert_eq!(
            detail_page_url("https://mcpdex.io/", "acme__widget"),
            "https://mcpdex.io/servers/acme__widget"
        );
    }
}
