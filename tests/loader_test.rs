//! Record loader tests: merging, placeholders, ranking, failure tolerance

use mcpdex::catalog::{CatalogLoader, Origin, RecordCache, PENDING_DESCRIPTION};
use mcpdex::config::CatalogConfig;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

fn config_for(dir: &TempDir, dev_mode: bool) -> CatalogConfig {
    CatalogConfig {
        manifest_path: dir
            .path()
            .join("manifest.json")
            .to_string_lossy()
            .to_string(),
        evaluations_dir: dir
            .path()
            .join("evaluations")
            .to_string_lossy()
            .to_string(),
        dev_mode,
        ..Default::default()
    }
}

async fn write_manifest(dir: &TempDir, urls: &[&str]) {
    let content = serde_json::to_string(&urls).unwrap();
    fs::write(dir.path().join("manifest.json"), content)
        .await
        .unwrap();
}

async fn write_evaluation(dir: &TempDir, identity: &str, doc: serde_json::Value) {
    let eval_dir = dir.path().join("evaluations");
    fs::create_dir_all(&eval_dir).await.unwrap();
    fs::write(
        eval_dir.join(format!("{}.json", identity)),
        doc.to_string(),
    )
    .await
    .unwrap();
}

fn evaluation_doc(score: u8, stars: u64) -> serde_json::Value {
    json!({
        "displayName": "Widget",
        "origin": {
            "kind": "repository",
            "owner": "ignored",
            "repo": "ignored",
            "stats": {"stars": stars, "contributors": 3, "issues": 7, "hasReleases": true, "hasCi": true}
        },
        "description": "A widget server",
        "category": "developer-tools",
        "language": "Rust",
        "features": {"tools": true, "stdio": true},
        "dependencies": [{"name": "serde", "importance": 8}],
        "qualityScore": score,
        "evaluation": {"model": "eval-model-1", "evaluatedAt": "2026-01-01T00:00:00Z"}
    })
}

fn loader(dir: &TempDir, dev_mode: bool) -> CatalogLoader {
    CatalogLoader::new(&config_for(dir, dev_mode), Arc::new(RecordCache::new(true)))
}

#[tokio::test]
async fn test_merge_keeps_manifest_identity_and_doc_content() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &["https://github.com/Acme/Widget"]).await;
    write_evaluation(&dir, "acme__widget", evaluation_doc(85, 120)).await;

    let records = loader(&dir, false).load(None).await;
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.name, "acme__widget");
    assert_eq!(record.display_name, "Widget");
    assert_eq!(record.quality_score, Some(85));
    assert_eq!(record.description, "A widget server");
    match &record.origin {
        Origin::Repository { owner, repo, stats, .. } => {
            // Owner/repo come from the manifest URL, stats from the doc
            assert_eq!(owner, "acme");
            assert_eq!(repo, "widget");
            assert_eq!(stats.stars, 120);
            assert!(stats.has_ci);
        }
        Origin::Remote { .. } => panic!("expected repository origin"),
    }
}

#[tokio::test]
async fn test_placeholder_for_unevaluated_entry() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &["https://github.com/acme/widget"]).await;

    let records = loader(&dir, false).load(None).await;
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.quality_score, None);
    assert_eq!(record.description, PENDING_DESCRIPTION);
    assert_eq!(record.dependencies.as_deref(), Some(&[][..]));
    let features = record.features.as_ref().unwrap();
    assert!(!features.tools && !features.stdio && !features.oauth2);
    match &record.origin {
        Origin::Repository { stats, .. } => {
            assert_eq!(stats.stars, 0);
            assert!(!stats.has_ci);
        }
        Origin::Remote { .. } => panic!("expected repository origin"),
    }
}

#[tokio::test]
async fn test_corrupt_evaluation_degrades_to_placeholder() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &[
            "https://github.com/acme/widget",
            "https://github.com/acme/gadget",
        ],
    )
    .await;
    let eval_dir = dir.path().join("evaluations");
    fs::create_dir_all(&eval_dir).await.unwrap();
    fs::write(eval_dir.join("acme__widget.json"), "{not json")
        .await
        .unwrap();
    write_evaluation(&dir, "acme__gadget", evaluation_doc(70, 10)).await;

    // One corrupt document never takes down the catalog
    let records = loader(&dir, false).load(None).await;
    assert_eq!(records.len(), 2);

    let widget = records.iter().find(|r| r.name == "acme__widget").unwrap();
    assert_eq!(widget.quality_score, None);
    let gadget = records.iter().find(|r| r.name == "acme__gadget").unwrap();
    assert_eq!(gadget.quality_score, Some(70));
}

#[tokio::test]
async fn test_missing_manifest_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let records = loader(&dir, false).load(None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_corrupt_manifest_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.json"), "not json")
        .await
        .unwrap();
    let records = loader(&dir, false).load(None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_ranking_policy() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &[
            "https://github.com/acme/zeta",
            "https://github.com/acme/alpha",
            "https://github.com/acme/top",
            "https://github.com/acme/starry",
            "https://github.com/acme/plain",
        ],
    )
    .await;
    // top scores highest; starry and plain tie on score, starry has more stars
    write_evaluation(&dir, "acme__top", evaluation_doc(95, 10)).await;
    write_evaluation(&dir, "acme__starry", evaluation_doc(80, 900)).await;
    write_evaluation(&dir, "acme__plain", evaluation_doc(80, 5)).await;

    let records = loader(&dir, false).load(None).await;
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // Evaluated first by score desc (stars break the tie), then
    // unevaluated alphabetically by display name
    assert_eq!(
        names,
        vec![
            "acme__top",
            "acme__starry",
            "acme__plain",
            "acme__alpha",
            "acme__zeta"
        ]
    );
}

#[tokio::test]
async fn test_single_name_lookup() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &[
            "https://github.com/acme/widget",
            "https://github.com/acme/gadget",
        ],
    )
    .await;

    let loader = loader(&dir, false);
    let records = loader.load(Some("acme__gadget")).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "acme__gadget");

    let records = loader.load(Some("acme__nope")).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_monorepo_path_identities() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &[
            "https://github.com/acme/widget/tree/main/pkg/server",
            "https://github.com/acme/widget/tree/main/pkg/client",
        ],
    )
    .await;

    let loader = loader(&dir, false);
    let records = loader.load(None).await;
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert!(names.contains(&"acme__widget__pkg__server"));
    assert!(names.contains(&"acme__widget__pkg__client"));

    // Both share the repository for metric-sharing purposes
    let count = loader.count_records_in_repo(&records[0], None).await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_remote_origin_entry() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &["https://mcp.example.com/tools/weather"]).await;

    let records = loader(&dir, false).load(None).await;
    assert_eq!(records.len(), 1);
    assert!(records[0].is_remote());
    match &records[0].origin {
        Origin::Remote { url, .. } => assert_eq!(url, "https://mcp.example.com/tools/weather"),
        Origin::Repository { .. } => panic!("expected remote origin"),
    }
}

#[tokio::test]
async fn test_duplicate_manifest_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &[
            "https://github.com/acme/widget",
            "https://github.com/ACME/Widget/",
        ],
    )
    .await;

    let records = loader(&dir, false).load(None).await;
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_cache_serves_stale_until_dev_mode() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &["https://github.com/acme/widget"]).await;

    let cached = loader(&dir, false);
    assert_eq!(cached.load(None).await.len(), 1);

    write_manifest(
        &dir,
        &[
            "https://github.com/acme/widget",
            "https://github.com/acme/gadget",
        ],
    )
    .await;

    // Process-lifetime cache: the second entry is not visible
    assert_eq!(cached.load(None).await.len(), 1);

    // Dev mode clears the cache on every load
    let dev = loader(&dir, true);
    assert_eq!(dev.load(None).await.len(), 2);
    write_manifest(&dir, &["https://github.com/acme/widget"]).await;
    assert_eq!(dev.load(None).await.len(), 1);
}
