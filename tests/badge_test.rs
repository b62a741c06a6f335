//! Badge style and rendering tests

use mcpdex::badge::{badge_for, render_badge, BADGE_LABEL, COLOR_PENDING};
use mcpdex::catalog::{CatalogRecord, Origin, RepoStats};

fn record(score: Option<u8>) -> CatalogRecord {
    CatalogRecord {
        name: "acme__widget".to_string(),
        display_name: "widget".to_string(),
        origin: Origin::Repository {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
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
        quality_score: score,
        evaluation: None,
        config: None,
    }
}

#[test]
fn test_scored_badge_style() {
    let record = record(Some(92));
    let style = badge_for(Some(&record));
    assert_eq!(style.label, BADGE_LABEL);
    assert_eq!(style.message, "92/100");
    assert_eq!(style.color, "#059669");
    assert_eq!(style.max_age, 3600);
}

#[test]
fn test_tier_messages() {
    assert_eq!(badge_for(Some(&record(Some(80)))).message, "80/100");
    assert_eq!(badge_for(Some(&record(Some(79)))).message, "Good");
    assert_eq!(badge_for(Some(&record(Some(49)))).message, "Developing");
}

#[test]
fn test_pending_badge_style() {
    let record = record(None);
    let style = badge_for(Some(&record));
    assert_eq!(style.message, "Pending");
    assert_eq!(style.color, COLOR_PENDING);
    assert_eq!(style.max_age, 300);
}

#[test]
fn test_unknown_badge_style() {
    let style = badge_for(None);
    assert_eq!(style.message, "Calculating...");
    assert_eq!(style.max_age, 300);
}

#[test]
fn test_rendered_svg_shape() {
    let style = badge_for(Some(&record(Some(92))));
    let svg = render_badge(&style);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"height="20""#));
    // Label and message text appear twice each (drop-shadow duplicate)
    assert_eq!(svg.matches(">Trust Score</text>").count(), 2);
    assert_eq!(svg.matches(">92/100</text>").count(), 2);
    // Segment widths: "Trust Score" (11 chars) -> 86, "92/100" (6 chars) -> 56
    assert!(svg.contains(r#"width="142""#));
    assert!(svg.contains(r#"<rect x="86" width="56""#));
}
