//! Badge label, message, color and cache policy
//!
//! The hex gradient is pinned for visual-regression testing; changing
//! any value breaks badges already embedded in external READMEs.

use crate::catalog::types::CatalogRecord;

pub const BADGE_LABEL: &str = "Trust Score";

/// Gray used for unevaluated and unknown records
pub const COLOR_PENDING: &str = "#9ca3af";

/// Unknown/pending badges re-resolve quickly; scored badges are stable
pub const CACHE_PENDING_SECS: u32 = 300;
pub const CACHE_SCORED_SECS: u32 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub message: String,
    pub color: &'static str,
    pub max_age: u32,
}

/// Eight-step color gradient keyed to score thresholds
pub fn score_color(score: u8) -> &'static str {
    match score {
        90.. => "#059669",
        80.. => "#10b981",
        70.. => "#34d399",
        60.. => "#6ee7b7",
        50.. => "#5eead4",
        40.. => "#eab308",
        30.. => "#f97316",
        _ => "#ef4444",
    }
}

/// High scores show the number; lower tiers show a word
pub fn score_message(score: u8) -> String {
    if score >= 80 {
        format!("{}/100", score)
    } else if score >= 50 {
        "Good".to_string()
    } else {
        "Developing".to_string()
    }
}

/// Resolve the badge for a lookup result. A badge always renders
/// something displayable; unknown identities get "Calculating...".
pub fn badge_for(record: Option<&CatalogRecord>) -> BadgeStyle {
    match record.and_then(|r| r.quality_score) {
        Some(score) => BadgeStyle {
            label: BADGE_LABEL,
            message: score_message(score),
            color: score_color(score),
            max_age: CACHE_SCORED_SECS,
        },
        None => BadgeStyle {
            label: BADGE_LABEL,
            message: if record.is_some() {
                "Pending".to_string()
            } else {
                "Calculating...".to_string()
            },
            color: COLOR_PENDING,
            max_age: CACHE_PENDING_SECS,
        },
    }
}
