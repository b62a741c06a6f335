//! Embeddable Trust Score badges

pub mod style;
pub mod svg;

pub use style::{
    badge_for, score_color, score_message, BadgeStyle, BADGE_LABEL, CACHE_PENDING_SECS,
    CACHE_SCORED_SECS, COLOR_PENDING,
};
pub use svg::render_badge;
