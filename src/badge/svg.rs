//! SVG badge rendering
//!
//! Two adjacent rounded-rect segments, shields-style: segment width is
//! 6px per character plus 20px padding, fixed 20px height, a vertical
//! shadow gradient over both segments and a drop-shadow duplicate
//! behind each text run.

use crate::badge::style::BadgeStyle;

const CHAR_WIDTH: usize = 6;
const SEGMENT_PADDING: usize = 20;
const HEIGHT: usize = 20;

fn segment_width(text: &str) -> usize {
    CHAR_WIDTH * text.chars().count() + SEGMENT_PADDING
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a badge to a complete SVG document
pub fn render_badge(style: &BadgeStyle) -> String {
    let label = xml_escape(style.label);
    let message = xml_escape(&style.message);

    let label_width = segment_width(style.label);
    let message_width = segment_width(&style.message);
    let total_width = label_width + message_width;

    let label_center = label_width / 2;
    let message_center = label_width + message_width / 2;

    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{total}" height="{height}" role="img" aria-label="{label}: {message}">"##,
            r##"<title>{label}: {message}</title>"##,
            r##"<linearGradient id="s" x2="0" y2="100%">"##,
            r##"<stop offset="0" stop-color="#bbb" stop-opacity=".1"/>"##,
            r##"<stop offset="1" stop-opacity=".1"/>"##,
            r##"</linearGradient>"##,
            r##"<clipPath id="r"><rect width="{total}" height="{height}" rx="3" fill="#fff"/></clipPath>"##,
            r##"<g clip-path="url(#r)">"##,
            r##"<rect width="{label_w}" height="{height}" fill="#555"/>"##,
            r##"<rect x="{label_w}" width="{message_w}" height="{height}" fill="{color}"/>"##,
            r##"<rect width="{total}" height="{height}" fill="url(#s)"/>"##,
            r##"</g>"##,
            r##"<g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">"##,
            r##"<text x="{label_c}" y="15" fill="#010101" fill-opacity=".3">{label}</text>"##,
            r##"<text x="{label_c}" y="14">{label}</text>"##,
            r##"<text x="{message_c}" y="15" fill="#010101" fill-opacity=".3">{message}</text>"##,
            r##"<text x="{message_c}" y="14">{message}</text>"##,
            r##"</g>"##,
            r##"</svg>"##
        ),
        total = total_width,
        height = HEIGHT,
        label = label,
        message = message,
        label_w = label_width,
        message_w = message_width,
        label_c = label_center,
        message_c = message_center,
        color = style.color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::style::{BADGE_LABEL, CACHE_SCORED_SECS};

    fn style(message: &str, color: &'static str) -> BadgeStyle {
        BadgeStyle {
            label: BADGE_LABEL,
            message: message.to_string(),
            color,
            max_age: CACHE_SCORED_SECS,
        }
    }

    #[test]
    fn test_widths_follow_char_count() {
        // "Trust Score" = 11 chars -> 86, "Good" = 4 chars -> 44
        let svg = render_badge(&style("Good", "#5eead4"));
        assert!(svg.contains(r#"width="130" height="20""#));
        assert!(svg.contains(r##"<rect width="86" height="20" fill="#555"/>"##));
        assert!(svg.contains(r##"<rect x="86" width="44" height="20" fill="#5eead4"/>"##));
    }

    #[test]
    fn test_message_and_color_embedded() {
        let svg = render_badge(&style("92/100", "#059669"));
        assert!(svg.contains(">92/100</text>"));
        assert!(svg.contains(r##"fill="#059669""##));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = render_badge(&style("<&>", "#ef4444"));
        assert!(svg.contains("&lt;&amp;&gt;"));
        assert!(!svg.contains("><&></text>"));
    }
}
