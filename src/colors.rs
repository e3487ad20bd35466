//! Color utilities for request ID visualization.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// 12 visually distinct ANSI colors for request ID coloring
///
/// The standard and bright variants of the six chromatic colors; readable on
/// both light and dark backgrounds.
const COLORS: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to one of the palette colors
///
/// Stable across runs so the same ID always gets the same color.
fn color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(131).wrapping_add(u32::from(b)));
    COLORS[(hash as usize) % COLORS.len()]
}

/// Formats a request ID as a bracketed, color-coded tag
///
/// Returns a `String` with embedded ANSI color codes; owo-colors degrades to
/// plain text when output isn't a terminal.
pub fn request_tag(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_determinism() {
        let color1 = color_for_id("abc123");
        let color2 = color_for_id("abc123");
        assert!(std::mem::discriminant(&color1) == std::mem::discriminant(&color2));
    }

    #[test]
    fn test_request_tag_format() {
        let result = request_tag("test");
        assert!(result.contains("test"));
    }
}
