use ratatui::style::Color;

use crate::color;
use crate::types::Rgb;

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Terminal color for a hex string, if it parses.
pub fn hex_to_color(value: &str) -> Option<Color> {
    color::hex_to_rgb(value.trim()).map(rgb_to_color)
}

/// Readable label color against a swatch drawn with `hex` as background.
pub fn contrast_to_color(hex: &str) -> Color {
    match color::contrast_color(hex) {
        "#000000" => Color::Black,
        _ => Color::White,
    }
}

/// Cap long generator output for the preview area.
pub fn preview_lines(output: &str, max: usize) -> (Vec<&str>, usize) {
    let lines: Vec<&str> = output.lines().collect();
    if lines.len() <= max {
        (lines, 0)
    } else {
        let hidden = lines.len() - max;
        (lines.into_iter().take(max).collect(), hidden)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hex_to_color_parses_valid_input_only() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color(" 00ff00 "), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(hex_to_color("bogus"), None);
    }

    #[test]
    fn preview_caps_line_count() {
        let text = "a\nb\nc\nd";
        let (lines, hidden) = preview_lines(text, 2);
        assert_eq!(lines, vec!["a", "b"]);
        assert_eq!(hidden, 2);

        let (lines, hidden) = preview_lines(text, 10);
        assert_eq!(lines.len(), 4);
        assert_eq!(hidden, 0);
    }
}
