use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::App;
use crate::color;

use super::helpers::{contrast_to_color, rgb_to_color};
use super::theme::Theme;

/// Body text for the palette generator view: one row per swatch.
pub fn build_palette_text(app: &App) -> Text<'static> {
    let mut lines = Vec::new();

    for (index, entry) in app.palette.iter().enumerate() {
        let selected = index == app.palette_selected;
        let marker = if selected { "▶ " } else { "  " };
        let hex = color::rgb_to_hex(entry.color);
        let lock = if entry.locked { "[locked]" } else { "[      ]" };

        let swatch_style = Style::default()
            .bg(rgb_to_color(entry.color))
            .fg(contrast_to_color(&hex));

        let mut spans = vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(Theme::selection_marker()),
            ),
            Span::styled(format!("  {hex}  "), swatch_style),
            Span::raw("  "),
        ];
        let lock_style = if entry.locked {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(lock.to_string(), lock_style));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Space regenerates every unlocked swatch.",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
