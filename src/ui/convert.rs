use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::App;

use super::helpers::hex_to_color;
use super::theme::Theme;

/// Body text for the hex/RGB converter view.
pub fn build_convert_text(app: &App) -> Text<'static> {
    let form = &app.convert;
    let mut lines = Vec::new();

    let mut hex_line = vec![
        Span::raw("  Hex   "),
        Span::styled(
            format!(" {} ", form.hex_input),
            Style::default().fg(Theme::highlight()),
        ),
    ];
    if let Some(color) = hex_to_color(&form.hex_input) {
        hex_line.push(Span::raw("  "));
        hex_line.push(Span::styled("      ", Style::default().bg(color)));
    } else {
        hex_line.push(Span::styled(
            "  (not a color)",
            Style::default().fg(Theme::dim()),
        ));
    }
    if app.editing {
        hex_line.push(Span::styled(
            "  [editing]",
            Style::default().fg(Theme::editing()),
        ));
    }
    lines.push(Line::from(hex_line));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("  RGB   "),
        Span::styled(form.rgb.clone(), Style::default().fg(Theme::accent())),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  RGBA  "),
        Span::styled(form.rgba.clone(), Style::default().fg(Theme::accent())),
    ]));

    Text::from(lines)
}
