use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::App;
use crate::color;

use super::helpers::{contrast_to_color, hex_to_color};
use super::theme::Theme;

/// Body text for the shade ramp view.
pub fn build_shades_text(app: &App) -> Text<'static> {
    let form = &app.shades;
    let mut lines = Vec::new();

    let mut input_line = vec![
        Span::raw("  Base  "),
        Span::styled(
            format!(" {} ", form.hex_input),
            Style::default().fg(Theme::highlight()),
        ),
    ];
    if app.editing {
        input_line.push(Span::styled(
            "  [editing]",
            Style::default().fg(Theme::editing()),
        ));
    }
    lines.push(Line::from(input_line));
    lines.push(Line::from(""));

    let shades = color::generate_shades(&form.hex_input);
    if shades.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Enter a 6-digit hex color to see its shades.",
            Style::default().fg(Theme::dim()),
        )));
        return Text::from(lines);
    }

    for (index, shade) in shades.iter().enumerate() {
        let selected = index == form.selected;
        let marker = if selected { "▶ " } else { "  " };
        let label = if index == 5 { "  (base)" } else { "" };

        let swatch_style = match hex_to_color(shade) {
            Some(bg) => Style::default().bg(bg).fg(contrast_to_color(shade)),
            None => Style::default(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(Theme::selection_marker()),
            ),
            Span::styled(format!("  {shade}  "), swatch_style),
            Span::styled(label.to_string(), Style::default().fg(Theme::dim())),
        ]));
    }

    Text::from(lines)
}
