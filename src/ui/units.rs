use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::{App, UnitsField};

use super::theme::Theme;

/// Body text for the pixel/rem converter view.
pub fn build_units_text(app: &App) -> Text<'static> {
    let form = &app.units;
    let mut lines = Vec::new();

    let rows = [
        (UnitsField::Base, "Base font size", &form.base_input, "px"),
        (UnitsField::Px, "Pixels        ", &form.px_input, "px"),
        (UnitsField::Rem, "Rem           ", &form.rem_input, "rem"),
    ];

    for (field, label, value, suffix) in rows {
        let selected = form.field == field;
        let marker = if selected { "▶ " } else { "  " };
        let value_style = if selected {
            Style::default().fg(Theme::highlight())
        } else {
            Style::default().fg(Theme::accent())
        };
        let mut spans = vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(Theme::selection_marker()),
            ),
            Span::raw(format!("{label}  ")),
            Span::styled(format!(" {value} "), value_style),
            Span::styled(format!(" {suffix}"), Style::default().fg(Theme::dim())),
        ];
        if selected && app.editing {
            spans.push(Span::styled(
                "  [editing]",
                Style::default().fg(Theme::editing()),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Derived values only change while the input parses.",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
