use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::App;
use crate::types::MockFormat;

use super::helpers::preview_lines;
use super::theme::Theme;

const PREVIEW_MAX_LINES: usize = 18;

/// Body text for the mock data generator view.
pub fn build_mock_text(app: &App) -> Text<'static> {
    let form = &app.mock;
    let mut lines = Vec::new();

    let format_label = match form.format {
        MockFormat::Json => "JSON",
        MockFormat::Csv => "CSV",
    };
    let mut count_line = vec![
        Span::raw("  Records (1-1000)  "),
        Span::styled(
            format!(" {} ", form.count_input),
            Style::default().fg(Theme::highlight()),
        ),
        Span::raw("   Locale "),
        Span::styled(
            form.locale.label().to_string(),
            Style::default().fg(Theme::accent()),
        ),
        Span::raw("   Format "),
        Span::styled(format_label, Style::default().fg(Theme::accent())),
    ];
    if app.editing {
        count_line.push(Span::styled(
            "  [editing]",
            Style::default().fg(Theme::editing()),
        ));
    }
    lines.push(Line::from(count_line));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Fields",
        Style::default().fg(Theme::secondary()),
    )));
    for (index, field) in form.fields.iter().enumerate() {
        let selected = index == form.selected_field;
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(Theme::selection_marker()),
            ),
            Span::styled(
                format!("{:<12}", field.name),
                Style::default().fg(Theme::text()),
            ),
            Span::styled(
                field.kind.label().to_string(),
                Style::default().fg(Theme::accent()),
            ),
        ]));
    }
    lines.push(Line::from(""));

    if form.output.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Press g to generate.",
            Style::default().fg(Theme::dim()),
        )));
    } else {
        let (preview, hidden) = preview_lines(&form.output, PREVIEW_MAX_LINES);
        for line in preview {
            lines.push(Line::from(format!("  {line}")));
        }
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("  … {hidden} more lines (Enter copies everything)"),
                Style::default().fg(Theme::dim()),
            )));
        }
    }

    Text::from(lines)
}
