use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::App;

use super::helpers::preview_lines;
use super::theme::Theme;

const PREVIEW_MAX_LINES: usize = 24;

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Body text for the lorem ipsum generator view.
pub fn build_lorem_text(app: &App) -> Text<'static> {
    let form = &app.lorem;
    let mut lines = Vec::new();

    let mut count_line = vec![
        Span::raw("  Paragraphs (1-100)  "),
        Span::styled(
            format!(" {} ", form.paragraphs_input),
            Style::default().fg(Theme::highlight()),
        ),
    ];
    if app.editing {
        count_line.push(Span::styled(
            "  [editing]",
            Style::default().fg(Theme::editing()),
        ));
    }
    lines.push(Line::from(count_line));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} ", checkbox(form.start_with_lorem)),
            Style::default().fg(Theme::accent()),
        ),
        Span::raw("Start with 'Lorem ipsum dolor sit amet'"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} ", checkbox(form.html)),
            Style::default().fg(Theme::accent()),
        ),
        Span::raw("HTML format"),
    ]));
    lines.push(Line::from(""));

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

    Text::from(lines)
}
