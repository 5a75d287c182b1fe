mod convert;
mod helpers;
mod lorem;
mod mock;
mod palette;
mod shades;
mod theme;
mod units;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{App, FocusMode, TABS, ToolView};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        ToolView::Convert => (" Color Converter ", convert::build_convert_text(app)),
        ToolView::Palette => (" Palette Generator ", palette::build_palette_text(app)),
        ToolView::Shades => (" Shade Ramp ", shades::build_shades_text(app)),
        ToolView::Units => (" Px / Rem ", units::build_units_text(app)),
        ToolView::Lorem => (" Lorem Ipsum ", lorem::build_lorem_text(app)),
        ToolView::Mock => (" Mock Data ", mock::build_mock_text(app)),
        ToolView::Help => (" Help ", build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Tinkr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "developer toolkit",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);
}

fn tabs_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, (label, view)) in TABS.iter().enumerate() {
        let active = app.view == *view;
        let selected = app.focus_mode == FocusMode::TabBar && index == app.selected_tab_index;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default()
                .fg(Theme::primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let view_binds = match app.view {
        ToolView::Convert => "e edit hex   Enter copy rgb()",
        ToolView::Palette => "←/→ select   Space regenerate   x lock   Enter copy hex",
        ToolView::Shades => "e edit hex   ←/→ select   Enter copy shade",
        ToolView::Units => "↑/↓ field   e edit",
        ToolView::Lorem => "e edit count   o opener   f html   g generate   Enter copy",
        ToolView::Mock => {
            "e edit count   ↑/↓ field   k kind   a add   d delete   o locale   f format   g generate   Enter copy"
        }
        ToolView::Help => "Esc back",
    };
    vec![
        Line::from(Span::styled(
            format!("  {view_binds}"),
            Style::default().fg(Theme::dim()),
        )),
        Line::from(Span::styled(
            "  c/p/s/u/l/m views   Tab tab bar   ? help   q quit",
            Style::default().fg(Theme::dim()),
        )),
    ]
}

fn status_line(app: &App) -> Line<'static> {
    match &app.status {
        Some(message) => Line::from(Span::styled(
            format!("  {message}"),
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "  Ready",
            Style::default().fg(Theme::dim()),
        )),
    }
}

fn build_help_text() -> Text<'static> {
    let entries = [
        ("c", "Color converter: hex to rgb()/rgba()"),
        ("p", "Palette generator: five swatches, lockable"),
        ("s", "Shade ramp: 10 shades around a base color"),
        ("u", "Px/rem converter with an editable base size"),
        ("l", "Lorem ipsum generator"),
        ("m", "Mock data generator (JSON or CSV)"),
        ("e", "Edit the focused input field"),
        ("Enter", "Copy the current result to the clipboard"),
        ("Tab", "Move focus to the tab bar"),
        ("Esc", "Go back to the previous view"),
        ("q", "Quit"),
    ];
    let mut lines = Vec::new();
    for (key, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<7}"),
                Style::default().fg(Theme::highlight()),
            ),
            Span::raw(description),
        ]));
    }
    Text::from(lines)
}
