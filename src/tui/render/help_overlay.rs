use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k, arrows", "scroll one row"),
    ("Ctrl-d / Ctrl-u", "scroll half a page"),
    ("g / G", "top / bottom"),
    ("1-4, Tab", "jump between sections"),
    ("/", "search projects"),
    ("] / [", "cycle technology tag"),
    ("c", "clear search and tag"),
    ("t", "toggle light/dark theme"),
    ("Enter", "open the contact form"),
    ("q", "quit"),
];

/// Render the help overlay, centered. Any key closes it.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let key_width = BINDINGS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<key_width$}  ", key),
                Style::default()
                    .fg(theme.text_bright)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " press any key to close",
        Style::default().fg(theme.dim),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 48.min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), rect);
}
