use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            // Quiet in navigate mode; show the live query dimmed when set.
            let mut spans = Vec::new();
            if !app.filter.query.is_empty() {
                spans.push(Span::styled(
                    format!("/{}", app.filter.query),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            with_right_hint(app, spans, "j/k scroll  / search  t theme  ? help", width)
        }
        Mode::Search => {
            let spans = vec![
                Span::styled(
                    format!("/{}", app.filter.query),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_right_hint(app, spans, "Enter accept  Esc close", width)
        }
        Mode::Contact => with_right_hint(
            app,
            Vec::new(),
            "Tab next field  Enter send  Esc back",
            width,
        ),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad spans to the full width with a dimmed hint at the right edge.
fn with_right_hint<'a>(
    app: &App,
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    } else if spans.is_empty() {
        spans.push(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn navigate_mode_shows_key_hints() {
        let app = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("? help"));
    }

    #[test]
    fn search_mode_shows_prompt_and_cursor() {
        let mut app = test_app();
        app.mode = Mode::Search;
        app.filter.query = "docker".into();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("/docker\u{258C}"));
        assert!(output.contains("Esc close"));
    }

    #[test]
    fn contact_mode_shows_form_hints() {
        let mut app = test_app();
        app.mode = Mode::Contact;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter send"));
    }
}
