use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::wrap::wrap_text;
use crate::util::unicode;

/// Toast box width, including borders.
const TOAST_WIDTH: u16 = 40;

/// Render active toasts stacked in the top-right corner of the page
/// area, newest on top.
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    if app.toasts.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }
    let theme = &app.theme;
    let x = area.x + area.width - TOAST_WIDTH - 1;
    let inner_width = (TOAST_WIDTH - 4) as usize;
    let mut y = area.y;

    for toast in app.toasts.iter() {
        let body = wrap_text(&toast.message, inner_width);
        // title + body + borders
        let height = (body.len() as u16 + 3).min(area.height.saturating_sub(y - area.y));
        if height < 3 {
            break;
        }
        let rect = Rect {
            x,
            y,
            width: TOAST_WIDTH,
            height,
        };

        let mut lines = vec![Line::from(Span::styled(
            unicode::truncate_to_width(&toast.title, inner_width),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))];
        for row in body {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(theme.text),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.toast_border))
            .style(Style::default().bg(theme.toast_bg));
        let widget = Paragraph::new(Text::from(lines)).block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
        y += height;
        if y >= area.y + area.height {
            break;
        }
    }
}
