use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Section;
use crate::tui::app::App;
use crate::tui::theme::ThemeMode;

/// Render the nav bar: section tabs + theme indicator, separator below
pub fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    // Brand mark
    let bg_style = Style::default().bg(bg);
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25C6}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        format!("{} ", app.content.profile.name),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
    sep_cols.push(current_width(&spans));
    spans.push(sep.clone());

    // Section tabs
    let active = app.active_section();
    for section in Section::ALL {
        let style = tab_style(app, section == active);
        spans.push(Span::styled(format!(" {} ", section.label()), style));
        sep_cols.push(current_width(&spans));
        spans.push(sep.clone());
    }

    // Theme indicator, right-aligned
    let (icon, label) = match app.theme_mode {
        ThemeMode::Light => ("\u{2600}", "Light"),
        ThemeMode::Dark => ("\u{263E}", "Dark"),
    };
    let indicator = format!("{} {} ", icon, label);
    let used = current_width(&spans);
    let width = area.width as usize;
    if used + indicator.chars().count() < width {
        spans.push(Span::styled(
            " ".repeat(width - used - indicator.chars().count()),
            bg_style,
        ));
        spans.push(Span::styled(
            indicator,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
    sep_cols
}

fn current_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.chars().count()).sum()
}

/// Separator row, with an indicator for the active project filter.
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    if app.filter.is_active() {
        let mut indicator_spans: Vec<Span> = Vec::new();
        indicator_spans.push(Span::styled(
            "filter: ",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        if let Some(tag) = &app.filter.tag {
            indicator_spans.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(app.theme.badge).bg(bg),
            ));
        }
        if !app.filter.query.trim().is_empty() {
            if app.filter.tag.is_some() {
                indicator_spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            indicator_spans.push(Span::styled(
                format!("/{}", app.filter.query.trim()),
                Style::default().fg(app.theme.text).bg(bg),
            ));
        }

        let indicator_width: usize = indicator_spans
            .iter()
            .map(|s| s.content.chars().count())
            .sum();
        // +2: one space before the indicator, one after at the right edge
        let separator_end = width.saturating_sub(indicator_width + 2);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            separator_text(separator_end, sep_cols),
            Style::default().fg(dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(indicator_spans);
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }

        let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(widget, area);
    } else {
        let widget = Paragraph::new(separator_text(width, sep_cols))
            .style(Style::default().fg(dim).bg(bg));
        frame.render_widget(widget, area);
    }
}

fn separator_text(cols: usize, sep_cols: &[usize]) -> String {
    let mut text = String::with_capacity(cols * 3);
    for col in 0..cols {
        if sep_cols.contains(&col) {
            text.push('\u{2534}');
        } else {
            text.push('\u{2500}');
        }
    }
    text
}

/// Style for a tab: highlighted if it is the active section
fn tab_style(app: &App, is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
