use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ops::filter::filter_projects;
use crate::tui::app::{App, Mode};
use crate::tui::render::push_highlighted_spans;
use crate::tui::wrap::wrap_text;

use super::page::{INDENT, push_heading, push_wrapped};

/// Build the projects section: search toolbar, tag row, filtered cards.
pub fn build_projects(app: &App, width: usize, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;
    push_heading(app, width, "Projects", lines);

    // Search box
    let mut search_spans = vec![Span::styled(
        format!("{}Search: ", INDENT),
        Style::default().fg(theme.dim).bg(theme.background),
    )];
    search_spans.push(Span::styled(
        app.filter.query.clone(),
        Style::default().fg(theme.text_bright).bg(theme.background),
    ));
    if app.mode == Mode::Search {
        search_spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(theme.background),
        ));
    }
    lines.push(Line::from(search_spans));

    // Tag row: the universe with the selected tag marked
    let selected = app.filter.tag_value();
    let mut tag_spans = vec![Span::styled(
        format!("{}Tags:   ", INDENT),
        Style::default().fg(theme.dim).bg(theme.background),
    )];
    for tag in app.tags() {
        if tag == selected {
            tag_spans.push(Span::styled(
                format!("[{}]", tag),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            tag_spans.push(Span::styled(
                tag,
                Style::default().fg(theme.text).bg(theme.background),
            ));
        }
        tag_spans.push(Span::styled(" ", Style::default().bg(theme.background)));
    }
    lines.push(Line::from(tag_spans));
    lines.push(Line::default());

    let filtered = filter_projects(&app.content.projects, &app.filter.query, selected);

    if filtered.is_empty() {
        // Empty state, not an error.
        lines.push(Line::from(Span::styled(
            format!("{}No matches", INDENT),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )));
        push_wrapped(
            app,
            width,
            "Try a different search term or clear the technology filter (press c).",
            Style::default().fg(theme.dim),
            lines,
        );
        return;
    }

    let highlight_re = app.query_highlight_re();
    let base = Style::default().fg(theme.text).bg(theme.background);
    let matched = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    for (i, project) in filtered.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        // Title row with optional links
        let mut title_spans = vec![Span::styled(
            format!("{}\u{25AA} ", INDENT),
            Style::default().fg(theme.highlight).bg(theme.background),
        )];
        push_highlighted_spans(
            &mut title_spans,
            &project.title,
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
            matched,
            highlight_re.as_ref(),
        );
        let mut link_labels = Vec::new();
        if project.links.github.is_some() {
            link_labels.push("github");
        }
        if project.links.demo.is_some() {
            link_labels.push("demo");
        }
        if !link_labels.is_empty() {
            title_spans.push(Span::styled(
                format!("  ({})", link_labels.join(" \u{00B7} ")),
                Style::default().fg(theme.link).bg(theme.background),
            ));
        }
        lines.push(Line::from(title_spans));

        // Description, wrapped with match highlighting
        let body_width = width.saturating_sub(INDENT.len() * 2 + 2).max(20);
        for row in wrap_text(&project.description, body_width) {
            let mut spans = vec![Span::styled(
                format!("{}  ", INDENT),
                Style::default().bg(theme.background),
            )];
            push_highlighted_spans(&mut spans, &row, base, matched, highlight_re.as_ref());
            lines.push(Line::from(spans));
        }

        // Tags
        let mut tag_spans = vec![Span::styled(
            format!("{}  ", INDENT),
            Style::default().bg(theme.background),
        )];
        for tag in &project.tags {
            push_highlighted_spans(
                &mut tag_spans,
                &format!("#{}", tag),
                Style::default().fg(theme.badge).bg(theme.background),
                matched,
                highlight_re.as_ref(),
            );
            tag_spans.push(Span::styled(" ", Style::default().bg(theme.background)));
        }
        lines.push(Line::from(tag_spans));

        if !project.role.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}  Role: ", INDENT),
                    Style::default().fg(theme.dim).bg(theme.background),
                ),
                Span::styled(
                    project.role.clone(),
                    Style::default().fg(theme.text).bg(theme.background),
                ),
            ]));
        }

        push_bullet_list(app, width, "Responsibilities", &project.responsibilities, highlight_re.as_ref(), lines);
        push_bullet_list(app, width, "Outcomes", &project.outcomes, highlight_re.as_ref(), lines);
    }
}

fn push_bullet_list(
    app: &App,
    width: usize,
    label: &str,
    items: &[String],
    highlight_re: Option<&regex::Regex>,
    lines: &mut Vec<Line<'static>>,
) {
    if items.is_empty() {
        return;
    }
    let theme = &app.theme;
    lines.push(Line::from(Span::styled(
        format!("{}  {}:", INDENT, label),
        Style::default().fg(theme.dim).bg(theme.background),
    )));

    let base = Style::default().fg(theme.text).bg(theme.background);
    let matched = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    let body_width = width.saturating_sub(INDENT.len() * 2 + 6).max(20);
    for item in items {
        for (j, row) in wrap_text(item, body_width).into_iter().enumerate() {
            let bullet = if j == 0 { "- " } else { "  " };
            let mut spans = vec![Span::styled(
                format!("{}    {}", INDENT, bullet),
                Style::default().fg(theme.dim).bg(theme.background),
            )];
            push_highlighted_spans(&mut spans, &row, base, matched, highlight_re);
            lines.push(Line::from(spans));
        }
    }
}
