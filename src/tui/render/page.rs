use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::model::Section;
use crate::ops::visibility::RegionSpan;
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::{contact, projects};

/// Left padding for page text.
pub const INDENT: &str = "  ";

/// The assembled page: every section's lines plus its row span.
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub spans: Vec<RegionSpan>,
}

/// Build the whole page for the given width. Row spans feed the
/// visibility tracker, so this is the single source of section geometry.
pub fn build_document(app: &App, width: usize) -> PageDocument {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<RegionSpan> = Vec::new();

    for section in Section::ALL {
        let start = lines.len();
        match section {
            Section::About => build_about(app, width, &mut lines),
            Section::Skills => build_skills(app, width, &mut lines),
            Section::Projects => projects::build_projects(app, width, &mut lines),
            Section::Contact => contact::build_contact(app, width, &mut lines),
        }
        let end = lines.len();
        spans.push(RegionSpan { section, start, end });
        // Breathing room between sections, owned by neither region.
        lines.push(Line::default());
    }

    PageDocument { lines, spans }
}

/// Render the visible window of the page and record geometry on the app.
pub fn render_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let doc = build_document(app, area.width as usize);

    app.page_rows = doc.lines.len();
    app.viewport_rows = area.height as usize;
    app.set_spans(doc.spans);
    app.scroll = app.scroll.min(app.max_scroll());

    let paragraph = Paragraph::new(Text::from(doc.lines))
        .style(Style::default().bg(app.theme.background))
        .scroll((app.scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Section heading: "─ About ─────"
pub fn push_heading(app: &App, width: usize, title: &str, lines: &mut Vec<Line<'static>>) {
    let mut text = format!("{}\u{2500} {} ", INDENT, title);
    let used = text.chars().count();
    if width > used {
        text.push_str(&"\u{2500}".repeat(width - used));
    }
    lines.push(Line::from(Span::styled(
        text,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
}

/// Wrapped body text with the standard indent.
pub fn push_wrapped(
    app: &App,
    width: usize,
    text: &str,
    style: Style,
    lines: &mut Vec<Line<'static>>,
) {
    let body_width = width.saturating_sub(INDENT.len() * 2).max(20);
    for row in wrap_text(text, body_width) {
        lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, row),
            style.bg(app.theme.background),
        )));
    }
}

fn build_about(app: &App, width: usize, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;
    let profile = &app.content.profile;
    push_heading(app, width, "About", lines);

    // Kicker: title · location
    let mut kicker = profile.title.clone();
    if !profile.location.is_empty() {
        if !kicker.is_empty() {
            kicker.push_str(" \u{00B7} ");
        }
        kicker.push_str(&profile.location);
    }
    if !kicker.is_empty() {
        push_wrapped(
            app,
            width,
            &kicker,
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            lines,
        );
    }

    if !profile.tagline.is_empty() {
        push_wrapped(
            app,
            width,
            &profile.tagline,
            Style::default().fg(theme.text_bright),
            lines,
        );
    }

    for paragraph in &profile.bio {
        lines.push(Line::default());
        push_wrapped(app, width, paragraph, Style::default().fg(theme.text), lines);
    }

    if !profile.links.is_empty() {
        lines.push(Line::default());
        for (kind, url) in &profile.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{:<10}", INDENT, kind),
                    Style::default().fg(theme.dim).bg(theme.background),
                ),
                Span::styled(
                    url.clone(),
                    Style::default().fg(theme.link).bg(theme.background),
                ),
            ]));
        }
    }
}

fn build_skills(app: &App, width: usize, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;
    push_heading(app, width, "Skills", lines);

    for (i, group) in app.content.skills.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, group.group),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )));
        push_wrapped(
            app,
            width,
            &group.items.join(" \u{00B7} "),
            Style::default().fg(theme.badge),
            lines,
        );
    }
}
