use chrono::Datelike;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::app::{App, ContactForm, Mode};

use super::page::{INDENT, push_heading, push_wrapped};

/// Build the contact section: lead text, the UI-only form, footer.
pub fn build_contact(app: &App, width: usize, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;
    push_heading(app, width, "Contact", lines);

    push_wrapped(
        app,
        width,
        "Want to collaborate or discuss a role? Send a note. This form is UI-only by default and can be wired to an API later.",
        Style::default().fg(theme.text),
        lines,
    );
    lines.push(Line::default());

    let editing = app.mode == Mode::Contact;
    for (i, label) in ContactForm::FIELDS.iter().enumerate() {
        let focused = editing && app.contact.focus == i;
        let label_style = if focused {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(theme.background)
        };

        let mut spans = vec![Span::styled(
            format!("{}{:<9}", INDENT, format!("{}:", label)),
            label_style,
        )];
        spans.push(Span::styled(
            app.contact.field(i).to_string(),
            Style::default().fg(theme.text_bright).bg(theme.background),
        ));
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight).bg(theme.background),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let hint = if editing {
        "Tab next field \u{00B7} Enter send \u{00B7} Esc back"
    } else {
        "Press Enter to fill in the form"
    };
    lines.push(Line::from(Span::styled(
        format!("{}{}", INDENT, hint),
        Style::default().fg(theme.dim).bg(theme.background),
    )));

    // Footer
    if !app.content.meta.footer_text.is_empty() {
        lines.push(Line::default());
        let year = chrono::Utc::now().year();
        push_wrapped(
            app,
            width,
            &format!("\u{00A9} {} {}", year, app.content.meta.footer_text),
            Style::default().fg(theme.dim),
            lines,
        );
    }
}
