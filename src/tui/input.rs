use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Section;
use crate::util::unicode;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Bare modifier presses carry no action.
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input.
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Contact => handle_contact(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    let half_page = (app.viewport_rows / 2).max(1) as isize;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => app.show_help = true,

        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(half_page);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(-half_page);
        }
        KeyCode::PageDown => app.scroll_by(app.viewport_rows.max(1) as isize),
        KeyCode::PageUp => app.scroll_by(-(app.viewport_rows.max(1) as isize)),
        KeyCode::Char('g') | KeyCode::Home => app.scroll = 0,
        KeyCode::Char('G') | KeyCode::End => app.scroll = app.max_scroll(),

        // Section jumps
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.jump_to_section(Section::ALL[index]);
        }
        KeyCode::Tab => jump_relative(app, 1),
        KeyCode::BackTab => jump_relative(app, -1),

        // Filtering
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char(']') => app.cycle_tag(true),
        KeyCode::Char('[') => app.cycle_tag(false),
        KeyCode::Char('c') => app.filter.clear_all(),

        // Theme
        KeyCode::Char('t') => app.toggle_theme(),

        // Contact form (when the contact section is in focus)
        KeyCode::Enter if app.active_section() == Section::Contact => {
            app.mode = Mode::Contact;
        }
        _ => {}
    }
}

/// Jump to the section before/after the currently active one, saturating
/// at the ends of the page.
fn jump_relative(app: &mut App, delta: isize) {
    let index = app.active_section().index() as isize + delta;
    let index = index.clamp(0, Section::ALL.len() as isize - 1) as usize;
    app.jump_to_section(Section::ALL[index]);
}

/// Search mode edits the query live; every keystroke re-derives the
/// filtered projects on the next draw.
fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Navigate,
        KeyCode::Backspace => unicode::pop_grapheme(&mut app.filter.query),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter.query.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter.query.push(c);
        }
        _ => {}
    }
}

fn handle_contact(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Tab | KeyCode::Down => {
            app.contact.focus = (app.contact.focus + 1) % 3;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact.focus = (app.contact.focus + 2) % 3;
        }
        KeyCode::Enter => {
            // Enter advances through the single-line fields and submits
            // from the message field.
            if app.contact.focus < 2 {
                app.contact.focus += 1;
            } else {
                app.submit_contact();
            }
        }
        KeyCode::Backspace => unicode::pop_grapheme(app.contact.field_mut()),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.contact.field_mut().push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::content_io::{ContentSource, load_content};
    use crate::ops::visibility::RegionSpan;
    use crate::tui::theme::ThemeMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        let content = load_content(&ContentSource::Embedded).unwrap();
        let mut app = App::new(content, ContentSource::Embedded, ThemeMode::Light);
        app.set_spans(vec![
            RegionSpan { section: Section::About, start: 0, end: 30 },
            RegionSpan { section: Section::Skills, start: 30, end: 60 },
            RegionSpan { section: Section::Projects, start: 60, end: 140 },
            RegionSpan { section: Section::Contact, start: 140, end: 170 },
        ]);
        app.page_rows = 170;
        app.viewport_rows = 24;
        app
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.scroll, 60);
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn search_mode_edits_query_live() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);

        for c in "rust".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.filter.query, "rust");

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.filter.query, "rus");

        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.filter.query, "");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn clear_filters_resets_query_and_tag() {
        let mut app = test_app();
        app.filter.query = "docker".into();
        app.filter.tag = Some("Docker".into());
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert!(!app.filter.is_active());
    }

    #[test]
    fn theme_toggle_key_flips_mode() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = test_app();
        app.state_dir = tmp.path().to_path_buf();
        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn enter_opens_contact_form_only_on_contact_section() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);

        app.scroll = app.max_scroll();
        app.apply_visibility();
        assert_eq!(app.active_section(), Section::Contact);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Contact);
    }

    #[test]
    fn contact_enter_walks_fields_then_submits() {
        let mut app = test_app();
        app.mode = Mode::Contact;

        for c in "Sam".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.contact.focus, 1);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.contact.focus, 2);
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.toasts.len(), 1);
        assert!(app.contact.name.is_empty());
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert!(!app.show_help);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn tab_cycles_sections_relative_to_active() {
        let mut app = test_app();
        app.apply_visibility();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.scroll, 30);
    }
}
