use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::content_io::{ContentSource, discover_content, load_content};
use crate::io::prefs;
use crate::io::watcher::ContentWatcher;
use crate::model::{Content, Section};
use crate::ops::filter::{ALL_TAG, tag_universe};
use crate::ops::toast::ToastQueue;
use crate::ops::visibility::{RegionSpan, SectionObserver, SectionTracker, Viewport};

use super::input;
use super::render;
use super::theme::{Theme, ThemeMode, resolve_theme, terminal_dark_signal};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Contact,
}

/// Search/filter state for the projects section.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: String,
    /// Selected tag, or None for the "All" sentinel.
    pub tag: Option<String>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.tag.is_some()
    }

    /// The tag value the filter engine sees.
    pub fn tag_value(&self) -> &str {
        self.tag.as_deref().unwrap_or(ALL_TAG)
    }

    /// "Clear filters": back to defaults in one action.
    pub fn clear_all(&mut self) {
        self.query.clear();
        self.tag = None;
    }
}

/// Contact form fields. UI-only: submission never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Focused field index (0 = name, 1 = email, 2 = message).
    pub focus: usize,
}

impl ContactForm {
    pub const FIELDS: [&'static str; 3] = ["Name", "Email", "Message"];

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.message,
        }
    }

    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            _ => &self.message,
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = 0;
    }
}

/// Main application state
pub struct App {
    pub content: Content,
    pub source: ContentSource,
    /// Directory holding .folio.json (theme persistence).
    pub state_dir: PathBuf,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub filter: FilterState,
    pub toasts: ToastQueue,
    pub contact: ContactForm,
    pub show_help: bool,
    /// First visible page row.
    pub scroll: usize,
    /// Total rows of the rendered page (set each frame).
    pub page_rows: usize,
    /// Rows of the content area (set each frame).
    pub viewport_rows: usize,
    /// Section row spans from the last page build.
    spans: Vec<RegionSpan>,
    observer: SectionObserver,
    tracker: SectionTracker,
}

impl App {
    pub fn new(content: Content, source: ContentSource, theme_mode: ThemeMode) -> Self {
        let state_dir = state_dir_for(&source);
        App {
            content,
            source,
            state_dir,
            mode: Mode::Navigate,
            should_quit: false,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            filter: FilterState::default(),
            toasts: ToastQueue::new(),
            contact: ContactForm::default(),
            show_help: false,
            scroll: 0,
            page_rows: 0,
            viewport_rows: 0,
            spans: Vec::new(),
            observer: SectionObserver::default(),
            tracker: SectionTracker::new(Section::About),
        }
    }

    /// The section the nav bar highlights.
    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    /// Store the spans produced by the page builder, re-attaching
    /// observations when the region set changed (resize, reload).
    pub fn set_spans(&mut self, spans: Vec<RegionSpan>) {
        if spans != self.spans {
            self.observer.detach();
            self.observer = SectionObserver::attach(&spans);
            self.spans = spans;
        }
    }

    pub fn span_of(&self, section: Section) -> Option<&RegionSpan> {
        self.spans.iter().find(|s| s.section == section)
    }

    /// Feed the current viewport to the observer and reduce the batch.
    /// Called after every draw.
    pub fn apply_visibility(&mut self) {
        if self.viewport_rows == 0 {
            return;
        }
        let viewport = Viewport {
            top: self.scroll,
            height: self.viewport_rows,
        };
        let batch = self.observer.observe(&self.spans, &viewport);
        self.tracker.apply_batch(&batch);
    }

    pub fn max_scroll(&self) -> usize {
        self.page_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Jump so the section's first row sits at the top of the viewport.
    pub fn jump_to_section(&mut self, section: Section) {
        if let Some(span) = self.span_of(section) {
            self.scroll = span.start.min(self.max_scroll());
        }
    }

    /// Distinct tags across all projects, "All" first.
    pub fn tags(&self) -> Vec<String> {
        tag_universe(&self.content.projects)
    }

    /// Cycle the selected tag forward or backward through the universe.
    pub fn cycle_tag(&mut self, forward: bool) {
        let tags = self.tags();
        if tags.len() <= 1 {
            return;
        }
        let current = tags
            .iter()
            .position(|t| t == self.filter.tag_value())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % tags.len()
        } else {
            (current + tags.len() - 1) % tags.len()
        };
        self.filter.tag = if tags[next] == ALL_TAG {
            None
        } else {
            Some(tags[next].clone())
        };
    }

    /// Flip the theme, repaint, and attempt persistence.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme_mode.toggle());
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = Theme::for_mode(mode);
        // Best-effort: a failed write leaves the session value in charge.
        let _ = prefs::write_theme(&self.state_dir, mode.as_str());
    }

    /// Contact submission: no network, just feedback and a reset.
    pub fn submit_contact(&mut self) {
        self.toasts.push(
            "Message queued",
            "Thanks! This form is UI-only by default. Wire it to an API when you're ready.",
            None,
        );
        self.contact.reset();
        self.mode = Mode::Navigate;
    }

    /// Regex for highlighting query matches in project cards.
    /// Case-insensitive match of the literal query text.
    pub fn query_highlight_re(&self) -> Option<Regex> {
        let q = self.filter.query.trim();
        if q.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(q))).ok()
    }

    /// Replace the content after a watcher reload, keeping view state sane.
    pub fn reload_content(&mut self, content: Content) {
        self.content = content;
        // Selected tag may no longer exist in the new collection.
        if let Some(tag) = &self.filter.tag {
            if !self.tags().iter().any(|t| t == tag) {
                self.filter.tag = None;
            }
        }
        self.toasts.push("Content reloaded", "portfolio.toml changed on disk.", None);
    }
}

/// Theme persistence lives next to the content file; the embedded
/// fallback persists relative to the working directory.
fn state_dir_for(source: &ContentSource) -> PathBuf {
    match source {
        ContentSource::File(path) => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        ContentSource::Embedded => PathBuf::from("."),
    }
}

/// Run the TUI application
pub fn run(content_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let source = discover_content(&cwd, content_path)?;
    let content = load_content(&source)?;

    // Theme resolution: persisted value, then terminal signal, then light.
    let state_dir = state_dir_for(&source);
    let stored = prefs::read_theme(&state_dir);
    let terminal_dark = terminal_dark_signal(std::env::var("COLORFGBG").ok().as_deref());
    let theme_mode = resolve_theme(stored.as_deref(), terminal_dark);

    let mut app = App::new(content, source.clone(), theme_mode);

    // Watch the content file for live reload; embedded content has no file.
    let watcher = match &source {
        ContentSource::File(path) => ContentWatcher::start(path).ok(),
        ContentSource::Embedded => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(app.content.meta.site_title.clone())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&ContentWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;
        app.apply_visibility();

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Tick work: expire toasts, pick up content edits.
        app.toasts.sweep(Instant::now());
        if let Some(w) = watcher
            && w.poll()
            && let Ok(content) = load_content(&app.source)
        {
            app.reload_content(content);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::content_io::{ContentSource, load_content};

    fn test_app() -> App {
        let content = load_content(&ContentSource::Embedded).unwrap();
        App::new(content, ContentSource::Embedded, ThemeMode::Light)
    }

    fn spans() -> Vec<RegionSpan> {
        vec![
            RegionSpan { section: Section::About, start: 0, end: 30 },
            RegionSpan { section: Section::Skills, start: 30, end: 60 },
            RegionSpan { section: Section::Projects, start: 60, end: 140 },
            RegionSpan { section: Section::Contact, start: 140, end: 170 },
        ]
    }

    #[test]
    fn scrolling_updates_active_section() {
        let mut app = test_app();
        app.set_spans(spans());
        app.page_rows = 170;
        app.viewport_rows = 24;

        app.apply_visibility();
        assert_eq!(app.active_section(), Section::About);

        app.scroll = 60;
        app.apply_visibility();
        assert_eq!(app.active_section(), Section::Projects);
    }

    #[test]
    fn active_section_sticks_when_nothing_intersects() {
        let mut app = test_app();
        app.set_spans(vec![RegionSpan {
            section: Section::About,
            start: 0,
            end: 10,
        }]);
        app.page_rows = 200;
        app.viewport_rows = 24;
        app.apply_visibility();
        assert_eq!(app.active_section(), Section::About);

        // Scroll far past every region: previous value is retained.
        app.scroll = 150;
        app.apply_visibility();
        assert_eq!(app.active_section(), Section::About);
    }

    #[test]
    fn jump_to_section_clamps_to_max_scroll() {
        let mut app = test_app();
        app.set_spans(spans());
        app.page_rows = 170;
        app.viewport_rows = 100;
        app.jump_to_section(Section::Contact);
        assert_eq!(app.scroll, 70); // 170 - 100
    }

    #[test]
    fn cycle_tag_walks_the_universe_and_wraps() {
        let mut app = test_app();
        assert_eq!(app.filter.tag, None);

        app.cycle_tag(true);
        assert!(app.filter.tag.is_some());

        // Backward from the first real tag returns to "All".
        app.cycle_tag(false);
        assert_eq!(app.filter.tag, None);

        // A full forward cycle comes back around to "All".
        let len = app.tags().len();
        for _ in 0..len {
            app.cycle_tag(true);
        }
        assert_eq!(app.filter.tag, None);
    }

    #[test]
    fn reload_drops_vanished_tag_selection() {
        let mut app = test_app();
        app.filter.tag = Some("WebSockets".into());

        let mut next = app.content.clone();
        next.projects.retain(|p| !p.tags.iter().any(|t| t == "WebSockets"));
        app.reload_content(next);

        assert_eq!(app.filter.tag, None);
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn reload_keeps_theme_and_active_section() {
        let mut app = test_app();
        app.set_spans(spans());
        app.page_rows = 170;
        app.viewport_rows = 24;
        app.scroll = 60;
        app.apply_visibility();
        app.theme_mode = ThemeMode::Dark;

        app.reload_content(app.content.clone());

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.active_section(), Section::Projects);
    }

    #[test]
    fn submit_contact_toasts_and_resets() {
        let mut app = test_app();
        app.mode = Mode::Contact;
        app.contact.name = "Sam".into();
        app.contact.message = "Hi".into();

        app.submit_contact();

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.iter().next().unwrap().title, "Message queued");
        assert!(app.contact.name.is_empty());
        assert!(app.contact.message.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn query_highlight_escapes_regex_metacharacters() {
        let mut app = test_app();
        app.filter.query = "c++ (async)".into();
        let re = app.query_highlight_re().unwrap();
        assert!(re.is_match("C++ (Async) runtime"));
    }
}
