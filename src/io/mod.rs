pub mod content_io;
pub mod prefs;
pub mod watcher;
