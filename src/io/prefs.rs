use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Persisted preferences (written to .folio.json next to the content
/// file). The theme is the only preference folio keeps across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct Prefs {
    #[serde(default)]
    theme: Option<String>,
}

const PREFS_FILE: &str = ".folio.json";

/// Read the persisted theme value, if any. Absent files, unreadable
/// files, and malformed JSON all come back as `None`; the caller falls
/// through its resolution chain instead of seeing an error.
pub fn read_theme(dir: &Path) -> Option<String> {
    let text = fs::read_to_string(dir.join(PREFS_FILE)).ok()?;
    let prefs: Prefs = serde_json::from_str(&text).ok()?;
    prefs.theme
}

/// Persist the theme value, best-effort. Returns whether the write
/// landed; failure is not an error anywhere upstream, the in-memory
/// preference stays authoritative for the session.
pub fn write_theme(dir: &Path, theme: &str) -> bool {
    let prefs = Prefs {
        theme: Some(theme.to_string()),
    };
    let Ok(content) = serde_json::to_string_pretty(&prefs) else {
        return false;
    };
    atomic_write(&dir.join(PREFS_FILE), content.as_bytes()).is_ok()
}

/// Write via a temp file in the same directory, then rename into place.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        assert!(write_theme(dir.path(), "dark"));
        assert_eq!(read_theme(dir.path()), Some("dark".to_string()));

        assert!(write_theme(dir.path(), "light"));
        assert_eq!(read_theme(dir.path()), Some("light".to_string()));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_theme(dir.path()), None);
    }

    #[test]
    fn malformed_json_reads_as_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFS_FILE), "not json {{{").unwrap();
        assert_eq!(read_theme(dir.path()), None);
    }

    #[test]
    fn write_to_unwritable_dir_reports_false() {
        let missing = Path::new("/definitely/not/a/dir");
        assert!(!write_theme(missing, "dark"));
    }
}
