use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Content;

/// Filename folio looks for when no --content path is given.
pub const CONTENT_FILE: &str = "portfolio.toml";

/// Starter content, also used when no content file is found on disk.
pub const CONTENT_TEMPLATE: &str = include_str!("../templates/portfolio.toml");

/// Error type for content I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("refusing to overwrite {0} (use --force)")]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Where the loaded content came from. The TUI watches `File` sources
/// for changes; `Embedded` has nothing to watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Embedded,
}

/// Find a content file: the explicit path if given, otherwise
/// `portfolio.toml` in the start directory or any ancestor.
pub fn discover_content(start: &Path, explicit: Option<&Path>) -> Result<ContentSource, ContentError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ContentError::NotFound(path.to_path_buf()));
        }
        return Ok(ContentSource::File(path.to_path_buf()));
    }

    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONTENT_FILE);
        if candidate.is_file() {
            return Ok(ContentSource::File(candidate));
        }
        if !current.pop() {
            return Ok(ContentSource::Embedded);
        }
    }
}

/// Load and parse content from the given source.
pub fn load_content(source: &ContentSource) -> Result<Content, ContentError> {
    match source {
        ContentSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|e| ContentError::ReadError {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&text).map_err(|e| ContentError::ParseError {
                path: path.clone(),
                source: e,
            })
        }
        ContentSource::Embedded => {
            // The template ships with the binary; a parse failure here is a
            // build defect, not a runtime condition.
            toml::from_str(CONTENT_TEMPLATE).map_err(|e| ContentError::ParseError {
                path: PathBuf::from("<embedded>"),
                source: e,
            })
        }
    }
}

/// Write the starter content file for `folio init`.
pub fn init_content(dir: &Path, force: bool) -> Result<PathBuf, ContentError> {
    let path = dir.join(CONTENT_FILE);
    if path.exists() && !force {
        return Err(ContentError::AlreadyExists(path));
    }
    fs::write(&path, CONTENT_TEMPLATE)?;
    Ok(path)
}
