//! Log source trait and error definitions

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur at the source boundary
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("log source {0:?} not found")]
    NotFound(String),

    #[error("failed to read log source: {0}")]
    Io(#[from] std::io::Error),

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("log source is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Provider of raw log text for the console.
///
/// Source names are bare file names as returned by [`list_sources`]; the
/// implementation decides what they resolve to. Implementations must be
/// `Send + Sync` so fetches can run on background tasks.
///
/// [`list_sources`]: LogSource::list_sources
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Discover the log files this module exposes.
    ///
    /// Returns bare file names; an empty list is a valid answer for a module
    /// that has not logged yet.
    async fn list_sources(&self) -> Result<Vec<String>, SourceError>;

    /// Fetch the tail of one log file as raw text.
    ///
    /// `Ok("")` means the log exists and is empty — failure to read it is
    /// always an `Err`, never an empty blob.
    async fn fetch(&self, name: &str) -> Result<String, SourceError>;

    /// Truncate one log file to zero length.
    async fn clear(&self, name: &str) -> Result<(), SourceError>;
}

/// Keep the last `max_lines` lines of a text blob.
///
/// Shared by implementations that read whole files instead of shelling out
/// to `tail`.
pub(crate) fn tail(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

/// Source names come from `list_sources` and are plain file names; anything
/// with a path separator cannot name a source.
pub(crate) fn validate_name(name: &str) -> Result<(), SourceError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(SourceError::NotFound(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_last_lines() {
        assert_eq!(tail("a\nb\nc\nd", 2), "c\nd");
        assert_eq!(tail("a\nb", 10), "a\nb");
        assert_eq!(tail("", 10), "");
    }

    #[test]
    fn test_validate_name_rejects_paths() {
        assert!(validate_name("module.log").is_ok());
        assert!(validate_name("../etc/passwd").is_err());
        assert!(validate_name("a/b.log").is_err());
        assert!(validate_name("").is_err());
    }
}
