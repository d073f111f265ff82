//! Directory-backed log source
//!
//! Reads `*.log`/`*.txt` files straight out of the module's logs directory.
//! The default implementation for environments where the console runs with
//! enough privilege to read the files directly.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::source::{tail, validate_name, LogSource, SourceError};

/// Log source over a single directory of log files.
pub struct DirLogSource {
    dir: PathBuf,
    tail_lines: usize,
}

impl DirLogSource {
    /// `tail_lines` bounds how much of each file a fetch returns.
    pub fn new(dir: impl Into<PathBuf>, tail_lines: usize) -> Self {
        Self {
            dir: dir.into(),
            tail_lines,
        }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, SourceError> {
        validate_name(name)?;
        Ok(self.dir.join(name))
    }
}

fn is_log_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "log" || ext == "txt")
}

#[async_trait]
impl LogSource for DirLogSource {
    async fn list_sources(&self) -> Result<Vec<String>, SourceError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().await?.is_file() && is_log_file(&name) {
                names.push(name);
            }
        }

        names.sort();
        log::debug!("discovered {} log files in {}", names.len(), self.dir.display());
        Ok(names)
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let path = self.resolve(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let text = String::from_utf8(bytes)?;
        Ok(tail(&text, self.tail_lines))
    }

    async fn clear(&self, name: &str) -> Result<(), SourceError> {
        let path = self.resolve(name)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(SourceError::NotFound(name.to_string()));
        }
        tokio::fs::write(&path, b"").await?;
        log::info!("cleared log file {}", path.display());
        Ok(())
    }
}
