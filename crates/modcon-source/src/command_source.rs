//! Shell-command log source
//!
//! For privileged module environments where log files are only reachable
//! through the module's own toolbox (`ls`, `tail`, shell truncation) rather
//! than direct reads — the console stays a thin client and lets the shell do
//! the file access.

use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::source::{validate_name, LogSource, SourceError};

/// Log source that shells out for every operation.
pub struct CommandLogSource {
    logs_dir: PathBuf,
    tail_lines: usize,
}

impl CommandLogSource {
    pub fn new(logs_dir: impl Into<PathBuf>, tail_lines: usize) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            tail_lines,
        }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, SourceError> {
        validate_name(name)?;
        Ok(self.logs_dir.join(name))
    }
}

async fn run(command: &mut Command, label: &str) -> Result<Output, SourceError> {
    let output = command.output().await?;
    if !output.status.success() {
        return Err(SourceError::CommandFailed {
            command: label.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

#[async_trait]
impl LogSource for CommandLogSource {
    async fn list_sources(&self) -> Result<Vec<String>, SourceError> {
        let output = run(
            Command::new("ls").arg("-1").arg(&self.logs_dir),
            "ls",
        )
        .await?;

        let listing = String::from_utf8(output.stdout)?;
        let mut names: Vec<String> = listing
            .lines()
            .map(str::trim)
            .filter(|name| name.ends_with(".log") || name.ends_with(".txt"))
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let path = self.resolve(name)?;
        let output = run(
            Command::new("tail")
                .arg("-n")
                .arg(self.tail_lines.to_string())
                .arg(&path),
            "tail",
        )
        .await?;

        Ok(String::from_utf8(output.stdout)?)
    }

    async fn clear(&self, name: &str) -> Result<(), SourceError> {
        let path = self.resolve(name)?;
        // `sh -c ': > "$1"'` truncates without rm/recreate, keeping the
        // file's owner and mode — module daemons keep their handle open.
        run(
            Command::new("sh")
                .arg("-c")
                .arg(": > \"$1\"")
                .arg("sh")
                .arg(&path),
            "truncate",
        )
        .await?;
        log::info!("cleared log file {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("modcon-command-source-tests")
            .join(format!("{}-{}", test, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_fetch_tails_via_shell() {
        let dir = scratch_dir("tail");
        let content: String = (0..20).map(|i| format!("row {i}\n")).collect();
        std::fs::write(dir.join("svc.log"), content).unwrap();

        let source = CommandLogSource::new(&dir, 2);
        let text = source.fetch("svc.log").await.unwrap();
        assert_eq!(text, "row 18\nrow 19\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_surfaces_command_failure() {
        let dir = scratch_dir("missing");
        let source = CommandLogSource::new(&dir, 10);
        let err = source.fetch("gone.log").await.unwrap_err();
        assert!(matches!(err, SourceError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_clear_truncates_in_place() {
        let dir = scratch_dir("clear");
        std::fs::write(dir.join("svc.log"), "data\n").unwrap();

        let source = CommandLogSource::new(&dir, 10);
        source.clear("svc.log").await.unwrap();
        assert_eq!(std::fs::read_to_string(dir.join("svc.log")).unwrap(), "");
    }

    #[tokio::test]
    async fn test_list_filters_extensions() {
        let dir = scratch_dir("list");
        std::fs::write(dir.join("a.log"), "").unwrap();
        std::fs::write(dir.join("b.txt"), "").unwrap();
        std::fs::write(dir.join("c.conf"), "").unwrap();

        let source = CommandLogSource::new(&dir, 10);
        assert_eq!(source.list_sources().await.unwrap(), ["a.log", "b.txt"]);
    }
}
