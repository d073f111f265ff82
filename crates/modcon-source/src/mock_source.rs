//! Mock log source
//!
//! Canned per-file fixtures for demo mode and tests, standing in for a real
//! module when the console runs outside the privileged environment. Entries
//! are timestamped relative to construction time so relative labels look
//! alive.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Local};

use crate::source::{LogSource, SourceError};

/// In-memory log source with fixture content.
pub struct MockLogSource {
    files: Mutex<BTreeMap<String, String>>,
}

/// (level, minutes ago, message) fixture rows per file.
const FIXTURES: [(&str, &[(&str, i64, &str)]); 4] = [
    (
        "module.log",
        &[
            ("INFO", 5, "module initialized"),
            ("INFO", 4, "watching module state"),
            ("WARN", 3, "config file changed on disk"),
            ("INFO", 2, "state update: running"),
            ("INFO", 1, "module healthy"),
        ],
    ),
    (
        "system.log",
        &[
            ("INFO", 10, "system boot complete"),
            ("INFO", 8, "admin console service started"),
            ("WARN", 6, "memory usage high: 78%"),
            ("INFO", 4, "network link ok"),
            ("INFO", 2, "system stable"),
        ],
    ),
    (
        "error.log",
        &[
            ("ERROR", 15, "failed to read config: /data/module/config.toml"),
            ("ERROR", 12, "network request timed out"),
            ("WARN", 9, "disk space low"),
            ("ERROR", 6, "module start failed, retrying"),
            ("INFO", 3, "recovered, module running"),
        ],
    ),
    (
        "debug.log",
        &[
            ("DEBUG", 7, "inspecting state variables"),
            ("DEBUG", 5, "call trace captured"),
            ("DEBUG", 3, "collected performance counters"),
            ("DEBUG", 1, "heap usage snapshot"),
        ],
    ),
];

impl MockLogSource {
    pub fn new() -> Self {
        let now = Local::now();
        let files = FIXTURES
            .iter()
            .map(|(name, entries)| {
                let body: Vec<String> = entries
                    .iter()
                    .map(|(level, minutes_ago, message)| {
                        format!(
                            "{} [{}] {}",
                            (now - Duration::minutes(*minutes_ago)).format("%Y-%m-%d %H:%M:%S"),
                            level,
                            message
                        )
                    })
                    .collect();
                (name.to_string(), body.join("\n"))
            })
            .collect();

        Self {
            files: Mutex::new(files),
        }
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn list_sources(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.files.lock().unwrap().keys().cloned().collect())
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        self.files
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }

    async fn clear(&self, name: &str) -> Result<(), SourceError> {
        let mut files = self.files.lock().unwrap();
        match files.get_mut(name) {
            Some(body) => {
                body.clear();
                Ok(())
            }
            None => Err(SourceError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_all_fixture_files() {
        let source = MockLogSource::new();
        let names = source.list_sources().await.unwrap();
        assert_eq!(names, ["debug.log", "error.log", "module.log", "system.log"]);
    }

    #[tokio::test]
    async fn test_fetch_returns_timestamped_lines() {
        let source = MockLogSource::new();
        let text = source.fetch("error.log").await.unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("[ERROR] network request timed out"));
    }

    #[tokio::test]
    async fn test_clear_then_fetch_is_empty() {
        let source = MockLogSource::new();
        source.clear("module.log").await.unwrap();
        assert_eq!(source.fetch("module.log").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_unknown_file_is_not_found() {
        let source = MockLogSource::new();
        assert!(matches!(
            source.fetch("nope.log").await,
            Err(SourceError::NotFound(_))
        ));
    }
}
