//! Application configuration
//!
//! Configuration loaded from a modcon.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from modcon.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory the module writes its log files into
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,

    /// How many lines of each log file a fetch returns
    #[serde(default = "default_tail_lines")]
    pub tail_lines: usize,

    /// Extra rows materialized above and below the viewport
    #[serde(default = "default_buffer_rows")]
    pub buffer_rows: usize,

    /// Fetch via shell commands (tail/ls) instead of direct file reads,
    /// for privileged module environments
    #[serde(default)]
    pub shell_fetch: bool,
}

fn default_logs_dir() -> String {
    "logs".to_string()
}

fn default_tail_lines() -> usize {
    100
}

fn default_buffer_rows() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            tail_lines: default_tail_lines(),
            buffer_rows: default_buffer_rows(),
            shell_fetch: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logs_dir, "logs");
        assert_eq!(config.tail_lines, 100);
        assert_eq!(config.buffer_rows, 5);
        assert!(!config.shell_fetch);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            logs_dir = "/data/module/logs"
            shell_fetch = true
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.logs_dir, "/data/module/logs");
        assert!(config.shell_fetch);
        // Unset fields keep their defaults
        assert_eq!(config.tail_lines, 100);
        assert_eq!(config.buffer_rows, 5);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            logs_dir: "x".into(),
            tail_lines: 20,
            buffer_rows: 2,
            shell_fetch: true,
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.tail_lines, 20);
        assert_eq!(parsed.buffer_rows, 2);
    }
}
