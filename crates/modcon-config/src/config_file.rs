use std::path::PathBuf;

const CONFIG_FILE: &str = ".modcon.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for configuration in:
/// 1. Current working directory as .modcon.toml
/// 2. The XDG config directory as config.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    // Try current directory first
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    // Try the config directory
    if let Some(config_path) = get_config_dir_path() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            log::debug!("Loaded config from {}", config_path.display());
            return Some(content);
        }
    }

    None
}

/// Get the path to the config file in the config directory
fn get_config_dir_path() -> Option<PathBuf> {
    crate::paths::app_config_path().ok()
}
