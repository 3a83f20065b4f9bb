//! Centralized path management for the seqls CLI
//!
//! Keeps the data directory, report-log path, and configuration path in one
//! place so every module resolves them the same way.

use std::path::PathBuf;

/// The name of the application directory used across all platforms
const APP_DIR: &str = "seqls";

/// The name of the report log file
const LOG_FILE: &str = "seqls.log";

/// Returns the base data directory for the application
///
/// Uses the platform data directory (`~/.local/share/seqls` on Linux,
/// `%APPDATA%/seqls` on Windows); falls back to `.seqls` in the current
/// directory when the platform directory cannot be determined.
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".seqls"))
}

/// Returns the default path of the report log
pub fn get_log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE)
}

/// Returns the path to the configuration directory
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".seqls"))
}

/// Returns the path to the configuration file
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_contains_app_name() {
        assert!(get_data_dir().to_string_lossy().contains("seqls"));
    }

    #[test]
    fn test_log_path_is_in_data_dir() {
        let log_path = get_log_path();
        assert!(log_path.starts_with(get_data_dir()));
        assert_eq!(
            log_path.file_name().and_then(|n| n.to_str()),
            Some(LOG_FILE)
        );
    }

    #[test]
    fn test_config_path_is_in_config_dir() {
        assert!(get_config_path().starts_with(get_config_dir()));
    }
}
