//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/rozbor/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default delay between hint transitions
const DEFAULT_HINT_DELAY_MS: u64 = 1500;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Delay between hint transitions (the "start typing" fade-out and the
    /// "press enter" fade-in)
    pub hint_delay_ms: u64,

    /// Show the system logs panel under the sentence
    pub show_logs: bool,

    /// Capture mouse events (hover/click on terms)
    pub mouse: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            hint_delay_ms: DEFAULT_HINT_DELAY_MS,
            show_logs: true,
            mouse: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn hint_delay(&self) -> Duration {
        Duration::from_millis(self.hint_delay_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub hint_delay_ms: Option<u64>,
    pub show_logs: Option<bool>,
    pub mouse: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/rozbor/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("rozbor").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed is fatal: a broken
    /// config should fail fast with a clear error, not silently fall back
    /// to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n  CONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `rozbor config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n  CONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_file_and_env(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_file_and_env(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("ROZBOR_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Hint delay: env > file > default
        let hint_delay_ms = env("ROZBOR_HINT_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .or(file.hint_delay_ms)
            .unwrap_or(defaults.hint_delay_ms);

        let show_logs = file.show_logs.unwrap_or(defaults.show_logs);

        // Mouse capture: env kill switch > file > default
        let mouse = match env("ROZBOR_NO_MOUSE") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => false,
            _ => file.mouse.unwrap_or(defaults.mouse),
        };

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(dir) = env("ROZBOR_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Self {
            theme,
            hint_delay_ms,
            show_logs,
            mouse,
            logging,
        }
    }
}
