//! Configuration for the calculator
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/padcalc/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::engine::EngineOptions;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum digits per entry (None = unbounded)
    pub max_input_len: Option<usize>,

    /// Capture the mouse so keypad buttons can be clicked
    pub mouse: bool,

    /// Show the logs panel below the keypad at startup
    pub show_logs: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_len: None,
            mouse: true,
            show_logs: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub max_input_len: Option<usize>,
    pub mouse: Option<bool>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/padcalc/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("padcalc").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
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
    /// A config file that exists but can't be read or parsed is fatal:
    /// the process exits with a message naming the file.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "\n╔══════════════════════════════════════════════════════════════╗"
                    );
                    eprintln!(
                        "║  CONFIG ERROR - Failed to parse configuration file          ║"
                    );
                    eprintln!(
                        "╚══════════════════════════════════════════════════════════════╝\n"
                    );
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `padcalc config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Input cap: env > file > default; 0 means unbounded
        let max_input_len = env("PADCALC_MAX_INPUT")
            .and_then(|v| v.parse().ok())
            .or(file.max_input_len)
            .filter(|&n: &usize| n > 0);

        let mouse = file.mouse.unwrap_or(defaults.mouse);
        let show_logs = file.show_logs.unwrap_or(defaults.show_logs);
        let logging = LoggingConfig::from_file(file.logging, env("PADCALC_LOG_DIR"));

        Self {
            max_input_len,
            mouse,
            show_logs,
            logging,
        }
    }

    /// Engine tunables derived from this config
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            max_input_len: self.max_input_len,
        }
    }
}
