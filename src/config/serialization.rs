//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let max_input = match self.max_input_len {
            Some(n) => format!("max_input_len = {}", n),
            None => "# max_input_len = 16".to_string(),
        };

        format!(
            r#"# padcalc configuration

# Maximum digits per entry. Unset (or 0) means unbounded.
{max_input}

# Capture the mouse so keypad buttons can be clicked
mouse = {mouse}

# Show the logs panel below the keypad at startup (toggle with 'L')
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            max_input = max_input,
            mouse = self.mouse,
            show_logs = self.show_logs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
