//! Config serialization to TOML
//!
//! Single source of truth for the config file template.

use super::Config;
use crate::theme::THEME_NAMES;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# rozbor configuration
#
# Environment variables override these values:
#   ROZBOR_THEME, ROZBOR_HINT_DELAY_MS, ROZBOR_NO_MOUSE=1, ROZBOR_LOG_DIR

# Color theme: {themes}
theme = "{theme}"

# Milliseconds between hint transitions while typing
hint_delay_ms = {hint_delay_ms}

# Show the system logs panel
show_logs = {show_logs}

# Hover and click terms with the mouse
mouse = {mouse}

# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG takes precedence over `level`.

[logging]
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"   # hourly, daily, never
file_prefix = "{file_prefix}"
"#,
            themes = THEME_NAMES.join(", "),
            theme = self.theme,
            hint_delay_ms = self.hint_delay_ms,
            show_logs = self.show_logs,
            mouse = self.mouse,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
