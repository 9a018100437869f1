use serde::{Deserialize, Serialize};

use crate::host::Theme;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host program the widget is embedded into.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Executable to spawn (e.g., "python3").
    #[serde(default)]
    pub command: String,
    /// Arguments passed to the host (e.g., ["host.py"]).
    #[serde(default)]
    pub args: Vec<String>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used until the host sends one (default: light).
    #[serde(default)]
    pub theme: Theme,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Width used to measure frame height when no terminal is attached
    /// (default: 80).
    #[serde(default = "default_headless_width")]
    pub headless_width: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to
    /// `<data dir>/refiner-widget/widget.log`.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_headless_width() -> u16 {
    80
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            tick_rate_ms: default_tick_rate_ms(),
            headless_width: default_headless_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
