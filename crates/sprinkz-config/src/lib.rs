use std::env;

use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::hotkey::HotkeyConfig;
use self::overlay::OverlayConfig;

pub mod capture;
pub mod hotkey;
pub mod overlay;

fn default_delta_time() -> u64 {
    100
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub hotkey: HotkeyConfig,
    pub overlay: OverlayConfig,
    pub capture: CaptureConfig,

    /// App main loop delta time
    #[serde(default = "default_delta_time")]
    pub delta_time: u64,
    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Emit log lines as JSON objects
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: HotkeyConfig::default(),
            overlay: OverlayConfig::default(),
            capture: CaptureConfig::default(),
            delta_time: default_delta_time(),
            log_filter: default_log_filter(),
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `DELTA_TIME_MS`, `SPRINKZ_TARGET_WINDOW`, `SPRINKZ_AUTO_POLL`
    /// and `SPRINKZ_LOG_JSON`
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(delta_time) = lookup("DELTA_TIME_MS").and_then(|v| v.parse().ok()) {
            self.delta_time = delta_time;
        }

        if let Some(title) = lookup("SPRINKZ_TARGET_WINDOW")
            && !title.trim().is_empty()
        {
            self.capture.window_titles = vec![title];
        }

        if let Some(auto) = lookup("SPRINKZ_AUTO_POLL").and_then(|v| parse_flag(&v)) {
            self.capture.auto = auto;
        }

        if let Some(json) = lookup("SPRINKZ_LOG_JSON").and_then(|v| parse_flag(&v)) {
            self.log_json = json;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
