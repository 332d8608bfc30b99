use serde::{Deserialize, Serialize};

fn default_window_titles() -> Vec<String> {
    vec!["Minecraft".to_string()]
}

fn default_auto() -> bool {
    false
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Case-insensitive title fragments, first matching window wins
    #[serde(default = "default_window_titles")]
    pub window_titles: Vec<String>,
    /// Decode on a timer instead of waiting for the hotkey
    #[serde(default = "default_auto")]
    pub auto: bool,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            window_titles: default_window_titles(),
            auto: default_auto(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl CaptureConfig {
    pub fn matches_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.window_titles
            .iter()
            .any(|pattern| !pattern.is_empty() && title.contains(&pattern.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_title_case_insensitive() {
        let config = CaptureConfig::default();
        assert!(config.matches_title("Minecraft 1.21.4 - Singleplayer"));
        assert!(config.matches_title("MINECRAFT"));
        assert!(!config.matches_title("Terminal"));
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let config = CaptureConfig {
            window_titles: vec![String::new()],
            ..Default::default()
        };
        assert!(!config.matches_title("anything"));
    }
}
