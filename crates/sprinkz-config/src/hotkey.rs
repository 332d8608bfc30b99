use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    None,
    Ctrl,
    Alt,
    Shift,
}

impl Modifier {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Modifier::None => None,
            Modifier::Ctrl => Some("Ctrl"),
            Modifier::Alt => Some("Alt"),
            Modifier::Shift => Some("Shift"),
        }
    }
}

fn default_key() -> String {
    "F8".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default)]
    pub modifier: Modifier,
    /// Key name as understood by the hotkey parser ("F8", "KeyR", "Space", ...)
    #[serde(default = "default_key")]
    pub key: String,
    /// Full binding (`Ctrl+F7`) that shows or hides the overlay
    pub overlay_key: Option<String>,
    /// Full binding that switches auto polling on and off
    pub auto_poll_key: Option<String>,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            modifier: Modifier::default(),
            key: default_key(),
            overlay_key: None,
            auto_poll_key: None,
        }
    }
}

impl HotkeyConfig {
    /// Human readable binding, e.g. `Ctrl+F8`; also valid hotkey parser input
    pub fn label(&self) -> String {
        match self.modifier.label() {
            Some(modifier) => format!("{modifier}+{}", self.key),
            None => self.key.clone(),
        }
    }

    /// Back to plain F8 without toggle bindings
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
