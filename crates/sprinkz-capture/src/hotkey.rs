use std::str::FromStr;

use anyhow::{Context, Result, bail};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use sprinkz_config::hotkey::HotkeyConfig;

/// What a registered hotkey asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Decode,
    ToggleOverlay,
    ToggleAutoPoll,
}

/// Parse a binding such as `F8` or `Ctrl+F9`
pub fn parse_hotkey(binding: &str) -> Result<HotKey> {
    HotKey::from_str(binding).with_context(|| format!("Invalid hotkey '{binding}'"))
}

/// Every configured binding with its action, decode first
pub fn bindings(config: &HotkeyConfig) -> Result<Vec<(HotKey, HotkeyAction)>> {
    let mut bindings = vec![(parse_hotkey(&config.label())?, HotkeyAction::Decode)];

    let toggles = [
        (&config.overlay_key, HotkeyAction::ToggleOverlay),
        (&config.auto_poll_key, HotkeyAction::ToggleAutoPoll),
    ];
    for (binding, action) in toggles {
        let Some(binding) = binding else { continue };
        let hotkey = parse_hotkey(binding)?;
        if bindings.iter().any(|(existing, _)| *existing == hotkey) {
            bail!("Hotkey '{binding}' is bound twice");
        }
        bindings.push((hotkey, action));
    }

    Ok(bindings)
}

/// Owns the registered hotkeys of one thread.
///
/// Must be created and polled on the same thread. On Windows `poll` pumps that
/// thread's messages so `WM_HOTKEY` reaches the hidden hotkey window. macOS
/// additionally requires the main thread, which this manager does not provide.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    bindings: Vec<(HotKey, HotkeyAction)>,
    label: String,
}

impl HotkeyManager {
    pub fn from_config(config: &HotkeyConfig) -> Result<Self> {
        let bindings = bindings(config)?;

        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;
        for (hotkey, action) in &bindings {
            manager
                .register(*hotkey)
                .with_context(|| format!("Failed to register hotkey for {action:?}"))?;
        }

        Ok(Self {
            manager,
            bindings,
            label: config.label(),
        })
    }

    /// Actions pressed since the last poll (non-blocking)
    pub fn poll(&self) -> Vec<HotkeyAction> {
        pump_messages();

        let receiver = GlobalHotKeyEvent::receiver();
        let mut actions = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            if event.state != HotKeyState::Pressed {
                continue;
            }
            match self.bindings.iter().find(|(hotkey, _)| hotkey.id() == event.id) {
                Some((_, action)) => actions.push(*action),
                None => tracing::trace!("Ignoring hotkey event {:?}", event),
            }
        }
        actions
    }

    /// Label of the decode binding
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for (hotkey, _) in &self.bindings {
            let _ = self.manager.unregister(*hotkey);
        }
    }
}

/// Dispatch the calling thread's pending window messages, returns how many ran
#[cfg(windows)]
fn pump_messages() -> usize {
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage,
    };

    let mut msg = MSG::default();
    let mut dispatched = 0;
    // SAFETY: `msg` outlives every call and only this thread's queue is read
    unsafe {
        while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
            dispatched += 1;
        }
    }
    dispatched
}

/// Other platforms deliver hotkey events from their own listener thread
#[cfg(not(windows))]
fn pump_messages() -> usize {
    0
}

#[cfg(test)]
mod tests {
    use global_hotkey::hotkey::{Code, Modifiers};
    use sprinkz_config::hotkey::Modifier;

    use super::*;

    #[test]
    fn test_parse_default_binding() {
        let hotkey = parse_hotkey(&HotkeyConfig::default().label()).unwrap();
        assert_eq!(hotkey, HotKey::new(None, Code::F8));
    }

    #[test]
    fn test_parse_modifier_binding() {
        let config = HotkeyConfig {
            modifier: Modifier::Ctrl,
            key: "F9".to_string(),
            ..Default::default()
        };
        let hotkey = parse_hotkey(&config.label()).unwrap();
        assert_eq!(hotkey, HotKey::new(Some(Modifiers::CONTROL), Code::F9));
    }

    #[test]
    fn test_parse_invalid_binding() {
        assert!(parse_hotkey("NotAKey").is_err());
    }

    #[test]
    fn test_default_bindings_decode_only() {
        let bindings = bindings(&HotkeyConfig::default()).unwrap();
        assert_eq!(bindings, vec![(HotKey::new(None, Code::F8), HotkeyAction::Decode)]);
    }

    #[test]
    fn test_toggle_bindings() {
        let config = HotkeyConfig {
            overlay_key: Some("Ctrl+F7".to_string()),
            auto_poll_key: Some("F6".to_string()),
            ..Default::default()
        };
        assert_eq!(
            bindings(&config).unwrap(),
            vec![
                (HotKey::new(None, Code::F8), HotkeyAction::Decode),
                (
                    HotKey::new(Some(Modifiers::CONTROL), Code::F7),
                    HotkeyAction::ToggleOverlay
                ),
                (HotKey::new(None, Code::F6), HotkeyAction::ToggleAutoPoll),
            ]
        );
    }

    #[test]
    fn test_invalid_or_duplicate_toggle_rejected() {
        let invalid = HotkeyConfig {
            overlay_key: Some("Hyper+Nope".to_string()),
            ..Default::default()
        };
        assert!(bindings(&invalid).is_err());

        let duplicate = HotkeyConfig {
            auto_poll_key: Some("F8".to_string()),
            ..Default::default()
        };
        assert!(bindings(&duplicate).is_err());
    }

    #[test]
    fn test_pump_messages_idle_thread() {
        let dispatched = std::thread::spawn(pump_messages).join().unwrap();
        assert_eq!(dispatched, 0);
    }
}
