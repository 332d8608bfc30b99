use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use sprinkz_capture::{HotkeyAction, HotkeyManager};
use sprinkz_config::Config;
use sprinkz_config::hotkey::HotkeyConfig;
use sprinkz_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Reset unparsable bindings to the defaults, returns whether a reset happened
fn usable_hotkeys(hotkey: &mut HotkeyConfig) -> bool {
    match sprinkz_capture::bindings(hotkey) {
        Ok(_) => false,
        Err(e) => {
            tracing::warn!("{:#}, falling back to default hotkeys", e);
            hotkey.reset();
            true
        }
    }
}

/// Event for a pressed hotkey, toggles flip the current config value
fn action_event(action: HotkeyAction, config: &Config) -> AppEvent {
    match action {
        HotkeyAction::Decode => AppEvent::TriggerDecode,
        HotkeyAction::ToggleOverlay => AppEvent::SetOverlayVisible(!config.overlay.visible),
        HotkeyAction::ToggleAutoPoll => AppEvent::SetAutoPoll(!config.capture.auto),
    }
}

/// Watch the global hotkeys and forward presses to the event loop
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    input_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (hotkey_config, delta_time) = {
        let mut config = state.config.write().await;
        if usable_hotkeys(&mut config.hotkey) {
            tracing::info!("Hotkeys reset to {}", config.hotkey.label());
        }
        (config.hotkey.clone(), Duration::from_millis(config.delta_time))
    };

    let cancel_clone = cancel.clone();
    let listener = tokio::task::spawn_blocking(move || {
        // registered and polled on this thread only
        let hotkey_manager = match HotkeyManager::from_config(&hotkey_config) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::error!("Failed to create hotkey manager: {:#}", e);
                return;
            }
        };

        tracing::info!("Hotkey registered ({})", hotkey_manager.label());

        while !cancel_clone.is_cancelled() {
            for action in hotkey_manager.poll() {
                tracing::debug!("Hotkey pressed: {:?}", action);
                let event = action_event(action, &state.config.blocking_read());
                match input_tx.try_send(event) {
                    Ok(true) => {}
                    // app is still busy with earlier presses
                    Ok(false) => tracing::debug!("Hotkey {:?} dropped, queue full", action),
                    Err(e) => {
                        tracing::error!("Failed to send hotkey event to app: {}", e);
                        return;
                    }
                }
            }

            std::thread::sleep(delta_time);
        }

        tracing::info!("Hotkey listener stopping");
    });

    cancel.cancelled().await;
    if let Err(e) = listener.await {
        tracing::error!("Hotkey listener panicked: {}", e);
    }

    Ok(())
}
