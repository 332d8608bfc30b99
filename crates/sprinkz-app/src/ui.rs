use std::sync::Arc;

use kanal::AsyncReceiver;
use sprinkz_config::Config;
use sprinkz_config::overlay::ScreenBounds;
use sprinkz_types::AppEvent;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::overlay::OverlayState;

/// Presenter loop: keeps the overlay state and prints its text on every change
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    screen: Option<ScreenBounds>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (mut state, hotkey_label) = {
        let mut config = config.write().await;
        if let Some(screen) = screen {
            let (x, y) = config.overlay.resolve_position(screen);
            tracing::info!("Overlay placed at ({}, {})", x, y);
            config.overlay.x = Some(x);
            config.overlay.y = Some(y);
        }
        (
            OverlayState::new(config.overlay.visible),
            config.hotkey.label(),
        )
    };

    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Stopping");
                return Ok(());
            }
        };

        if let AppEvent::DecodeStatusUpdate { status, capturing } = &event {
            tracing::debug!("[UI] Status: {} (capturing: {})", status, capturing);
        }

        if state.apply(&event)
            && let Some(text) = state.text(&hotkey_label)
        {
            println!("{text}\n");
        }
    }
}
