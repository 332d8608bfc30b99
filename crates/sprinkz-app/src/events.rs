use kanal::AsyncReceiver;
use sprinkz_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::decode_context::DecodeContext;

pub mod auto_poll;
pub mod trigger_decode;

use auto_poll::start_auto_poll_loop;
use trigger_decode::handle_decode_trigger;

/// App's main loop
pub async fn event_loop(
    ctx: DecodeContext,
    input_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let auto = {
        let config = ctx.state.config.read().await;
        config.capture.auto
    };
    if auto {
        start_auto_poll_loop(&ctx, cancel.child_token());
    }

    let _ = ctx.event_tx.send(AppEvent::BackendReady).await;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Stopping");
                return Ok(());
            }
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        handle_events(&ctx, &cancel, event).await?;
    }
}

async fn handle_events(
    ctx: &DecodeContext,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TriggerDecode => {
            tracing::debug!(">>> [DECODE] Triggered");
            handle_decode_trigger(ctx, false).await?;
        }
        AppEvent::SetAutoPoll(enabled) => {
            ctx.state.config.write().await.capture.auto = enabled;
            tracing::info!("Auto polling {}", if enabled { "enabled" } else { "disabled" });
            if enabled {
                start_auto_poll_loop(ctx, cancel.child_token());
            }
        }
        AppEvent::SetOverlayVisible(visible) => {
            ctx.state.config.write().await.overlay.visible = visible;
            ctx.event_tx
                .send(AppEvent::SetOverlayVisible(visible))
                .await?;
        }
        AppEvent::ShowReading(_)
        | AppEvent::ReadingLost { .. }
        | AppEvent::DecodeStatusUpdate { .. }
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
