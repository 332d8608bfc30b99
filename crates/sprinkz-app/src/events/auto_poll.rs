use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::decode_context::DecodeContext;

use super::trigger_decode::handle_decode_trigger;

/// Decode on a timer while `capture.auto` stays enabled
pub fn start_auto_poll_loop(ctx: &DecodeContext, cancel: CancellationToken) {
    // Don't start again if already running
    if ctx.state.auto_poll_running.swap(true, Ordering::SeqCst) {
        return;
    }

    let ctx = ctx.clone();

    tokio::spawn(async move {
        tracing::info!("[AUTO] Polling started");
        loop {
            let (auto_enabled, interval_ms) = {
                let config = ctx.state.config.read().await;
                (config.capture.auto, config.capture.poll_interval_ms)
            };

            if !auto_enabled || cancel.is_cancelled() {
                break;
            }

            if let Err(e) = handle_decode_trigger(&ctx, true).await {
                tracing::warn!("[AUTO] Stopping, UI channel gone: {}", e);
                cancel.cancel();
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(interval_ms)) => {}
                _ = cancel.cancelled() => break,
            }
        }
        tracing::info!("[AUTO] Polling stopped");
        release_auto_poll(&ctx, cancel).await;
    });
}

/// Clear the running flag, then restart if auto was re-enabled while stopping
pub(crate) async fn release_auto_poll(ctx: &DecodeContext, cancel: CancellationToken) {
    ctx.state.auto_poll_running.store(false, Ordering::SeqCst);

    let auto_enabled = ctx.state.config.read().await.capture.auto;
    if auto_enabled && !cancel.is_cancelled() {
        start_auto_poll_loop(ctx, cancel);
    }
}
