use sprinkz_core::DecodeResult;
use sprinkz_types::AppEvent;

use crate::decode_context::DecodeContext;

/// Run one capture and decode cycle and report the outcome to the UI
pub async fn handle_decode_trigger(ctx: &DecodeContext, auto: bool) -> anyhow::Result<()> {
    let capture_config = {
        let config = ctx.state.config.read().await;
        config.capture.clone()
    };

    ctx.state.status.decode.write().await.begin();
    if !auto {
        let _ = ctx
            .event_tx
            .send(AppEvent::DecodeStatusUpdate {
                status: "Capturing".to_string(),
                capturing: true,
            })
            .await;
    }

    let source = ctx.source.clone();
    let result = tokio::task::spawn_blocking(move || {
        let frame = source.capture(&capture_config)?;
        tracing::debug!(
            ">>> [DECODE] Captured {}x{} frame",
            frame.width(),
            frame.height()
        );
        Ok::<_, anyhow::Error>(sprinkz_core::decode(&frame.view()))
    })
    .await;

    let (event, status) = match result {
        Ok(Ok(DecodeResult::Found(position))) => {
            let reading = sprinkz_core::reading_for(position);
            tracing::info!(
                "[DECODE] Player {} -> 4x4 {} ({} blocks)",
                reading.position,
                reading.anchor,
                reading.distance_blocks()
            );
            ctx.state.status.decode.write().await.record_reading(reading);
            (AppEvent::ShowReading(reading), "Ready".to_string())
        }
        Ok(Ok(DecodeResult::NotFound)) => {
            tracing::debug!(">>> [DECODE] No coordinates in frame");
            ctx.state.status.decode.write().await.record_miss();
            let reason = "No coordinates found".to_string();
            (
                AppEvent::ReadingLost {
                    reason: reason.clone(),
                },
                reason,
            )
        }
        Ok(Err(e)) => {
            tracing::warn!(">>> [DECODE] No frame: {:#}", e);
            let reason = format!("Capture failed: {e}");
            ctx.state
                .status
                .decode
                .write()
                .await
                .record_error(reason.clone());
            (
                AppEvent::ReadingLost {
                    reason: reason.clone(),
                },
                reason,
            )
        }
        Err(e) => {
            tracing::error!(">>> [DECODE] Task error: {}", e);
            ctx.state
                .status
                .decode
                .write()
                .await
                .record_error("Error".to_string());
            (
                AppEvent::ReadingLost {
                    reason: "Error".to_string(),
                },
                "Error".to_string(),
            )
        }
    };

    ctx.event_tx.send(event).await?;
    let _ = ctx
        .event_tx
        .send(AppEvent::DecodeStatusUpdate {
            status,
            capturing: false,
        })
        .await;

    Ok(())
}
