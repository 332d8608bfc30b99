use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sprinkz_config::overlay::ScreenBounds;
use tokio::signal;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod decode_context;
pub mod events;
pub mod io;
pub mod overlay;
pub mod profile;
pub mod source;
pub mod state;
pub mod status;
pub mod ui;


use self::controller::AppController;
use self::source::WindowCapture;
use self::state::AppState;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config_path = profile::config_path();
    let config = profile::load_config(&config_path)?;
    init_tracing(&config.log_filter, config.log_json);
    tracing::info!("Loaded config from {}", config_path.display());

    let screen = match tokio::task::spawn_blocking(sprinkz_capture::screen_bounds).await? {
        Ok(screen) => Some(screen),
        Err(e) => {
            tracing::warn!("Screen bounds unavailable, keeping overlay position: {:#}", e);
            None
        }
    };

    let state = Arc::new(AppState::new(config));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(state, screen, config_path, shutdown).await
}

fn init_tracing(fallback: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

pub async fn run(
    state: Arc<AppState>,
    screen: Option<ScreenBounds>,
    config_path: PathBuf,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(Arc::new(WindowCapture), screen);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    drain(&mut tasks).await;

    {
        let status = state.status.decode.read().await;
        tracing::info!(
            "Session: {} decodes, {} hits, {} misses, {} errors, last status '{}'",
            status.attempt_count,
            status.hit_count(),
            status.miss_count,
            status.error_count,
            status.current_message
        );
    }

    let config = state.config.read().await.clone();
    profile::save_config(&config_path, &config)?;
    tracing::info!("Saved config to {}", config_path.display());

    Ok(())
}

async fn drain(tasks: &mut JoinSet<anyhow::Result<()>>) {
    let finished = tokio::time::timeout(SHUTDOWN_GRACE, async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::debug!("task ended with error: {e:#}");
            }
        }
    })
    .await;

    if finished.is_err() {
        tracing::warn!("Tasks still running after {:?}, aborting", SHUTDOWN_GRACE);
        tasks.abort_all();
    }
}
