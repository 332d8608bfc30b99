use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use sprinkz_config::Config;
use tokio::sync::RwLock;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub status: AppStatus,
    pub auto_poll_running: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            status: AppStatus::new(),
            auto_poll_running: AtomicBool::new(false),
        }
    }
}
