use std::sync::Arc;
use std::time::SystemTime;

use sprinkz_types::Reading;
use tokio::sync::RwLock;

/// Decode status information
#[derive(Clone, Debug, Default)]
pub struct DecodeStatus {
    pub capturing: bool,
    pub last_reading: Option<Reading>,
    pub last_reading_time: Option<SystemTime>,
    pub attempt_count: u64,
    pub miss_count: u64,
    pub error_count: u64,
    pub current_message: String,
}

impl DecodeStatus {
    pub fn begin(&mut self) {
        self.capturing = true;
        self.attempt_count += 1;
        self.current_message = "Capturing".to_string();
    }

    pub fn record_reading(&mut self, reading: Reading) {
        self.capturing = false;
        self.last_reading = Some(reading);
        self.last_reading_time = Some(SystemTime::now());
        self.current_message = "Ready".to_string();
    }

    pub fn record_miss(&mut self) {
        self.capturing = false;
        self.miss_count += 1;
        self.current_message = "No coordinates found".to_string();
    }

    pub fn record_error(&mut self, message: String) {
        self.capturing = false;
        self.error_count += 1;
        self.current_message = message;
    }

    pub fn hit_count(&self) -> u64 {
        self.attempt_count
            .saturating_sub(self.miss_count + self.error_count + u64::from(self.capturing))
    }
}

/// Application status
pub struct AppStatus {
    pub decode: Arc<RwLock<DecodeStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            decode: Arc::new(RwLock::new(DecodeStatus::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
