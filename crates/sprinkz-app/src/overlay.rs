//! Text shown by the coordinate overlay.

use sprinkz_types::{AppEvent, Reading};

/// What the overlay currently displays
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub reading: Option<Reading>,
    pub visible: bool,
    pub status: String,
}

impl OverlayState {
    pub fn new(visible: bool) -> Self {
        Self {
            reading: None,
            visible,
            status: "Starting".to_string(),
        }
    }

    /// Fold an app event into the state, returns whether the text may have changed
    pub fn apply(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::ShowReading(reading) => {
                self.reading = Some(*reading);
                true
            }
            AppEvent::ReadingLost { reason } => {
                tracing::debug!("Reading lost: {}", reason);
                self.reading = None;
                true
            }
            AppEvent::SetOverlayVisible(visible) => {
                let changed = self.visible != *visible;
                self.visible = *visible;
                changed
            }
            AppEvent::DecodeStatusUpdate { status, .. } => {
                self.status = status.clone();
                false
            }
            AppEvent::BackendReady => {
                self.status = "Ready".to_string();
                true
            }
            AppEvent::TriggerDecode | AppEvent::SetAutoPoll(_) => false,
        }
    }

    /// Rendered text, `None` while hidden
    pub fn text(&self, hotkey_label: &str) -> Option<String> {
        self.visible
            .then(|| overlay_text(self.reading.as_ref(), hotkey_label))
    }
}

pub fn overlay_text(reading: Option<&Reading>, hotkey_label: &str) -> String {
    match reading {
        Some(reading) => format!(
            "Player: {}\n4x4: {}\nDist: {} blocks",
            reading.position,
            reading.anchor,
            reading.distance_blocks()
        ),
        None => format!(
            "Press {hotkey_label} to read coords\nMake sure to be decently near to dig spot"
        ),
    }
}
