use std::sync::Arc;

use kanal::AsyncSender;
use sprinkz_types::AppEvent;

use crate::source::FrameSource;
use crate::state::AppState;

/// Encapsulates decode dependencies handed to every task
///
/// Cloning only bumps the `Arc` counts and the channel sender.
#[derive(Clone)]
pub struct DecodeContext {
    pub state: Arc<AppState>,
    pub event_tx: AsyncSender<AppEvent>,
    pub source: Arc<dyn FrameSource>,
}

impl DecodeContext {
    pub fn new(
        state: Arc<AppState>,
        event_tx: AsyncSender<AppEvent>,
        source: Arc<dyn FrameSource>,
    ) -> Self {
        Self {
            state,
            event_tx,
            source,
        }
    }
}
