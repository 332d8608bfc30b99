use sprinkz_config::capture::CaptureConfig;
use sprinkz_core::Frame;

/// Where decode frames come from
pub trait FrameSource: Send + Sync {
    /// Snapshot the target window; an error means no frame is available
    fn capture(&self, config: &CaptureConfig) -> anyhow::Result<Frame>;
}

/// Captures the first on-screen window matching the configured titles
pub struct WindowCapture;

impl FrameSource for WindowCapture {
    fn capture(&self, config: &CaptureConfig) -> anyhow::Result<Frame> {
        sprinkz_capture::capture_target(config)
    }
}
