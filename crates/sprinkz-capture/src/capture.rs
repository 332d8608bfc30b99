use anyhow::{Context, Result, bail};
use sprinkz_config::capture::CaptureConfig;
use sprinkz_config::overlay::ScreenBounds;
use sprinkz_core::Frame;
use xcap::{Monitor, Window};
use xcap::image::RgbaImage;

/// List all available windows with their titles
pub fn list_windows() -> Result<Vec<(u32, String)>> {
    let windows = Window::all().context("Failed to enumerate windows")?;
    Ok(windows
        .into_iter()
        .filter(|w| !w.title().is_empty() && !w.is_minimized())
        .map(|w| (w.id(), w.title().to_string()))
        .collect())
}

/// First window whose title matches the capture config
fn find_target(config: &CaptureConfig) -> Result<Window> {
    let windows = Window::all().context("Failed to enumerate windows")?;
    let window = windows
        .into_iter()
        .find(|w| config.matches_title(w.title()))
        .with_context(|| format!("No window matching {:?}", config.window_titles))?;

    // a minimized window captures as an empty or stale image
    if window.is_minimized() {
        bail!("Window '{}' is minimized", window.title());
    }

    Ok(window)
}

/// Capture the configured target window
pub fn capture_target(config: &CaptureConfig) -> Result<Frame> {
    let window = find_target(config)?;
    tracing::debug!("Capturing window {} '{}'", window.id(), window.title());

    let image = window.capture_image().context("Failed to capture window")?;
    frame_from_image(&image)
}

/// Capture a specific window by ID
pub fn capture_window(window_id: u32) -> Result<Frame> {
    let windows = Window::all().context("Failed to enumerate windows")?;
    let window = windows
        .into_iter()
        .find(|w| w.id() == window_id)
        .context("Window not found")?;

    let image = window.capture_image().context("Failed to capture window")?;
    frame_from_image(&image)
}

/// Rectangle spanning every monitor, used to keep the overlay on screen
pub fn screen_bounds() -> Result<ScreenBounds> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let primary = monitors
        .iter()
        .find(|m| m.is_primary())
        .or(monitors.first())
        .context("No monitor found")?;

    let left = monitors.iter().map(|m| m.x()).min().unwrap_or(0);
    let top = monitors.iter().map(|m| m.y()).min().unwrap_or(0);
    let right = monitors
        .iter()
        .map(|m| m.x() + m.width() as i32)
        .max()
        .unwrap_or(0);
    let bottom = monitors
        .iter()
        .map(|m| m.y() + m.height() as i32)
        .max()
        .unwrap_or(0);

    Ok(ScreenBounds {
        left,
        top,
        width: right - left,
        height: bottom - top,
        primary_width: primary.width() as i32,
    })
}

fn frame_from_image(image: &RgbaImage) -> Result<Frame> {
    if image.width() == 0 || image.height() == 0 {
        bail!("Captured image is empty");
    }

    Frame::from_rgba8(image.width(), image.height(), image.as_raw())
        .context("Captured image has an unexpected layout")
}
