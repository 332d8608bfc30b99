use serde::{Deserialize, Serialize};

const OVERLAY_WIDTH: i32 = 200;
const MIN_VISIBLE_WIDTH: i32 = 100;
const MIN_VISIBLE_HEIGHT: i32 = 50;
const DEFAULT_RIGHT_MARGIN: i32 = 20;
const DEFAULT_TOP: i32 = 20;

fn default_visible() -> bool {
    true
}

/// Virtual screen rectangle spanning all monitors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    /// Width of the primary monitor, used for the default placement
    pub primary_width: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct OverlayConfig {
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
            x: None,
            y: None,
        }
    }
}

impl OverlayConfig {
    /// Saved position if enough of the overlay stays on screen, otherwise the
    /// top right corner of the primary monitor
    pub fn resolve_position(&self, screen: ScreenBounds) -> (i32, i32) {
        let default = (
            screen.primary_width - OVERLAY_WIDTH - DEFAULT_RIGHT_MARGIN,
            DEFAULT_TOP,
        );

        let (Some(x), Some(y)) = (self.x, self.y) else {
            return default;
        };

        let right = screen.left + screen.width;
        let bottom = screen.top + screen.height;
        if x < screen.left
            || x > right - MIN_VISIBLE_WIDTH
            || y < screen.top
            || y > bottom - MIN_VISIBLE_HEIGHT
        {
            return default;
        }

        (x, y)
    }
}
