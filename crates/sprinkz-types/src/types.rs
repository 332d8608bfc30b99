use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Capture the target window and decode the label once
    TriggerDecode,
    SetAutoPoll(bool),
    SetOverlayVisible(bool),
    ShowReading(Reading),
    /// Last capture or decode produced nothing usable
    ReadingLost {
        reason: String,
    },
    DecodeStatusUpdate {
        status: String,
        capturing: bool,
    },
    BackendReady,
}

/// Block position as shown by the game label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// A decoded position together with its grid anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub position: Coordinate,
    pub anchor: Coordinate,
    /// Planar (x/z) distance between `position` and `anchor`
    pub distance: f64,
}

impl Reading {
    /// Distance in whole blocks, fractional part dropped
    pub fn distance_blocks(&self) -> i64 {
        self.distance.trunc() as i64
    }
}
