//! Decoder for the `label: X, Y, Z` coordinate line.
//!
//! The label is drawn by the game in a fixed bitmap font, pure white, at an
//! integral scale and without anti-aliasing. Instead of recognising glyph
//! shapes the decoder:
//!
//! 1. scans the upper left part of the frame for the first horizontal run of
//!    at least four lit pixels and derives the scale from its length,
//! 2. jumps over the label text to the first value glyph,
//! 3. samples one column per glyph and maps it through the [`glyph`] table.
//!
//! [`glyph`]: crate::glyph

use sprinkz_types::Coordinate;

use crate::buffer::PixelBuffer;
use crate::glyph::{self, GlyphColumn, MASK_ROWS};

/// Rows above this never hold the label
const SCAN_START_Y: usize = 30;
const SCAN_START_X: usize = 8;
const MIN_SEARCH_WIDTH: usize = 125;

/// Lit run, in font units, that marks the start of the label
pub(crate) const REFERENCE_RUN: usize = 4;
/// Distance from the start of the label to its first value glyph, in font units
pub(crate) const LABEL_ADVANCE: usize = 44;
/// Glyph width including spacing, in font units
pub(crate) const GLYPH_PITCH: usize = 6;

const FIELD_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeResult {
    Found(Coordinate),
    NotFound,
}

impl DecodeResult {
    pub fn found(self) -> Option<Coordinate> {
        match self {
            DecodeResult::Found(coordinate) => Some(coordinate),
            DecodeResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DecodeResult::Found(_))
    }
}

impl From<DecodeResult> for Option<Coordinate> {
    fn from(result: DecodeResult) -> Self {
        result.found()
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchRegion {
    width: usize,
    height: usize,
}

impl SearchRegion {
    fn for_buffer(buffer: &PixelBuffer<'_>) -> Option<Self> {
        let width = (buffer.width() / 3).max(MIN_SEARCH_WIDTH.min(buffer.width()));
        let height = buffer.height() / 3;
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

/// Where the label starts and how large it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LabelOrigin {
    x: usize,
    y: usize,
    scale: usize,
}

/// Find the reference run.
///
/// The origin is the first lit pixel seen by the scan, even if the run it
/// started was too short. The run counter carries over row ends.
fn find_origin(buffer: &PixelBuffer<'_>, region: SearchRegion) -> Option<LabelOrigin> {
    let mut origin = None;
    let mut run = 0usize;

    'rows: for y in SCAN_START_Y..region.height {
        for x in SCAN_START_X..region.width {
            if buffer.is_lit(x, y) {
                origin.get_or_insert((x, y));
                run += 1;
            } else if run < REFERENCE_RUN {
                run = 0;
            } else {
                break 'rows;
            }
        }
        if run >= REFERENCE_RUN {
            break;
        }
    }

    if run < REFERENCE_RUN {
        return None;
    }

    let (x, y) = origin?;
    Some(LabelOrigin {
        x,
        y,
        scale: run / REFERENCE_RUN,
    })
}

fn sample_column(buffer: &PixelBuffer<'_>, x: usize, top: usize, scale: usize) -> u8 {
    (0..MASK_ROWS).fold(0u8, |mask, dy| {
        (mask << 1) | u8::from(buffer.is_lit(x, top + dy * scale))
    })
}

/// Value accumulation while walking the glyph columns
#[derive(Debug, Default)]
struct ScanState {
    coords: [i32; FIELD_COUNT],
    field: usize,
    negative: bool,
}

impl ScanState {
    fn negate_current(&mut self) {
        if let Some(value) = self.coords.get_mut(self.field) {
            *value = value.wrapping_neg();
        }
    }

    fn apply(&mut self, column: GlyphColumn) {
        match column {
            GlyphColumn::Digit(digit) => {
                if let Some(value) = self.coords.get_mut(self.field) {
                    *value = value.wrapping_mul(10).wrapping_add(i32::from(digit));
                }
            }
            GlyphColumn::Sign => self.negative = true,
            GlyphColumn::Separator => {
                if self.negative {
                    self.negate_current();
                }
                self.field = (self.field + 1).min(FIELD_COUNT);
                // past the last field the sign is left pending, finish() skips it
                if self.field < FIELD_COUNT {
                    self.negative = false;
                }
            }
            GlyphColumn::Unknown => {
                if self.field >= FIELD_COUNT - 1 {
                    return;
                }
                // the sign stays pending, so every unknown column flips the value again
                if self.negative {
                    self.negate_current();
                }
            }
        }
    }

    fn finish(mut self) -> Coordinate {
        if self.negative && self.field < FIELD_COUNT {
            self.negate_current();
        }
        let [x, y, z] = self.coords;
        Coordinate { x, y, z }
    }
}

/// Decode the coordinate label from a captured frame
pub fn decode(buffer: &PixelBuffer<'_>) -> DecodeResult {
    let Some(region) = SearchRegion::for_buffer(buffer) else {
        tracing::debug!(
            "Frame {}x{} too small to search",
            buffer.width(),
            buffer.height()
        );
        return DecodeResult::NotFound;
    };

    let Some(origin) = find_origin(buffer, region) else {
        tracing::debug!(
            "No label found in {}x{} search region",
            region.width,
            region.height
        );
        return DecodeResult::NotFound;
    };

    tracing::debug!(
        "Label origin at ({}, {}), scale {}",
        origin.x,
        origin.y,
        origin.scale
    );

    let pitch = GLYPH_PITCH * origin.scale;
    let mut x = origin.x + LABEL_ADVANCE * origin.scale;
    let mut state = ScanState::default();

    while x < region.width {
        let mask = sample_column(buffer, x, origin.y, origin.scale);
        state.apply(glyph::classify(mask));
        x += pitch;
    }

    DecodeResult::Found(state.finish())
}
