pub mod buffer;
pub mod decoder;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod synth;

pub use buffer::{Frame, PixelBuffer};
pub use decoder::{DecodeResult, decode};
pub use error::BufferError;
pub use glyph::GlyphColumn;
pub use grid::{nearest_grid_anchor, planar_distance, reading_for};
