#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("Stride {stride} is smaller than width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    #[error("Pixel data too short: need {needed} pixels, got {actual}")]
    DataTooShort { needed: usize, actual: usize },

    #[error("RGBA data length {actual} does not match {width}x{height}")]
    RgbaLength {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("Buffer dimensions overflow: {width}x{height}")]
    Overflow { width: usize, height: usize },
}
