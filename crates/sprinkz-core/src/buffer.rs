use crate::error::BufferError;

/// Fully opaque pure white, the only color the label glyphs are drawn in
pub const LIT: u32 = 0xFFFF_FFFF;

/// Read-only view over 32-bit ARGB pixels, row-major with a row pitch of `stride`
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [u32],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width`x`height` image whose rows start every `stride` pixels
    pub fn new(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [u32],
    ) -> Result<Self, BufferError> {
        if stride < width {
            return Err(BufferError::StrideTooSmall { stride, width });
        }

        let needed = if width == 0 || height == 0 {
            0
        } else {
            stride
                .checked_mul(height - 1)
                .and_then(|n| n.checked_add(width))
                .ok_or(BufferError::Overflow { width, height })?
        };

        if data.len() < needed {
            return Err(BufferError::DataTooShort {
                needed,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel at (x, y), `None` outside the image (padding included)
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    #[inline]
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(LIT)
    }
}

/// Owned ARGB image, as handed over by the frame source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, BufferError> {
        let needed = width
            .checked_mul(height)
            .ok_or(BufferError::Overflow { width, height })?;
        if pixels.len() != needed {
            return Err(BufferError::DataTooShort {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Frame of a single color
    pub fn filled(width: usize, height: usize, argb: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![argb; width * height],
        }
    }

    /// Repack tightly packed RGBA8 bytes into ARGB words
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self, BufferError> {
        let (width, height) = (width as usize, height as usize);
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(BufferError::Overflow { width, height })?;
        if rgba.len() != expected {
            return Err(BufferError::RgbaLength {
                width,
                height,
                actual: rgba.len(),
            });
        }

        let pixels = rgba
            .chunks_exact(4)
            .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Write one pixel; writes outside the frame are dropped
    pub fn set(&mut self, x: usize, y: usize, argb: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = argb;
        }
    }

    pub fn view(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_smaller_than_width_rejected() {
        let data = vec![0u32; 64];
        let err = PixelBuffer::new(8, 4, 4, &data).unwrap_err();
        assert_eq!(err, BufferError::StrideTooSmall { stride: 4, width: 8 });
    }

    #[test]
    fn test_short_data_rejected() {
        let data = vec![0u32; 10];
        let err = PixelBuffer::new(4, 3, 4, &data).unwrap_err();
        assert_eq!(
            err,
            BufferError::DataTooShort {
                needed: 12,
                actual: 10
            }
        );
    }

    #[test]
    fn test_last_row_may_omit_padding() {
        // 3 rows of width 2 with stride 5: the final row needs only 2 pixels
        let data = vec![0u32; 5 * 2 + 2];
        assert!(PixelBuffer::new(2, 3, 5, &data).is_ok());
    }

    #[test]
    fn test_padding_is_not_addressable() {
        let mut data = vec![0u32; 6 * 2];
        data[4] = LIT;
        data[5] = LIT;
        let buffer = PixelBuffer::new(4, 2, 6, &data).unwrap();

        assert_eq!(buffer.get(4, 0), None);
        assert!(!buffer.is_lit(5, 0));
        assert_eq!(buffer.get(0, 2), None);
    }

    #[test]
    fn test_stride_indexing() {
        let mut data = vec![0u32; 6 * 3];
        data[2 * 6 + 1] = LIT;
        let buffer = PixelBuffer::new(4, 3, 6, &data).unwrap();

        assert!(buffer.is_lit(1, 2));
        assert!(!buffer.is_lit(2, 1));
    }

    #[test]
    fn test_from_rgba8_repacks_to_argb() {
        let rgba = [0x11, 0x22, 0x33, 0x44, 0xFF, 0xFF, 0xFF, 0xFF];
        let frame = Frame::from_rgba8(2, 1, &rgba).unwrap();

        assert_eq!(frame.pixels(), &[0x4411_2233, LIT]);
        assert!(frame.view().is_lit(1, 0));
    }

    #[test]
    fn test_from_rgba8_length_mismatch() {
        let err = Frame::from_rgba8(2, 2, &[0u8; 12]).unwrap_err();
        assert!(matches!(err, BufferError::RgbaLength { actual: 12, .. }));
    }

    #[test]
    fn test_set_outside_frame_is_ignored() {
        let mut frame = Frame::filled(2, 2, 0);
        frame.set(5, 5, LIT);
        frame.set(1, 1, LIT);

        assert_eq!(frame.pixels(), &[0, 0, 0, LIT]);
    }
}
