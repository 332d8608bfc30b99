//! Synthetic label frames, drawn from the inverse glyph table.
//!
//! Only the sampled glyph columns are drawn, each sampled pixel as a
//! `scale`x`scale` block, which is all the decoder ever looks at.

use crate::buffer::{Frame, LIT};
use crate::decoder::{GLYPH_PITCH, LABEL_ADVANCE, REFERENCE_RUN};
use crate::glyph::{self, GlyphColumn, MASK_ROWS};

/// Background of frames built by [`label_frame`]
pub const BACKGROUND: u32 = 0xFF00_0000;

/// Column mask for a label character: digits, `-` and `,` as rendered by the
/// game, `#` as a column no glyph uses, anything else blank
fn column_mask(ch: char) -> u8 {
    let column = match ch {
        '0'..='9' => GlyphColumn::Digit(ch as u8 - b'0'),
        '-' => GlyphColumn::Sign,
        ',' => GlyphColumn::Separator,
        '#' => return 0b1111111,
        _ => return 0,
    };
    glyph::mask_for(column).unwrap_or(0)
}

fn fill_block(frame: &mut Frame, x: usize, y: usize, scale: usize) {
    for dy in 0..scale {
        for dx in 0..scale {
            frame.set(x + dx, y + dy, LIT);
        }
    }
}

/// Draw the reference run at (x, y) followed by the glyph columns of `values`
pub fn render_label(frame: &mut Frame, x: usize, y: usize, scale: usize, values: &str) {
    let scale = scale.max(1);
    for dx in (0..REFERENCE_RUN * scale).step_by(scale) {
        fill_block(frame, x + dx, y, scale);
    }

    let first = x + LABEL_ADVANCE * scale;
    for (i, ch) in values.chars().enumerate() {
        let column_x = first + i * GLYPH_PITCH * scale;
        let mask = column_mask(ch);
        for row in 0..MASK_ROWS {
            if mask & (1 << (MASK_ROWS - 1 - row)) != 0 {
                fill_block(frame, column_x, y + row * scale, scale);
            }
        }
    }
}

/// A `width`x`height` frame with `values` rendered at (10, 40)
pub fn label_frame(width: usize, height: usize, scale: usize, values: &str) -> Frame {
    let mut frame = Frame::filled(width, height, BACKGROUND);
    render_label(&mut frame, 10, 40, scale, values);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run_width() {
        let frame = label_frame(200, 100, 2, "");
        let view = frame.view();

        assert!((10..18).all(|x| view.is_lit(x, 40) && view.is_lit(x, 41)));
        assert!(!view.is_lit(18, 40));
        assert!(!view.is_lit(10, 42));
    }

    #[test]
    fn test_digit_column_drawn() {
        // digit 1 only lights the bottom row
        let frame = label_frame(200, 100, 1, "1");
        let view = frame.view();

        assert!(view.is_lit(54, 46));
        assert!((40..46).all(|y| !view.is_lit(54, y)));
    }

    #[test]
    fn test_columns_follow_decoder_layout() {
        let scale = 3;
        let frame = label_frame(600, 120, scale, "11");
        let view = frame.view();
        let bottom = 40 + (MASK_ROWS - 1) * scale;

        let first = 10 + LABEL_ADVANCE * scale;
        let second = first + GLYPH_PITCH * scale;
        assert!(view.is_lit(first, bottom));
        assert!(view.is_lit(second, bottom));
        assert!(!view.is_lit(first + scale, bottom));
        assert!(view.is_lit(10 + REFERENCE_RUN * scale - 1, 40));
        assert!(!view.is_lit(10 + REFERENCE_RUN * scale, 40));
    }
}
