//! Column masks of the label font.
//!
//! Every glyph of the label is identified by its leftmost pixel column alone.
//! Seven rows are sampled top to bottom, the topmost row becoming bit 6.

/// Number of sampled rows per glyph column
pub const MASK_ROWS: usize = 7;

const MASK_COUNT: usize = 1 << MASK_ROWS;

const DIGIT_MASKS: [u8; 10] = [
    0b0111110, // 0
    0b0000001, // 1
    0b0100011, // 2
    0b0100010, // 3
    0b0001100, // 4
    0b1110010, // 5
    0b0011110, // 6
    0b1100000, // 7
    0b0110110, // 8
    0b0110000, // 9
];

/// Minus sign
const SIGN_MASK: u8 = 0b0001000;

/// Comma between two values
const SEPARATOR_MASK: u8 = 0b0000011;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphColumn {
    Digit(u8),
    Sign,
    Separator,
    Unknown,
}

static TABLE: [GlyphColumn; MASK_COUNT] = build_table();

const fn build_table() -> [GlyphColumn; MASK_COUNT] {
    let mut table = [GlyphColumn::Unknown; MASK_COUNT];
    let mut digit = 0;
    while digit < DIGIT_MASKS.len() {
        table[DIGIT_MASKS[digit] as usize] = GlyphColumn::Digit(digit as u8);
        digit += 1;
    }
    table[SIGN_MASK as usize] = GlyphColumn::Sign;
    table[SEPARATOR_MASK as usize] = GlyphColumn::Separator;
    table
}

/// Look up a sampled column. Bits above the seventh are ignored.
#[inline]
pub fn classify(mask: u8) -> GlyphColumn {
    TABLE[(mask as usize) & (MASK_COUNT - 1)]
}

/// The mask a glyph renders as, `None` for `Unknown` and out of range digits
pub fn mask_for(column: GlyphColumn) -> Option<u8> {
    match column {
        GlyphColumn::Digit(d) => DIGIT_MASKS.get(d as usize).copied(),
        GlyphColumn::Sign => Some(SIGN_MASK),
        GlyphColumn::Separator => Some(SEPARATOR_MASK),
        GlyphColumn::Unknown => None,
    }
}
