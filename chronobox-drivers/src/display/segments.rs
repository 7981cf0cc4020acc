//! Seven-segment glyph encoding
//!
//! Bit layout (TM1637 convention): bit 0 = segment A ... bit 6 = segment G,
//! bit 7 = decimal point / colon.
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---
//!      D
//! ```

/// Glyphs for digits 0-9
pub const DIGITS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// All segments off
pub const BLANK: u8 = 0x00;

/// Colon / decimal point bit
pub const COLON: u8 = 0x80;

/// Every segment lit, including the colon
pub const ALL: u8 = 0xFF;

/// Number of digit positions
pub const DIGIT_COUNT: usize = 4;

/// Encode a single decimal digit; values above 9 use their last digit
pub const fn encode_digit(digit: u8) -> u8 {
    DIGITS[(digit % 10) as usize]
}

/// Encode a value as four right-aligned digits with leading zeros blanked
///
/// Values above 9999 show as 9999. Zero shows as a single `0`.
pub fn encode_number(value: u16) -> [u8; DIGIT_COUNT] {
    let mut value = value.min(9999);
    let mut segs = [BLANK; DIGIT_COUNT];

    // The last digit is always shown
    for seg in segs.iter_mut().rev() {
        *seg = encode_digit((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }

    segs
}

/// Encode `MM:SS` with the colon lit
///
/// Minutes above 99 and seconds above 59 are clamped.
pub fn encode_time(minutes: u8, seconds: u8) -> [u8; DIGIT_COUNT] {
    let minutes = minutes.min(99);
    let seconds = seconds.min(59);
    [
        encode_digit(minutes / 10),
        encode_digit(minutes % 10) | COLON,
        encode_digit(seconds / 10),
        encode_digit(seconds % 10),
    ]
}
