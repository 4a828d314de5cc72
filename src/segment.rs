//! Segment Encoding
//!
//! Pure lookup and decomposition logic for a 7-segment digit with decimal
//! point: no pins, no cursor, just bytes. Bit layout is `{dp a b c d e f g}`
//! from the most significant bit down; a set bit lights the segment.

/// Segment patterns for the decimal digits 0-9
pub const DIGIT_PATTERNS: [u8; 10] = [
    0x7E, // 0: abcdef
    0x30, // 1: bc
    0x6D, // 2: abdeg
    0x79, // 3: abcdg
    0x33, // 4: bcfg
    0x5B, // 5: acdfg
    0x5F, // 6: acdefg
    0x70, // 7: abc
    0x7F, // 8: abcdefg
    0x7B, // 9: abcdfg
];

/// Decimal point bit, OR-able onto any digit pattern
pub const DECIMAL_POINT: u8 = 0x80;

/// All segments dark
pub const BLANK: u8 = 0x00;

/// Pattern for a single decimal digit
///
/// Values above 9 have no glyph and render blank rather than garbage.
pub fn pattern(digit: u8) -> u8 {
    DIGIT_PATTERNS.get(digit as usize).copied().unwrap_or(BLANK)
}

/// Decompose a value into its tens, ones, tenths and hundredths digits
///
/// Decomposition truncates: digits beyond the four display positions are
/// discarded, so values at or above 100 lose their high digits and extra
/// fractional precision is cut, not rounded. Negative values saturate to
/// zero. Callers wanting strict `[0, 100)` behavior clamp first.
pub fn decompose(value: f32) -> [u8; 4] {
    [
        ((value as u32) / 10 % 10) as u8,
        ((value as u32) % 10) as u8,
        (((value * 10.0) as u32) % 10) as u8,
        (((value * 100.0) as u32) % 10) as u8,
    ]
}

/// Encode a value as four hardware-ready bytes in `XX.XX` form
///
/// The decimal point rides on the ones digit, fixed by the display format
/// rather than the value.
pub fn encode(value: f32) -> [u8; 4] {
    let digits = decompose(value);
    [
        pattern(digits[0]),
        pattern(digits[1]) | DECIMAL_POINT,
        pattern(digits[2]),
        pattern(digits[3]),
    ]
}
