//! Glyph table: characters and digits to 7-segment bit patterns.
//!
//! Bit `i` of a pattern lights segment `i` in physical order
//! A, B, C, D, E, F, G, decimal point. Lookups never fail; anything the
//! table does not know is blank.

/// Segment A of the 7-segment display.
pub const SEG_A: u8 = 0b_0000_0001;
/// Segment B of the 7-segment display.
pub const SEG_B: u8 = 0b_0000_0010;
/// Segment C of the 7-segment display.
pub const SEG_C: u8 = 0b_0000_0100;
/// Segment D of the 7-segment display.
pub const SEG_D: u8 = 0b_0000_1000;
/// Segment E of the 7-segment display.
pub const SEG_E: u8 = 0b_0001_0000;
/// Segment F of the 7-segment display.
pub const SEG_F: u8 = 0b_0010_0000;
/// Segment G of the 7-segment display.
pub const SEG_G: u8 = 0b_0100_0000;
/// Decimal point of the 7-segment display.
pub const SEG_DP: u8 = 0b_1000_0000;

/// Representation of a blank space on a 7-segment display.
pub const BLANK: u8 = 0b_0000_0000;

/// Number of phases in the outer-ring spin animation.
pub const SPIN_STEPS: u8 = 6;

/// One of the eight segments of a digit, in physical LED order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    DecimalPoint,
}

impl Segment {
    /// Number of segments per digit, decimal point included.
    pub const COUNT: usize = 8;

    /// All segments in the order their LEDs are wired.
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::DecimalPoint,
    ];

    /// Position of this segment's LED block within a digit.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The pattern bit for this segment.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Whether `pattern` lights this segment.
    #[must_use]
    pub const fn is_lit_in(self, pattern: u8) -> bool {
        pattern & self.bit() != 0
    }
}

/// Segments for digits 0-9.
const DIGITS: [u8; 10] = [
    0b_0011_1111, // Digit 0
    0b_0000_0110, // Digit 1
    0b_0101_1011, // Digit 2
    0b_0100_1111, // Digit 3
    0b_0110_0110, // Digit 4
    0b_0110_1101, // Digit 5
    0b_0111_1101, // Digit 6
    0b_0000_0111, // Digit 7
    0b_0111_1111, // Digit 8
    0b_0110_1111, // Digit 9
];

/// Segments for hex letters A-F. `b` and `d` use the lowercase shapes so
/// they don't read as `8` and `0`.
const HEX_LETTERS: [u8; 6] = [
    0b_0111_0111, // A
    0b_0111_1100, // b
    0b_0011_1001, // C
    0b_0101_1110, // d
    0b_0111_1001, // E
    0b_0111_0001, // F
];

/// Outer ring, clockwise from the top.
const SPIN_RING: [u8; SPIN_STEPS as usize] = [SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F];

/// Pattern for a decimal digit. Values above 9 saturate to 9.
#[must_use]
pub fn pattern_for_digit(digit: u8) -> u8 {
    DIGITS
        .get(usize::from(digit))
        .or(DIGITS.last())
        .copied()
        .unwrap_or(BLANK)
}

/// Pattern for a hex nibble; only the low four bits of `nibble` are used.
#[must_use]
pub fn pattern_for_nibble(nibble: u8) -> u8 {
    let nibble = nibble & 0x0F;
    match nibble.checked_sub(10) {
        None => pattern_for_digit(nibble),
        Some(letter) => HEX_LETTERS
            .get(usize::from(letter))
            .copied()
            .unwrap_or(BLANK),
    }
}

/// Pattern for a character. Letters are case-insensitive; unknown characters
/// are blank.
#[must_use]
pub fn pattern_for(char: char) -> u8 {
    if let Some(digit) = char.to_digit(16) {
        // to_digit(16) is at most 15
        return pattern_for_nibble(u8::try_from(digit).unwrap_or(0));
    }
    match char.to_ascii_uppercase() {
        'H' => 0b_0111_0110,
        'J' => 0b_0001_1110,
        'L' => 0b_0011_1000,
        'N' => 0b_0101_0100, // n
        'O' => 0b_0101_1100, // o
        'P' => 0b_0111_0011,
        'R' => 0b_0101_0000, // r
        'U' => 0b_0011_1110,
        'Y' => 0b_0110_1110,
        '-' => SEG_G,
        '_' => SEG_D,
        _ => BLANK,
    }
}

/// Single-segment pattern for one phase of the spin animation.
///
/// Steps cycle A, B, C, D, E, F; any `step` is reduced modulo [`SPIN_STEPS`].
#[must_use]
pub fn spin_segment(step: u8) -> u8 {
    SPIN_RING
        .get(usize::from(step % SPIN_STEPS))
        .copied()
        .unwrap_or(BLANK)
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn digit_chars_match_digit_table() {
        for (digit, char) in (0_u8..=9).zip('0'..='9') {
            assert_eq!(pattern_for(char), pattern_for_digit(digit), "char {char}");
        }
    }

    #[test]
    fn digit_lookup_saturates_at_nine() {
        assert_eq!(pattern_for_digit(10), pattern_for_digit(9));
        assert_eq!(pattern_for_digit(255), 0b_0110_1111);
    }

    #[test]
    fn hex_letters_use_lowercase_b_and_d() {
        assert_eq!(pattern_for('A'), 0b_0111_0111);
        assert_eq!(pattern_for('b'), 0b_0111_1100);
        assert_eq!(pattern_for('C'), 0b_0011_1001);
        assert_eq!(pattern_for('d'), 0b_0101_1110);
        assert_eq!(pattern_for('E'), 0b_0111_1001);
        assert_eq!(pattern_for('F'), 0b_0111_0001);
    }

    #[test]
    fn letters_are_case_insensitive() {
        for char in "abcdefhjlnopruy".chars() {
            assert_eq!(
                pattern_for(char),
                pattern_for(char.to_ascii_uppercase()),
                "char {char}"
            );
            assert_ne!(pattern_for(char), BLANK, "char {char}");
        }
    }

    #[test]
    fn nibbles_cover_digits_then_letters() {
        assert_eq!(pattern_for_nibble(7), pattern_for('7'));
        assert_eq!(pattern_for_nibble(0xA), pattern_for('A'));
        assert_eq!(pattern_for_nibble(0xF), pattern_for('f'));
        // High bits are ignored
        assert_eq!(pattern_for_nibble(0x1B), pattern_for('b'));
    }

    #[test]
    fn special_characters() {
        assert_eq!(pattern_for(' '), 0b_0000_0000);
        assert_eq!(pattern_for('-'), 0b_0100_0000);
        assert_eq!(pattern_for('_'), 0b_0000_1000);
    }

    #[test]
    fn unmapped_characters_are_blank() {
        for char in ['.', '!', '?', '#', '\0', '\n', '\u{7f}', 'G', 'k', 'z', 'é', '∞'] {
            assert_eq!(pattern_for(char), BLANK, "char {char:?}");
        }
    }

    #[test]
    fn no_glyph_sets_the_decimal_point() {
        for char in "0123456789abcdefhjlnopruy-_ ".chars() {
            assert_eq!(pattern_for(char) & SEG_DP, 0, "char {char}");
        }
    }

    #[test]
    fn segment_bits_follow_physical_order() {
        let bits: [u8; Segment::COUNT] = Segment::ALL.map(Segment::bit);
        assert_eq!(
            bits,
            [SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G, SEG_DP]
        );
        assert_eq!(Segment::DecimalPoint.index(), 7);
        assert!(Segment::G.is_lit_in(pattern_for('-')));
        assert!(!Segment::A.is_lit_in(pattern_for('-')));
    }

    #[test]
    fn spin_walks_the_outer_ring() {
        let steps: [u8; 7] = core::array::from_fn(|step| spin_segment(step as u8));
        assert_eq!(steps, [SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_A]);
        assert_eq!(spin_segment(255), SEG_D); // 255 % 6 == 3
    }
}
