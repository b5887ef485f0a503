//! Seven-segment digits painted onto a caller-owned LED buffer.
//!
//! See [`Seg7Display`] for the main usage example.

use core::ops::Range;

use heapless::Vec;

use crate::glyph::{self, SEG_DP, Segment};
use crate::led_buffer::{LedBuffer, Rgb, colors};
use crate::{Error, Result};

/// Most decimal digits [`Seg7Display::show_number`] extracts (all of `i32`).
pub const MAX_NUMBER_DIGITS: usize = 10;

/// What painting does to the LEDs of unlit segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundMode {
    /// Unlit segments are set to the background color.
    #[default]
    Overwrite,
    /// Unlit segments are left as they are.
    Preserve,
    /// Reserved for mixing the foreground into what is already there.
    /// Not implemented yet: pattern painting treats it like `Preserve`.
    Blend,
}

/// Geometry and colors of a [`Seg7Display`].
///
/// ```
/// use led_seg7::{BackgroundMode, Seg7Config, colors};
///
/// const CONFIG: Seg7Config = Seg7Config::new()
///     .with_offset(16)
///     .with_digit_count(4)
///     .with_leds_per_segment(3)
///     .with_foreground(colors::CYAN)
///     .with_background_mode(BackgroundMode::Preserve);
///
/// assert_eq!(CONFIG.required_len(), Ok(16 + 4 * 8 * 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seg7Config {
    /// Index of the first LED of digit 0 in the buffer.
    pub offset: usize,
    /// Number of digits, addressed left-to-right as `0..digit_count`.
    pub digit_count: u8,
    /// LEDs wired in series for every segment (including the decimal point).
    pub leds_per_segment: u8,
    /// Color of lit segments.
    pub foreground: Rgb,
    /// Color of unlit segments when they are painted.
    pub background: Rgb,
    /// Policy for unlit segments.
    pub background_mode: BackgroundMode,
}

impl Seg7Config {
    /// One digit, one LED per segment, at offset 0, red on black, overwriting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            digit_count: 1,
            leds_per_segment: 1,
            foreground: colors::RED,
            background: colors::BLACK,
            background_mode: BackgroundMode::Overwrite,
        }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn with_digit_count(mut self, digit_count: u8) -> Self {
        self.digit_count = digit_count;
        self
    }

    #[must_use]
    pub const fn with_leds_per_segment(mut self, leds_per_segment: u8) -> Self {
        self.leds_per_segment = leds_per_segment;
        self
    }

    #[must_use]
    pub const fn with_foreground(mut self, foreground: Rgb) -> Self {
        self.foreground = foreground;
        self
    }

    #[must_use]
    pub const fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub const fn with_background_mode(mut self, background_mode: BackgroundMode) -> Self {
        self.background_mode = background_mode;
        self
    }

    /// LEDs used by one digit: 8 segments times `leds_per_segment`.
    #[must_use]
    pub const fn leds_per_digit(&self) -> usize {
        Segment::COUNT.saturating_mul(self.leds_per_segment as usize)
    }

    /// Smallest buffer length (in records) that holds every digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeometryOverflow`] if the end index does not fit in `usize`.
    pub const fn required_len(&self) -> Result<usize> {
        let Some(span) = self.leds_per_digit().checked_mul(self.digit_count as usize) else {
            return Err(Error::GeometryOverflow);
        };
        match self.offset.checked_add(span) {
            Some(len) => Ok(len),
            None => Err(Error::GeometryOverflow),
        }
    }

    /// LED indexes of `segment` on the digit at `position`.
    ///
    /// Empty if `position` is not a digit of this display.
    #[must_use]
    pub fn segment_leds(&self, position: u8, segment: Segment) -> Range<usize> {
        if position >= self.digit_count {
            return 0..0;
        }
        let leds_per_segment = usize::from(self.leds_per_segment);
        let start = self
            .leds_per_digit()
            .checked_mul(usize::from(position))
            .and_then(|digit_start| {
                digit_start.checked_add(leds_per_segment.checked_mul(segment.index())?)
            })
            .and_then(|start| start.checked_add(self.offset));
        let end = start.and_then(|start| start.checked_add(leds_per_segment));
        match (start, end) {
            (Some(start), Some(end)) => start..end,
            _ => 0..0,
        }
    }
}

impl Default for Seg7Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Seven-segment digits made of addressable LEDs, drawn into a buffer the caller owns.
///
/// Each digit is 8 runs of `leds_per_segment` LEDs in the order A, B, C, D,
/// E, F, G, decimal point, and digit `d` starts at
/// `offset + d * 8 * leds_per_segment`. Painting only changes the buffer;
/// sending it to the strip is the caller's job, so one buffer can hold other
/// LEDs alongside the display.
///
/// Painting never fails. Positions outside `0..digit_count` are ignored,
/// digits above 9 saturate, and unknown characters are blank. The buffer is
/// expected to hold at least [`Seg7Config::required_len`] records (see
/// [`Seg7Display::check_fits`]); writes past its end are dropped.
///
/// ```
/// use led_seg7::{Rgb, Seg7Display, colors};
///
/// // Two LEDs of something else, then a 4-digit display.
/// let mut leds = [Rgb::default(); 2 + 4 * 8];
/// let mut display = Seg7Display::new(&mut leds, 2, 4);
/// display.set_foreground(colors::GREEN);
/// display.show_number(-42, false);
/// assert_eq!(display.segment_pattern(1), Some(0b_0100_0000)); // '-'
/// assert_eq!(display.segment_pattern(3), Some(0b_0101_1011)); // '2'
///
/// // ...then hand `leds` to the strip driver.
/// let _ = display.into_inner();
/// ```
pub struct Seg7Display<'a, B: LedBuffer + ?Sized> {
    leds: &'a mut B,
    config: Seg7Config,
}

impl<'a, B: LedBuffer + ?Sized> Seg7Display<'a, B> {
    /// Creates a display of `digit_count` digits starting at LED `offset`,
    /// with one LED per segment and the default colors.
    #[must_use]
    pub fn new(leds: &'a mut B, offset: usize, digit_count: u8) -> Self {
        Self::from_config(
            leds,
            Seg7Config::new()
                .with_offset(offset)
                .with_digit_count(digit_count),
        )
    }

    /// Creates a display from a full configuration.
    #[must_use]
    pub fn from_config(leds: &'a mut B, config: Seg7Config) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Seg7Display::new: {} digits at offset {}, {} LEDs/segment, stride {}",
            config.digit_count,
            config.offset,
            config.leds_per_segment,
            leds.stride()
        );
        Self { leds, config }
    }

    /// Checks that the buffer holds every LED of every digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if it does not, or
    /// [`Error::GeometryOverflow`] if the geometry cannot be addressed at all.
    pub fn check_fits(&self) -> Result<()> {
        let required = self.config.required_len()?;
        let len = self.leds.len();
        if len < required {
            return Err(Error::BufferTooSmall { required, len });
        }
        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &Seg7Config {
        &self.config
    }

    #[must_use]
    pub const fn digit_count(&self) -> u8 {
        self.config.digit_count
    }

    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.config.foreground
    }

    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.config.background
    }

    #[must_use]
    pub const fn background_mode(&self) -> BackgroundMode {
        self.config.background_mode
    }

    /// Bytes per LED record of the underlying buffer.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.leds.stride()
    }

    /// The caller's buffer.
    #[must_use]
    pub fn leds(&self) -> &B {
        &*self.leds
    }

    /// The caller's buffer, for painting anything outside the display.
    pub fn leds_mut(&mut self) -> &mut B {
        &mut *self.leds
    }

    /// Releases the buffer.
    #[must_use]
    pub fn into_inner(self) -> &'a mut B {
        self.leds
    }

    pub const fn set_foreground(&mut self, color: Rgb) {
        self.config.foreground = color;
    }

    pub const fn set_background(&mut self, color: Rgb) {
        self.config.background = color;
    }

    pub fn set_background_mode(&mut self, mode: BackgroundMode) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Seg7Display: background mode {}", mode);
        self.config.background_mode = mode;
    }

    /// Changes the LEDs per segment. Later paints use the new geometry;
    /// nothing already in the buffer moves.
    pub fn set_leds_per_segment(&mut self, leds_per_segment: u8) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Seg7Display: {} LEDs per segment", leds_per_segment);
        self.config.leds_per_segment = leds_per_segment;
    }

    /// Paints a raw segment pattern (bit 0 = A ... bit 7 = decimal point).
    ///
    /// Lit segments get the foreground; unlit ones follow the background mode.
    /// Ignored if `position` is not a digit of this display.
    pub fn show_segments(&mut self, pattern: u8, position: u8) {
        if position >= self.config.digit_count {
            return;
        }
        for segment in Segment::ALL {
            if segment.is_lit_in(pattern) {
                self.fill_segment(position, segment, self.config.foreground);
                continue;
            }
            match self.config.background_mode {
                BackgroundMode::Overwrite => {
                    self.fill_segment(position, segment, self.config.background);
                }
                BackgroundMode::Preserve => {}
                // TODO: mix foreground into the existing color once a blend factor is configurable.
                BackgroundMode::Blend => {}
            }
        }
    }

    /// Shows a decimal digit; values above 9 show as 9.
    pub fn show_digit(&mut self, digit: u8, position: u8, show_dp: bool) {
        self.show_segments(with_dp(glyph::pattern_for_digit(digit), show_dp), position);
    }

    /// Shows a character from the glyph table; unknown characters are blank.
    pub fn show_char(&mut self, char: char, position: u8, show_dp: bool) {
        self.show_segments(with_dp(glyph::pattern_for(char), show_dp), position);
    }

    /// Shows a signed number right-aligned across all digits.
    ///
    /// Without `leading_zeros`, unused positions are cleared and a negative
    /// number gets a `-` just left of its most significant digit, if there is
    /// room. With `leading_zeros`, unused positions show `0` and no sign is
    /// shown. Digits that don't fit are cut from the left.
    pub fn show_number(&mut self, number: i32, leading_zeros: bool) {
        let negative = number < 0;
        let digits = decimal_digits(number.unsigned_abs());

        for (rank, position) in (0..self.config.digit_count).rev().enumerate() {
            if let Some(&digit) = digits.get(rank) {
                self.show_digit(digit, position, false);
            } else if leading_zeros {
                self.show_digit(0, position, false);
            } else if negative && rank == digits.len() {
                self.show_char('-', position, false);
            } else {
                self.clear_digit(position);
            }
        }
    }

    /// Shows `value` in hex in the rightmost `digits` positions and clears the rest.
    ///
    /// `digits == 0` means every position; more than `digit_count` is clamped.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "masked to a nibble before the cast"
    )]
    pub fn show_hex(&mut self, value: u32, digits: u8) {
        let digit_count = self.config.digit_count;
        let digits = match digits {
            0 => digit_count,
            digits => digits.min(digit_count),
        };

        let mut remaining = value;
        for (rank, position) in (0..digit_count).rev().enumerate() {
            if rank < usize::from(digits) {
                self.show_segments(glyph::pattern_for_nibble((remaining & 0x0F) as u8), position);
                remaining = remaining.checked_shr(4).unwrap_or(0);
            } else {
                self.clear_digit(position);
            }
        }
    }

    /// Shows `text` left-to-right from position 0.
    ///
    /// A `.` lights the decimal point of the character before it. Characters
    /// past the last position are dropped and positions after the text are
    /// cleared.
    pub fn show_text(&mut self, text: &str) {
        let digit_count = self.config.digit_count;
        let mut position: u8 = 0;
        let mut chars = text.chars().peekable();

        while let Some(char) = chars.next() {
            if position >= digit_count {
                break;
            }
            let pattern = if char == '.' {
                SEG_DP
            } else {
                with_dp(glyph::pattern_for(char), chars.next_if_eq(&'.').is_some())
            };
            self.show_segments(pattern, position);
            position = position.saturating_add(1);
        }
        for position in position..digit_count {
            self.clear_digit(position);
        }
    }

    /// Paints one step of a spinning indicator on the outer ring.
    ///
    /// Call with successive `step` values at whatever rate the animation needs.
    pub fn spin_step(&mut self, step: u8, position: u8) {
        self.show_segments(glyph::spin_segment(step), position);
    }

    /// Clears every digit.
    pub fn clear(&mut self) {
        for position in 0..self.config.digit_count {
            self.clear_digit(position);
        }
    }

    /// Paints every LED of a digit with the background.
    ///
    /// Does nothing under [`BackgroundMode::Preserve`], which never paints
    /// unlit LEDs, or if `position` is not a digit of this display.
    pub fn clear_digit(&mut self, position: u8) {
        if position >= self.config.digit_count
            || self.config.background_mode == BackgroundMode::Preserve
        {
            return;
        }
        for segment in Segment::ALL {
            self.fill_segment(position, segment, self.config.background);
        }
    }

    /// Turns the decimal point of a digit on or off, leaving its other segments alone.
    ///
    /// Turning it off paints the background, except under
    /// [`BackgroundMode::Preserve`], where it does nothing.
    pub fn set_decimal_point(&mut self, position: u8, on: bool) {
        if position >= self.config.digit_count {
            return;
        }
        if on {
            self.fill_segment(position, Segment::DecimalPoint, self.config.foreground);
        } else if self.config.background_mode != BackgroundMode::Preserve {
            self.fill_segment(position, Segment::DecimalPoint, self.config.background);
        }
    }

    /// Reads back which segments of a digit currently show the foreground.
    ///
    /// A segment counts as lit when every one of its LEDs holds the
    /// foreground color, so the answer is only meaningful while foreground and
    /// background differ. `None` if `position` is not a digit of this display.
    #[must_use]
    pub fn segment_pattern(&self, position: u8) -> Option<u8> {
        if position >= self.config.digit_count {
            return None;
        }
        let pattern = Segment::ALL
            .into_iter()
            .filter(|&segment| {
                let mut leds = self.config.segment_leds(position, segment);
                !leds.is_empty()
                    && leds.all(|index| self.leds.rgb(index) == Some(self.config.foreground))
            })
            .fold(0, |pattern, segment| pattern | segment.bit());
        Some(pattern)
    }

    fn fill_segment(&mut self, position: u8, segment: Segment, color: Rgb) {
        for index in self.config.segment_leds(position, segment) {
            self.leds.set_rgb(index, color);
        }
    }
}

const fn with_dp(pattern: u8, show_dp: bool) -> u8 {
    if show_dp { pattern | SEG_DP } else { pattern }
}

/// Decimal digits of `number`, least significant first. Zero is one digit.
#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "modulo and division by 10 are required for digit extraction"
)]
fn decimal_digits(mut number: u32) -> Vec<u8, MAX_NUMBER_DIGITS> {
    let mut digits = Vec::new();
    loop {
        if digits.push((number % 10) as u8).is_err() {
            break;
        }
        number /= 10;
        if number == 0 {
            break;
        }
    }
    digits
}
