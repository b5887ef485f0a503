//! Caller-owned LED buffers the display paints into.
//!
//! A [`Seg7Display`](crate::Seg7Display) never allocates pixels. It addresses a
//! buffer the caller already has (the same one it later hands to its LED
//! strip driver) through the [`LedBuffer`] trait:
//!
//! - `[RGB8]` / `[RGB8; N]` for plain RGB strips (3 bytes per LED),
//! - `[RGBW<u8>]` / `[RGBW<u8>; N]` for RGBW strips (4 bytes per LED, the white
//!   channel is never touched),
//! - [`ByteStrideBuffer`] for a raw byte array with an explicit per-LED stride.
//!
//! Only the first three channels of a record are written, in R, G, B order.

use core::mem::size_of;

/// RGB color constants.
pub use smart_leds::colors;
use smart_leds::{RGB8, RGBW};

use crate::{Error, Result};

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// One fixed-size color record in an LED buffer.
pub trait LedRecord {
    /// The record's red, green and blue channels.
    fn rgb(&self) -> Rgb;

    /// Overwrites red, green and blue. Any further channel is left alone.
    fn set_rgb(&mut self, color: Rgb);
}

impl LedRecord for RGB8 {
    fn rgb(&self) -> Rgb {
        *self
    }

    fn set_rgb(&mut self, color: Rgb) {
        *self = color;
    }
}

impl LedRecord for RGBW<u8> {
    fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    fn set_rgb(&mut self, color: Rgb) {
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
    }
}

/// An indexed sequence of LED color records.
///
/// Out-of-range indexes read as `None` and ignore writes.
pub trait LedBuffer {
    /// Number of LED records.
    fn len(&self) -> usize;

    /// Whether the buffer has no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes per LED record.
    fn stride(&self) -> usize;

    /// Color of the record at `index`.
    fn rgb(&self, index: usize) -> Option<Rgb>;

    /// Writes `color` to the record at `index`.
    fn set_rgb(&mut self, index: usize, color: Rgb);
}

impl<T: LedRecord> LedBuffer for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn stride(&self) -> usize {
        size_of::<T>()
    }

    fn rgb(&self, index: usize) -> Option<Rgb> {
        self.get(index).map(LedRecord::rgb)
    }

    fn set_rgb(&mut self, index: usize, color: Rgb) {
        if let Some(record) = self.get_mut(index) {
            record.set_rgb(color);
        }
    }
}

impl<T: LedRecord, const N: usize> LedBuffer for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn stride(&self) -> usize {
        size_of::<T>()
    }

    fn rgb(&self, index: usize) -> Option<Rgb> {
        self.as_slice().rgb(index)
    }

    fn set_rgb(&mut self, index: usize, color: Rgb) {
        self.as_mut_slice().set_rgb(index, color);
    }
}

/// A raw byte array viewed as LED records of `stride` bytes each.
///
/// For buffers that are not typed as `RGB8`/`RGBW`, e.g. a DMA byte buffer or
/// a foreign pixel struct. Each record starts with its red, green and blue
/// bytes; trailing bytes of a partial record at the end are not addressable.
///
/// ```
/// use led_seg7::{ByteStrideBuffer, LedBuffer, Rgb};
///
/// let mut bytes = [0_u8; 8];
/// let mut leds = ByteStrideBuffer::new(&mut bytes, 4)?;
/// leds.set_rgb(1, Rgb::new(1, 2, 3));
/// assert_eq!(bytes, [0, 0, 0, 0, 1, 2, 3, 0]);
/// # Ok::<(), led_seg7::Error>(())
/// ```
#[derive(Debug)]
pub struct ByteStrideBuffer<'a> {
    bytes: &'a mut [u8],
    stride: usize,
}

impl<'a> ByteStrideBuffer<'a> {
    /// Wraps `bytes` as records of `stride` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrideTooSmall`] if `stride` cannot hold R, G and B.
    pub const fn new(bytes: &'a mut [u8], stride: usize) -> Result<Self> {
        if stride < 3 {
            return Err(Error::StrideTooSmall { stride });
        }
        Ok(Self { bytes, stride })
    }

    /// The underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    fn record(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.stride)?;
        self.bytes.get(start..start.checked_add(3)?)
    }

    fn record_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let start = index.checked_mul(self.stride)?;
        self.bytes.get_mut(start..start.checked_add(3)?)
    }
}

impl LedBuffer for ByteStrideBuffer<'_> {
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "stride is at least 3, checked in new"
    )]
    fn len(&self) -> usize {
        self.bytes.len() / self.stride
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn rgb(&self, index: usize) -> Option<Rgb> {
        match *self.record(index)? {
            [r, g, b] => Some(Rgb::new(r, g, b)),
            _ => None,
        }
    }

    fn set_rgb(&mut self, index: usize, color: Rgb) {
        if let Some([r, g, b]) = self.record_mut(index) {
            *r = color.r;
            *g = color.g;
            *b = color.b;
        }
    }
}
