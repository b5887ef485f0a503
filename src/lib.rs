//! Seven-segment digits drawn with addressable (WS2812-style) LEDs.
//!
//! A [`Seg7Display`] paints digits, hex, text and spinner frames into an LED
//! buffer you already own and later send to the strip yourself. Only the
//! display's own LEDs are touched, so the buffer can be shared with other
//! effects.
#![cfg_attr(not(test), no_std)]

mod error;
pub mod glyph;
pub mod led_buffer;
mod seg7_display;

// Re-export commonly used items
pub use error::{Error, Result};
pub use glyph::{Segment, pattern_for, pattern_for_digit};
pub use led_buffer::{ByteStrideBuffer, LedBuffer, LedRecord, Rgb, colors};
pub use seg7_display::{BackgroundMode, MAX_NUMBER_DIGITS, Seg7Config, Seg7Display};
