use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Painting never returns these. They come only from the opt-in checks:
/// [`Seg7Display::check_fits`](crate::Seg7Display::check_fits),
/// [`Seg7Config::required_len`](crate::Seg7Config::required_len), and
/// [`ByteStrideBuffer::new`](crate::ByteStrideBuffer::new).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("LED buffer holds {len} records but the display needs {required}")]
    BufferTooSmall { required: usize, len: usize },

    #[display("Display geometry does not fit in usize")]
    GeometryOverflow,

    #[display("Pixel stride {stride} is smaller than the 3 RGB bytes")]
    StrideTooSmall { stride: usize },
}
