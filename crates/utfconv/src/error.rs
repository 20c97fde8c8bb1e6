use thiserror::Error;

/// A conversion that stopped before consuming its whole source.
///
/// The core entry points never return this directly; they report a
/// [`Completion`](crate::Completion) that callers are free to ignore. It is
/// produced by [`Transcoded::into_result`](crate::Transcoded::into_result)
/// and by the owned helpers such as `Utf16::encode_to_vec`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    /// The source does not start a recognized sequence at `offset`.
    #[error("malformed input at source offset {offset}")]
    Malformed {
        /// Offset of the offending source unit.
        offset: usize,
    },
    /// A code point the destination cannot represent, with
    /// [`InvalidCodePointMode::Stop`](crate::InvalidCodePointMode::Stop).
    #[error("code point at source offset {offset} is not representable in the destination encoding")]
    InvalidCodePoint {
        /// Offset of the first unit of the offending code point.
        offset: usize,
    },
    /// The destination slice was too short.
    #[error("destination full at source offset {offset}: {written} of {available} units written")]
    OutputFull {
        /// Offset of the first unit of the code point that did not fit.
        offset: usize,
        /// Units written before stopping.
        written: usize,
        /// Length of the destination.
        available: usize,
    },
}
