use crate::error::TranscodeError;

/// How a conversion pass ended.
///
/// Every variant other than [`Complete`](Completion::Complete) carries the
/// source offset, in source code units, of the first unit that was not
/// converted. Everything before it was converted in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completion {
    /// The whole source range was consumed.
    Complete,
    /// The source does not start a recognized sequence at `offset`.
    Malformed {
        /// Offset of the offending source unit.
        offset: usize,
    },
    /// The code point starting at `offset` cannot be represented in the
    /// destination encoding and the options ask to stop.
    InvalidCodePoint {
        /// Offset of the first unit of the offending code point.
        offset: usize,
    },
    /// The destination has no room for the code point starting at `offset`.
    ///
    /// Only a writing pass can end this way.
    OutputFull {
        /// Offset of the first unit of the code point that did not fit.
        offset: usize,
    },
}

/// Result of a measuring or writing pass.
///
/// The measuring and the writing pass over the same source, with the same
/// options and a large enough destination, produce equal values.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcoded {
    /// Destination code units produced (or that would be produced).
    pub written: usize,
    /// Source code units consumed.
    pub read: usize,
    /// Why the pass stopped.
    pub completion: Completion,
}

impl Transcoded {
    pub(crate) const fn new(written: usize, read: usize, completion: Completion) -> Self {
        Self {
            written,
            read,
            completion,
        }
    }

    /// Whether the whole source was consumed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.completion, Completion::Complete)
    }

    /// Converts a halted pass into an error.
    ///
    /// `available` is reported for [`Completion::OutputFull`] and should be
    /// the destination length of the writing pass.
    ///
    /// # Errors
    ///
    /// Returns the [`TranscodeError`] matching any completion other than
    /// [`Completion::Complete`].
    pub fn into_result(self, available: usize) -> Result<Self, TranscodeError> {
        match self.completion {
            Completion::Complete => Ok(self),
            Completion::Malformed { offset } => Err(TranscodeError::Malformed { offset }),
            Completion::InvalidCodePoint { offset } => {
                Err(TranscodeError::InvalidCodePoint { offset })
            }
            Completion::OutputFull { offset } => Err(TranscodeError::OutputFull {
                offset,
                written: self.written,
                available,
            }),
        }
    }
}
