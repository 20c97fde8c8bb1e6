/// What to do with a code point the destination encoding cannot represent.
///
/// Only UTF-8 and UTF-16 have invalid code points (anything above
/// U+10FFFF). Such values reach a conversion when a UTF-32 source carries
/// them verbatim, or when legacy 5/6-byte UTF-8 input is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidCodePointMode {
    /// Consume the code point and write nothing.
    ///
    /// The output is shorter than the input would suggest and no trace of
    /// the dropped value remains.
    #[default]
    Skip,
    /// Write U+FFFD REPLACEMENT CHARACTER in its place.
    Replace,
    /// Halt the conversion at the offending code point and report
    /// [`Completion::InvalidCodePoint`](crate::Completion::InvalidCodePoint).
    Stop,
}

/// Configuration options for a conversion pass.
///
/// The same options must be used for the measuring call and the writing call
/// of a conversion, otherwise the two passes may disagree on the length.
///
/// # Examples
///
/// ```rust
/// use utfconv::{InvalidCodePointMode, TranscodeOptions, Utf32};
///
/// let options = TranscodeOptions {
///     invalid_code_point: InvalidCodePointMode::Replace,
///     ..Default::default()
/// };
/// let measured = Utf32::decode_len_with(&[0x41, 0x11_0000], &options);
/// assert_eq!(measured.written, 1 + 3);
/// ```
///
/// # Default
///
/// Legacy UTF-8 is rejected, continuation tags are not checked and invalid
/// code points are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranscodeOptions {
    /// Whether UTF-8 input may use the legacy 5- and 6-byte sequence forms.
    ///
    /// These forms predate RFC 3629 and encode values up to 0x7FFF_FFFF,
    /// beyond the Unicode range. When accepted, the decoded value is then
    /// subject to [`invalid_code_point`](Self::invalid_code_point) on the
    /// destination side. No encoder ever produces them.
    ///
    /// # Default
    ///
    /// `false`
    pub extended_utf8: bool,

    /// Whether UTF-8 input must carry the `10` tag on every continuation
    /// byte.
    ///
    /// When `false`, a continuation byte contributes its low six bits
    /// whatever its high bits are, and only an unrecognized leading byte (or
    /// a sequence running past the end of the input) is malformed. When
    /// `true`, a continuation byte with any other tag makes the sequence
    /// malformed at its leading byte.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_continuation: bool,

    /// Policy for code points the destination encoding cannot represent.
    ///
    /// # Default
    ///
    /// [`InvalidCodePointMode::Skip`]
    pub invalid_code_point: InvalidCodePointMode,
}
