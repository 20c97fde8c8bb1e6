//! UTF-8: one to four bytes per code point.
//!
//! Layout
//! - A one-byte sequence is plain ASCII, `0xxxxxxx`.
//! - Longer sequences start with a leading byte whose run of one-bits gives
//!   the sequence length, followed by a zero and the high payload bits:
//!   `110xxxxx`, `1110xxxx`, `11110xxx`.
//! - Every following byte is a continuation byte, `10xxxxxx`, carrying six
//!   payload bits, most significant first.
//!
//! Hub
//! - This module also hosts the conversion entry points between UTF-8 and
//!   any other [`Codec`]: [`Utf8::decode`] (UTF-8 → other) and
//!   [`Utf8::encode`] (other → UTF-8), each with a measuring twin
//!   ([`Utf8::decode_len`], [`Utf8::encode_len`]).
//! - [`Utf16`](crate::Utf16) and [`Utf32`](crate::Utf32) expose the same
//!   conversions from their own side through `utf8_peer!`.
//!
//! Legacy forms
//! - The 5- and 6-byte leading patterns (`111110xx`, `1111110x`) from the
//!   pre-RFC 3629 definition are only read by
//!   [`Utf8::next_code_point_extended`], which the hub uses when
//!   [`TranscodeOptions::extended_utf8`] is set. Nothing ever writes them.
//! - Readers take the low six bits of each continuation byte without looking
//!   at its tag; only the leading byte decides whether a sequence is
//!   recognized. [`TranscodeOptions::strict_continuation`] adds the tag check.

mod transcode;

pub(crate) use transcode::transcode;

use crate::{
    codec::Codec,
    options::TranscodeOptions,
    outcome::Transcoded,
    repr::{Utf8Bytes, Utf8BytesMut},
};

const CONTINUATION_TAG: u8 = 0b1000_0000;
const PAYLOAD_MASK: u8 = 0b0011_1111;
const PAYLOAD_BITS: usize = 6;

/// The UTF-8 codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl Codec for Utf8 {
    type Unit = u8;

    const NAME: &'static str = "UTF-8";

    fn count_code_units(code_point: u32) -> usize {
        match code_point {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            0x1_0000..=0x10_FFFF => 4,
            _ => 0,
        }
    }

    fn from_code_point(code_point: u32, dst: &mut [u8]) -> usize {
        match Self::count_code_units(code_point) {
            0 => 0,
            #[allow(clippy::cast_possible_truncation)]
            1 => {
                dst[0] = code_point as u8;
                1
            }
            len => {
                write_sequence(code_point, &mut dst[..len]);
                len
            }
        }
    }

    fn next_code_point(src: &[u8]) -> Option<(u32, usize)> {
        read_sequence(src, 4, false)
    }
}

impl Utf8 {
    /// Like [`Codec::next_code_point`], but also accepts the legacy 5- and
    /// 6-byte sequences, which decode to values up to 0x7FFF_FFFF.
    #[must_use]
    pub fn next_code_point_extended(src: &[u8]) -> Option<(u32, usize)> {
        read_sequence(src, 6, false)
    }

    /// Reads the code point at the front of `src` the way a conversion with
    /// `options` does.
    ///
    /// [`TranscodeOptions::extended_utf8`] admits the legacy 5- and 6-byte
    /// forms; [`TranscodeOptions::strict_continuation`] rejects a sequence
    /// whose continuation bytes lack the `10` tag.
    ///
    /// ```rust
    /// use utfconv::{TranscodeOptions, Utf8};
    ///
    /// let strict = TranscodeOptions {
    ///     strict_continuation: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(Utf8::next_code_point_with(&[0xC3, 0x41], &Default::default()), Some((0xC1, 2)));
    /// assert_eq!(Utf8::next_code_point_with(&[0xC3, 0x41], &strict), None);
    /// ```
    #[must_use]
    pub fn next_code_point_with(src: &[u8], options: &TranscodeOptions) -> Option<(u32, usize)> {
        let max_len = if options.extended_utf8 { 6 } else { 4 };
        read_sequence(src, max_len, options.strict_continuation)
    }

    /// Measures the conversion of UTF-8 `src` into `E`.
    ///
    /// `written` of the result is the number of `E` units a destination needs
    /// for [`Utf8::decode`].
    ///
    /// `src` accepts several byte representations (see [`crate::repr`]), so an
    /// untyped integer array literal cannot be inferred: write `[0x61_u8, …]`
    /// or a byte string `b"…"`.
    ///
    /// ```rust
    /// use utfconv::{Utf16, Utf8};
    ///
    /// let measured = Utf8::decode_len::<Utf16>("a\u{1F917}");
    /// assert_eq!(measured.written, 3);
    /// assert!(measured.is_complete());
    /// ```
    pub fn decode_len<E: Codec>(src: &(impl Utf8Bytes + ?Sized)) -> Transcoded {
        Self::decode_len_with::<E>(src, &TranscodeOptions::default())
    }

    /// [`Utf8::decode_len`] with explicit options.
    pub fn decode_len_with<E: Codec>(
        src: &(impl Utf8Bytes + ?Sized),
        options: &TranscodeOptions,
    ) -> Transcoded {
        transcode::<Self, E>(
            src.utf8_bytes(),
            None,
            |s: &[u8]| Self::next_code_point_with(s, options),
            options,
        )
    }

    /// Converts UTF-8 `src` into `E` units written to the front of `dst`.
    ///
    /// Size `dst` with [`Utf8::decode_len`] first. A short destination stops
    /// the pass with [`Completion::OutputFull`](crate::Completion::OutputFull)
    /// before the first code point that does not fit.
    pub fn decode<E: Codec>(src: &(impl Utf8Bytes + ?Sized), dst: &mut [E::Unit]) -> Transcoded {
        Self::decode_with::<E>(src, dst, &TranscodeOptions::default())
    }

    /// [`Utf8::decode`] with explicit options.
    pub fn decode_with<E: Codec>(
        src: &(impl Utf8Bytes + ?Sized),
        dst: &mut [E::Unit],
        options: &TranscodeOptions,
    ) -> Transcoded {
        transcode::<Self, E>(
            src.utf8_bytes(),
            Some(dst),
            |s: &[u8]| Self::next_code_point_with(s, options),
            options,
        )
    }

    /// Measures the conversion of `E` units in `src` into UTF-8.
    pub fn encode_len<E: Codec>(src: &[E::Unit]) -> Transcoded {
        Self::encode_len_with::<E>(src, &TranscodeOptions::default())
    }

    /// [`Utf8::encode_len`] with explicit options.
    pub fn encode_len_with<E: Codec>(src: &[E::Unit], options: &TranscodeOptions) -> Transcoded {
        transcode::<E, Self>(src, None, E::next_code_point, options)
    }

    /// Converts `E` units in `src` into UTF-8 written to the front of `dst`.
    ///
    /// `dst` may be any of the interchangeable byte representations in
    /// [`crate::repr`].
    pub fn encode<E: Codec>(
        src: &[E::Unit],
        dst: &mut (impl Utf8BytesMut + ?Sized),
    ) -> Transcoded {
        Self::encode_with::<E>(src, dst, &TranscodeOptions::default())
    }

    /// [`Utf8::encode`] with explicit options.
    pub fn encode_with<E: Codec>(
        src: &[E::Unit],
        dst: &mut (impl Utf8BytesMut + ?Sized),
        options: &TranscodeOptions,
    ) -> Transcoded {
        transcode::<E, Self>(src, Some(dst.utf8_bytes_mut()), E::next_code_point, options)
    }
}

/// Writes a multi-byte sequence filling all of `dst`.
#[allow(clippy::cast_possible_truncation)]
fn write_sequence(code_point: u32, dst: &mut [u8]) {
    let len = dst.len();
    let rest = len - 1;
    // `len` one-bits followed by a zero
    let lead_tag = !(0xFF_u8 >> len);

    dst[0] = (code_point >> (PAYLOAD_BITS * rest)) as u8 | lead_tag;
    for (i, unit) in dst[1..].iter_mut().enumerate() {
        let shift = PAYLOAD_BITS * (rest - 1 - i);
        *unit = ((code_point >> shift) as u8 & PAYLOAD_MASK) | CONTINUATION_TAG;
    }
}

/// Reads one sequence of at most `max_len` bytes.
///
/// Continuation bytes contribute their low six bits whatever their high bits
/// are, unless `strict` asks for the `10` tag.
fn read_sequence(src: &[u8], max_len: usize, strict: bool) -> Option<(u32, usize)> {
    let &lead = src.first()?;
    let len = lead.leading_ones() as usize;
    if len == 0 {
        return Some((u32::from(lead), 1));
    }
    // a lone continuation byte, or longer than allowed
    if len == 1 || len > max_len {
        return None;
    }

    let tail = src.get(1..len)?;
    let mut code_point = u32::from(lead & (0x7F >> len));
    for &unit in tail {
        if strict && unit & !PAYLOAD_MASK != CONTINUATION_TAG {
            return None;
        }
        code_point = (code_point << PAYLOAD_BITS) | u32::from(unit & PAYLOAD_MASK);
    }
    Some((code_point, len))
}

// use macro_rules to give Utf16 and Utf32 their side of the hub: `encode*`
// is UTF-8 → self, `decode*` is self → UTF-8.
macro_rules! utf8_peer {
    ($codec:ty, $unit:ty) => {
        impl $codec {
            /// Measures the conversion of UTF-8 `src` into this encoding.
            pub fn encode_len(src: &(impl $crate::repr::Utf8Bytes + ?Sized)) -> $crate::Transcoded {
                $crate::Utf8::decode_len::<Self>(src)
            }

            /// Measures the conversion of UTF-8 `src` with explicit options.
            pub fn encode_len_with(
                src: &(impl $crate::repr::Utf8Bytes + ?Sized),
                options: &$crate::TranscodeOptions,
            ) -> $crate::Transcoded {
                $crate::Utf8::decode_len_with::<Self>(src, options)
            }

            /// Converts UTF-8 `src` into this encoding, written to `dst`.
            pub fn encode(
                src: &(impl $crate::repr::Utf8Bytes + ?Sized),
                dst: &mut [$unit],
            ) -> $crate::Transcoded {
                $crate::Utf8::decode::<Self>(src, dst)
            }

            /// Converts UTF-8 `src` with explicit options.
            pub fn encode_with(
                src: &(impl $crate::repr::Utf8Bytes + ?Sized),
                dst: &mut [$unit],
                options: &$crate::TranscodeOptions,
            ) -> $crate::Transcoded {
                $crate::Utf8::decode_with::<Self>(src, dst, options)
            }

            /// Measures the conversion of `src` into UTF-8.
            pub fn decode_len(src: &[$unit]) -> $crate::Transcoded {
                $crate::Utf8::encode_len::<Self>(src)
            }

            /// Measures the conversion of `src` into UTF-8 with explicit options.
            pub fn decode_len_with(
                src: &[$unit],
                options: &$crate::TranscodeOptions,
            ) -> $crate::Transcoded {
                $crate::Utf8::encode_len_with::<Self>(src, options)
            }

            /// Converts `src` into UTF-8, written to `dst`.
            pub fn decode(
                src: &[$unit],
                dst: &mut (impl $crate::repr::Utf8BytesMut + ?Sized),
            ) -> $crate::Transcoded {
                $crate::Utf8::encode::<Self>(src, dst)
            }

            /// Converts `src` into UTF-8 with explicit options.
            pub fn decode_with(
                src: &[$unit],
                dst: &mut (impl $crate::repr::Utf8BytesMut + ?Sized),
                options: &$crate::TranscodeOptions,
            ) -> $crate::Transcoded {
                $crate::Utf8::encode_with::<Self>(src, dst, options)
            }

            /// Measures, allocates and converts UTF-8 `src` in one call.
            ///
            /// # Errors
            ///
            /// Fails if the source is malformed, or holds a code point this
            /// encoding cannot represent under
            /// [`InvalidCodePointMode::Stop`](crate::InvalidCodePointMode::Stop).
            #[cfg(feature = "alloc")]
            pub fn encode_to_vec_with(
                src: &(impl $crate::repr::Utf8Bytes + ?Sized),
                options: &$crate::TranscodeOptions,
            ) -> Result<alloc::vec::Vec<$unit>, $crate::TranscodeError> {
                let measured = Self::encode_len_with(src, options).into_result(0)?;
                let mut out = alloc::vec![<$unit>::default(); measured.written];
                let converted = Self::encode_with(src, &mut out, options).into_result(out.len())?;
                debug_assert_eq!(converted, measured, "measuring and writing passes disagree");
                Ok(out)
            }

            /// [`encode_to_vec_with`](Self::encode_to_vec_with) with default options.
            ///
            /// # Errors
            ///
            /// Fails if the source is malformed.
            #[cfg(feature = "alloc")]
            pub fn encode_to_vec(
                src: &(impl $crate::repr::Utf8Bytes + ?Sized),
            ) -> Result<alloc::vec::Vec<$unit>, $crate::TranscodeError> {
                Self::encode_to_vec_with(src, &$crate::TranscodeOptions::default())
            }

            /// Measures, allocates and converts `src` into UTF-8 in one call.
            ///
            /// The result is a [`BString`](bstr::BString): lone surrogates
            /// pass through as their three-byte form, which is not valid
            /// UTF-8.
            ///
            /// # Errors
            ///
            /// Fails if `src` holds a code point UTF-8 cannot represent under
            /// [`InvalidCodePointMode::Stop`](crate::InvalidCodePointMode::Stop).
            #[cfg(feature = "alloc")]
            pub fn decode_to_bstring_with(
                src: &[$unit],
                options: &$crate::TranscodeOptions,
            ) -> Result<bstr::BString, $crate::TranscodeError> {
                let measured = Self::decode_len_with(src, options).into_result(0)?;
                let mut out = alloc::vec![0_u8; measured.written];
                let converted = Self::decode_with(src, &mut out, options).into_result(out.len())?;
                debug_assert_eq!(converted, measured, "measuring and writing passes disagree");
                Ok(bstr::BString::from(out))
            }

            /// [`decode_to_bstring_with`](Self::decode_to_bstring_with) with
            /// default options.
            ///
            /// # Errors
            ///
            /// Never fails in practice: every unit sequence is readable and
            /// unrepresentable values are skipped by default.
            #[cfg(feature = "alloc")]
            pub fn decode_to_bstring(src: &[$unit]) -> Result<bstr::BString, $crate::TranscodeError> {
                Self::decode_to_bstring_with(src, &$crate::TranscodeOptions::default())
            }
        }
    };
}

pub(crate) use utf8_peer;
