//! UTF-32: every code point is one unit, stored verbatim.
//!
//! The codec does not check the Unicode ceiling. Values above U+10FFFF are
//! carried through unchanged and only become invalid once they reach an
//! encoding that cannot hold them; see
//! [`InvalidCodePointMode`](crate::InvalidCodePointMode).

use crate::{codec::Codec, utf8::utf8_peer};

/// The UTF-32 codec, in native byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

impl Codec for Utf32 {
    type Unit = u32;

    const NAME: &'static str = "UTF-32";

    fn count_code_units(_code_point: u32) -> usize {
        1
    }

    fn from_code_point(code_point: u32, dst: &mut [u32]) -> usize {
        dst[0] = code_point;
        1
    }

    fn next_code_point(src: &[u32]) -> Option<(u32, usize)> {
        src.first().map(|&unit| (unit, 1))
    }
}

utf8_peer!(Utf32, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Completion, InvalidCodePointMode, TranscodeOptions};

    #[test]
    fn identity_for_any_value() {
        for value in [0, 0x41, 0xD800, 0x10_FFFF, 0x11_0000, u32::MAX] {
            let mut buf = [0u32; 1];
            assert_eq!(Utf32::count_code_units(value), 1);
            assert_eq!(Utf32::from_code_point(value, &mut buf), 1);
            assert_eq!(Utf32::next_code_point(&buf), Some((value, 1)));
        }
    }

    #[test]
    fn out_of_range_values_are_skipped_by_default() {
        let src = [0x41, 0x11_0000, 0x42];
        let mut utf8 = [0u8; 2];
        let converted = Utf32::decode(&src, &mut utf8);
        assert_eq!(converted.written, 2);
        assert_eq!(converted.read, 3);
        assert_eq!(converted.completion, Completion::Complete);
        assert_eq!(&utf8, b"AB");
    }

    #[test]
    fn out_of_range_values_can_be_replaced() {
        let options = TranscodeOptions {
            invalid_code_point: InvalidCodePointMode::Replace,
            ..Default::default()
        };
        let src = [0x41, 0x11_0000, 0x42];
        let measured = Utf32::decode_len_with(&src, &options);
        assert_eq!(measured.written, 5);

        let mut utf8 = [0u8; 5];
        let converted = Utf32::decode_with(&src, &mut utf8, &options);
        assert_eq!(converted, measured);
        assert_eq!(&utf8, "A\u{FFFD}B".as_bytes());
    }

    #[test]
    fn out_of_range_values_can_stop_the_pass() {
        let options = TranscodeOptions {
            invalid_code_point: InvalidCodePointMode::Stop,
            ..Default::default()
        };
        let src = [0x41, 0x11_0000, 0x42];
        let measured = Utf32::decode_len_with(&src, &options);
        assert_eq!(measured.written, 1);
        assert_eq!(measured.read, 1);
        assert_eq!(
            measured.completion,
            Completion::InvalidCodePoint { offset: 1 }
        );
    }
}
