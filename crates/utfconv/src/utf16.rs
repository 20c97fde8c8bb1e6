//! UTF-16: one unit inside the Basic Multilingual Plane, a surrogate pair
//! above it.
//!
//! A code point above U+FFFF is offset by 0x10000 and split into two 10-bit
//! halves: the high half goes into a high surrogate (`110110xx xxxxxxxx`),
//! the low half into a low surrogate (`110111xx xxxxxxxx`).
//!
//! Reading is lenient: a unit that is not the start of a well-formed pair is
//! returned as-is, so lone surrogates survive a round trip through UTF-8
//! unchanged (as their three-byte form).

use crate::{codec::Codec, utf8::utf8_peer};

const SURROGATE_OFFSET: u32 = 0x1_0000;
const HIGH_SURROGATE_TAG: u16 = 0b1101_1000_0000_0000;
const LOW_SURROGATE_TAG: u16 = 0b1101_1100_0000_0000;
const SURROGATE_PAYLOAD_MASK: u16 = 0b0000_0011_1111_1111;
const SURROGATE_TAG_MASK: u16 = !SURROGATE_PAYLOAD_MASK;

/// The UTF-16 codec, in native byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Codec for Utf16 {
    type Unit = u16;

    const NAME: &'static str = "UTF-16";

    fn count_code_units(code_point: u32) -> usize {
        match code_point {
            0..=0xFFFF => 1,
            0x1_0000..=0x10_FFFF => 2,
            _ => 0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_code_point(code_point: u32, dst: &mut [u16]) -> usize {
        match Self::count_code_units(code_point) {
            1 => {
                dst[0] = code_point as u16;
                1
            }
            2 => {
                let dst = &mut dst[..2];
                let offset = code_point - SURROGATE_OFFSET;
                dst[0] = ((offset >> 10) as u16 & SURROGATE_PAYLOAD_MASK) | HIGH_SURROGATE_TAG;
                dst[1] = (offset as u16 & SURROGATE_PAYLOAD_MASK) | LOW_SURROGATE_TAG;
                2
            }
            _ => 0,
        }
    }

    fn next_code_point(src: &[u16]) -> Option<(u32, usize)> {
        match *src {
            [] => None,
            [high, low, ..]
                if high & SURROGATE_TAG_MASK == HIGH_SURROGATE_TAG
                    && low & SURROGATE_TAG_MASK == LOW_SURROGATE_TAG =>
            {
                let payload = (u32::from(high & SURROGATE_PAYLOAD_MASK) << 10)
                    | u32::from(low & SURROGATE_PAYLOAD_MASK);
                Some((payload + SURROGATE_OFFSET, 2))
            }
            [unit, ..] => Some((u32::from(unit), 1)),
        }
    }
}

utf8_peer!(Utf16, u16);
