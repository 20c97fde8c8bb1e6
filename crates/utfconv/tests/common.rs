#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::Write;

/// "Hello, 世界𪚥!🤗": ASCII, two BMP ideographs, and two supplementary-plane
/// characters (one ideograph, one emoji).
pub const HELLO: &str = "Hello, \u{4E16}\u{754C}\u{2A6A5}!\u{1F917}";

pub const HELLO_UTF8: &[u8] =
    b"Hello, \xE4\xB8\x96\xE7\x95\x8C\xF0\xAA\x9A\xA5!\xF0\x9F\xA4\x97";

pub const HELLO_UTF16: &[u16] = &[
    0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x4E16, 0x754C, 0xD869, 0xDEA5, 0x21, 0xD83E,
    0xDD17,
];

pub const HELLO_UTF32: &[u32] = &[
    0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x4E16, 0x754C, 0x2_A6A5, 0x21, 0x1_F917,
];

/// Space-separated upper-case hex, one entry per code unit.
pub fn hex<T: core::fmt::UpperHex>(units: &[T], width: usize) -> String {
    let mut out = String::new();
    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{unit:0width$X}").unwrap();
    }
    out
}
