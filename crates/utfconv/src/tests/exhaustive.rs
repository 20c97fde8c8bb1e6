use crate::{Codec, Utf8, Utf16, Utf32};

/// Every non-surrogate code point survives 8 → 16 → 8 and 8 → 32 → 8
/// through the conversion entry points.
#[test]
#[cfg_attr(miri, ignore)]
fn every_scalar_value_round_trips() {
    let mut utf8 = [0u8; 4];
    let mut utf16 = [0u16; 2];
    let mut utf32 = [0u32; 1];
    let mut back = [0u8; 4];

    for code_point in (0..=0x10_FFFF).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
        let n = Utf8::from_code_point(code_point, &mut utf8);
        let src = &utf8[..n];

        let to16 = Utf16::encode(src, &mut utf16);
        assert!(to16.is_complete(), "U+{code_point:04X}");
        let from16 = Utf16::decode(&utf16[..to16.written], &mut back);
        assert_eq!(&back[..from16.written], src, "U+{code_point:04X} via UTF-16");

        let to32 = Utf32::encode(src, &mut utf32);
        assert_eq!(to32.written, 1);
        assert_eq!(utf32[0], code_point);
        let from32 = Utf32::decode(&utf32, &mut back);
        assert_eq!(&back[..from32.written], src, "U+{code_point:04X} via UTF-32");
    }
}

/// Code points past the ceiling are invalid for UTF-8 and UTF-16, valid for
/// UTF-32.
#[test]
fn ceiling_applies_to_variable_width_codecs_only() {
    for code_point in [0x11_0000, 0x1F_FFFF, 0x7FFF_FFFF, u32::MAX] {
        assert_eq!(Utf8::count_code_units(code_point), 0);
        assert_eq!(Utf16::count_code_units(code_point), 0);
        assert_eq!(Utf32::count_code_units(code_point), 1);
    }
}
