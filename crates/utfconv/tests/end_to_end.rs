#![expect(missing_docs)]

mod common;

use utfconv::{Completion, TranscodeError, Utf16, Utf32};

use crate::common::{HELLO, HELLO_UTF8, HELLO_UTF16, HELLO_UTF32, hex};

#[test]
fn source_vector_is_consistent() {
    assert_eq!(HELLO.as_bytes(), HELLO_UTF8);
    assert_eq!(HELLO_UTF8.len(), 22);
    assert_eq!(HELLO.chars().count(), 12);
}

#[test]
fn hello_through_utf16() {
    let measured = Utf16::encode_len(HELLO_UTF8);
    insta::assert_snapshot!(format!("{measured:?}"), @"Transcoded { written: 14, read: 22, completion: Complete }");

    let mut utf16 = vec![0u16; measured.written + 1];
    let converted = Utf16::encode(HELLO_UTF8, &mut utf16[..measured.written]);
    assert_eq!(converted, measured);
    assert_eq!(&utf16[..measured.written], HELLO_UTF16);
    assert_eq!(utf16[measured.written], 0, "terminator slot untouched");
    insta::assert_snapshot!(hex(&utf16[..converted.written], 4), @"0048 0065 006C 006C 006F 002C 0020 4E16 754C D869 DEA5 0021 D83E DD17");

    let back_len = Utf16::decode_len(HELLO_UTF16);
    assert_eq!(back_len.written, 22);
    let mut utf8 = vec![0u8; back_len.written];
    let back = Utf16::decode(HELLO_UTF16, &mut utf8);
    assert_eq!(back, back_len);
    assert_eq!(utf8, HELLO_UTF8);
}

#[test]
fn hello_through_utf32() {
    let measured = Utf32::encode_len(HELLO);
    insta::assert_snapshot!(format!("{measured:?}"), @"Transcoded { written: 12, read: 22, completion: Complete }");

    let mut utf32 = vec![0u32; measured.written];
    let converted = Utf32::encode(HELLO, &mut utf32);
    assert_eq!(converted, measured);
    assert_eq!(utf32, HELLO_UTF32);
    insta::assert_snapshot!(hex(&utf32, 4), @"0048 0065 006C 006C 006F 002C 0020 4E16 754C 2A6A5 0021 1F917");

    let mut utf8 = vec![0u8; Utf32::decode_len(&utf32).written];
    let back = Utf32::decode(&utf32, &mut utf8);
    assert_eq!(back.written, 22);
    assert!(back.is_complete());
    assert_eq!(utf8, HELLO_UTF8);
}

#[test]
fn owned_helpers_follow_the_same_protocol() {
    assert_eq!(Utf16::encode_to_vec(HELLO).unwrap(), HELLO_UTF16);
    assert_eq!(Utf32::encode_to_vec(HELLO).unwrap(), HELLO_UTF32);
    assert_eq!(Utf16::decode_to_bstring(HELLO_UTF16).unwrap(), HELLO_UTF8);
    assert_eq!(Utf32::decode_to_bstring(HELLO_UTF32).unwrap(), HELLO_UTF8);
}

#[test]
fn truncated_input_reports_where_it_stopped() {
    // cut in the middle of the final emoji
    let cut = &HELLO_UTF8[..20];
    let measured = Utf16::encode_len(cut);
    assert_eq!(measured.written, 12);
    assert_eq!(measured.read, 18);
    assert_eq!(measured.completion, Completion::Malformed { offset: 18 });

    let err = Utf16::encode_to_vec(cut).unwrap_err();
    assert_eq!(err, TranscodeError::Malformed { offset: 18 });
    insta::assert_snapshot!(err.to_string(), @"malformed input at source offset 18");
}

#[test]
fn short_destination_stops_on_a_code_point_boundary() {
    let mut utf16 = [0u16; 10];
    let converted = Utf16::encode(HELLO, &mut utf16);
    // "Hello, 世界" is 9 units; the next character needs a pair
    assert_eq!(converted.written, 9);
    assert_eq!(converted.read, 13);
    assert_eq!(converted.completion, Completion::OutputFull { offset: 13 });

    let err = converted.into_result(utf16.len()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"destination full at source offset 13: 9 of 10 units written");
}

#[test]
fn utf16_to_utf32_goes_through_utf8() {
    let utf8 = Utf16::decode_to_bstring(HELLO_UTF16).unwrap();
    let utf32 = Utf32::encode_to_vec(&utf8).unwrap();
    assert_eq!(utf32, HELLO_UTF32);
}

#[cfg(feature = "serde")]
#[test]
fn options_and_outcomes_serialize() {
    use utfconv::{InvalidCodePointMode, TranscodeOptions};

    let options: TranscodeOptions =
        serde_json::from_str(r#"{"invalid_code_point":"Replace"}"#).unwrap();
    assert_eq!(options.invalid_code_point, InvalidCodePointMode::Replace);
    assert!(!options.extended_utf8);

    let outcome = Utf16::encode_len(&HELLO_UTF8[..20]);
    insta::assert_snapshot!(serde_json::to_string(&outcome).unwrap(), @r#"{"written":12,"read":18,"completion":{"Malformed":{"offset":18}}}"#);
}
