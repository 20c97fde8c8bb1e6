#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfconv::{Completion, InvalidCodePointMode, TranscodeOptions, Utf8, Utf16, Utf32};

#[derive(Debug, Arbitrary)]
enum Source {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    source: Source,
    extended_utf8: bool,
    strict_continuation: bool,
    mode: u8,
    /// Destination size as a fraction of the measured length, in 1/255ths.
    shrink: u8,
}

impl Input {
    fn options(&self) -> TranscodeOptions {
        TranscodeOptions {
            extended_utf8: self.extended_utf8,
            strict_continuation: self.strict_continuation,
            invalid_code_point: match self.mode % 3 {
                0 => InvalidCodePointMode::Skip,
                1 => InvalidCodePointMode::Replace,
                _ => InvalidCodePointMode::Stop,
            },
        }
    }

    fn short_len(&self, full: usize) -> usize {
        full * usize::from(self.shrink) / 255
    }
}

/// Checks the measuring and writing passes of one conversion against each
/// other: an exact buffer reproduces the measurement, a short one stops on a
/// code point boundary with a prefix of the same output.
fn check<U: Copy + Default + PartialEq + core::fmt::Debug>(
    input: &Input,
    measure: impl Fn() -> utfconv::Transcoded,
    write: impl Fn(&mut [U]) -> utfconv::Transcoded,
) {
    let measured = measure();

    let mut full = vec![U::default(); measured.written];
    let converted = write(&mut full);
    assert_eq!(converted, measured, "writing pass disagrees with measurement");

    let short_len = input.short_len(measured.written);
    let mut short = vec![U::default(); short_len];
    let partial = write(&mut short);
    assert!(partial.written <= short_len);
    assert!(partial.read <= measured.read);
    assert_eq!(&short[..partial.written], &full[..partial.written]);
    if short_len < measured.written {
        assert_eq!(
            partial.completion,
            Completion::OutputFull {
                offset: partial.read
            }
        );
    } else {
        assert_eq!(partial, measured);
    }
}

fn transcode(input: &Input) {
    let options = input.options();
    match &input.source {
        Source::Utf8(bytes) => {
            check(
                input,
                || Utf16::encode_len_with(bytes.as_slice(), &options),
                |dst| Utf16::encode_with(bytes.as_slice(), dst, &options),
            );
            check(
                input,
                || Utf32::encode_len_with(bytes.as_slice(), &options),
                |dst| Utf32::encode_with(bytes.as_slice(), dst, &options),
            );

            // well-formed text survives the trip through UTF-16 untouched
            if let Ok(text) = core::str::from_utf8(bytes) {
                let utf16 = Utf16::encode_to_vec(text).expect("valid UTF-8 converts");
                assert!(utf16.iter().copied().eq(text.encode_utf16()));
                let back = Utf16::decode_to_bstring(&utf16).expect("UTF-16 converts");
                assert_eq!(back.as_slice(), bytes.as_slice());
            }
        }
        Source::Utf16(units) => {
            check(
                input,
                || Utf16::decode_len_with(units, &options),
                |dst: &mut [u8]| Utf16::decode_with(units, dst, &options),
            );
            // every UTF-16 sequence, lone surrogates included, round-trips
            let utf8 = Utf16::decode_to_bstring(units).expect("UTF-16 always converts");
            assert_eq!(&Utf16::encode_to_vec(&utf8).expect("own output re-reads"), units);
        }
        Source::Utf32(units) => {
            check(
                input,
                || Utf32::decode_len_with(units, &options),
                |dst: &mut [u8]| Utf32::decode_with(units, dst, &options),
            );
            // skipping is the default, so this never fails; the UTF-8 hub then
            // feeds UTF-16 directly
            let utf8 = Utf32::decode_to_bstring(units).expect("out-of-range values are skipped");
            check(
                input,
                || Utf8::decode_len_with::<Utf16>(&utf8, &options),
                |dst| Utf8::decode_with::<Utf16>(&utf8, dst, &options),
            );
        }
    }
}

fuzz_target!(|input: Input| transcode(&input));
