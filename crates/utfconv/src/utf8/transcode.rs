//! The two-pass conversion walk shared by every encoding pair.
//!
//! A pass walks the source one code point at a time, asks the destination
//! codec how many units that code point needs, and (in the writing pass)
//! writes it. The measuring pass is the same walk with no destination, so the
//! two passes agree on the length by construction.
//!
//! The walk halts, without writing anything for the current code point, when
//! - the source reader makes no progress (malformed input),
//! - the destination cannot represent the code point and the options say
//!   [`InvalidCodePointMode::Stop`],
//! - the destination slice has no room left for the whole sequence.

use tracing::trace;

use crate::{
    codec::Codec,
    options::{InvalidCodePointMode, TranscodeOptions},
    outcome::{Completion, Transcoded},
};

const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Walks `src` with `next` and re-encodes every code point as `D`.
///
/// `next` is usually `S::next_code_point`; UTF-8 sources read through
/// [`Utf8::next_code_point_with`](crate::Utf8::next_code_point_with) so the
/// options can widen or tighten what counts as a sequence.
///
/// With `dst == None` this is the measuring pass.
pub(crate) fn transcode<S: Codec, D: Codec>(
    src: &[S::Unit],
    mut dst: Option<&mut [D::Unit]>,
    next: impl Fn(&[S::Unit]) -> Option<(u32, usize)>,
    options: &TranscodeOptions,
) -> Transcoded {
    let mut read = 0;
    let mut written = 0;

    while read < src.len() {
        let Some((mut code_point, consumed)) = next(&src[read..]) else {
            trace!(
                source = S::NAME,
                destination = D::NAME,
                offset = read,
                "malformed input, halting"
            );
            return Transcoded::new(written, read, Completion::Malformed { offset: read });
        };
        debug_assert!(consumed > 0, "reader reported progress without consuming");

        let mut units = D::count_code_units(code_point);
        if units == 0 {
            match options.invalid_code_point {
                InvalidCodePointMode::Skip => {
                    read += consumed;
                    continue;
                }
                InvalidCodePointMode::Replace => {
                    code_point = REPLACEMENT_CHARACTER;
                    units = D::count_code_units(code_point);
                }
                InvalidCodePointMode::Stop => {
                    trace!(
                        source = S::NAME,
                        destination = D::NAME,
                        offset = read,
                        code_point,
                        "code point not representable, halting"
                    );
                    return Transcoded::new(
                        written,
                        read,
                        Completion::InvalidCodePoint { offset: read },
                    );
                }
            }
        }

        if let Some(dst) = dst.as_deref_mut() {
            let available = dst.len();
            let Some(slot) = dst.get_mut(written..written + units) else {
                trace!(
                    source = S::NAME,
                    destination = D::NAME,
                    offset = read,
                    available,
                    needed = written + units,
                    "destination full, halting"
                );
                return Transcoded::new(written, read, Completion::OutputFull { offset: read });
            };
            let wrote = D::from_code_point(code_point, slot);
            if cfg!(any(test, feature = "fuzzing")) {
                assert_eq!(
                    wrote,
                    units,
                    "Internal error: {} wrote a different length than it counted",
                    D::NAME
                );
            }
        }

        written += units;
        read += consumed;
    }

    Transcoded::new(written, read, Completion::Complete)
}
