//! Code-point level transcoding between UTF-8, UTF-16 and UTF-32.
//!
//! Each encoding is a [`Codec`]: it counts, writes and reads single code
//! points. Conversions are built once, on the UTF-8 side, and every pair goes
//! through it: [`Utf16`] and [`Utf32`] convert to and from UTF-8 only.
//!
//! Every conversion is a two-call protocol. The first call measures, the
//! second writes into a caller-owned buffer of the measured size:
//!
//! ```rust
//! use utfconv::Utf16;
//!
//! let src = "Hello, \u{4E16}\u{754C}\u{2A6A5}!\u{1F917}";
//!
//! let measured = Utf16::encode_len(src);
//! let mut utf16 = vec![0u16; measured.written];
//! let converted = Utf16::encode(src, &mut utf16);
//! assert_eq!(converted, measured);
//! assert_eq!(utf16.len(), 14);
//!
//! let mut utf8 = vec![0u8; Utf16::decode_len(&utf16).written];
//! Utf16::decode(&utf16, &mut utf8[..]);
//! assert_eq!(utf8, src.as_bytes());
//! ```
//!
//! Nothing here fails loudly. A pass that cannot finish stops and says why in
//! its [`Completion`]; callers may inspect it, turn it into a
//! [`TranscodeError`] with [`Transcoded::into_result`], or ignore it and keep
//! the shorter output.

#![no_std]
#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod error;
mod options;
mod outcome;
pub mod repr;
mod utf16;
mod utf32;
mod utf8;

#[cfg(test)]
mod tests;

pub use codec::Codec;
pub use error::TranscodeError;
pub use options::{InvalidCodePointMode, TranscodeOptions};
pub use outcome::{Completion, Transcoded};
pub use utf8::Utf8;
pub use utf16::Utf16;
pub use utf32::Utf32;
