//! The capability set every encoding provides.
//!
//! A codec knows three things about its encoding and nothing else: how many
//! code units a code point occupies, how to write one code point, and how to
//! read the next one. Conversions between encodings are built on top of these
//! three operations on the UTF-8 side, in [`Utf8`](crate::Utf8), which hosts
//! the generic algorithm.
//!
//! Codecs are zero-sized and stateless; all operations are associated
//! functions over caller-owned slices.

use core::fmt::Debug;

/// One Unicode encoding form, described by its code-unit rules.
///
/// Implementations must agree with themselves: for every code point `cp`
/// with `count_code_units(cp) > 0`, writing `cp` with
/// [`from_code_point`](Codec::from_code_point) and reading it back with
/// [`next_code_point`](Codec::next_code_point) must yield `cp` and consume
/// exactly `count_code_units(cp)` units.
pub trait Codec {
    /// The fixed-width storage element of this encoding.
    type Unit: Copy + Default + Debug + Eq;

    /// Human-readable encoding name, used in diagnostics.
    const NAME: &'static str;

    /// Number of code units `code_point` occupies, or `0` if the encoding
    /// cannot represent it.
    fn count_code_units(code_point: u32) -> usize;

    /// Writes `code_point` to the front of `dst` and returns the number of
    /// units written.
    ///
    /// Returns `0` and leaves `dst` untouched when the code point is invalid
    /// for this encoding.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than
    /// [`count_code_units(code_point)`](Codec::count_code_units).
    fn from_code_point(code_point: u32, dst: &mut [Self::Unit]) -> usize;

    /// Reads the code point at the front of `src`.
    ///
    /// Returns the code point and the number of units consumed, or `None`
    /// when no progress can be made: `src` is empty or does not start with a
    /// recognized sequence.
    fn next_code_point(src: &[Self::Unit]) -> Option<(u32, usize)>;
}
