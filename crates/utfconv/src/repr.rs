//! Interchangeable storage for UTF-8 bytes.
//!
//! UTF-8 text shows up as raw bytes (`[u8]`), as narrow C characters
//! (`[c_char]`, which is `i8` or `u8` depending on the target), and as
//! text-tagged strings (`str`, [`BStr`]). All of them share the same bits, so
//! moving between them is a reinterpretation of the slice, never a copy.
//!
//! Every UTF-8 entry point of this crate takes its source as
//! `&(impl Utf8Bytes + ?Sized)` and its destination as
//! `&mut (impl Utf8BytesMut + ?Sized)`.

use core::slice;

use bstr::BStr;

/// A read-only view of UTF-8 code units.
pub trait Utf8Bytes {
    /// The underlying bytes.
    fn utf8_bytes(&self) -> &[u8];
}

/// A writable view of UTF-8 code units.
///
/// Not implemented for `str`: writes may leave the buffer in a state that is
/// not valid UTF-8 (for example, a surrogate code point from a lone UTF-16
/// surrogate).
pub trait Utf8BytesMut {
    /// The underlying bytes, writable.
    fn utf8_bytes_mut(&mut self) -> &mut [u8];
}

/// An 8-bit character type with the same bits as `u8`.
///
/// Implemented for `i8` and `u8`, so `c_char` qualifies on every target.
pub trait NarrowChar: sealed::Sealed + Copy {}

impl NarrowChar for i8 {}
impl NarrowChar for u8 {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for u8 {}
}

/// Reinterprets narrow characters as bytes.
#[must_use]
pub fn bytes<C: NarrowChar>(src: &[C]) -> &[u8] {
    // SAFETY: `C` is `i8` or `u8`; both have the size, alignment and validity
    // of `u8` (every bit pattern is valid), so the slice covers exactly the
    // same memory.
    unsafe { slice::from_raw_parts(src.as_ptr().cast::<u8>(), src.len()) }
}

/// Reinterprets narrow characters as bytes, writable.
pub fn bytes_mut<C: NarrowChar>(dst: &mut [C]) -> &mut [u8] {
    // SAFETY: see `bytes`; the exclusive borrow is carried over unchanged.
    unsafe { slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<u8>(), dst.len()) }
}

/// Reinterprets bytes as narrow characters, e.g. to hand converted output to
/// a C API expecting `*const c_char`.
#[must_use]
pub fn narrow<C: NarrowChar>(src: &[u8]) -> &[C] {
    // SAFETY: see `bytes`.
    unsafe { slice::from_raw_parts(src.as_ptr().cast::<C>(), src.len()) }
}

impl Utf8Bytes for [u8] {
    fn utf8_bytes(&self) -> &[u8] {
        self
    }
}

impl Utf8Bytes for [i8] {
    fn utf8_bytes(&self) -> &[u8] {
        bytes(self)
    }
}

impl Utf8Bytes for str {
    fn utf8_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Utf8Bytes for BStr {
    fn utf8_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

impl<const N: usize> Utf8Bytes for [u8; N] {
    fn utf8_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Utf8Bytes for [i8; N] {
    fn utf8_bytes(&self) -> &[u8] {
        bytes(self)
    }
}

impl Utf8BytesMut for [u8] {
    fn utf8_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl Utf8BytesMut for [i8] {
    fn utf8_bytes_mut(&mut self) -> &mut [u8] {
        bytes_mut(self)
    }
}

impl Utf8BytesMut for BStr {
    fn utf8_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut()
    }
}

impl<const N: usize> Utf8BytesMut for [u8; N] {
    fn utf8_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<const N: usize> Utf8BytesMut for [i8; N] {
    fn utf8_bytes_mut(&mut self) -> &mut [u8] {
        bytes_mut(self)
    }
}

#[cfg(feature = "alloc")]
mod owned {
    use alloc::{string::String, vec::Vec};

    use bstr::BString;

    use super::{Utf8Bytes, Utf8BytesMut};

    impl Utf8Bytes for Vec<u8> {
        fn utf8_bytes(&self) -> &[u8] {
            self
        }
    }

    impl Utf8Bytes for String {
        fn utf8_bytes(&self) -> &[u8] {
            self.as_bytes()
        }
    }

    impl Utf8Bytes for BString {
        fn utf8_bytes(&self) -> &[u8] {
            self.as_ref()
        }
    }

    impl Utf8BytesMut for Vec<u8> {
        fn utf8_bytes_mut(&mut self) -> &mut [u8] {
            self
        }
    }

    impl Utf8BytesMut for BString {
        fn utf8_bytes_mut(&mut self) -> &mut [u8] {
            self.as_mut()
        }
    }
}
