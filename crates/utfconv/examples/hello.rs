//! Converts a short mixed-script greeting from UTF-8 to UTF-16 and UTF-32 and
//! back, printing every code unit along the way.
//!
//! The text mixes ASCII, two BMP ideographs, a supplementary-plane ideograph
//! and an emoji, so the UTF-16 output contains two surrogate pairs.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=utfconv=trace cargo run -p utfconv --example hello
//! ```
//!
//! Setting `RUST_LOG` shows the trace events emitted when a conversion halts
//! early (the truncated input at the end of `main` triggers one).

use tracing_subscriber::EnvFilter;
use utfconv::{Completion, Utf16, Utf32};

const HELLO: &str = "Hello, \u{4E16}\u{754C}\u{2A6A5}!\u{1F917}";

fn dump<T: core::fmt::UpperHex>(label: &str, units: &[T]) {
    print!("{label:>6} ({:2} units):", units.len());
    for unit in units {
        print!(" {unit:04X}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dump("UTF-8", HELLO.as_bytes());

    // Two-call protocol: measure first, then write into an exactly sized buffer.
    let measured = Utf16::encode_len(HELLO);
    let mut utf16 = vec![0u16; measured.written];
    let converted = Utf16::encode(HELLO, &mut utf16);
    assert_eq!(converted, measured);
    dump("UTF-16", &utf16);

    let utf32 = Utf32::encode_to_vec(HELLO).expect("greeting is valid UTF-8");
    dump("UTF-32", &utf32);

    let from_utf16 = Utf16::decode_to_bstring(&utf16).expect("pairs are complete");
    let from_utf32 = Utf32::decode_to_bstring(&utf32).expect("scalar values only");
    println!("back from UTF-16: {from_utf16}");
    println!("back from UTF-32: {from_utf32}");

    // Cut the final emoji in half: everything before it still converts.
    let cut = &HELLO.as_bytes()[..HELLO.len() - 2];
    let partial = Utf16::encode_len(cut);
    if let Completion::Malformed { offset } = partial.completion {
        println!(
            "truncated input: {} units from the first {offset} bytes",
            partial.written
        );
    }
}
