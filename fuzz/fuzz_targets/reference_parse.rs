//! Fuzz target for reference-drawing coordinate extraction.
//!
//! This fuzzer feeds arbitrary text to the reference parser, checking
//! for panics, crashes, or hangs. Unrecognized lines must be skipped,
//! never fatal.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgntrace::eps::parse_reference_coords;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_reference_coords(text);
    }
});
