//! Fuzz target for command-stream decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to both decoders, checking
//! for panics, crashes, or hangs. A decode run must always terminate at
//! or before the end of the buffer, whatever the bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgntrace::decode::{decode_commands, decode_validated};
use sgntrace::format::{Bounds, FormatProfile};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let profile = FormatProfile::default();
    let plain = decode_commands(data, &profile);
    assert!(plain.end <= data.len());

    // bounds validation can only stop a run earlier, never extend it
    let validated = decode_validated(data, &profile, &Bounds::default());
    assert!(validated.len() <= plain.len());
    assert!(validated.end <= plain.end);
});
