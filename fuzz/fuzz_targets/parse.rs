#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Literal classification must never panic, whatever the text.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = bitblick::parse_literal(text);
    }
});
