#![no_main]

use libfuzzer_sys::fuzz_target;
use odm_shot_coverage::core::parse_wavefront_25d;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_wavefront_25d(text);
    }
});
