#![no_main]

use libfuzzer_sys::fuzz_target;
use odm_shot_coverage::parse_reconstruction_json;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_reconstruction_json(text);
    }
});
