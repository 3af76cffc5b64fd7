#![no_main]

use libfuzzer_sys::fuzz_target;
use odm_shot_coverage::{parse_corners_json, parse_corners_txt};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_corners_txt(text);
        let _ = parse_corners_json(text);
    }
});
