#![no_main]

use image_widget::config::LayoutScale;
use image_widget::filter;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let spec = Value::String(s.to_string());
        if let Ok(Some(argument)) = filter::parse_blur(&spec) {
            if let Ok(radius) = filter::blur_radius(&argument, &LayoutScale::default()) {
                assert!(radius >= 0.0, "blur radius must never be negative");
            }
        }
    }
});
