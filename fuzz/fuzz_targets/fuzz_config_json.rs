#![no_main]

use image_widget::config::WidgetConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must either parse into a config or fail cleanly
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<WidgetConfig>(s) {
            let _ = config.layout.to_logical(1080.0);
            let _ = config.layout.to_device(750.0);
        }
    }
});
