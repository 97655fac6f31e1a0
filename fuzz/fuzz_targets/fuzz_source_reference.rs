#![no_main]

use image_widget::source::SourceRef;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(source) = SourceRef::parse(s) {
            // Accepted references are stable under a second parse
            let reparsed = SourceRef::parse(source.as_str()).ok();
            assert_eq!(reparsed.as_ref(), Some(&source));
        }
    }
});
