#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz entity name validation - this should never panic
        if let Ok(name) = cqrsgen::EntityName::parse(raw) {
            assert_eq!(name.as_str(), raw);
        }
    }
});
