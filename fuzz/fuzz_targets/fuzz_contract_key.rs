#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(key) = solbuild::ContractKey::parse(raw) {
            let stem = key.artifact_stem();
            assert!(!stem.is_empty());
            assert!(!stem.contains(':'));
            assert!(!stem.contains('/'));
        }
    }
});
