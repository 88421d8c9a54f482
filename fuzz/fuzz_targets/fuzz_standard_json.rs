#![no_main]

use libfuzzer_sys::fuzz_target;
use solbuild::domain::value_objects::RecordLayout;
use solbuild::infrastructure::compiler::standard_json::parse_output;

fuzz_target!(|data: &[u8]| {
    // Arbitrary compiler stdout must produce an error, never a panic
    let _ = parse_output(data, RecordLayout::Legacy);
    let _ = parse_output(data, RecordLayout::Standard);
});
