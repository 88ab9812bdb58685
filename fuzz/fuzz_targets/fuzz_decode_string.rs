#![no_main]

use libfuzzer_sys::fuzz_target;
use tobcomm::core::buffer::WireReader;

fuzz_target!(|data: &[u8]| {
    // Walk the input as a sequence of fields - must never panic or loop forever
    let mut reader = WireReader::new(data);
    while reader.read_string().is_ok() {}
    let _ = reader.read_u32();
});
