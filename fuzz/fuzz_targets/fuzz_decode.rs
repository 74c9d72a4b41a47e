#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = zenpbm::ImageInfo::from_bytes(data);
    let _ = zenpbm::decode(data);
    let _ = zenpbm::decode_pgm(data);
    let _ = zenpbm::decode_pbm(data);
});
