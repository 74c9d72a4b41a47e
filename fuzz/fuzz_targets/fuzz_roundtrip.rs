#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    // Keep allocations bounded for absurd headers
    let limits = Limits::default().with_max_pixels(1 << 22);
    let Ok(mut decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    // Re-encoding in the declared format must decode to the same image
    let reencoded = decoded.encode();
    let Ok(decoded2) = decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    // Transforms must keep the image encodable and decodable
    decoded.rotate_90_cw();
    decoded.flip();
    decoded.flop();
    decoded.invert();
    let Ok(decoded3) = decode(&decoded.encode()) else {
        panic!("transformed image failed to decode");
    };
    assert_eq!(decoded.size(), decoded3.size());
});
