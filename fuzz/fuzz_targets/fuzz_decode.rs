#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and must not allocate for dimensions the data can't back
    let limits = zenppm::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let _ = zenppm::ImageInfo::from_bytes(data);
    let _ = zenppm::DecodeRequest::new(data).with_limits(&limits).decode();
});
