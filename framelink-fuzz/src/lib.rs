//! Fuzzing placeholder for the framelink-core frame parser
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parser

/// Parse arbitrary bytes as a frame - should never panic
pub fn fuzz_parse(data: &[u8]) {
    if let Ok(raw) = core::str::from_utf8(data) {
        let _ = framelink_core::decoder::parse_frame(raw);
    }
}

/// Decode (parse + validate) arbitrary bytes - should never panic
pub fn fuzz_decode(data: &[u8]) {
    if let Ok(raw) = core::str::from_utf8(data) {
        for mtu in [0, 10, 20, usize::MAX] {
            let _ = framelink_core::decoder::decode_frame(raw, mtu);
        }
    }
}

/// Segment arbitrary text under an arbitrary MTU - should never panic
pub fn fuzz_segment(data: &[u8]) {
    if let Ok(message) = core::str::from_utf8(data) {
        let mtu = data.first().copied().unwrap_or(0) as usize;
        let config = framelink_core::LinkConfig::new(mtu);
        let _ = framelink_core::encoder::frames_for_message(message, &config);
    }
}
