//! Fuzzes the rumble group splitter and the per-field code decoders.
//!
//! Verifies unpack and the decoders never panic for arbitrary byte groups
//! and arbitrary (including unreachable) field codes, and that groups built
//! by the encoder survive an unpack/decode/re-encode cycle.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rumble_decode
#![no_main]

use hid_procon_protocol::{
    decode_high_amplitude, decode_high_frequency, decode_low_amplitude, decode_low_frequency,
    high_amplitude, rumble_uniform, unpack,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary groups split without panicking.
    if data.len() >= 4 {
        let codes = unpack([data[0], data[1], data[2], data[3]]);
        let _ = decode_high_amplitude(codes.amp_high);
        let _ = decode_low_amplitude(codes.amp_low);
        let _ = decode_high_frequency(codes.freq_high);
        let _ = decode_low_frequency(codes.freq_low);
    }

    // Arbitrary codes decode without panicking, reachable or not.
    if data.len() >= 2 {
        let code = u16::from_le_bytes([data[0], data[1]]);
        let _ = decode_high_amplitude(code);
        let _ = decode_low_amplitude(code);
        let _ = decode_high_frequency(code);
        let _ = decode_low_frequency(data[0]);
    }

    // Encoder output is stable under decode and re-encode.
    if data.len() >= 8 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[..8]);
        let amp = f64::from_bits(u64::from_le_bytes(bytes));
        let codes = unpack(rumble_uniform(320.0, 160.0, amp));
        let reencoded = high_amplitude(decode_high_amplitude(codes.amp_high));
        assert_eq!(reencoded, codes.amp_high);
    }
});
