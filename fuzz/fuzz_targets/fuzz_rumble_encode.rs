//! Fuzzes the rumble command group encoder and device identification.
//!
//! Verifies rumble, rumble_uniform, and the per-field quantizers never panic
//! on any input, including NaN, Inf, and arbitrary float bit patterns, and
//! that the packed group always keeps the low-band amplitude bit 6 set.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rumble_encode
#![no_main]

use hid_procon_protocol::{
    ProconModel, high_amplitude, high_frequency, is_switch_controller, low_amplitude,
    low_frequency, product_name, rumble, rumble_uniform,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on any float input, including NaN and Inf.
    if data.len() >= 32 {
        let f = |i: usize| -> f64 {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[i..i + 8]);
            f64::from_bits(u64::from_le_bytes(bytes))
        };
        let (hf, lf, ha, la) = (f(0), f(8), f(16), f(24));

        let group = rumble(hf, lf, ha, la);
        assert_eq!(group[3] & 0x40, 0x40);

        let _ = rumble_uniform(hf, lf, ha);
        let _ = high_amplitude(ha);
        let _ = low_amplitude(la);
        let _ = high_frequency(hf);
        let _ = low_frequency(lf);
    }

    // Device identification with arbitrary VID/PID.
    if data.len() >= 4 {
        let vid = u16::from_le_bytes([data[0], data[1]]);
        let pid = u16::from_le_bytes([data[2], data[3]]);
        let _ = is_switch_controller(vid, pid);
        let _ = product_name(pid);
        let _ = ProconModel::from_pid(pid);
    }
});
