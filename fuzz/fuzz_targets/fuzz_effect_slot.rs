//! Fuzzes the effect slot state machine with arbitrary operation sequences.
//!
//! Verifies init, start, update_time, and deinit never panic in any order,
//! that the run timer never goes negative, and that the rendered command
//! group keeps the low-band amplitude bit 6 set.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_effect_slot
#![no_main]

use hid_procon_protocol::{EffectParams, EffectSlot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut slot = EffectSlot::new();

    for chunk in data.chunks_exact(8) {
        let a = u16::from_le_bytes([chunk[1], chunk[2]]);
        let b = u16::from_le_bytes([chunk[3], chunk[4]]);
        let c = u16::from_le_bytes([chunk[5], chunk[6]]);
        match chunk[0] % 4 {
            0 => {
                let _ = slot.init(EffectParams {
                    id: a,
                    kind: chunk[7].into(),
                    length_ms: b,
                    delay_ms: c,
                    strong: b,
                    weak: c,
                    direction: a,
                });
            }
            1 => {
                // Id mismatches are expected errors, not panics.
                let _ = slot.start(a, b);
            }
            2 => slot.update_time(u32::from(a) * u32::from(chunk[7])),
            _ => slot.deinit(),
        }

        assert!(slot.remaining_ms() >= 0);
        assert_eq!(slot.command()[3] & 0x40, 0x40);
        let (strong, weak) = slot.amplitudes();
        assert!((0.0..=1.0).contains(&strong));
        assert!((0.0..=1.0).contains(&weak));
    }
});
