//! Verification-side decoding of rumble command groups.
//!
//! Inverse of the [`crate::rumble`] encoders: [`unpack`] splits a packed
//! 4-byte group back into its four field codes, and the per-field decoders
//! map codes to approximate physical values. These exist for tests and
//! diagnostics; matching actuator physics beyond round-trip consistency is
//! not a goal.

use serde::{Deserialize, Serialize};

/// Field codes recovered from a packed command group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RumbleCodes {
    /// High-band frequency code, 9 bits.
    pub freq_high: u16,
    /// High-band amplitude code, always even.
    pub amp_high: u16,
    /// Low-band frequency code, 7 bits.
    pub freq_low: u8,
    /// Low-band amplitude code with the half-step flag in bit 15.
    pub amp_low: u16,
}

/// Split a packed command group into its field codes.
///
/// Lossless for any group produced by [`crate::rumble::rumble`]: the additive
/// packing never carries into a neighbouring field, so masking recovers the
/// exact codes.
pub fn unpack(data: [u8; 4]) -> RumbleCodes {
    RumbleCodes {
        freq_high: u16::from(data[0]) | (u16::from(data[1] & 0x01) << 8),
        amp_high: u16::from(data[1] & 0xFE),
        freq_low: data[2] & 0x7F,
        amp_low: u16::from(data[3]) | (u16::from(data[2] & 0x80) << 8),
    }
}

/// Map a high-band amplitude code back to an approximate amplitude.
///
/// Total over all of `u16`; codes outside `0x00..=0xC8` extrapolate along the
/// top segment.
pub fn decode_high_amplitude(code: u16) -> f64 {
    if code == 0 {
        0.0
    } else if code <= 0x02 {
        0.007843
    } else if code <= 0x1E {
        (f64::from(code) / 8.0).exp2() / 119.6128
    } else if code <= 0x3E {
        (f64::from(code) / 32.0).exp2() / 17.0256
    } else {
        (f64::from(code) / 64.0).exp2() / 8.699
    }
}

/// Map a low-band amplitude code back to an approximate amplitude.
///
/// Undoes the low-band transform (bit 15 half-step flag, offset 0x40) and
/// defers to [`decode_high_amplitude`].
pub fn decode_low_amplitude(code: u16) -> f64 {
    let c = code.wrapping_sub(0x40);
    let high = ((c & 0x8000) >> 14) + ((c & 0x00FF) << 2);
    decode_high_amplitude(high)
}

/// Map a high-band frequency code back to Hz.
pub fn decode_high_frequency(code: u16) -> f64 {
    (f64::from(code) / 128.0).exp2() * 80.0
}

/// Map a low-band frequency code back to Hz.
pub fn decode_low_frequency(code: u8) -> f64 {
    (f64::from(code) / 32.0).exp2() * 40.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rumble::NEUTRAL;

    #[test]
    fn unpack_neutral() {
        let codes = unpack(NEUTRAL);
        assert_eq!(codes.freq_high, 0x100);
        assert_eq!(codes.amp_high, 0x00);
        assert_eq!(codes.freq_low, 0x40);
        assert_eq!(codes.amp_low, 0x40);
    }

    #[test]
    fn unpack_reads_flag_and_carry() {
        let codes = unpack([0xFC, 0x03, 0xFF, 0x40]);
        assert_eq!(codes.freq_high, 0x1FC);
        assert_eq!(codes.amp_high, 0x02);
        assert_eq!(codes.freq_low, 0x7F);
        assert_eq!(codes.amp_low, 0x8040);
    }

    #[test]
    fn decode_zero_amplitude() {
        assert_eq!(decode_high_amplitude(0), 0.0);
    }

    #[test]
    fn decode_floor_amplitude() {
        assert_eq!(decode_high_amplitude(1), 0.007843);
        assert_eq!(decode_high_amplitude(2), 0.007843);
    }

    #[test]
    fn decode_low_matches_high_scale() {
        // 0x8040 carries high code 2, 0x0041 carries high code 4.
        assert_eq!(decode_low_amplitude(0x8040), decode_high_amplitude(2));
        assert_eq!(decode_low_amplitude(0x0041), decode_high_amplitude(4));
        assert_eq!(decode_low_amplitude(0x0040), 0.0);
    }

    #[test]
    fn decode_resting_frequencies() {
        assert_eq!(decode_high_frequency(0x100), 320.0);
        assert_eq!(decode_low_frequency(0x40), 160.0);
    }

    #[test]
    fn decode_total_for_junk_codes() {
        assert!(decode_high_amplitude(u16::MAX).is_finite());
        assert!(decode_low_amplitude(0x0000).is_finite());
        assert!(decode_low_amplitude(u16::MAX).is_finite());
        assert!(decode_high_frequency(u16::MAX).is_finite());
    }
}
