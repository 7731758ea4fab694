//! HD rumble command group encoding.
//!
//! # Command group layout (4 bytes)
//! | Offset | Content                       | Value                              |
//! |--------|-------------------------------|------------------------------------|
//! | 0      | `freq_high & 0xFF`            | high-band frequency code, low bits |
//! | 1      | `(freq_high >> 8) + amp_high` | frequency carry + even amp code    |
//! | 2      | `(amp_low >> 8) + freq_low`   | amplitude flag + 7-bit freq code   |
//! | 3      | `amp_low & 0xFF`              | low-band amplitude code, low bits  |
//!
//! The additive byte merges are the device contract. They never overflow: the
//! high-band amplitude code is even (bit 0 free for the single-bit frequency
//! carry) and the low-band frequency code fits 7 bits (bit 7 free for the
//! amplitude half-step flag).
//!
//! Amplitude codes come from a three-segment logarithmic scale with two fixed
//! entries at the bottom; frequency codes from single log2 scales per band.
//! Scale constants follow the rumble data table in
//! dekuNukem/Nintendo_Switch_Reverse_Engineering.

/// Command group length in bytes (one actuator).
pub const RUMBLE_GROUP_LEN: usize = 4;

/// Minimum amplitude accepted before clamping.
pub const AMP_MIN: f64 = 0.0;

/// Maximum amplitude accepted before clamping.
pub const AMP_MAX: f64 = 1.0;

/// Lowest encodable high-band frequency in Hz (code 0x004).
pub const HIGH_FREQ_MIN_HZ: f64 = 81.75177;

/// Highest encodable high-band frequency in Hz (code 0x1FC).
pub const HIGH_FREQ_MAX_HZ: f64 = 1252.572266;

/// Lowest encodable low-band frequency in Hz (code 0x01).
pub const LOW_FREQ_MIN_HZ: f64 = 40.875885;

/// Highest encodable low-band frequency in Hz (code 0x7F).
pub const LOW_FREQ_MAX_HZ: f64 = 626.286133;

/// High-band resting frequency used when a caller only has amplitudes.
pub const DEFAULT_HIGH_FREQ_HZ: f64 = 320.0;

/// Low-band resting frequency used when a caller only has amplitudes.
pub const DEFAULT_LOW_FREQ_HZ: f64 = 160.0;

/// Motors-off command group: both bands at their resting frequency with zero
/// amplitude. Equal to `rumble(320.0, 160.0, 0.0, 0.0)`.
pub const NEUTRAL: [u8; RUMBLE_GROUP_LEN] = [0x00, 0x01, 0x40, 0x40];

/// Quantize an amplitude to its high-band wire code.
///
/// Input is clamped to [`AMP_MIN`]..=[`AMP_MAX`]. Codes are always even,
/// `0x00..=0xC8`. The guards select three log segments of increasing
/// coarseness; the two fixed entries cover the sub-perceptual floor.
pub fn high_amplitude(amplitude: f64) -> u16 {
    let a = amplitude.clamp(AMP_MIN, AMP_MAX);
    if a < 0.007666 {
        0x00
    } else if a < 0.011823 {
        0x02
    } else if a <= 0.112491 {
        ((a * 119.6128).log2() * 8.0 / 2.0).round() as u16 * 2
    } else if a <= 0.224982 {
        ((a * 17.0256).log2() * 32.0 / 2.0).round() as u16 * 2
    } else {
        ((a * 8.699).log2() * 64.0 / 2.0).round() as u16 * 2
    }
}

/// Quantize an amplitude to its low-band wire code.
///
/// Derived from the high-band code: bits 15..8 of the result carry the
/// half-step flag (set when the high code is 2 mod 4), the low byte spans
/// `0x40..=0x72`. Bit 6 is set for every input.
pub fn low_amplitude(amplitude: f64) -> u16 {
    let high = high_amplitude(amplitude);
    0x40 + (high >> 2) + ((high & 0x02) << 14)
}

/// Quantize a high-band frequency in Hz to its wire code.
///
/// Input is clamped to [`HIGH_FREQ_MIN_HZ`]..=[`HIGH_FREQ_MAX_HZ`]. Codes are
/// multiples of 4 in `0x004..=0x1FC`; bit 8 spills into byte 1 when packed.
pub fn high_frequency(freq_hz: f64) -> u16 {
    let f = freq_hz.clamp(HIGH_FREQ_MIN_HZ, HIGH_FREQ_MAX_HZ);
    ((f / 80.0).log2() * 128.0 / 4.0).round() as u16 * 4
}

/// Quantize a low-band frequency in Hz to its wire code.
///
/// Input is clamped to [`LOW_FREQ_MIN_HZ`]..=[`LOW_FREQ_MAX_HZ`]. Codes span
/// `0x01..=0x7F`.
pub fn low_frequency(freq_hz: f64) -> u8 {
    let f = freq_hz.clamp(LOW_FREQ_MIN_HZ, LOW_FREQ_MAX_HZ);
    ((f / 40.0).log2() * 32.0).round() as u8
}

/// Encode one actuator command group from band frequencies and amplitudes.
///
/// Total for every `f64` input: out-of-range values clamp, NaN quantizes to
/// code 0 through the saturating float-to-int conversion. Never panics.
pub fn rumble(
    high_freq_hz: f64,
    low_freq_hz: f64,
    high_amp: f64,
    low_amp: f64,
) -> [u8; RUMBLE_GROUP_LEN] {
    let freq_high = high_frequency(high_freq_hz);
    let amp_high = high_amplitude(high_amp);
    let freq_low = low_frequency(low_freq_hz);
    let amp_low = low_amplitude(low_amp);

    let byte1 = (freq_high >> 8) + amp_high;
    let byte2 = (amp_low >> 8) + u16::from(freq_low);
    debug_assert!(byte1 <= 0xFF, "frequency carry collided with amplitude code");
    debug_assert!(byte2 <= 0xFF, "amplitude flag collided with frequency code");

    [freq_high as u8, byte1 as u8, byte2 as u8, amp_low as u8]
}

/// Encode one actuator command group with the same amplitude on both bands.
pub fn rumble_uniform(
    high_freq_hz: f64,
    low_freq_hz: f64,
    amplitude: f64,
) -> [u8; RUMBLE_GROUP_LEN] {
    rumble(high_freq_hz, low_freq_hz, amplitude, amplitude)
}
