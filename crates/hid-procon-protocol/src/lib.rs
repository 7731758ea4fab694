//! Nintendo Switch Pro Controller HD rumble protocol implementation.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! It provides pure functions and types that can be tested without hardware.
//!
//! ## Protocol notes
//!
//! Switch controllers (USB VID `0x057E`) drive each linear resonant actuator
//! with a packed 4-byte command group carrying two frequency/amplitude pairs:
//! a high band and a low band. Both frequencies and both amplitudes are
//! quantized onto logarithmic code scales before packing, so the wire format
//! is lossy. A full output report carries one group per actuator
//! (Joy-Cons drive one, the Pro Controller drives two); assembling output
//! reports is the transport layer's job, not this crate's.
//!
//! ### Command group layout (4 bytes, one actuator)
//!
//! | Offset | Content                     | Notes                                   |
//! |--------|-----------------------------|-----------------------------------------|
//! | 0      | `freq_high & 0xFF`          | low 8 bits of the high-band freq code   |
//! | 1      | `(freq_high >> 8) + amp_high` | bit 0 = freq carry, bits 7..1 = amplitude |
//! | 2      | `(amp_low >> 8) + freq_low` | bit 7 = amp flag, bits 6..0 = frequency |
//! | 3      | `amp_low & 0xFF`            | low 8 bits of the low-band amp code     |
//!
//! Bytes 1 and 2 are built by integer addition of the two resident fields.
//! The code scales guarantee the fields never collide: high-band amplitude
//! codes are always even, so bit 0 stays free for the frequency carry, and
//! low-band frequency codes never exceed `0x7F`, so bit 7 stays free for the
//! amplitude high bit. [`decode::unpack`] recovers the exact codes.
//!
//! ## Sources
//!
//! - dekuNukem/Nintendo_Switch_Reverse_Engineering, `rumble_data_table.md`
//!   (code scale tables and byte layout)
//! - Linux kernel `hid-nintendo` driver (frequency/amplitude ranges)

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod decode;
pub mod effect;
pub mod ids;
pub mod rumble;
pub mod types;

pub use decode::{
    RumbleCodes, decode_high_amplitude, decode_high_frequency, decode_low_amplitude,
    decode_low_frequency, unpack,
};
pub use effect::{EffectError, EffectParams, EffectSlot};
pub use ids::{
    PRODUCT_CHARGING_GRIP, PRODUCT_JOYCON_L, PRODUCT_JOYCON_R, PRODUCT_PRO_CONTROLLER, VENDOR_ID,
    is_switch_controller, product_name,
};
pub use rumble::{
    AMP_MAX, AMP_MIN, DEFAULT_HIGH_FREQ_HZ, DEFAULT_LOW_FREQ_HZ, HIGH_FREQ_MAX_HZ,
    HIGH_FREQ_MIN_HZ, LOW_FREQ_MAX_HZ, LOW_FREQ_MIN_HZ, NEUTRAL, RUMBLE_GROUP_LEN, high_amplitude,
    high_frequency, low_amplitude, low_frequency, rumble, rumble_uniform,
};
pub use types::ProconModel;
