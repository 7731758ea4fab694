//! Snapshot tests for the rumble wire format.
//!
//! Pins the packed bytes for representative command groups so that any
//! quantizer or packer change shows up as a reviewable diff.

use hid_procon_protocol as procon;
use insta::assert_debug_snapshot;

#[test]
fn test_snapshot_neutral_group() {
    let group = procon::rumble(320.0, 160.0, 0.0, 0.0);
    assert_debug_snapshot!(format!("{group:02X?}"));
}

#[test]
fn test_snapshot_full_amplitude_group() {
    let group = procon::rumble(320.0, 160.0, 1.0, 1.0);
    assert_debug_snapshot!(format!("{group:02X?}"));
}

#[test]
fn test_snapshot_half_step_group() {
    let group = procon::rumble(320.0, 160.0, 0.0078, 0.0078);
    assert_debug_snapshot!(format!("{group:02X?}"));
}

#[test]
fn test_snapshot_frequency_ceiling_group() {
    let group = procon::rumble(
        procon::HIGH_FREQ_MAX_HZ,
        procon::LOW_FREQ_MAX_HZ,
        0.0,
        0.0,
    );
    assert_debug_snapshot!(format!("{group:02X?}"));
}

#[test]
fn test_snapshot_half_amplitude_group() {
    let group = procon::rumble(600.0, 300.0, 0.5, 0.5);
    assert_debug_snapshot!(format!("{group:02X?}"));
}

#[test]
fn test_snapshot_unpack_neutral() {
    let codes = procon::unpack(procon::NEUTRAL);
    assert_debug_snapshot!(format!("{codes:?}"));
}
