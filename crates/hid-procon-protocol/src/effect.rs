//! Single-slot timed rumble effect scheduling.
//!
//! Host force-feedback stacks model rumble as an uploaded effect that is
//! started, restarted, and stopped by id, with a delay before it runs and a
//! length while it runs. [`EffectSlot`] keeps that lifecycle and produces the
//! packed command group for its current state; transporting the group to the
//! device stays out of scope.

use crate::rumble::{DEFAULT_HIGH_FREQ_HZ, DEFAULT_LOW_FREQ_HZ, NEUTRAL, RUMBLE_GROUP_LEN, rumble};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by effect slot operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EffectError {
    #[error("effect id mismatch: expected {expected}, got {got}")]
    IdMismatch { expected: u16, got: u16 },
}

/// Effect descriptor as delivered by the host force-feedback stack.
///
/// `kind` and `direction` are carried opaquely; the slot schedules by
/// `length_ms`/`delay_ms` and renders from `strong`/`weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectParams {
    pub id: u16,
    pub kind: u16,
    pub length_ms: u16,
    pub delay_ms: u16,
    pub strong: u16,
    pub weak: u16,
    pub direction: u16,
}

/// One timed rumble effect slot.
///
/// Timers run in milliseconds. The delay timer is consumed before the run
/// timer; restarting an effect that is still running extends the run timer
/// without re-applying the delay.
#[derive(Debug, Default)]
pub struct EffectSlot {
    params: EffectParams,
    enabled: bool,
    delayed_ms: i32,
    remaining_ms: i32,
}

impl EffectSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot with an effect. Returns `false` without touching the
    /// slot when an effect is already armed.
    pub fn init(&mut self, params: EffectParams) -> bool {
        if self.enabled {
            debug!("effect slot busy, rejecting effect id {}", params.id);
            return false;
        }
        debug!(
            "armed effect id {} (length {} ms, delay {} ms)",
            params.id, params.length_ms, params.delay_ms
        );
        self.params = params;
        self.enabled = true;
        self.delayed_ms = 0;
        self.remaining_ms = 0;
        true
    }

    /// Disarm the slot. Timer state is reset by the next [`Self::init`].
    pub fn deinit(&mut self) {
        self.enabled = false;
    }

    /// Start or restart the armed effect.
    ///
    /// Returns `Ok(false)` when the slot is not armed. A `loop_count` of zero
    /// stops the effect and clears both timers. Otherwise the delay timer is
    /// re-applied only when the effect is not currently running, and the run
    /// timer is extended by the configured length.
    pub fn start(&mut self, id: u16, loop_count: u16) -> Result<bool, EffectError> {
        if !self.enabled {
            return Ok(false);
        }
        if self.params.id != id {
            warn!("rejected start for effect id {} (armed id {})", id, self.params.id);
            return Err(EffectError::IdMismatch {
                expected: self.params.id,
                got: id,
            });
        }

        if loop_count == 0 {
            self.delayed_ms = 0;
            self.remaining_ms = 0;
            return Ok(true);
        }

        if self.remaining_ms <= 0 {
            if self.delayed_ms < 0 {
                self.delayed_ms = 0;
            }
            self.delayed_ms = self.delayed_ms.saturating_add(i32::from(self.params.delay_ms));
        }
        if self.remaining_ms < 0 {
            self.remaining_ms = 0;
        }
        // Repeated restarts accumulate run time; saturate rather than wrap.
        self.remaining_ms = self
            .remaining_ms
            .saturating_add(i32::from(self.params.length_ms));
        Ok(true)
    }

    /// Advance slot time by `delta_ms`. The delay timer is consumed before
    /// the run timer; disarmed slots ignore time.
    pub fn update_time(&mut self, delta_ms: u32) {
        if !self.enabled {
            return;
        }

        let mut delta = i32::try_from(delta_ms).unwrap_or(i32::MAX);
        if self.delayed_ms > delta {
            self.delayed_ms -= delta;
            return;
        }
        delta -= self.delayed_ms;
        self.delayed_ms = 0;

        if self.remaining_ms < delta {
            self.remaining_ms = 0;
            return;
        }
        self.remaining_ms -= delta;
    }

    /// Run time left in milliseconds. Zero while disarmed or still delayed.
    pub fn remaining_ms(&self) -> i32 {
        if !self.enabled || self.delayed_ms > 0 {
            return 0;
        }
        self.remaining_ms
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The armed effect descriptor.
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Strong and weak magnitudes normalised to `0.0..=1.0`.
    pub fn amplitudes(&self) -> (f64, f64) {
        (
            f64::from(self.params.strong) / f64::from(u16::MAX),
            f64::from(self.params.weak) / f64::from(u16::MAX),
        )
    }

    /// Packed command group for the slot's current state.
    ///
    /// The weak magnitude drives the high band and the strong magnitude the
    /// low band, both at their resting frequencies. Disarmed, delayed, and
    /// expired slots produce [`NEUTRAL`].
    pub fn command(&self) -> [u8; RUMBLE_GROUP_LEN] {
        if self.remaining_ms() <= 0 {
            return NEUTRAL;
        }
        let (strong, weak) = self.amplitudes();
        rumble(DEFAULT_HIGH_FREQ_HZ, DEFAULT_LOW_FREQ_HZ, weak, strong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: u16, length_ms: u16, delay_ms: u16) -> EffectParams {
        EffectParams {
            id,
            kind: 0x50,
            length_ms,
            delay_ms,
            strong: 0x8000,
            weak: 0x4000,
            direction: 0,
        }
    }

    #[test]
    fn init_rejects_second_effect() {
        let mut slot = EffectSlot::new();
        assert!(slot.init(params(1, 100, 0)));
        assert!(!slot.init(params(2, 100, 0)));
        assert_eq!(slot.params().id, 1);
    }

    #[test]
    fn deinit_allows_rearm() {
        let mut slot = EffectSlot::new();
        assert!(slot.init(params(1, 100, 0)));
        slot.deinit();
        assert!(!slot.is_enabled());
        assert!(slot.init(params(2, 50, 0)));
        assert_eq!(slot.params().id, 2);
    }

    #[test]
    fn start_disarmed_is_inert() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        assert!(!slot.start(1, 1)?);
        Ok(())
    }

    #[test]
    fn start_wrong_id_errors() {
        let mut slot = EffectSlot::new();
        slot.init(params(7, 100, 0));
        assert_eq!(
            slot.start(9, 1),
            Err(EffectError::IdMismatch { expected: 7, got: 9 })
        );
    }

    #[test]
    fn start_zero_loops_stops() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(params(1, 100, 20));
        assert!(slot.start(1, 1)?);
        assert!(slot.start(1, 0)?);
        slot.update_time(1000);
        assert_eq!(slot.remaining_ms(), 0);
        assert!(slot.is_enabled());
        Ok(())
    }

    #[test]
    fn delay_consumed_before_run_time() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(params(1, 100, 50));
        slot.start(1, 1)?;
        assert_eq!(slot.remaining_ms(), 0, "still delayed");
        slot.update_time(30);
        assert_eq!(slot.remaining_ms(), 0, "still delayed");
        slot.update_time(30);
        assert_eq!(slot.remaining_ms(), 90, "10 ms of run time consumed");
        Ok(())
    }

    #[test]
    fn restart_extends_without_delay() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(params(1, 100, 50));
        slot.start(1, 1)?;
        slot.update_time(50);
        assert_eq!(slot.remaining_ms(), 100);
        slot.start(1, 1)?;
        assert_eq!(slot.remaining_ms(), 200, "running effect extends directly");
        Ok(())
    }

    #[test]
    fn expiry_goes_neutral() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(params(1, 100, 0));
        slot.start(1, 1)?;
        assert_ne!(slot.command(), NEUTRAL);
        slot.update_time(250);
        assert_eq!(slot.remaining_ms(), 0);
        assert_eq!(slot.command(), NEUTRAL);
        assert!(slot.is_enabled(), "expiry does not disarm");
        Ok(())
    }

    #[test]
    fn command_maps_strong_to_low_band() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(EffectParams {
            id: 1,
            kind: 0x50,
            length_ms: 100,
            delay_ms: 0,
            strong: u16::MAX,
            weak: 0,
            direction: 0,
        });
        slot.start(1, 1)?;
        assert_eq!(
            slot.command(),
            rumble(DEFAULT_HIGH_FREQ_HZ, DEFAULT_LOW_FREQ_HZ, 0.0, 1.0)
        );
        Ok(())
    }

    #[test]
    fn command_neutral_while_delayed() -> Result<(), EffectError> {
        let mut slot = EffectSlot::new();
        slot.init(params(1, 100, 50));
        slot.start(1, 1)?;
        assert_eq!(slot.command(), NEUTRAL);
        slot.update_time(50);
        assert_ne!(slot.command(), NEUTRAL);
        Ok(())
    }
}
