//! Time encoding into cube fill heights
//!
//! The hour is the number of fully lit cubes, placed at random. The minute is
//! a single extra cube filled `minute / 60` of the way. The minute cube is
//! chosen once per hour and refilled in place on every minute tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cube::{Cube, lit_count};
use super::slots::{next_unlit_slot, pick_unlit_slot};
use crate::consts::{MAX_SLOT_ATTEMPTS, MINUTES_PER_HOUR};

/// What the cubes currently encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockState {
    /// Encoded hour, 0-11 (a full house of 12 is stored as 0)
    pub hour: u8,
    /// Encoded minute, 0-59
    pub minute: u8,
    /// Cube showing the minute, chosen on the first minute encode after an hour encode
    pub active_minute_slot: Option<usize>,
}

/// Writes hour and minute patterns into a cube array
#[derive(Debug, Clone)]
pub struct TimeEncoder {
    pub state: ClockState,
    /// Allocator redraw limit
    pub max_attempts: u32,
}

impl Default for TimeEncoder {
    fn default() -> Self {
        Self::new(MAX_SLOT_ATTEMPTS)
    }
}

impl TimeEncoder {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            state: ClockState::default(),
            max_attempts,
        }
    }

    /// Clear every cube and light `hour` of them (dial value 0-12).
    ///
    /// 12 lights every cube and is then tracked as hour 0. Always forgets the
    /// minute slot.
    pub fn encode_hour<R: Rng + ?Sized>(&mut self, cubes: &mut [Cube], hour: u8, rng: &mut R) {
        debug_assert!(hour <= 12, "dial hour out of range: {hour}");
        let hour = hour.min(12);

        cubes.iter_mut().for_each(Cube::clear);

        if usize::from(hour) >= cubes.len() {
            cubes.iter_mut().for_each(Cube::light);
            self.state.hour = 0;
        } else {
            for _ in 0..hour {
                let slot = self.claim_slot(cubes, rng);
                cubes[slot].light();
            }
            self.state.hour = hour;
        }

        self.state.active_minute_slot = None;
        log::debug!("encoded hour {hour} into {} cubes", lit_count(cubes));
    }

    /// Fill the minute cube to `minute / 60` of its height.
    ///
    /// Picks the minute cube if none is active. Encoding the same minute twice
    /// leaves the cubes unchanged.
    pub fn encode_minute<R: Rng + ?Sized>(&mut self, cubes: &mut [Cube], minute: u8, rng: &mut R) {
        debug_assert!(minute < MINUTES_PER_HOUR, "minute out of range: {minute}");
        let minute = minute.min(MINUTES_PER_HOUR - 1);

        let slot = match self.state.active_minute_slot {
            Some(slot) if slot < cubes.len() => slot,
            _ => {
                let slot = self.claim_slot(cubes, rng);
                self.state.active_minute_slot = Some(slot);
                slot
            }
        };

        cubes[slot].fill_fraction(f64::from(minute) / f64::from(MINUTES_PER_HOUR));
        self.state.minute = minute;
        log::debug!("encoded minute {minute} into slot {slot}");
    }

    /// Allocator pick, falling back to a linear probe when the retries only
    /// found lit slots. Reuses a lit slot only when every slot is lit.
    fn claim_slot<R: Rng + ?Sized>(&self, cubes: &[Cube], rng: &mut R) -> usize {
        let slot = pick_unlit_slot(cubes, self.max_attempts, rng);
        if !cubes[slot].is_lit() {
            return slot;
        }
        next_unlit_slot(cubes, slot).unwrap_or(slot)
    }
}
