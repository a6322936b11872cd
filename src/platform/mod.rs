//! Platform collaborators
//!
//! The core only needs two point samples, both non-blocking:
//! - Wall clock time (`ClockSource`)
//! - Accelerometer x/y/z (`Accelerometer`)
//!
//! plus a scheduler that fires the second tick and the physics step one at a
//! time.

pub mod scheduler;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scheduler::{Scheduler, Trigger};

use glam::DVec3;

use crate::sim::WallTime;

/// Wall clock reader
pub trait ClockSource {
    /// Current local time. Must not fail; return the last known time instead.
    fn now(&mut self) -> WallTime;
}

/// Accelerometer reader
pub trait Accelerometer {
    /// Latest sample, or `None` if the read failed
    fn sample(&mut self) -> Option<DVec3>;

    /// Latest sample with failed reads treated as no acceleration
    fn sample_or_zero(&mut self) -> DVec3 {
        self.sample().unwrap_or_else(|| {
            log::trace!("accelerometer read failed, using zero");
            DVec3::ZERO
        })
    }
}

/// Device without an accelerometer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccelerometer;

impl Accelerometer for NoAccelerometer {
    fn sample(&mut self) -> Option<DVec3> {
        None
    }
}

/// Fixed readings, e.g. replayed from a recording
#[derive(Debug, Clone, Default)]
pub struct ScriptedAccelerometer {
    samples: Vec<Option<DVec3>>,
    next: usize,
}

impl ScriptedAccelerometer {
    pub fn new(samples: Vec<Option<DVec3>>) -> Self {
        Self { samples, next: 0 }
    }
}

impl Accelerometer for ScriptedAccelerometer {
    /// Cycles through the script; an empty script always fails
    fn sample(&mut self) -> Option<DVec3> {
        if self.samples.is_empty() {
            return None;
        }
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    pub time: WallTime,
}

impl ClockSource for ManualClock {
    fn now(&mut self) -> WallTime {
        self.time
    }
}
