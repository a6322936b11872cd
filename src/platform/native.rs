//! Native collaborators: local wall clock and a simulated tilt sensor

use chrono::{Local, Timelike};
use glam::DVec3;

use super::{Accelerometer, ClockSource};
use crate::sim::WallTime;

/// Local time from the OS clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> WallTime {
        let now = Local::now();
        WallTime::new(now.hour() as u8, now.minute() as u8, now.second().min(59) as u8)
    }
}

/// Slowly rocking tilt, in accelerometer units (1000 = 1 g)
#[derive(Debug, Clone)]
pub struct TiltSimulator {
    /// Peak x/y reading
    pub amplitude: f64,
    /// Steps per full rock
    pub period_steps: u32,
    step: u32,
}

impl Default for TiltSimulator {
    fn default() -> Self {
        Self::new(400.0, 200)
    }
}

impl TiltSimulator {
    pub fn new(amplitude: f64, period_steps: u32) -> Self {
        Self {
            amplitude,
            period_steps: period_steps.max(1),
            step: 0,
        }
    }
}

impl Accelerometer for TiltSimulator {
    fn sample(&mut self) -> Option<DVec3> {
        let phase = std::f64::consts::TAU * f64::from(self.step) / f64::from(self.period_steps);
        self.step = (self.step + 1) % self.period_steps;
        Some(DVec3::new(
            self.amplitude * phase.sin(),
            self.amplitude * (phase * 0.5).cos(),
            -1000.0,
        ))
    }
}
