//! Clock state aggregate
//!
//! `CubeClock` owns the cube array and everything that writes to it: the
//! time encoder, the physics settings and the seeded RNG. Hosts call
//! `on_second_tick` and `physics_step` strictly one after the other; nothing
//! here locks.

use std::time::Duration;

use glam::{DVec2, DVec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cube::{Cube, layout_cubes};
use super::encoder::{ClockState, TimeEncoder};
use super::geometry::Rect;
use super::physics::{self, PhysicsConfig};
use crate::consts::*;
use crate::dial_hour;
use crate::settings::ClockSettings;

/// Wall clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallTime {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl WallTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }
}

/// Color selector for the render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillColor {
    Black,
    White,
}

/// One rectangle to draw, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    /// Height to fill from the origin down
    pub fill_height: f64,
    pub color: FillColor,
    /// Draw a white outline around the filled rect
    pub outlined: bool,
}

impl CubeSnapshot {
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width, self.fill_height)
    }
}

/// Everything the render layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub window: Rect,
    /// Seconds bar, drawn first
    pub seconds: CubeSnapshot,
    /// Hour frame backdrop
    pub background: CubeSnapshot,
    /// The hour/minute cubes, drawn last
    pub cubes: [CubeSnapshot; CUBE_COUNT],
}

/// What a second tick re-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondTick {
    pub hour_encoded: bool,
    pub minute_encoded: bool,
}

/// The whole clock face
#[derive(Debug, Clone)]
pub struct CubeClock {
    window: Rect,
    /// Hour frame in window coordinates
    hour_frame: Rect,
    /// Hour cubes in hour frame coordinates
    cubes: [Cube; CUBE_COUNT],
    /// Seconds bar in window coordinates, no physics
    seconds: Cube,
    encoder: TimeEncoder,
    physics: PhysicsConfig,
    step_period: Duration,
    /// Last (dial hour, minute) seen by `on_second_tick`
    observed: Option<(u8, u8)>,
    seed: u64,
    rng: Pcg32,
}

impl CubeClock {
    /// Build the clock face for a window. Cubes start unlit and at rest.
    pub fn new(window: Rect, settings: &ClockSettings, seed: u64) -> Self {
        let inset = settings.hour_frame_inset;
        // One extra pixel trimmed on the right
        let hour_frame = window.inset(inset, inset, inset + 1.0, inset);
        let local = Rect::from_size(hour_frame.width(), hour_frame.height());

        Self {
            window,
            hour_frame,
            cubes: layout_cubes(&local),
            seconds: Cube::new(window),
            encoder: TimeEncoder::new(settings.max_slot_attempts),
            physics: settings.physics_config(),
            step_period: settings.step_period(),
            observed: None,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Default window and settings
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            Rect::from_size(WINDOW_WIDTH, WINDOW_HEIGHT),
            &ClockSettings::default(),
            seed,
        )
    }

    /// Second tick handler.
    ///
    /// Updates the seconds bar, re-encodes hour and minute when the hour
    /// changed, or just the minute when only the minute changed.
    pub fn on_second_tick(&mut self, now: WallTime) -> SecondTick {
        let second = now.second.min(SECONDS_PER_MINUTE - 1);
        self.seconds
            .fill_fraction(f64::from(second) / f64::from(SECONDS_PER_MINUTE));

        let hour = dial_hour(now.hour.min(23));
        let minute = now.minute;
        let mut tick = SecondTick::default();

        match self.observed {
            Some((h, _)) if h != hour => {
                self.encode_hour(hour);
                self.encode_minute(minute);
                tick = SecondTick { hour_encoded: true, minute_encoded: true };
            }
            Some((_, m)) if m != minute => {
                self.encode_minute(minute);
                tick.minute_encoded = true;
            }
            Some(_) => {}
            None => {
                log::info!("initial encode at {:02}:{:02}", now.hour, minute);
                self.encode_hour(hour);
                self.encode_minute(minute);
                tick = SecondTick { hour_encoded: true, minute_encoded: true };
            }
        }

        self.observed = Some((hour, minute));
        tick
    }

    /// Re-encode the hour (dial value 0-12). Clears the minute slot.
    pub fn encode_hour(&mut self, hour: u8) {
        self.encoder.encode_hour(&mut self.cubes, hour, &mut self.rng);
    }

    /// Re-encode the minute on the active minute slot
    pub fn encode_minute(&mut self, minute: u8) {
        self.encoder.encode_minute(&mut self.cubes, minute, &mut self.rng);
    }

    /// Physics timer handler, using the configured step period.
    ///
    /// Only x and y of the reading are used.
    pub fn physics_step(&mut self, accel: DVec3) -> usize {
        self.physics_step_dt(accel, self.step_period)
    }

    /// Physics step of an explicit length
    pub fn physics_step_dt(&mut self, accel: DVec3, dt: Duration) -> usize {
        let boundary = self.boundary();
        physics::step(&mut self.cubes, accel.truncate(), &boundary, dt, &self.physics)
    }

    /// Read-only view for the render layer
    pub fn snapshot(&self) -> FrameSnapshot {
        let offset = self.hour_frame.origin;
        let cubes = self.cubes.map(|cube| {
            let origin = cube.frame.origin + offset;
            CubeSnapshot {
                origin_x: origin.x,
                origin_y: origin.y,
                width: cube.width(),
                fill_height: cube.fill_height,
                color: FillColor::Black,
                outlined: true,
            }
        });

        FrameSnapshot {
            window: self.window,
            seconds: CubeSnapshot {
                origin_x: self.seconds.frame.origin.x,
                origin_y: self.seconds.frame.origin.y,
                width: self.seconds.width(),
                fill_height: self.seconds.fill_height,
                color: FillColor::Black,
                outlined: false,
            },
            background: CubeSnapshot {
                origin_x: self.hour_frame.origin.x,
                origin_y: self.hour_frame.origin.y,
                width: self.hour_frame.width(),
                fill_height: self.hour_frame.height(),
                color: FillColor::White,
                outlined: false,
            },
            cubes,
        }
    }

    pub fn cubes(&self) -> &[Cube; CUBE_COUNT] {
        &self.cubes
    }

    /// Direct cube access, e.g. for a host that flings cubes on a tap
    pub fn cubes_mut(&mut self) -> &mut [Cube; CUBE_COUNT] {
        &mut self.cubes
    }

    pub fn clock_state(&self) -> &ClockState {
        &self.encoder.state
    }

    /// Current seconds bar height
    pub fn seconds_height(&self) -> f64 {
        self.seconds.fill_height
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    pub fn hour_frame(&self) -> Rect {
        self.hour_frame
    }

    /// Physics walls, in hour frame coordinates
    pub fn boundary(&self) -> Rect {
        Rect::from_size(self.hour_frame.width(), self.hour_frame.height())
    }

    pub fn step_period(&self) -> Duration {
        self.step_period
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stop all cube motion, keeping positions
    pub fn halt(&mut self) {
        self.cubes.iter_mut().for_each(|c| c.velocity = DVec2::ZERO);
    }
}
