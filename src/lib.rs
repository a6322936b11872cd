//! Cube Clock - an abstract clock face made of cubes
//!
//! The hour is shown as the number of filled cubes in a 3x4 grid, the minute
//! as one partially filled cube, and the second as a bar growing down the
//! window. Tilting the device pushes the cubes around the hour frame.
//!
//! Core modules:
//! - `sim`: Deterministic core (geometry, time encoding, physics)
//! - `renderer`: Render adapter (draw targets, instance buffers)
//! - `platform`: Clock/accelerometer collaborators and the scheduler
//! - `settings`: Tuning values loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ClockSettings, SettingsError};
pub use sim::{CubeClock, MassModel};

/// Clock configuration constants
pub mod consts {
    /// Number of hour cubes (one per hour label 0-11)
    pub const CUBE_COUNT: usize = 12;
    /// Grid layout of the hour cubes
    pub const GRID_COLUMNS: usize = 3;
    pub const GRID_ROWS: usize = 4;

    /// Allocator resamples after the first draw before accepting a lit slot
    pub const MAX_SLOT_ATTEMPTS: u32 = 10;

    /// Accelerometer reading -> force scale
    pub const ACCEL_RATIO: f64 = 0.05;
    /// Flat mass shared by every cube
    pub const CUBE_MASS: f64 = 50.0;
    /// Mass per unit area, only used by `MassModel::Area`
    pub const CUBE_DENSITY: f64 = 0.25;
    /// Velocity retained (sign flipped) after a wall bounce
    pub const RESTITUTION: f64 = 0.5;
    /// Physics timer period. Velocities are expressed per step of this length.
    pub const PHYSICS_STEP_MS: u64 = 50;

    /// Hour frame inset from the window's top-left corner
    pub const HOUR_FRAME_INSET: f64 = 20.0;

    /// Default window (Pebble screen)
    pub const WINDOW_WIDTH: f64 = 144.0;
    pub const WINDOW_HEIGHT: f64 = 168.0;

    pub const MINUTES_PER_HOUR: u8 = 60;
    pub const SECONDS_PER_MINUTE: u8 = 60;
}

/// Convert a 24-hour wall clock hour to the dial value shown by the cubes.
///
/// Only hours past noon are folded, so midnight stays 0 (nothing lit) and
/// noon stays 12 (every cube lit).
#[inline]
pub fn dial_hour(hour_24: u8) -> u8 {
    if hour_24 > 12 { hour_24 - 12 } else { hour_24 }
}
