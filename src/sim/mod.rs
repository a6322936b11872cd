//! Deterministic clock core
//!
//! Everything that decides what the cubes look like lives here:
//! - Time encoding driven by wall clock readings
//! - Fixed-step physics driven by accelerometer readings
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cube;
pub mod encoder;
pub mod geometry;
pub mod physics;
pub mod slots;
pub mod state;

pub use cube::{Cube, grid_layout, layout_cubes, lit_count};
pub use encoder::{ClockState, TimeEncoder};
pub use geometry::Rect;
pub use physics::{MassModel, PhysicsConfig, WallHit, step};
pub use slots::{next_unlit_slot, pick_unlit_slot};
pub use state::{CubeClock, CubeSnapshot, FillColor, FrameSnapshot, SecondTick, WallTime};
