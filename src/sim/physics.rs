//! Tilt-driven cube physics
//!
//! Each step converts the accelerometer reading into a force, accelerates
//! every cube, bounces cubes that have crossed a wall while still moving out,
//! then moves them. Cubes only collide with the boundary, never with each
//! other.
//!
//! Velocities are measured in distance per reference step (50 ms). A step of
//! another length scales both the velocity change and the displacement, so
//! motion speed does not depend on the timer period.

use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::cube::Cube;
use super::geometry::Rect;
use crate::consts::{ACCEL_RATIO, CUBE_DENSITY, CUBE_MASS, PHYSICS_STEP_MS, RESTITUTION};

/// How a cube's mass is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassModel {
    /// Every cube weighs `mass`
    #[default]
    Flat,
    /// `width * height * density`
    Area,
}

/// Tuned constants for the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub accel_ratio: f64,
    pub mass: f64,
    pub density: f64,
    pub mass_model: MassModel,
    pub restitution: f64,
    /// Step length the velocity units are expressed in
    pub reference_step: Duration,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            accel_ratio: ACCEL_RATIO,
            mass: CUBE_MASS,
            density: CUBE_DENSITY,
            mass_model: MassModel::Flat,
            restitution: RESTITUTION,
            reference_step: Duration::from_millis(PHYSICS_STEP_MS),
        }
    }
}

impl PhysicsConfig {
    /// Force from an accelerometer reading. Device +y is up, screen +y is down.
    #[inline]
    pub fn accel_to_force(&self, accel: DVec2) -> DVec2 {
        DVec2::new(accel.x * self.accel_ratio, -accel.y * self.accel_ratio)
    }

    pub fn mass_of(&self, cube: &Cube) -> f64 {
        let mass = match self.mass_model {
            MassModel::Flat => self.mass,
            MassModel::Area => cube.frame.width() * cube.frame.height() * self.density,
        };
        mass.max(f64::EPSILON)
    }

    /// `dt` in reference steps
    #[inline]
    pub fn step_scale(&self, dt: Duration) -> f64 {
        dt.as_secs_f64() / self.reference_step.as_secs_f64()
    }
}

/// Which velocity components were reflected by a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// `velocity += force / mass`, scaled by the step length
pub fn apply_force(cube: &mut Cube, force: DVec2, mass: f64, scale: f64) {
    cube.velocity += force / mass * scale;
}

/// Reflect each velocity component whose leading edge is past the boundary
/// and still moving outward. Inward motion is left alone, so a cube that has
/// already bounced drifts back in without bouncing again.
pub fn resolve_boundary(cube: &mut Cube, boundary: &Rect, restitution: f64) -> WallHit {
    let (min, max) = (cube.frame.min(), cube.frame.max());
    let (lo, hi) = (boundary.min(), boundary.max());
    let v = cube.velocity;

    let hit = WallHit {
        x: (min.x < lo.x && v.x < 0.0) || (max.x > hi.x && v.x > 0.0),
        y: (min.y < lo.y && v.y < 0.0) || (max.y > hi.y && v.y > 0.0),
    };
    if hit.x {
        cube.velocity.x = -v.x * restitution;
    }
    if hit.y {
        cube.velocity.y = -v.y * restitution;
    }
    hit
}

/// `origin += velocity`, scaled by the step length
pub fn integrate(cube: &mut Cube, scale: f64) {
    cube.frame.origin += cube.velocity * scale;
}

/// Advance every cube by one step of length `dt`.
///
/// `accel` is the device x/y acceleration (z is ignored by the caller).
/// Returns the number of wall bounces.
pub fn step(cubes: &mut [Cube], accel: DVec2, boundary: &Rect, dt: Duration, config: &PhysicsConfig) -> usize {
    let force = config.accel_to_force(accel);
    let scale = config.step_scale(dt);
    let mut bounces = 0;

    for cube in cubes.iter_mut() {
        let mass = config.mass_of(cube);
        apply_force(cube, force, mass, scale);
        if resolve_boundary(cube, boundary, config.restitution).any() {
            bounces += 1;
        }
        integrate(cube, scale);
    }

    log::trace!("physics step: force {force:?}, {bounces} bounces");
    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STEP: Duration = Duration::from_millis(PHYSICS_STEP_MS);

    fn cube_at(x: f64, y: f64, vel: DVec2) -> Cube {
        let mut cube = Cube::new(Rect::new(x, y, 30.0, 30.0));
        cube.velocity = vel;
        cube
    }

    #[test]
    fn test_accel_to_force_flips_y() {
        let config = PhysicsConfig::default();
        let force = config.accel_to_force(DVec2::new(200.0, 400.0));
        assert!((force.x - 10.0).abs() < 1e-12);
        assert!((force.y + 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_force_divided_by_flat_mass() {
        let config = PhysicsConfig::default();
        let mut cubes = [cube_at(10.0, 10.0, DVec2::ZERO)];
        let boundary = Rect::from_size(1000.0, 1000.0);

        // force = (1000 * 0.05, 0) = (50, 0); / 50 = (1, 0)
        step(&mut cubes, DVec2::new(1000.0, 0.0), &boundary, STEP, &config);
        assert!((cubes[0].velocity.x - 1.0).abs() < 1e-12);
        assert!((cubes[0].frame.origin.x - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_area_mass_model() {
        let config = PhysicsConfig {
            mass_model: MassModel::Area,
            ..Default::default()
        };
        let cube = cube_at(0.0, 0.0, DVec2::ZERO);
        assert_eq!(config.mass_of(&cube), 30.0 * 30.0 * CUBE_DENSITY);
        assert_eq!(PhysicsConfig::default().mass_of(&cube), CUBE_MASS);
    }

    #[test]
    fn test_linear_motion_without_accel() {
        let config = PhysicsConfig::default();
        let boundary = Rect::from_size(1000.0, 1000.0);
        let vel = DVec2::new(3.0, -1.5);
        let mut cubes = [cube_at(100.0, 500.0, vel)];

        for t in 1..=20 {
            step(&mut cubes, DVec2::ZERO, &boundary, STEP, &config);
            let expected = DVec2::new(100.0, 500.0) + vel * t as f64;
            assert!((cubes[0].frame.origin - expected).length() < 1e-9);
            assert_eq!(cubes[0].velocity, vel);
        }
    }

    #[test]
    fn test_right_wall_bounce_once() {
        let config = PhysicsConfig::default();
        let boundary = Rect::from_size(100.0, 100.0);
        // Right edge at 102, past the wall, moving right
        let mut cubes = [cube_at(72.0, 10.0, DVec2::new(4.0, 0.0))];

        step(&mut cubes, DVec2::ZERO, &boundary, STEP, &config);
        assert_eq!(cubes[0].velocity.x, -2.0);
        assert_eq!(cubes[0].frame.origin.x, 70.0);

        // Right edge still at 100 or beyond would not matter: moving inward now
        cubes[0].frame.origin.x = 75.0;
        step(&mut cubes, DVec2::ZERO, &boundary, STEP, &config);
        assert_eq!(cubes[0].velocity.x, -2.0);
        assert_eq!(cubes[0].frame.origin.x, 73.0);
    }

    #[test]
    fn test_axes_bounce_independently() {
        let config = PhysicsConfig::default();
        let boundary = Rect::from_size(100.0, 100.0);
        let mut cube = cube_at(-1.0, 40.0, DVec2::new(-2.0, 6.0));

        let hit = resolve_boundary(&mut cube, &boundary, config.restitution);
        assert_eq!(hit, WallHit { x: true, y: false });
        assert_eq!(cube.velocity, DVec2::new(1.0, 6.0));
    }

    #[test]
    fn test_top_and_bottom_walls() {
        let boundary = Rect::from_size(100.0, 100.0);

        let mut top = cube_at(10.0, -5.0, DVec2::new(0.0, -8.0));
        assert!(resolve_boundary(&mut top, &boundary, 0.5).y);
        assert_eq!(top.velocity.y, 4.0);

        let mut bottom = cube_at(10.0, 75.0, DVec2::new(0.0, 8.0));
        assert!(resolve_boundary(&mut bottom, &boundary, 0.5).y);
        assert_eq!(bottom.velocity.y, -4.0);
    }

    #[test]
    fn test_boundary_offset_from_origin() {
        let boundary = Rect::new(20.0, 20.0, 100.0, 100.0);
        let mut cube = cube_at(15.0, 50.0, DVec2::new(-3.0, 0.0));
        assert!(resolve_boundary(&mut cube, &boundary, 0.5).x);

        let mut inside = cube_at(25.0, 50.0, DVec2::new(-3.0, 0.0));
        assert!(!resolve_boundary(&mut inside, &boundary, 0.5).any());
    }

    #[test]
    fn test_half_step_halves_motion() {
        let config = PhysicsConfig::default();
        let boundary = Rect::from_size(1000.0, 1000.0);
        let mut full = [cube_at(100.0, 100.0, DVec2::ZERO)];
        let mut halves = [cube_at(100.0, 100.0, DVec2::ZERO)];
        let accel = DVec2::new(1000.0, -1000.0);

        step(&mut full, accel, &boundary, STEP, &config);
        step(&mut halves, accel, &boundary, STEP / 2, &config);
        step(&mut halves, accel, &boundary, STEP / 2, &config);

        // Same velocity after the same elapsed time
        assert!((full[0].velocity - halves[0].velocity).length() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_free_flight_is_linear(
            vx in -5.0f64..5.0,
            vy in -5.0f64..5.0,
            steps in 1usize..40,
        ) {
            let config = PhysicsConfig::default();
            let boundary = Rect::from_size(10_000.0, 10_000.0);
            let vel = DVec2::new(vx, vy);
            let mut cubes = [cube_at(5000.0, 5000.0, vel)];

            for _ in 0..steps {
                step(&mut cubes, DVec2::ZERO, &boundary, STEP, &config);
            }
            let expected = DVec2::new(5000.0, 5000.0) + vel * steps as f64;
            prop_assert!((cubes[0].frame.origin - expected).length() < 1e-6);
        }
    }
}
