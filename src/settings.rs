//! Clock tuning settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{MassModel, PhysicsConfig};

/// Errors from loading a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    // === Physics ===
    /// Accelerometer reading -> force scale
    pub accel_ratio: f64,
    /// Flat cube mass
    pub mass: f64,
    /// Mass per unit area for `MassModel::Area`
    pub density: f64,
    pub mass_model: MassModel,
    /// Velocity kept after a wall bounce (0-1)
    pub restitution: f64,
    /// Physics timer period
    pub step_period_ms: u64,

    // === Time encoding ===
    /// Allocator redraws before accepting a lit slot
    pub max_slot_attempts: u32,

    // === Layout ===
    /// Hour frame inset inside the window
    pub hour_frame_inset: f64,

    /// Fixed RNG seed, fresh per run when unset
    pub seed: Option<u64>,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            accel_ratio: ACCEL_RATIO,
            mass: CUBE_MASS,
            density: CUBE_DENSITY,
            mass_model: MassModel::Flat,
            restitution: RESTITUTION,
            step_period_ms: PHYSICS_STEP_MS,
            max_slot_attempts: MAX_SLOT_ATTEMPTS,
            hour_frame_inset: HOUR_FRAME_INSET,
            seed: None,
        }
    }
}

impl ClockSettings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if !self.accel_ratio.is_finite() {
            return invalid("accel_ratio", "must be finite");
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return invalid("mass", "must be positive");
        }
        if self.mass_model == MassModel::Area && !(self.density.is_finite() && self.density > 0.0) {
            return invalid("density", "must be positive for area mass");
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return invalid("restitution", "must be between 0 and 1");
        }
        if self.step_period_ms == 0 {
            return invalid("step_period_ms", "must be non-zero");
        }
        if !(self.hour_frame_inset.is_finite() && self.hour_frame_inset >= 0.0) {
            return invalid("hour_frame_inset", "must be non-negative");
        }
        Ok(())
    }

    pub fn step_period(&self) -> Duration {
        Duration::from_millis(self.step_period_ms)
    }

    /// Integrator constants. Velocities stay in units of the default 50 ms
    /// step whatever the timer period is.
    pub fn physics_config(&self) -> PhysicsConfig {
        PhysicsConfig {
            accel_ratio: self.accel_ratio,
            mass: self.mass,
            density: self.density,
            mass_model: self.mass_model,
            restitution: self.restitution,
            reference_step: Duration::from_millis(PHYSICS_STEP_MS),
        }
    }
}
