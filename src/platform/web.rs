//! Browser binding
//!
//! The page owns the timers and the sensors; it forwards wall clock ticks and
//! `DeviceMotionEvent` readings here and draws the returned snapshot.

use glam::DVec3;
use wasm_bindgen::prelude::*;

use crate::settings::ClockSettings;
use crate::sim::{CubeClock, Rect, WallTime};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Cube Clock starting...");
}

/// Clock face exported to JavaScript
#[wasm_bindgen]
pub struct WebCubeClock {
    clock: CubeClock,
}

#[wasm_bindgen]
impl WebCubeClock {
    /// `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, settings_json: &str) -> WebCubeClock {
        let settings = if settings_json.trim().is_empty() {
            ClockSettings::default()
        } else {
            ClockSettings::from_json(settings_json).unwrap_or_else(|e| {
                log::warn!("{e}; using default settings");
                ClockSettings::default()
            })
        };
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Clock initialized with seed: {}", seed);
        WebCubeClock {
            clock: CubeClock::new(Rect::from_size(width, height), &settings, seed),
        }
    }

    /// Call once per second with the local time
    pub fn on_second(&mut self, hour: u8, minute: u8, second: u8) {
        self.clock.on_second_tick(WallTime::new(hour, minute, second));
    }

    /// Call every `step_period_ms`. Pass NaN components for a failed read.
    pub fn step(&mut self, x: f64, y: f64, z: f64) {
        let accel = DVec3::new(x, y, z);
        let accel = if accel.is_finite() { accel } else { DVec3::ZERO };
        self.clock.physics_step(accel);
    }

    pub fn step_period_ms(&self) -> u32 {
        self.clock.step_period().as_millis() as u32
    }

    /// Frame snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.clock.snapshot()).unwrap_or_default()
    }
}
