//! Data-driven game balance
//!
//! Physics magnitudes and geometry ratios. Persisted separately from scores;
//! any missing field falls back to the default.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::Storage;

/// Tunable physics and geometry constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Craft physics ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Acceleration per tick while lifting (negative = up)
    pub lift: f32,
    /// Velocity clamp magnitude
    pub max_velocity: f32,

    // === Obstacles ===
    /// Leftward motion per tick
    pub obstacle_speed: f32,
    /// Ticks between generated obstacles
    pub obstacle_frequency: u64,
    /// Fraction of viewport width the first obstacle starts at
    pub first_obstacle_offset: f32,

    // === Geometry (fractions of viewport height) ===
    pub craft_width_ratio: f32,
    pub craft_height_ratio: f32,
    /// Fraction of viewport width
    pub craft_x_ratio: f32,
    pub obstacle_width_ratio: f32,
    pub obstacle_gap_ratio: f32,
    pub obstacle_min_height_ratio: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift: LIFT,
            max_velocity: MAX_VELOCITY,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_frequency: OBSTACLE_FREQUENCY,
            first_obstacle_offset: FIRST_OBSTACLE_OFFSET,

            craft_width_ratio: CRAFT_WIDTH_RATIO,
            craft_height_ratio: CRAFT_HEIGHT_RATIO,
            craft_x_ratio: CRAFT_X_RATIO,
            obstacle_width_ratio: OBSTACLE_WIDTH_RATIO,
            obstacle_gap_ratio: OBSTACLE_GAP_RATIO,
            obstacle_min_height_ratio: OBSTACLE_MIN_HEIGHT_RATIO,
        }
    }
}

impl Tuning {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "heli_run_tuning";

    /// Repair values that would break the simulation.
    ///
    /// A zero frequency would divide by zero in the spawn cadence, a
    /// negative clamp would invert the velocity bounds, a non-positive speed
    /// never scrolls obstacles off-screen and non-positive ratios collapse
    /// the geometry.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.obstacle_frequency == 0 {
            log::warn!("obstacle_frequency of 0 is invalid, using default");
            self.obstacle_frequency = defaults.obstacle_frequency;
        }
        if !is_positive(self.max_velocity) {
            log::warn!("max_velocity {} is invalid, using default", self.max_velocity);
            self.max_velocity = defaults.max_velocity;
        }
        if !is_positive(self.obstacle_speed) {
            log::warn!("obstacle_speed {} is invalid, using default", self.obstacle_speed);
            self.obstacle_speed = defaults.obstacle_speed;
        }

        let ratios = [
            ("craft_width_ratio", &mut self.craft_width_ratio, defaults.craft_width_ratio),
            ("craft_height_ratio", &mut self.craft_height_ratio, defaults.craft_height_ratio),
            ("craft_x_ratio", &mut self.craft_x_ratio, defaults.craft_x_ratio),
            ("obstacle_width_ratio", &mut self.obstacle_width_ratio, defaults.obstacle_width_ratio),
            ("obstacle_gap_ratio", &mut self.obstacle_gap_ratio, defaults.obstacle_gap_ratio),
            (
                "obstacle_min_height_ratio",
                &mut self.obstacle_min_height_ratio,
                defaults.obstacle_min_height_ratio,
            ),
        ];
        for (name, value, default) in ratios {
            if !is_positive(*value) {
                log::warn!("{} {} is invalid, using default", name, value);
                *value = default;
            }
        }
        self
    }

    /// Load tuning from storage, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    return tuning.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed tuning: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read tuning: {}", e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to storage
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = storage.set(Self::STORAGE_KEY, &json) {
                    log::warn!("Could not save tuning: {}", e);
                } else {
                    log::info!("Tuning saved");
                }
            }
            Err(e) => log::warn!("Could not serialize tuning: {}", e),
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
