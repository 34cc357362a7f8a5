//! Fixed engine constants
//!
//! The background is not user-tunable. The values are gathered into
//! `EngineConfig` so hosts can read them back as a JSON manifest.

use serde::{Deserialize, Serialize};

/// Cell edge in surface pixels
pub const CELL_SIZE: u32 = 8;

/// Chebyshev radius of the pointer brush, in cells
pub const SEED_RADIUS: i32 = 3;

/// Chance that a cell under the brush is set alive on a seeding pass
pub const SEED_PROBABILITY: f64 = 0.3;

/// Minimum time between seeding passes (ms)
pub const SPAWN_INTERVAL_MS: f64 = 50.0;

/// Minimum time between generations (ms)
pub const UPDATE_INTERVAL_MS: f64 = 150.0;

pub const BACKGROUND_FILL: &str = "#ffffff";
pub const FOREGROUND_FILL: &str = "#000000";

// Page presentation of the mounted canvas
pub const CANVAS_ID: &str = "game-of-life";
pub const CANVAS_OPACITY: &str = "0.15";
pub const CANVAS_Z_INDEX: &str = "-1";

/// Initial xorshift32 state; must be non-zero
pub const DEFAULT_RNG_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub cell_size: u32,
    pub seed_radius: i32,
    pub seed_probability: f64,
    pub spawn_interval_ms: f64,
    pub update_interval_ms: f64,
    pub background_fill: String,
    pub foreground_fill: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            seed_radius: SEED_RADIUS,
            seed_probability: SEED_PROBABILITY,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            update_interval_ms: UPDATE_INTERVAL_MS,
            background_fill: BACKGROUND_FILL.to_string(),
            foreground_fill: FOREGROUND_FILL.to_string(),
        }
    }
}

impl EngineConfig {
    /// JSON manifest for hosts (cell size, intervals, fills)
    pub fn manifest_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Grid dimensions (cols, rows) covering a surface of the given size
    #[inline]
    pub fn grid_dims(&self, width: u32, height: u32) -> (u32, u32) {
        (width.div_ceil(self.cell_size), height.div_ceil(self.cell_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dims_round_up_partial_cells() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_dims(0, 0), (0, 0));
        assert_eq!(config.grid_dims(8, 8), (1, 1));
        assert_eq!(config.grid_dims(9, 17), (2, 3));
        assert_eq!(config.grid_dims(1920, 1080), (240, 135));
    }

    #[test]
    fn manifest_exposes_fixed_constants() {
        let json = EngineConfig::default().manifest_json();
        let value: serde_json::Value = serde_json::from_str(&json).expect("manifest should parse");
        assert_eq!(value["cell_size"], 8);
        assert_eq!(value["seed_radius"], 3);
        assert_eq!(value["update_interval_ms"], 150.0);
        assert_eq!(value["background_fill"], "#ffffff");
    }
}
