//! Data-driven game balance
//!
//! Every value is per simulated frame. Missing JSON fields fall back to the
//! defaults, so a tuning file only needs the knobs it changes.

use serde::{Deserialize, Serialize};

/// Environment variable naming an optional tuning JSON file (native only)
pub const TUNING_ENV_VAR: &str = "ZOMBIE_STOMP_TUNING";

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units/frame²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_strength: f32,
    /// Horizontal player speed (units/frame)
    pub player_speed: f32,
    /// Horizontal enemy patrol speed (units/frame)
    pub enemy_speed: f32,
    /// Width multiplier for combat colliders (< 1 forgives sprite edges)
    pub collider_width_factor: f32,
    /// Vertical velocity after a successful stomp
    pub stomp_bounce: f32,
    /// Points per defeated enemy
    pub stomp_score: u32,
    /// Frames per enemy animation step
    pub enemy_frame_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_strength: -11.0,
            player_speed: 2.0,
            enemy_speed: 0.5,
            collider_width_factor: 0.6,
            stomp_bounce: -7.0,
            stomp_score: 5,
            enemy_frame_ticks: 5,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from the file named by `ZOMBIE_STOMP_TUNING`, falling back
    /// to defaults if it is unset, missing or unparseable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(TUNING_ENV_VAR) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_json(&content) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read {path}: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Web builds always use the compiled-in defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "stomp_score": 10 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.stomp_score, 10);
        assert_eq!(tuning.jump_strength, -11.0);
        assert_eq!(tuning.collider_width_factor, 0.6);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: nope").is_err());
    }

    #[test]
    fn test_collider_factor_shrinks() {
        let tuning = Tuning::default();
        assert!(tuning.collider_width_factor < 1.0);
        assert!(tuning.stomp_bounce < 0.0);
    }
}
