//! Game settings and preferences
//!
//! Kept in memory for the lifetime of the page/process only. The music on/off
//! toggle is gameplay state and lives in `sim::GameState`.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show the objective line under the score
    pub show_objective: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            mute_on_blur: true,
            show_objective: true,
        }
    }
}

impl Settings {
    /// Effective music gain
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Effective sound effect gain
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volumes_are_clamped() {
        let settings = Settings {
            master_volume: 2.0,
            sfx_volume: 1.0,
            music_volume: 0.25,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 1.0);
        assert_eq!(settings.effective_music_volume(), 0.5);
    }
}
