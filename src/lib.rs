//! Zombie Stomp - a single-screen arcade platformer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, animation, game phases)
//! - `renderer`: Drawing surface abstraction (Canvas2D on web, draw lists elsewhere)
//! - `ui`: Menu layout, input mapping and scene drawing
//! - `audio`: Best-effort music and sound effects
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the game is tuned per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;
    /// Ground surface, spans the whole screen width
    pub const GROUND_Y: f32 = 600.0;

    /// Player spawn (sprite center)
    pub const PLAYER_SPAWN_X: f32 = 80.0;
    pub const PLAYER_SPAWN_Y: f32 = GROUND_Y;

    /// Sprite bounding sizes
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const ENEMY_WIDTH: f32 = 64.0;
    pub const ENEMY_HEIGHT: f32 = 86.0;

    /// Platform slab thickness
    pub const PLATFORM_THICKNESS: f32 = 10.0;
}

/// Clamp a horizontal center so a sprite of `width` stays on screen
#[inline]
pub fn clamp_to_screen(x: f32, width: f32) -> f32 {
    let half = width / 2.0;
    x.max(half).min(consts::SCREEN_WIDTH - half)
}

/// Screen center point
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}
