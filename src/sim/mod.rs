//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `tick` per frame, no wall-clock time
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (enemies in spawn order)
//! - No rendering, audio or platform dependencies

pub mod animation;
pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod patrol;
pub mod physics;
pub mod state;
pub mod tick;

pub use animation::{Animator, PLAYER_HURT_SPRITE, PlayerAnim};
pub use autopilot::Autopilot;
pub use collision::{CombatOutcome, Support, resolve_combat, resolve_platform_collision};
pub use geom::Rect;
pub use patrol::update_enemies;
pub use physics::{MoveIntent, apply_physics, handle_input};
pub use state::{
    Enemy, Facing, GameEvent, GamePhase, GameSimulation, GameState, Level, OBJECTIVE, PatrolSpec,
    Platform, Player,
};
pub use tick::{Command, Flow, FrameInput, tick};
