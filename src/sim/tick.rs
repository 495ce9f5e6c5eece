//! Per-frame simulation step and phase transitions
//!
//! Frame pipeline (only while `Playing`): input, gravity, platform landing,
//! animation, zombie patrol, combat. Discrete menu/keyboard triggers arrive
//! as `Command`s between frames.

use serde::{Deserialize, Serialize};

use super::animation::update_player_animation;
use super::collision::{resolve_combat, resolve_platform_collision};
use super::patrol::update_enemies;
use super::physics::{apply_physics, handle_input};
use super::state::{GamePhase, GameSimulation};

/// Held keys sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Jump (up arrow)
    pub jump: bool,
    /// Duck (down arrow), animation only
    pub down: bool,
}

/// Discrete triggers from menus and key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Home menu "Start"
    Start,
    /// Play again after a finished run
    Restart,
    /// Back to the home menu after a finished run
    Menu,
    /// Home menu "Music" toggle
    ToggleMusic,
    /// Home menu "Exit"
    Quit,
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Advance the game by one frame
pub fn tick(sim: &mut GameSimulation, input: &FrameInput) {
    if sim.state.phase != GamePhase::Playing {
        return;
    }

    let intent = handle_input(&mut sim.player, input, sim.state.phase, &sim.tuning);
    apply_physics(&mut sim.player, &sim.tuning);
    resolve_platform_collision(&mut sim.player, &sim.level);
    update_player_animation(&mut sim.player, intent, input.down);
    update_enemies(
        &mut sim.enemies,
        sim.tuning.enemy_speed,
        sim.tuning.enemy_frame_ticks,
    );
    resolve_combat(sim);
}

impl GameSimulation {
    /// Apply a phase trigger. Triggers that do not apply to the current phase
    /// are ignored.
    pub fn apply_command(&mut self, command: Command) -> Flow {
        let phase = self.state.phase;
        match command {
            Command::Start if phase == GamePhase::Home => {
                self.set_phase(GamePhase::Playing);
                self.reset_game();
            }
            Command::Restart if phase.is_finished() => {
                self.set_phase(GamePhase::Playing);
                self.reset_game();
            }
            Command::Menu if phase.is_finished() => {
                self.set_phase(GamePhase::Home);
            }
            Command::ToggleMusic => {
                self.state.music_enabled = !self.state.music_enabled;
                log::info!(
                    "Music {}",
                    if self.state.music_enabled { "on" } else { "off" }
                );
            }
            Command::Quit => {
                log::info!("Quit requested");
                return Flow::Exit;
            }
            _ => {
                log::debug!("Ignoring {command:?} in {phase:?}");
            }
        }
        Flow::Continue
    }
}
