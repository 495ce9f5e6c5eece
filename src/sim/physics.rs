//! Player motion: horizontal input and gravity integration

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, Player};
use super::tick::FrameInput;
use crate::{Tuning, clamp_to_screen};

/// Horizontal movement requested this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
}

/// Apply movement keys and the jump key.
///
/// Right is applied before left, so holding both moves by their sum (zero)
/// but reports `Left`. Nothing happens outside `Playing`.
pub fn handle_input(
    player: &mut Player,
    input: &FrameInput,
    phase: GamePhase,
    tuning: &Tuning,
) -> MoveIntent {
    let mut intent = MoveIntent::None;
    if phase != GamePhase::Playing {
        return intent;
    }

    if input.right {
        player.pos.x += tuning.player_speed;
        intent = MoveIntent::Right;
    }
    if input.left {
        player.pos.x -= tuning.player_speed;
        intent = MoveIntent::Left;
    }

    player.pos.x = clamp_to_screen(player.pos.x, player.size.x);

    if input.jump && !player.airborne {
        player.velocity_y = tuning.jump_strength;
        player.airborne = true;
    }

    intent
}

/// Integrate gravity. Velocity is not capped.
pub fn apply_physics(player: &mut Player, tuning: &Tuning) {
    player.velocity_y += tuning.gravity;
    player.pos.y += player.velocity_y;
}
