//! Sprite animation selection and frame stepping
//!
//! Clips are enum-keyed so every clip's frame list and cadence is resolved at
//! compile time. Frame identifiers are opaque asset names handed to the
//! renderer.

use serde::{Deserialize, Serialize};

use super::physics::MoveIntent;
use super::state::{Enemy, Facing, Player};

/// Sprite shown after the player is bitten
pub const PLAYER_HURT_SPRITE: &str = "beetle/hurt";

const PLAYER_STOP: &[&str] = &["beetle/stop_1", "beetle/stop_2", "beetle/stop_3"];
const PLAYER_RIGHT: &[&str] = &["beetle/right_1", "beetle/right_2", "beetle/right_3"];
const PLAYER_LEFT: &[&str] = &["beetle/left_1", "beetle/left_2", "beetle/left_3"];
const PLAYER_DOWN: &[&str] = &["beetle/down_1", "beetle/down_2"];
const PLAYER_JUMP_UP: &[&str] = &["beetle/jump_up"];
const PLAYER_FALL: &[&str] = &["beetle/fall"];

const ZOMBIE_RIGHT: &[&str] = &[
    "zombie/walk_0",
    "zombie/walk_1",
    "zombie/walk_2",
    "zombie/walk_3",
    "zombie/walk_4",
    "zombie/walk_5",
    "zombie/walk_6",
];
const ZOMBIE_LEFT: &[&str] = &[
    "zombie/walk_8",
    "zombie/walk_9",
    "zombie/walk_10",
    "zombie/walk_11",
    "zombie/walk_12",
    "zombie/walk_13",
    "zombie/walk_14",
];

/// Player animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerAnim {
    #[default]
    Stop,
    Right,
    Left,
    Down,
    JumpUp,
    Fall,
}

impl PlayerAnim {
    /// Ordered frame identifiers
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            PlayerAnim::Stop => PLAYER_STOP,
            PlayerAnim::Right => PLAYER_RIGHT,
            PlayerAnim::Left => PLAYER_LEFT,
            PlayerAnim::Down => PLAYER_DOWN,
            PlayerAnim::JumpUp => PLAYER_JUMP_UP,
            PlayerAnim::Fall => PLAYER_FALL,
        }
    }

    /// Frames to hold each image for
    pub fn ticks_per_frame(self) -> u32 {
        match self {
            PlayerAnim::Stop | PlayerAnim::Down => 15,
            PlayerAnim::Right | PlayerAnim::Left | PlayerAnim::JumpUp | PlayerAnim::Fall => 5,
        }
    }

    /// First frame of the clip
    pub fn first_frame(self) -> &'static str {
        self.frames()[0]
    }
}

/// Enemy walk cycle for a facing direction
pub fn enemy_frames(facing: Facing) -> &'static [&'static str] {
    match facing {
        Facing::Right => ZOMBIE_RIGHT,
        Facing::Left => ZOMBIE_LEFT,
    }
}

/// Frame index + timer for a looping clip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animator {
    pub frame: usize,
    pub timer: u32,
}

impl Animator {
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }

    /// Count one simulated frame. When the timer reaches `cadence` it wraps
    /// and the frame index advances cyclically; the new index is returned.
    pub fn step(&mut self, cadence: u32, frame_count: usize) -> Option<usize> {
        self.timer += 1;
        if self.timer < cadence {
            return None;
        }
        self.timer = 0;
        self.frame = (self.frame + 1) % frame_count.max(1);
        Some(self.frame)
    }
}

/// Pick the player's clip, highest priority first: airborne, ducking,
/// horizontal intent, idle.
pub fn select_player_anim(player: &Player, intent: MoveIntent, down_held: bool) -> PlayerAnim {
    if player.airborne {
        if player.velocity_y < 0.0 {
            PlayerAnim::JumpUp
        } else {
            PlayerAnim::Fall
        }
    } else if down_held {
        PlayerAnim::Down
    } else {
        match intent {
            MoveIntent::Right => PlayerAnim::Right,
            MoveIntent::Left => PlayerAnim::Left,
            MoveIntent::None => PlayerAnim::Stop,
        }
    }
}

/// Switch clip if needed and advance the player's frame timer
pub fn update_player_animation(player: &mut Player, intent: MoveIntent, down_held: bool) {
    let anim = select_player_anim(player, intent, down_held);
    if anim != player.anim {
        player.anim = anim;
        player.animator.reset();
    }

    let frames = anim.frames();
    if let Some(frame) = player.animator.step(anim.ticks_per_frame(), frames.len()) {
        player.sprite = frames[frame];
    }
}

/// Advance an enemy's walk cycle for its current facing. The frame index
/// carries over when the facing flips.
pub fn advance_enemy_animation(enemy: &mut Enemy, cadence: u32) {
    let frames = enemy_frames(enemy.facing);
    if let Some(frame) = enemy.animator.step(cadence, frames.len()) {
        enemy.sprite = frames[frame];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_animator_wraps() {
        let mut anim = Animator::default();
        let mut steps = Vec::new();
        for _ in 0..15 {
            if let Some(frame) = anim.step(5, 3) {
                steps.push(frame);
            }
        }
        assert_eq!(steps, vec![1, 2, 0]);
        assert_eq!(anim.timer, 0);
    }

    #[test]
    fn test_airborne_beats_everything() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.airborne = true;
        player.velocity_y = -3.0;
        assert_eq!(
            select_player_anim(&player, MoveIntent::Right, true),
            PlayerAnim::JumpUp
        );
        player.velocity_y = 0.0;
        assert_eq!(
            select_player_anim(&player, MoveIntent::Left, true),
            PlayerAnim::Fall
        );
    }

    #[test]
    fn test_down_beats_movement() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        assert_eq!(
            select_player_anim(&player, MoveIntent::Right, true),
            PlayerAnim::Down
        );
        assert_eq!(
            select_player_anim(&player, MoveIntent::Right, false),
            PlayerAnim::Right
        );
        assert_eq!(
            select_player_anim(&player, MoveIntent::None, false),
            PlayerAnim::Stop
        );
    }

    #[test]
    fn test_clip_change_resets_timer() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        for _ in 0..7 {
            update_player_animation(&mut player, MoveIntent::None, false);
        }
        assert_eq!(player.anim, PlayerAnim::Stop);
        assert_eq!(player.animator.timer, 7);

        update_player_animation(&mut player, MoveIntent::Right, false);
        assert_eq!(player.anim, PlayerAnim::Right);
        assert_eq!(player.animator, Animator { frame: 0, timer: 1 });
    }

    #[test]
    fn test_sprite_changes_only_on_cadence() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        for _ in 0..4 {
            update_player_animation(&mut player, MoveIntent::Right, false);
        }
        // Image still from the previous clip until the first step
        assert_eq!(player.sprite, PlayerAnim::Stop.first_frame());
        update_player_animation(&mut player, MoveIntent::Right, false);
        assert_eq!(player.sprite, "beetle/right_2");
    }

    #[test]
    fn test_enemy_frame_survives_flip() {
        let mut enemy = Enemy::new(Vec2::new(200.0, 500.0), 0.0, 400.0);
        for _ in 0..10 {
            advance_enemy_animation(&mut enemy, 5);
        }
        assert_eq!(enemy.animator.frame, 2);
        assert_eq!(enemy.sprite, "zombie/walk_10");

        enemy.facing = Facing::Right;
        for _ in 0..5 {
            advance_enemy_animation(&mut enemy, 5);
        }
        assert_eq!(enemy.animator.frame, 3);
        assert_eq!(enemy.sprite, "zombie/walk_3");
    }
}
