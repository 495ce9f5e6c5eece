//! Idle/demo mode - a simple AI that plays the game
//!
//! Chases the nearest zombie and jumps when close, with a little seeded
//! jitter so demo runs differ per seed but replay exactly for the same seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameSimulation};
use super::tick::FrameInput;

/// Horizontal distance at which the autopilot starts a jump
const JUMP_RANGE: f32 = 70.0;

/// Seeded demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Frames left holding the current jitter offset
    jitter_ticks: u32,
    jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter_ticks: 0,
            jitter: 0.0,
        }
    }

    /// Choose the held keys for the next frame
    pub fn next_input(&mut self, sim: &GameSimulation) -> FrameInput {
        let mut input = FrameInput::default();
        if sim.state.phase != GamePhase::Playing {
            return input;
        }

        if self.jitter_ticks == 0 {
            self.jitter = self.rng.random_range(-20.0..20.0);
            self.jitter_ticks = self.rng.random_range(20..90);
        }
        self.jitter_ticks -= 1;

        let player = &sim.player;
        let target = sim.enemies.iter().min_by(|a, b| {
            let da = (a.pos - player.pos).length_squared();
            let db = (b.pos - player.pos).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

        let Some(target) = target else {
            return input;
        };

        // Lead the zombie a little in its walking direction
        let aim_x = target.pos.x + target.facing.sign() * 15.0 + self.jitter;
        let dx = aim_x - player.pos.x;
        if dx > 4.0 {
            input.right = true;
        } else if dx < -4.0 {
            input.left = true;
        }

        let close = (target.pos.x - player.pos.x).abs() < JUMP_RANGE;
        let above_or_level = target.pos.y >= player.pos.y - 120.0;
        input.jump = !player.airborne && close && above_or_level && self.rng.random_bool(0.6);
        input.down = !input.left && !input.right && !input.jump && self.rng.random_bool(0.05);

        input
    }
}
