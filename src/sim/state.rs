//! Game state and core simulation types
//!
//! `GameSimulation` owns every entity and the phase/score record; each
//! pipeline stage borrows the pieces it needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{Animator, PlayerAnim, enemy_frames};
use super::geom::Rect;
use crate::Tuning;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu
    #[default]
    Home,
    /// Active gameplay
    Playing,
    /// Player was bitten
    GameOver,
    /// Every zombie stomped
    GameWon,
}

impl GamePhase {
    /// Run ended (either way)
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameWon)
    }
}

/// Horizontal facing of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit sign along x
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player-controlled beetle
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Sprite center
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity_y: f32,
    /// Not standing on ground or a platform
    pub airborne: bool,
    pub anim: PlayerAnim,
    pub animator: Animator,
    /// Currently displayed frame
    pub sprite: &'static str,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0.0,
            airborne: false,
            anim: PlayerAnim::Stop,
            animator: Animator::default(),
            sprite: PlayerAnim::Stop.first_frame(),
        }
    }

    /// Bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move vertically so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Land on a surface: snap, stop falling, no longer airborne
    pub fn land_on(&mut self, surface_y: f32) {
        self.set_bottom(surface_y);
        self.velocity_y = 0.0;
        self.airborne = false;
    }
}

/// A patrolling zombie: actor, animation and patrol data in one record
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub id: u32,
    /// Sprite center
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub animator: Animator,
    /// Currently displayed frame
    pub sprite: &'static str,
    /// Patrol interval; the sprite's edges stay inside it
    pub patrol_min: f32,
    pub patrol_max: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, patrol_min: f32, patrol_max: f32) -> Self {
        Self {
            id: 0,
            pos,
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            facing: Facing::Left,
            animator: Animator::default(),
            sprite: enemy_frames(Facing::Left)[0],
            patrol_min,
            patrol_max,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// A static platform slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(left: f32, top: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(left, top, width, PLATFORM_THICKNESS),
        }
    }
}

/// Where one enemy walks: the surface it stands on and its x-range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolSpec {
    pub surface_y: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl PatrolSpec {
    pub fn on_platform(platform: &Platform) -> Self {
        Self {
            surface_y: platform.rect.top(),
            min_x: platform.rect.left(),
            max_x: platform.rect.right(),
        }
    }

    /// Spawn an enemy centered in the interval, feet on the surface
    pub fn spawn(&self) -> Enemy {
        let pos = Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            self.surface_y - ENEMY_HEIGHT / 2.0,
        );
        Enemy::new(pos, self.min_x, self.max_x)
    }
}

/// Static level layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    /// One enemy per patrol spec, in spawn order
    pub patrols: Vec<PatrolSpec>,
    /// Implicit full-width ground surface
    pub ground_y: f32,
}

impl Level {
    /// The single arena: five platforms, one zombie on the ground and one on
    /// each of three platforms.
    pub fn arena() -> Self {
        let platforms = vec![
            Platform::new(200.0, GROUND_Y - 50.0, 150.0),
            Platform::new(450.0, GROUND_Y - 150.0, 250.0),
            Platform::new(750.0, GROUND_Y - 250.0, 200.0),
            Platform::new(950.0, GROUND_Y - 100.0, 200.0),
            Platform::new(100.0, GROUND_Y - 250.0, 100.0),
        ];
        let patrols = vec![
            PatrolSpec {
                surface_y: GROUND_Y,
                min_x: 0.0,
                max_x: 400.0,
            },
            PatrolSpec::on_platform(&platforms[0]),
            PatrolSpec::on_platform(&platforms[1]),
            PatrolSpec::on_platform(&platforms[3]),
        ];
        Self {
            platforms,
            patrols,
            ground_y: GROUND_Y,
        }
    }
}

/// Score, phase and presentation flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub phase: GamePhase,
    pub music_enabled: bool,
    pub objective: String,
}

/// HUD objective line
pub const OBJECTIVE: &str = "Stomp every zombie by jumping on its head! 5 points per zombie.";

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            phase: GamePhase::Home,
            music_enabled: true,
            objective: OBJECTIVE.to_string(),
        }
    }
}

/// Things that happened during a frame, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Zombie stomped (removed at the end of the frame unless the player is
    /// bitten in the same frame)
    EnemyStomped { id: u32 },
    /// Player bitten, run over
    PlayerHurt,
    /// Last zombie removed
    AllEnemiesCleared,
    /// Phase transition
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// The whole game: entities, level, phase and tuning
#[derive(Debug, Clone, Serialize)]
pub struct GameSimulation {
    pub player: Player,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    pub level: Level,
    pub state: GameState,
    pub tuning: Tuning,
    /// Events produced since the last `drain_events`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next enemy ID
    next_id: u32,
}

impl Default for GameSimulation {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameSimulation {
    /// Fresh game sitting on the home menu
    pub fn new(tuning: Tuning) -> Self {
        let mut sim = Self {
            player: Player::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)),
            enemies: Vec::new(),
            level: Level::arena(),
            state: GameState::default(),
            tuning,
            events: Vec::new(),
            next_id: 1,
        };
        sim.spawn_enemies();
        sim
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the enemy collection with one enemy per patrol spec
    pub fn spawn_enemies(&mut self) {
        self.enemies.clear();
        let specs = self.level.patrols.clone();
        for spec in &specs {
            let mut enemy = spec.spawn();
            enemy.id = self.next_entity_id();
            self.enemies.push(enemy);
        }
    }

    /// Put player, enemies and score back to the start of a run. The phase
    /// and the music toggle are left alone.
    pub fn reset_game(&mut self) {
        self.player = Player::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        self.spawn_enemies();
        self.state.score = 0;
        log::debug!("Game reset with {} zombies", self.enemies.len());
    }

    /// Change phase, recording the transition
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.state.phase;
        if from == to {
            return;
        }
        self.state.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {from:?} -> {to:?} (score {})", self.state.score);
    }

    /// Take the events produced so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulation() {
        let sim = GameSimulation::default();
        assert_eq!(sim.state.phase, GamePhase::Home);
        assert_eq!(sim.state.score, 0);
        assert!(sim.state.music_enabled);
        assert_eq!(sim.enemies.len(), 4);
        assert_eq!(sim.player.pos, Vec2::new(80.0, GROUND_Y));
    }

    #[test]
    fn test_enemies_spawn_on_their_surface() {
        let sim = GameSimulation::default();
        for (enemy, spec) in sim.enemies.iter().zip(&sim.level.patrols) {
            assert_eq!(enemy.bounds().bottom(), spec.surface_y);
            assert_eq!(enemy.pos.x, (spec.min_x + spec.max_x) / 2.0);
            assert_eq!(enemy.facing, Facing::Left);
            assert!(enemy.size.x < spec.max_x - spec.min_x);
        }
        // Platform 0 zombie
        assert_eq!(sim.enemies[1].patrol_min, 200.0);
        assert_eq!(sim.enemies[1].patrol_max, 350.0);
    }

    #[test]
    fn test_enemy_ids_are_unique_across_resets() {
        let mut sim = GameSimulation::default();
        let first: Vec<u32> = sim.enemies.iter().map(|e| e.id).collect();
        sim.reset_game();
        let second: Vec<u32> = sim.enemies.iter().map(|e| e.id).collect();
        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(second, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_set_phase_records_once() {
        let mut sim = GameSimulation::default();
        sim.set_phase(GamePhase::Playing);
        sim.set_phase(GamePhase::Playing);
        assert_eq!(
            sim.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Home,
                to: GamePhase::Playing
            }]
        );
        assert!(sim.events.is_empty());
    }
}
