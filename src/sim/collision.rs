//! Collision resolution
//!
//! Two independent passes: landing the player on platforms/ground, and
//! player-vs-zombie combat (stomp from above or get bitten).

use super::animation::PLAYER_HURT_SPRITE;
use super::state::{GameEvent, GamePhase, GameSimulation, Level, Player};

/// What the player ended up standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Index into `Level::platforms`
    Platform(usize),
    Ground,
}

/// Land the player on a platform or the ground.
///
/// A platform only catches the player when its top was crossed downward this
/// frame (bottom before the vertical move at or above the top, bottom now at
/// or below it) and the player overlaps it horizontally. The first matching
/// platform wins. Anything else leaves the player airborne.
pub fn resolve_platform_collision(player: &mut Player, level: &Level) -> Option<Support> {
    let bottom = player.bottom();
    let previous_bottom = bottom - player.velocity_y;
    let bounds = player.bounds();

    let landed_on = level.platforms.iter().position(|platform| {
        let top = platform.rect.top();
        previous_bottom <= top
            && top <= bottom
            && bounds.overlaps_x(platform.rect.left(), platform.rect.right())
    });

    if let Some(index) = landed_on {
        player.land_on(level.platforms[index].rect.top());
        return Some(Support::Platform(index));
    }

    if bottom >= level.ground_y {
        player.land_on(level.ground_y);
        return Some(Support::Ground);
    }

    player.airborne = true;
    None
}

/// Result of one combat pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Zombies removed this frame
    pub stomped: usize,
    /// Player was bitten (run over)
    pub bitten: bool,
}

/// Resolve player-vs-zombie contact.
///
/// Colliders keep full height but have their width scaled down. On contact,
/// a falling player whose feet are above the zombie's middle stomps it:
/// score, bounce, queue removal. Any other contact is a bite: the phase goes
/// to `GameOver`, remaining zombies are not checked and nothing queued this
/// frame is removed. A finished run is left untouched.
pub fn resolve_combat(sim: &mut GameSimulation) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();
    if sim.state.phase.is_finished() {
        return outcome;
    }

    let factor = sim.tuning.collider_width_factor;
    let player_box = sim.player.bounds().with_width_scaled(factor);
    let mut defeated = Vec::new();

    for (index, enemy) in sim.enemies.iter().enumerate() {
        let enemy_box = enemy.bounds().with_width_scaled(factor);
        if !enemy_box.overlaps(&player_box) {
            continue;
        }

        // The bounce below makes a second contact in the same frame a bite
        if sim.player.velocity_y > 0.0 && sim.player.bottom() < enemy.pos.y {
            sim.state.score += sim.tuning.stomp_score;
            sim.player.velocity_y = sim.tuning.stomp_bounce;
            sim.events.push(GameEvent::EnemyStomped { id: enemy.id });
            log::debug!("Stomped zombie {} (score {})", enemy.id, sim.state.score);
            defeated.push(index);
        } else {
            log::debug!("Bitten by zombie {}", enemy.id);
            outcome.bitten = true;
            break;
        }
    }

    if outcome.bitten {
        sim.player.sprite = PLAYER_HURT_SPRITE;
        sim.events.push(GameEvent::PlayerHurt);
        sim.set_phase(GamePhase::GameOver);
        return outcome;
    }

    // Indices were collected ascending; remove from the back
    for index in defeated.into_iter().rev() {
        sim.enemies.remove(index);
        outcome.stomped += 1;
    }

    if sim.enemies.is_empty() {
        sim.events.push(GameEvent::AllEnemiesCleared);
        sim.set_phase(GamePhase::GameWon);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Platform;
    use glam::Vec2;

    fn level_with(platforms: Vec<Platform>) -> Level {
        Level {
            platforms,
            patrols: Vec::new(),
            ground_y: GROUND_Y,
        }
    }

    /// Player whose bottom is at `bottom` after moving down by `vy`
    fn falling_player(x: f32, bottom: f32, vy: f32) -> Player {
        let mut player = Player::new(Vec2::new(x, 0.0));
        player.set_bottom(bottom);
        player.velocity_y = vy;
        player.airborne = true;
        player
    }

    fn playing_sim() -> GameSimulation {
        let mut sim = GameSimulation::default();
        sim.state.phase = GamePhase::Playing;
        sim
    }

    /// Put the player on top of enemy `index`, falling
    fn place_for_stomp(sim: &mut GameSimulation, index: usize) {
        let enemy = &sim.enemies[index];
        let top = enemy.bounds().top();
        sim.player.pos.x = enemy.pos.x;
        sim.player.set_bottom(top + 2.0);
        sim.player.velocity_y = 3.0;
    }

    #[test]
    fn test_lands_on_crossed_platform() {
        let level = level_with(vec![Platform::new(200.0, 550.0, 150.0)]);
        let mut player = falling_player(250.0, 553.0, 4.0);
        assert_eq!(
            resolve_platform_collision(&mut player, &level),
            Some(Support::Platform(0))
        );
        assert_eq!(player.bottom(), 550.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_passes_through_from_below() {
        let level = level_with(vec![Platform::new(200.0, 550.0, 150.0)]);
        // Moving up through the top edge
        let mut player = falling_player(250.0, 553.0, -6.0);
        assert_eq!(resolve_platform_collision(&mut player, &level), None);
        assert!(player.airborne);
        assert_eq!(player.bottom(), 553.0);
    }

    #[test]
    fn test_already_below_top_is_ignored() {
        let level = level_with(vec![Platform::new(200.0, 550.0, 150.0)]);
        let mut player = falling_player(250.0, 558.0, 2.0);
        assert_eq!(resolve_platform_collision(&mut player, &level), None);
        assert!(player.airborne);
    }

    #[test]
    fn test_needs_horizontal_overlap() {
        let level = level_with(vec![Platform::new(200.0, 550.0, 150.0)]);
        // Right edge exactly at the platform's left edge
        let mut player = falling_player(200.0 - PLAYER_WIDTH / 2.0, 552.0, 4.0);
        assert_eq!(resolve_platform_collision(&mut player, &level), None);
    }

    #[test]
    fn test_first_platform_wins() {
        let level = level_with(vec![
            Platform::new(200.0, 550.0, 150.0),
            Platform::new(220.0, 548.0, 100.0),
        ]);
        let mut player = falling_player(250.0, 553.0, 6.0);
        assert_eq!(
            resolve_platform_collision(&mut player, &level),
            Some(Support::Platform(0))
        );
        assert_eq!(player.bottom(), 550.0);
    }

    #[test]
    fn test_ground_catches() {
        let level = level_with(Vec::new());
        let mut player = falling_player(600.0, GROUND_Y + 5.0, 9.0);
        assert_eq!(
            resolve_platform_collision(&mut player, &level),
            Some(Support::Ground)
        );
        assert_eq!(player.bottom(), GROUND_Y);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_stomp_removes_and_bounces() {
        let mut sim = playing_sim();
        let stomped_id = sim.enemies[2].id;
        place_for_stomp(&mut sim, 2);

        let outcome = resolve_combat(&mut sim);
        assert_eq!(outcome, CombatOutcome { stomped: 1, bitten: false });
        assert_eq!(sim.state.score, 5);
        assert_eq!(sim.player.velocity_y, -7.0);
        assert_eq!(sim.state.phase, GamePhase::Playing);
        assert_eq!(sim.enemies.len(), 3);
        assert!(sim.enemies.iter().all(|e| e.id != stomped_id));
        // Remaining order preserved
        let ids: Vec<u32> = sim.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_side_hit_is_game_over() {
        let mut sim = playing_sim();
        let enemy = sim.enemies[0].clone();
        sim.player.pos = Vec2::new(enemy.pos.x - 10.0, enemy.pos.y);
        sim.player.velocity_y = 0.0;

        let outcome = resolve_combat(&mut sim);
        assert!(outcome.bitten);
        assert_eq!(sim.state.phase, GamePhase::GameOver);
        assert_eq!(sim.player.sprite, PLAYER_HURT_SPRITE);
        assert_eq!(sim.enemies.len(), 4);
        assert!(sim.events.contains(&GameEvent::PlayerHurt));
    }

    #[test]
    fn test_rising_into_enemy_is_game_over() {
        let mut sim = playing_sim();
        place_for_stomp(&mut sim, 1);
        sim.player.velocity_y = -3.0;

        resolve_combat(&mut sim);
        assert_eq!(sim.state.phase, GamePhase::GameOver);
        assert_eq!(sim.state.score, 0);
    }

    #[test]
    fn test_bite_discards_queued_removals() {
        let mut sim = playing_sim();
        // Two zombies stacked at the same spot: the first is stomped, the
        // bounce turns contact with the second into a bite.
        let twin = sim.enemies[1].clone();
        sim.enemies.insert(2, twin);
        place_for_stomp(&mut sim, 1);

        let outcome = resolve_combat(&mut sim);
        assert!(outcome.bitten);
        assert_eq!(outcome.stomped, 0);
        assert_eq!(sim.state.phase, GamePhase::GameOver);
        assert_eq!(sim.enemies.len(), 5);
    }

    #[test]
    fn test_finished_run_is_untouched() {
        for phase in [GamePhase::GameOver, GamePhase::GameWon] {
            let mut sim = playing_sim();
            sim.state.phase = phase;
            place_for_stomp(&mut sim, 0);
            assert_eq!(resolve_combat(&mut sim), CombatOutcome::default());
            assert_eq!(sim.state.phase, phase);
            assert_eq!(sim.state.score, 0);
            assert!(sim.events.is_empty());
        }
    }

    #[test]
    fn test_last_enemy_wins_same_frame() {
        let mut sim = playing_sim();
        sim.enemies.truncate(1);
        place_for_stomp(&mut sim, 0);

        resolve_combat(&mut sim);
        assert!(sim.enemies.is_empty());
        assert_eq!(sim.state.phase, GamePhase::GameWon);
        assert!(sim.events.contains(&GameEvent::AllEnemiesCleared));
    }

    #[test]
    fn test_four_stomps_win_with_twenty_points() {
        let mut sim = playing_sim();
        assert_eq!(sim.enemies.len(), 4);
        for _ in 0..4 {
            place_for_stomp(&mut sim, 0);
            resolve_combat(&mut sim);
        }
        assert_eq!(sim.state.score, 20);
        assert_eq!(sim.state.phase, GamePhase::GameWon);
    }

    #[test]
    fn test_no_contact_no_change() {
        let mut sim = playing_sim();
        sim.player.pos = Vec2::new(1100.0, 100.0);
        assert_eq!(resolve_combat(&mut sim), CombatOutcome::default());
        assert_eq!(sim.state.phase, GamePhase::Playing);
    }
}
