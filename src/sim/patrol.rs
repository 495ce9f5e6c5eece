//! Zombie patrol walk

use super::animation::advance_enemy_animation;
use super::state::{Enemy, Facing};

/// Step one zombie along its patrol interval.
///
/// The facing flips before moving when the next center would reach the
/// interval edge pulled in by half the sprite width, so the move that hits
/// the edge is already made in the new direction.
pub fn step_patrol(enemy: &mut Enemy, speed: f32) {
    let half_width = enemy.size.x / 2.0;
    let next_x = enemy.pos.x + speed * enemy.facing.sign();

    match enemy.facing {
        Facing::Right if next_x >= enemy.patrol_max - half_width => {
            enemy.facing = Facing::Left;
        }
        Facing::Left if next_x <= enemy.patrol_min + half_width => {
            enemy.facing = Facing::Right;
        }
        _ => {}
    }

    enemy.pos.x += speed * enemy.facing.sign();
}

/// Move and animate every zombie
pub fn update_enemies(enemies: &mut [Enemy], speed: f32, frame_ticks: u32) {
    for enemy in enemies.iter_mut() {
        step_patrol(enemy, speed);
        advance_enemy_animation(enemy, frame_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PatrolSpec;
    use proptest::prelude::*;

    fn platform_zombie() -> Enemy {
        PatrolSpec {
            surface_y: 550.0,
            min_x: 200.0,
            max_x: 350.0,
        }
        .spawn()
    }

    #[test]
    fn test_walks_left_first() {
        let mut enemy = platform_zombie();
        let x0 = enemy.pos.x;
        step_patrol(&mut enemy, 0.5);
        assert_eq!(enemy.pos.x, x0 - 0.5);
        assert_eq!(enemy.facing, Facing::Left);
    }

    #[test]
    fn test_flips_on_the_boundary_frame() {
        let mut enemy = platform_zombie();
        // Next step would put the left edge on the interval edge
        enemy.pos.x = 200.0 + enemy.size.x / 2.0 + 0.5;
        let x0 = enemy.pos.x;
        step_patrol(&mut enemy, 0.5);
        assert_eq!(enemy.facing, Facing::Right);
        assert_eq!(enemy.pos.x, x0 + 0.5);
    }

    #[test]
    fn test_flips_at_right_edge() {
        let mut enemy = platform_zombie();
        enemy.facing = Facing::Right;
        enemy.pos.x = 350.0 - enemy.size.x / 2.0 - 0.25;
        step_patrol(&mut enemy, 0.5);
        assert_eq!(enemy.facing, Facing::Left);
        assert!(enemy.pos.x < 350.0 - enemy.size.x / 2.0);
    }

    #[test]
    fn test_update_animates() {
        let mut enemies = vec![platform_zombie()];
        for _ in 0..5 {
            update_enemies(&mut enemies, 0.5, 5);
        }
        assert_eq!(enemies[0].animator.frame, 1);
    }

    proptest! {
        #[test]
        fn enemy_never_leaves_patrol_interval(
            min_x in 0.0f32..800.0,
            width in 80.0f32..400.0,
            speed in 0.1f32..3.0,
            frames in 1usize..3000,
        ) {
            let spec = PatrolSpec { surface_y: 500.0, min_x, max_x: min_x + width };
            let mut enemies = vec![spec.spawn()];
            for _ in 0..frames {
                update_enemies(&mut enemies, speed, 5);
                let e = &enemies[0];
                prop_assert!(e.pos.x >= spec.min_x && e.pos.x <= spec.max_x);
                prop_assert!(e.pos.x - e.size.x / 2.0 >= spec.min_x - 1e-3);
                prop_assert!(e.pos.x + e.size.x / 2.0 <= spec.max_x + 1e-3);
            }
        }
    }
}
