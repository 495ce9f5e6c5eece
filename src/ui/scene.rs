//! Per-phase scene drawing

use glam::Vec2;

use super::menu::{
    BUTTON_COLOR, BUTTON_TEXT_COLOR, MENU_FONT_SIZE, MenuButton, TITLE_FONT_SIZE,
};
use crate::Settings;
use crate::consts::*;
use crate::renderer::{Color, Surface, TextAnchor};
use crate::screen_center;
use crate::sim::{GamePhase, GameSimulation, Rect};

const MENU_BACKGROUND: Color = Color::rgb(50, 50, 70);
const SKY: Color = Color::rgb(135, 206, 250);
const GRASS: Color = Color::rgb(50, 200, 50);
const PLATFORM: Color = Color::rgb(150, 75, 0);
const HELP_COLOR: Color = Color::rgb(200, 200, 200);

const RESTART_HINT: &str = "Press R to restart or ESC for the menu";

/// Draw the current frame
pub fn draw_scene(surface: &mut dyn Surface, sim: &GameSimulation, settings: &Settings) {
    if sim.state.phase == GamePhase::Home {
        draw_home(surface, sim.state.music_enabled);
        return;
    }

    draw_playfield(surface, sim);
    draw_hud(surface, sim, settings);

    match sim.state.phase {
        GamePhase::GameOver => draw_banner(surface, "GAME OVER!", Color::RED),
        GamePhase::GameWon => draw_banner(
            surface,
            &format!("YOU WIN! Final score: {}", sim.state.score),
            Color::GREEN,
        ),
        GamePhase::Home | GamePhase::Playing => {}
    }
}

/// Title, controls help and the three menu buttons
pub fn draw_home(surface: &mut dyn Surface, music_enabled: bool) {
    let center = screen_center();
    surface.fill(MENU_BACKGROUND);
    surface.draw_text(
        "ZOMBIE STOMP",
        TextAnchor::Center(center - Vec2::new(0.0, 200.0)),
        Color::WHITE,
        TITLE_FONT_SIZE,
    );
    surface.draw_text(
        "Arrows to move, UP to jump | R to restart",
        TextAnchor::Center(center - Vec2::new(0.0, 130.0)),
        HELP_COLOR,
        MENU_FONT_SIZE - 10.0,
    );

    for button in MenuButton::ALL {
        let rect = button.rect();
        surface.draw_rect(rect, BUTTON_COLOR);
        surface.draw_text(
            &button.label(music_enabled),
            TextAnchor::Center(rect.center()),
            BUTTON_TEXT_COLOR,
            MENU_FONT_SIZE,
        );
    }
}

fn draw_playfield(surface: &mut dyn Surface, sim: &GameSimulation) {
    surface.fill(SKY);
    let ground = sim.level.ground_y;
    surface.draw_rect(
        Rect::new(0.0, ground, SCREEN_WIDTH, SCREEN_HEIGHT - ground),
        GRASS,
    );
    for platform in &sim.level.platforms {
        surface.draw_rect(platform.rect, PLATFORM);
    }

    surface.draw_sprite(sim.player.sprite, sim.player.pos);
    for enemy in &sim.enemies {
        surface.draw_sprite(enemy.sprite, enemy.pos);
    }
}

fn draw_hud(surface: &mut dyn Surface, sim: &GameSimulation, settings: &Settings) {
    surface.draw_text(
        &format!("SCORE: {}", sim.state.score),
        TextAnchor::TopLeft(Vec2::new(20.0, 10.0)),
        Color::BLACK,
        40.0,
    );
    if settings.show_objective {
        surface.draw_text(
            &format!("Objective: {}", sim.state.objective),
            TextAnchor::TopLeft(Vec2::new(20.0, 50.0)),
            Color::BLACK,
            25.0,
        );
    }
}

fn draw_banner(surface: &mut dyn Surface, title: &str, color: Color) {
    let center = screen_center();
    surface.draw_text(title, TextAnchor::Center(center), color, 100.0);
    surface.draw_text(
        RESTART_HINT,
        TextAnchor::Center(center + Vec2::new(0.0, 80.0)),
        Color::WHITE,
        50.0,
    );
}
