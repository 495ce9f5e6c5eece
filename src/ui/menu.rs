//! Home menu layout

use glam::Vec2;

use crate::renderer::Color;
use crate::screen_center;
use crate::sim::{Command, Rect};

pub const BUTTON_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
pub const BUTTON_COLOR: Color = Color::rgb(255, 165, 0);
pub const BUTTON_TEXT_COLOR: Color = Color::BLACK;
pub const TITLE_FONT_SIZE: f32 = 80.0;
pub const MENU_FONT_SIZE: f32 = 40.0;

/// Home menu buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Music,
    Exit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Music, MenuButton::Exit];

    /// Button rectangle, stacked under the screen center
    pub fn rect(self) -> Rect {
        let offset = match self {
            MenuButton::Start => -50.0,
            MenuButton::Music => 30.0,
            MenuButton::Exit => 110.0,
        };
        let center = screen_center();
        Rect::new(
            center.x - BUTTON_WIDTH / 2.0,
            center.y + offset,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn command(self) -> Command {
        match self {
            MenuButton::Start => Command::Start,
            MenuButton::Music => Command::ToggleMusic,
            MenuButton::Exit => Command::Quit,
        }
    }

    pub fn label(self, music_enabled: bool) -> String {
        match self {
            MenuButton::Start => "START GAME".to_string(),
            MenuButton::Music => {
                format!("MUSIC: {}", if music_enabled { "ON" } else { "OFF" })
            }
            MenuButton::Exit => "EXIT".to_string(),
        }
    }
}

/// Button under a click position
pub fn button_at(pos: Vec2) -> Option<MenuButton> {
    MenuButton::ALL
        .into_iter()
        .find(|button| button.rect().contains_point(pos))
}
