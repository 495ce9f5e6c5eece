//! Menus, input mapping and scene drawing

pub mod input;
pub mod menu;
pub mod scene;

pub use input::{InputSource, Key, KeyState, click_command, frame_input, key_command};
pub use menu::{MenuButton, button_at};
pub use scene::draw_scene;
