use crate::types::InputSource;
use macroquad::input::{KeyCode, is_key_down};

pub const FLAP_KEY: KeyCode = KeyCode::Space;

/// Live keyboard state. Reports the key as pressed for as long as it is held.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn is_flap_pressed(&self) -> bool {
        is_key_down(FLAP_KEY)
    }
}
