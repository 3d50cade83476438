//! Shared types and the seams between the simulation and the platform.

use macroquad::color::Color;

/// The two bird frames. Which one is drawn depends on the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    FlapUp,
    FlapDown,
}

impl Sprite {
    /// Name of the embedded asset backing this sprite.
    pub fn asset_name(self) -> &'static str {
        match self {
            Sprite::FlapUp => "bird_up.png",
            Sprite::FlapDown => "bird_down.png",
        }
    }
}

/// Per-step input snapshot. Sampled once per step, reflecting key state at sample time.
pub trait InputSource {
    fn is_flap_pressed(&self) -> bool;
}

/// A double-buffered surface the scene is drawn onto.
pub trait DrawTarget {
    /// Wipe the back buffer. Called once before every render pass.
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
    /// Make the back buffer visible.
    fn present(&mut self);
}

/// Something that draws itself, extrapolating from its last known velocity.
pub trait Renderable {
    fn render(&self, target: &mut dyn DrawTarget, interpolation: f32);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        FillRect {
            x: f32,
            y: f32,
            w: f32,
            h: f32,
            color: Color,
        },
        Sprite {
            sprite: Sprite,
            x: f32,
            y: f32,
        },
        Text {
            text: String,
            x: f32,
            y: f32,
            font_size: f32,
            color: Color,
        },
        Present,
    }

    /// Draw target that remembers every call it received.
    #[derive(Debug, Default)]
    pub struct RecordingTarget {
        pub calls: Vec<DrawCall>,
    }

    impl DrawTarget for RecordingTarget {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        }

        fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32) {
            self.calls.push(DrawCall::Sprite { sprite, x, y });
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
                font_size,
                color,
            });
        }

        fn present(&mut self) {
            self.calls.push(DrawCall::Present);
        }
    }

    /// Input that reports a fixed key state.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FixedInput {
        pub flap: bool,
    }

    impl FixedInput {
        pub fn idle() -> Self {
            FixedInput { flap: false }
        }

        pub fn held() -> Self {
            FixedInput { flap: true }
        }
    }

    impl InputSource for FixedInput {
        fn is_flap_pressed(&self) -> bool {
            self.flap
        }
    }
}
