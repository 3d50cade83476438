use crate::config::{BirdConfig, SCORE_FONT_SIZE, SCORE_TEXT_X, SCORE_TEXT_Y, WorldConfig};
use crate::pipes::Pipes;
use crate::types::{DrawTarget, InputSource, Renderable, Sprite};
use crate::utils;
use macroquad::color::{BLUE, Color};

const SCORE_COLOR: Color = BLUE;

/// The player. Only the vertical axis is simulated; `x` is fixed at spawn.
#[derive(Debug, Clone)]
pub struct Bird {
    world: WorldConfig,
    config: BirdConfig,
    x: f32,
    y: f32,
    y_vel: f32,
    score: u32,
    // Pipe id that last earned a point, so each hand-off pays out once
    last_scored_pipe: usize,
}

impl Bird {
    pub fn new(world: WorldConfig, config: BirdConfig) -> Self {
        let mut bird = Bird {
            world,
            config,
            x: config.spawn_x,
            y: config.spawn_y,
            y_vel: config.base_y_vel,
            score: 0,
            last_scored_pipe: 0,
        };
        bird.reset();
        bird
    }

    /// Back to the spawn point, already moving upward. Leaves the score alone.
    pub fn reset(&mut self) {
        self.x = self.config.spawn_x;
        self.y = self.config.spawn_y;
        self.y_vel = self.config.base_y_vel;
    }

    pub fn flap(&mut self) {
        self.y_vel = self.config.base_y_vel;
    }

    /// Advance one fixed step. `pipes` must already have been stepped.
    ///
    /// Flapping is level-triggered: every step the key is held re-applies the
    /// impulse.
    pub fn step(&mut self, input: &dyn InputSource, pipes: &mut Pipes) {
        self.y += self.y_vel;
        self.y_vel += self.config.gravity;

        if self.y < 0.0 {
            self.y = 0.0;
            self.y_vel = 0.0;
        }

        if input.is_flap_pressed() {
            self.flap();
        }

        if self.collides(pipes) {
            crate::debug_bird!(
                "Crashed at y {:.1} against Pipe {} with score {}",
                self.y,
                pipes.active_id(),
                self.score
            );
            pipes.reset_field();
            self.reset();
            self.score = 0;
            // A fresh field starts on pipe 0; anything older would pay out a
            // point on the first step after the crash.
            self.last_scored_pipe = pipes.active_id();
        } else if pipes.active_id() != self.last_scored_pipe {
            self.score += 1;
            self.last_scored_pipe = pipes.active_id();
            crate::debug_bird!("Passed a pipe, score {}", self.score);
        }
    }

    /// Inside the active pipe's horizontal span but outside its gate, or on the ground.
    fn collides(&self, pipes: &Pipes) -> bool {
        let pipe = pipes.active_pipe();
        let in_span = self.x >= pipe.x && self.x <= pipe.x + pipes.width();
        let outside_gate = self.y <= pipe.gate_top_y || self.y >= pipe.gate_top_y + pipes.gate_height();
        (in_span && outside_gate) || self.y >= self.world.height
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, y: f32, y_vel: f32) {
        self.y = y;
        self.y_vel = y_vel;
    }

    #[cfg(test)]
    pub(crate) fn x(&self) -> f32 {
        self.x
    }

    #[cfg(test)]
    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    #[cfg(test)]
    pub(crate) fn y_vel(&self) -> f32 {
        self.y_vel
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sprite(&self) -> Sprite {
        if self.y_vel <= 0.0 {
            Sprite::FlapUp
        } else {
            Sprite::FlapDown
        }
    }
}

impl Renderable for Bird {
    fn render(&self, target: &mut dyn DrawTarget, interpolation: f32) {
        let y = utils::extrapolate(self.y, self.y_vel, interpolation);
        target.draw_sprite(self.sprite(), self.x, y);
        target.draw_text(
            &format!("Score: {}", self.score),
            SCORE_TEXT_X,
            SCORE_TEXT_Y,
            SCORE_FONT_SIZE,
            SCORE_COLOR,
        );
    }
}
