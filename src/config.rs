//! Configuration constants and injected settings for the game.

// Window
pub const WINDOW_TITLE: &str = "Flappy Bird";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

// Loop timing
pub const TICKS_PER_SECOND: u32 = 60; // Fixed simulation steps per second
pub const MAX_FRAME_SKIPS: u32 = 5; // Steps allowed per rendered frame before the loop gives up catching up

// Pipes
pub const PIPE_COUNT: usize = 3;
pub const PIPE_WIDTH: f32 = 100.0;
pub const PIPE_HORIZONTAL_SPACING: f32 = 210.0; // Gap between the trailing edge of one pipe and the next
pub const PIPE_GATE_HEIGHT: f32 = 180.0; // Vertical opening the bird flies through
pub const PIPE_X_VELOCITY: f32 = -5.0; // Pixels per step, scrolling left

// Bird
pub const BIRD_SPAWN_X: f32 = 100.0;
pub const BIRD_SPAWN_Y: f32 = 100.0;
pub const BIRD_FLAP_VELOCITY: f32 = -6.0; // Impulse applied on flap (negative = up)
pub const GRAVITY: f32 = 0.25; // Added to vertical velocity every step

// HUD
pub const SCORE_TEXT_X: f32 = 20.0;
pub const SCORE_TEXT_Y: f32 = 50.0;
pub const SCORE_FONT_SIZE: f32 = 30.0;

/// Size of the play field. Ceiling is y = 0, ground is y = `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeConfig {
    pub width: f32,
    pub horizontal_spacing: f32,
    pub gate_height: f32,
    pub x_vel: f32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        PipeConfig {
            width: PIPE_WIDTH,
            horizontal_spacing: PIPE_HORIZONTAL_SPACING,
            gate_height: PIPE_GATE_HEIGHT,
            x_vel: PIPE_X_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdConfig {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub base_y_vel: f32,
    pub gravity: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        BirdConfig {
            spawn_x: BIRD_SPAWN_X,
            spawn_y: BIRD_SPAWN_Y,
            base_y_vel: BIRD_FLAP_VELOCITY,
            gravity: GRAVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    pub ticks_per_second: u32,
    pub max_frame_skips: u32,
    /// Draw the observed steps-per-second in the corner of the screen.
    pub show_steps_per_second: bool,
}

impl LoopConfig {
    /// Duration of one simulation step in milliseconds.
    pub fn step_ms(&self) -> f64 {
        1000.0 / self.ticks_per_second.max(1) as f64
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            ticks_per_second: TICKS_PER_SECOND,
            max_frame_skips: MAX_FRAME_SKIPS,
            show_steps_per_second: false,
        }
    }
}

/// Everything a game session is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub pipes: PipeConfig,
    pub bird: BirdConfig,
    pub game_loop: LoopConfig,
    /// Seed for gate placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}
