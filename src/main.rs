mod assets;
mod bird;
mod config;
mod error;
mod game;
mod game_loop;
mod input;
mod logging;
mod pipes;
mod render;
mod types;
mod utils;

use crate::config::{GameConfig, LoopConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for gate placement. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed simulation steps per second.
    #[arg(long, default_value_t = config::TICKS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..))]
    tps: u32,

    /// Maximum simulation steps run per rendered frame when catching up.
    #[arg(long, default_value_t = config::MAX_FRAME_SKIPS, value_parser = clap::value_parser!(u32).range(1..))]
    max_frame_skips: u32,

    /// Show the measured steps per second on screen.
    #[arg(long)]
    show_tps: bool,

    /// Debug filter to specify log topics (e.g., "loop,bird,pipes")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            game_loop: LoopConfig {
                ticks_per_second: self.tps,
                max_frame_skips: self.max_frame_skips,
                show_steps_per_second: self.show_tps,
            },
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Flappy Bird...");
    let config = args.game_config();

    // Sprites are required; there is nothing sensible to draw without them
    let mut renderer = match render::Renderer::new(config.world) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Failed to load sprites: {}", e);
            process::exit(1);
        }
    };
    info!("Renderer initialized.");

    let mut game = game::Game::new(&config);
    game.run(&mut renderer).await;
}
