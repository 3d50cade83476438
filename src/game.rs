use crate::bird::Bird;
use crate::config::GameConfig;
use crate::game_loop::{LoopDriver, MacroquadClock, Simulation};
use crate::input::KeyboardInput;
use crate::pipes::Pipes;
use crate::render::Renderer;
use crate::types::{DrawTarget, InputSource, Renderable};
use ::rand::prelude::*;
use log::info;
use macroquad::prelude::next_frame;

/// The pipes and the bird. Pipes are registered first: they step before the
/// bird tests against them and draw underneath it.
#[derive(Debug)]
pub struct Scene {
    pipes: Pipes,
    bird: Bird,
}

impl Scene {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                info!("Seeding gate placement with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Scene {
            pipes: Pipes::new(config.world, config.pipes, rng),
            bird: Bird::new(config.world, config.bird),
        }
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    #[cfg(test)]
    pub(crate) fn pipes(&self) -> &Pipes {
        &self.pipes
    }
}

impl Simulation for Scene {
    fn step(&mut self, input: &dyn InputSource) {
        self.pipes.step();
        self.bird.step(input, &mut self.pipes);
    }

    fn render(&self, target: &mut dyn DrawTarget, interpolation: f32) {
        let layers: [&dyn Renderable; 2] = [&self.pipes, &self.bird];
        for layer in layers {
            layer.render(target, interpolation);
        }
    }
}

/// A game session: the scene plus the loop that drives it.
pub struct Game {
    scene: Scene,
    driver: LoopDriver<MacroquadClock>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        info!(
            "World {}x{}, {} steps per second, at most {} steps per frame",
            config.world.width,
            config.world.height,
            config.game_loop.ticks_per_second,
            config.game_loop.max_frame_skips
        );
        Game {
            scene: Scene::new(config),
            driver: LoopDriver::new(MacroquadClock, config.game_loop),
        }
    }

    /// Run until the window is closed or Escape is pressed
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");
        let input = KeyboardInput;

        while !Renderer::window_should_close() {
            let stats = self.driver.frame(&mut self.scene, &input, renderer);
            if stats.capped {
                crate::debug_loop!(
                    "Frame skip cap hit after {} steps, drawing {:.2} steps ahead",
                    stats.steps,
                    stats.interpolation
                );
            }
            next_frame().await;
        }

        info!(
            "Exiting Flappy Bird with score {}.",
            self.scene.bird().score()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::testing::{DrawCall, FixedInput, RecordingTarget};

    fn seeded_scene() -> Scene {
        Scene::new(&GameConfig {
            seed: Some(17),
            ..Default::default()
        })
    }

    #[test]
    fn test_pipes_step_before_bird() {
        let mut scene = seeded_scene();
        // Pipe 0 sits at x = 105, just right of the bird; one more step puts it at 100
        for _ in 0..299 {
            scene.pipes.step();
        }
        let pipe = scene.pipes().active_pipe();
        let below_gate = pipe.gate_top_y + scene.pipes().gate_height() + 10.0;
        scene.bird.place(below_gate, 0.0);

        scene.step(&FixedInput::idle());

        // The crash only happens if the bird saw the pipe's post-step position
        assert_eq!(scene.pipes().slots()[0].x, 1600.0);
        assert_eq!(scene.bird().y(), 100.0);
        assert_eq!(scene.bird().y_vel(), -6.0);
    }

    #[test]
    fn test_render_order_pipes_then_bird() {
        let scene = seeded_scene();
        let mut target = RecordingTarget::default();
        scene.render(&mut target, 0.0);

        assert_eq!(target.calls.len(), 8);
        assert!(
            target.calls[..6]
                .iter()
                .all(|c| matches!(c, DrawCall::FillRect { .. }))
        );
        assert!(matches!(target.calls[6], DrawCall::Sprite { .. }));
        assert!(matches!(target.calls[7], DrawCall::Text { .. }));
    }

    #[test]
    fn test_idle_bird_keeps_respawning() {
        let mut scene = seeded_scene();
        let mut respawns = 0;
        for _ in 0..2000 {
            let before = scene.bird().y();
            scene.step(&FixedInput::idle());
            if scene.bird().y() == 100.0 && before != 100.0 {
                respawns += 1;
            }
            assert!(scene.bird().y() >= 0.0);
            assert!(scene.bird().y() < 600.0);
        }
        assert!(respawns > 0);
        assert_eq!(scene.bird().score(), 0);
    }

    #[test]
    fn test_seeded_scenes_are_reproducible() {
        let mut a = seeded_scene();
        let mut b = seeded_scene();
        for _ in 0..1000 {
            a.step(&FixedInput::idle());
            b.step(&FixedInput::idle());
        }
        assert_eq!(a.pipes().slots(), b.pipes().slots());
        assert_eq!(a.bird().y(), b.bird().y());
    }
}
