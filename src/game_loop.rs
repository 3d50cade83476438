//! Fixed-timestep loop with render interpolation.
//!
//! Simulation always advances in whole steps of `1000 / ticks_per_second` ms.
//! Rendering happens once per frame and is handed the fraction of the next
//! step that real time has already covered, so entities can draw themselves
//! slightly ahead of their last simulated position.

use crate::config::LoopConfig;
use crate::types::{DrawTarget, InputSource};
use log::info;
use macroquad::color::{Color, DARKGRAY};

const STEPS_PER_SECOND_COLOR: Color = DARKGRAY;
const STEPS_PER_SECOND_X: f32 = 700.0;
const STEPS_PER_SECOND_Y: f32 = 20.0;
const REPORT_INTERVAL_MS: f64 = 1000.0;

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock backed by macroquad's time since the window opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadClock;

impl Clock for MacroquadClock {
    fn now_ms(&self) -> f64 {
        macroquad::time::get_time() * 1000.0
    }
}

/// A world the driver can advance and draw.
pub trait Simulation {
    fn step(&mut self, input: &dyn InputSource);
    fn render(&self, target: &mut dyn DrawTarget, interpolation: f32);
}

/// What happened in one call to [`LoopDriver::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub steps: u32,
    pub interpolation: f32,
    /// Ran out of catch-up steps while still behind schedule.
    pub capped: bool,
}

#[derive(Debug)]
pub struct LoopDriver<C: Clock> {
    clock: C,
    config: LoopConfig,
    step_ms: f64,
    next_step_ms: f64,
    steps_this_second: u32,
    last_report_ms: f64,
    steps_per_second: Option<u32>,
}

impl<C: Clock> LoopDriver<C> {
    pub fn new(clock: C, config: LoopConfig) -> Self {
        let now = clock.now_ms();
        LoopDriver {
            clock,
            config,
            step_ms: config.step_ms(),
            next_step_ms: now,
            steps_this_second: 0,
            last_report_ms: now,
            steps_per_second: None,
        }
    }

    /// Run the steps that are due (at most `max_frame_skips`), then render once.
    pub fn frame<S: Simulation + ?Sized>(
        &mut self,
        sim: &mut S,
        input: &dyn InputSource,
        target: &mut dyn DrawTarget,
    ) -> FrameStats {
        let mut steps = 0;
        while self.clock.now_ms() > self.next_step_ms && steps < self.config.max_frame_skips {
            sim.step(input);
            self.next_step_ms += self.step_ms;
            steps += 1;
        }
        self.steps_this_second += steps;

        let now = self.clock.now_ms();
        let capped = steps == self.config.max_frame_skips && now > self.next_step_ms;

        let interpolation = ((now + self.step_ms - self.next_step_ms) / self.step_ms) as f32;

        target.clear();
        sim.render(target, interpolation);
        if self.config.show_steps_per_second {
            if let Some(sps) = self.steps_per_second {
                target.draw_text(
                    &format!("TPS: {}", sps),
                    STEPS_PER_SECOND_X,
                    STEPS_PER_SECOND_Y,
                    18.0,
                    STEPS_PER_SECOND_COLOR,
                );
            }
        }
        target.present();

        if now - self.last_report_ms >= REPORT_INTERVAL_MS {
            info!(target: "loop", "Steps per second: {}", self.steps_this_second);
            self.steps_per_second = Some(self.steps_this_second);
            self.steps_this_second = 0;
            self.last_report_ms = now;
        }

        FrameStats {
            steps,
            interpolation,
            capped,
        }
    }

    /// Most recent once-a-second measurement, if a full second has passed.
    #[cfg(test)]
    pub(crate) fn steps_per_second(&self) -> Option<u32> {
        self.steps_per_second
    }
}
