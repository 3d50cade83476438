use crate::config::{PIPE_COUNT, PipeConfig, WorldConfig};
use crate::types::{DrawTarget, Renderable};
use crate::utils;
use ::rand::prelude::*;
use macroquad::color::{Color, RED};

const PIPE_COLOR: Color = RED;

// One obstacle: a top segment from the ceiling to `gate_top_y`, a gap of
// `gate_height`, then a bottom segment down past the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub gate_top_y: f32,
}

/// The slot that becomes active once `slot` scrolls off screen and recycles.
pub fn successor(slot: usize) -> usize {
    (slot + 1) % PIPE_COUNT
}

/// Three recyclable pipes scrolling left at a shared constant speed.
///
/// Slots always recycle in round-robin order, so the slot after the one that
/// just recycled is the next pipe the bird meets. `active` is that pointer.
#[derive(Debug)]
pub struct Pipes {
    world: WorldConfig,
    config: PipeConfig,
    slots: [Pipe; PIPE_COUNT],
    active: usize,
    rng: StdRng,
}

impl Pipes {
    pub fn new(world: WorldConfig, config: PipeConfig, rng: StdRng) -> Self {
        let mut pipes = Pipes {
            world,
            config,
            slots: [Pipe {
                x: 0.0,
                gate_top_y: 0.0,
            }; PIPE_COUNT],
            active: 0,
            rng,
        };
        pipes.reset_field();
        pipes
    }

    /// Initial x of a slot: the first pipe two screen widths off the right edge,
    /// each following one a pipe width plus spacing further out.
    pub fn spawn_x(&self, slot: usize) -> f32 {
        self.world.width * 2.0 + slot as f32 * (self.config.width + self.config.horizontal_spacing)
    }

    pub fn reset_field(&mut self) {
        self.active = 0;
        for slot in 0..PIPE_COUNT {
            self.slots[slot] = Pipe {
                x: self.spawn_x(slot),
                gate_top_y: self.random_gate_y(),
            };
        }
        crate::debug_pipes!(
            "Field reset, gates at {:.0}/{:.0}/{:.0}",
            self.slots[0].gate_top_y,
            self.slots[1].gate_top_y,
            self.slots[2].gate_top_y
        );
    }

    // Upper edge of the gap, a whole pixel in [0, 0.4 * height + height / 10).
    fn random_gate_y(&mut self) -> f32 {
        let height = self.world.height.max(0.0);
        let range = ((height * 0.4) as u32 + height as u32 / 10).max(1);
        self.rng.gen_range(0..range) as f32
    }

    pub fn step(&mut self) {
        for pipe in self.slots.iter_mut() {
            pipe.x += self.config.x_vel;
        }

        for slot in 0..PIPE_COUNT {
            if self.slots[slot].x + self.config.width < 0.0 {
                self.slots[slot].x = self.world.width;
                self.slots[slot].gate_top_y = self.random_gate_y();
                self.active = successor(slot);
                crate::debug_pipes!(
                    "Pipe {} recycled with gate at {:.0}, Pipe {} now active",
                    slot,
                    self.slots[slot].gate_top_y,
                    self.active
                );
            }
        }
    }

    pub fn active_pipe(&self) -> Pipe {
        self.slots[self.active]
    }

    pub fn active_id(&self) -> usize {
        self.active
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn gate_height(&self) -> f32 {
        self.config.gate_height
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Pipe; PIPE_COUNT] {
        &self.slots
    }
}

impl Renderable for Pipes {
    fn render(&self, target: &mut dyn DrawTarget, interpolation: f32) {
        for pipe in &self.slots {
            let x = utils::extrapolate(pipe.x, self.config.x_vel, interpolation);
            target.fill_rect(x, 0.0, self.config.width, pipe.gate_top_y, PIPE_COLOR);
            target.fill_rect(
                x,
                pipe.gate_top_y + self.config.gate_height,
                self.config.width,
                self.world.height,
                PIPE_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::testing::{DrawCall, RecordingTarget};
    use assert_approx_eq::assert_approx_eq;

    fn seeded_pipes(seed: u64) -> Pipes {
        Pipes::new(
            WorldConfig::default(),
            PipeConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    // Steps until slot 0 first recycles: 1600 - 5n < -100
    const FIRST_RECYCLE_STEP: usize = 341;

    #[test]
    fn test_reset_field_spawn_offsets() {
        let pipes = seeded_pipes(1);
        let xs: Vec<f32> = pipes.slots().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1600.0, 1910.0, 2220.0]);
        assert_eq!(pipes.active_id(), 0);
    }

    #[test]
    fn test_gate_positions_stay_in_range() {
        let mut pipes = seeded_pipes(7);
        for _ in 0..500 {
            pipes.reset_field();
            for pipe in pipes.slots() {
                assert!(pipe.gate_top_y >= 0.0 && pipe.gate_top_y < 300.0);
                assert_eq!(pipe.gate_top_y.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_step_scrolls_every_slot() {
        let mut pipes = seeded_pipes(3);
        pipes.step();
        let xs: Vec<f32> = pipes.slots().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1595.0, 1905.0, 2215.0]);
    }

    #[test]
    fn test_first_recycle_hands_off_to_next_slot() {
        let mut pipes = seeded_pipes(11);
        for _ in 0..FIRST_RECYCLE_STEP - 1 {
            pipes.step();
        }
        assert_eq!(pipes.active_id(), 0);
        assert_approx_eq!(pipes.active_pipe().x, -100.0);

        pipes.step();
        assert_eq!(pipes.active_id(), 1);
        assert_eq!(pipes.slots()[0].x, 800.0);
        assert_eq!(pipes.active_pipe(), pipes.slots()[1]);
    }

    #[test]
    fn test_active_only_changes_round_robin_on_recycle() {
        let mut pipes = seeded_pipes(42);
        let mut previous = pipes.active_id();
        let mut hand_offs = 0;
        for _ in 0..5000 {
            let before = *pipes.slots();
            pipes.step();
            let recycled: Vec<usize> = (0..PIPE_COUNT)
                .filter(|&slot| before[slot].x + PipeConfig::default().x_vel + 100.0 < 0.0)
                .collect();
            if pipes.active_id() != previous {
                assert_eq!(pipes.active_id(), successor(previous));
                assert_eq!(recycled.len(), 1);
                assert_eq!(pipes.slots()[recycled[0]].x, 800.0);
                hand_offs += 1;
            } else {
                assert!(recycled.is_empty());
            }
            previous = pipes.active_id();
        }
        assert!(hand_offs > 20);
    }

    #[test]
    fn test_successor_mapping() {
        assert_eq!(successor(0), 1);
        assert_eq!(successor(1), 2);
        assert_eq!(successor(2), 0);
    }

    #[test]
    fn test_render_extrapolates_horizontally() {
        let pipes = seeded_pipes(5);
        let mut target = RecordingTarget::default();
        pipes.render(&mut target, 0.5);

        assert_eq!(target.calls.len(), 6);
        for (slot, pair) in target.calls.chunks(2).enumerate() {
            let pipe = pipes.slots()[slot];
            let expected_x = pipe.x - 2.5;
            assert_eq!(
                pair[0],
                DrawCall::FillRect {
                    x: expected_x,
                    y: 0.0,
                    w: 100.0,
                    h: pipe.gate_top_y,
                    color: RED
                }
            );
            assert_eq!(
                pair[1],
                DrawCall::FillRect {
                    x: expected_x,
                    y: pipe.gate_top_y + 180.0,
                    w: 100.0,
                    h: 600.0,
                    color: RED
                }
            );
        }
    }

    #[test]
    fn test_same_seed_same_gates() {
        let a = seeded_pipes(99);
        let b = seeded_pipes(99);
        assert_eq!(a.slots(), b.slots());
    }
}
