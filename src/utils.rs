/// Project a position forward along its per-step velocity.
/// `interpolation` is the fraction of the next, not yet simulated, step.
pub fn extrapolate(position: f32, velocity: f32, interpolation: f32) -> f32 {
    position + velocity * interpolation
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_extrapolate() {
        assert_approx_eq!(extrapolate(100.0, -5.0, 0.0), 100.0);
        assert_approx_eq!(extrapolate(100.0, -5.0, 0.5), 97.5);
        assert_approx_eq!(extrapolate(100.0, -5.0, 1.0), 95.0);
    }

    #[test]
    fn test_extrapolate_past_one_step() {
        // Interpolation can exceed 1.0 when the loop hits its frame-skip cap
        assert_approx_eq!(extrapolate(10.0, 2.0, 1.5), 13.0);
    }
}
