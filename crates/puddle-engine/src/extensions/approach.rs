// extensions/approach.rs
//
// Move a value toward a target at a fixed rate without overshooting.

/// Step `current` toward `target` by `speed * dt`, clamping at the target.
#[inline]
pub fn approach(current: f32, target: f32, speed: f32, dt: f32) -> f32 {
    let step = speed * dt;
    if current < target {
        (current + step).min(target)
    } else if current > target {
        (current - step).max(target)
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_moves_up_and_down() {
        assert!((approach(0.0, 1.0, 1.0, 0.25) - 0.25).abs() < 1e-6);
        assert!((approach(1.0, 0.0, 1.0, 0.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn approach_never_overshoots() {
        assert_eq!(approach(0.9, 1.0, 1.0, 0.5), 1.0);
        assert_eq!(approach(0.1, 0.0, 1.0, 0.5), 0.0);
        assert_eq!(approach(0.5, 0.5, 1.0, 0.5), 0.5);
    }
}
