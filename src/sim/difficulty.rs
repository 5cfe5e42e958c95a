//! Time-derived difficulty curves
//!
//! Both functions are recomputed from scratch every tick rather than cached,
//! so they react instantly as session time accumulates. Enemies capture the
//! speed factor at spawn; existing enemies are never retroactively rescaled.

use crate::tuning::Tuning;

/// Minimum real-time gap, in milliseconds, required between enemy spawns.
///
/// Strictly decreasing with elapsed session time, floored at
/// `min_spawn_interval_ms`, producing a monotonically increasing spawn rate.
#[inline]
pub fn spawn_interval(elapsed_secs: u32, tuning: &Tuning) -> f64 {
    (tuning.initial_spawn_interval_ms - elapsed_secs as f64 * tuning.spawn_decrease_rate)
        .max(tuning.min_spawn_interval_ms)
}

/// Multiplier applied to each newly spawned enemy's base speed
#[inline]
pub fn speed_factor(elapsed_secs: u32, tuning: &Tuning) -> f32 {
    1.0 + elapsed_secs as f32 * tuning.speed_increase_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_at_session_start() {
        let tuning = Tuning::default();
        assert_eq!(spawn_interval(0, &tuning), 1500.0);
    }

    #[test]
    fn test_spawn_interval_floors_at_minimum() {
        // 1500 - 200 * 5 = 500, exactly at the floor
        let tuning = Tuning::default();
        assert_eq!(spawn_interval(200, &tuning), 500.0);
        // Well past the floor it stays clamped
        assert_eq!(spawn_interval(10_000, &tuning), 500.0);
    }

    #[test]
    fn test_spawn_interval_monotonically_decreasing() {
        let tuning = Tuning::default();
        let mut prev = spawn_interval(0, &tuning);
        for t in 1..300 {
            let cur = spawn_interval(t, &tuning);
            assert!(cur <= prev, "interval rose at t={t}");
            prev = cur;
        }
    }

    #[test]
    fn test_speed_factor_growth() {
        let tuning = Tuning::default();
        assert_eq!(speed_factor(0, &tuning), 1.0);
        assert!((speed_factor(100, &tuning) - 3.0).abs() < 1e-5);
    }
}
