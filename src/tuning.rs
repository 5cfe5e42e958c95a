//! Data-driven game balance
//!
//! All the knobs the tick reads each frame, deserializable from JSON so
//! hosts can ship alternate balance tables without a rebuild. Defaults match
//! the canonical arcade values.

use serde::{Deserialize, Serialize};

/// Balance parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player movement per held direction, px per tick
    pub player_speed: f32,
    /// Minimum gap between player shots, ms
    pub shot_cooldown_ms: f64,
    /// Player bullet speed, px per tick
    pub bullet_speed: f32,
    /// Enemy bullet speed, px per tick
    pub enemy_bullet_speed: f32,
    /// Spawn gap at session start, ms
    pub initial_spawn_interval_ms: f64,
    /// Spawn gap floor, ms
    pub min_spawn_interval_ms: f64,
    /// How much the spawn gap shrinks per elapsed second, ms
    pub spawn_decrease_rate: f64,
    /// Enemy speed-factor growth per elapsed second
    pub speed_increase_rate: f32,
    /// Enemy base descent speed, px per tick
    pub base_enemy_speed: f32,
    /// Uniform random addition to enemy base speed, px per tick
    pub enemy_speed_jitter: f32,
    /// Enemy fire interval range, ms
    pub enemy_fire_min_ms: f64,
    pub enemy_fire_max_ms: f64,
    /// Whether an enemy body touching the player ends the session
    /// (base-variant rule; some variants only count enemy fire)
    pub enemy_contact_lethal: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 3.0,
            shot_cooldown_ms: 300.0,
            bullet_speed: 7.0,
            enemy_bullet_speed: 5.0,
            initial_spawn_interval_ms: 1500.0,
            min_spawn_interval_ms: 500.0,
            spawn_decrease_rate: 5.0,
            speed_increase_rate: 0.02,
            base_enemy_speed: 2.0,
            enemy_speed_jitter: 1.5,
            enemy_fire_min_ms: 2000.0,
            enemy_fire_max_ms: 3000.0,
            enemy_contact_lethal: true,
        }
    }
}

impl Tuning {
    /// Parse a balance table from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("invalid tuning JSON ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Tuning::default();
        assert_eq!(t.shot_cooldown_ms, 300.0);
        assert_eq!(t.initial_spawn_interval_ms, 1500.0);
        assert!(t.enemy_contact_lethal);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tuning::from_json(r#"{"player_speed": 5.0, "enemy_contact_lethal": false}"#);
        assert_eq!(t.player_speed, 5.0);
        assert!(!t.enemy_contact_lethal);
        // Untouched fields keep their defaults
        assert_eq!(t.bullet_speed, 7.0);
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let t = Tuning::from_json("not json");
        assert_eq!(t, Tuning::default());
    }
}
