//! Game state and core simulation types
//!
//! One explicit world-state value owns everything the tick mutates: entity
//! collections, timers, score, phase, and the session RNG. No ambient
//! globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::records::BestRecords;
use crate::tuning::Tuning;
use crate::aim_angle;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Terminal state: the tick is frozen until an explicit restart
    GameOver,
}

/// Render surface geometry, injected by the host at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

/// The player tank. Singleton: reset in place on restart, never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement speed in px per tick, applied once per held direction
    pub speed: f32,
}

impl Player {
    /// Spawn centered on the surface
    pub fn centered(surface: &Surface, speed: f32) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(surface.width, surface.height) * 0.5 - size * 0.5,
            size,
            speed,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// A bullet in flight, fired by either side.
///
/// Heading is fixed at creation (no homing); motion is
/// `pos += (cos θ, sin θ) * speed` each tick.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    /// Heading angle in radians, surface coordinates (y down)
    pub heading: f32,
    /// Speed in px per tick
    pub speed: f32,
    pub size: Vec2,
}

impl Projectile {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Advance one tick along the fixed heading
    pub fn advance(&mut self) {
        self.pos += crate::heading_vector(self.heading) * self.speed;
    }
}

/// An enemy tank descending from the top edge
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed in px per tick, fixed at spawn (speed factor included)
    pub speed: f32,
    /// Per-instance fire cadence, randomized once at spawn
    pub fire_interval_ms: f64,
    /// Next wall-clock time this enemy is eligible to fire
    pub next_fire_at: f64,
}

impl Enemy {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Per-tick happenings the host may react to (audio cues, record saves)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player fired a bullet
    ShotFired,
    /// A new enemy entered above the top edge
    EnemySpawned,
    /// A player bullet destroyed an enemy (score already incremented)
    EnemyDestroyed,
    /// The session just entered the terminal state. Best records have been
    /// updated in memory; the host should persist them on this event.
    SessionEnded { score: u32, elapsed_secs: u32 },
    /// An explicit restart cleared the terminal state
    SessionReset,
}

/// Complete world state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub surface: Surface,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Enemies destroyed this session
    pub score: u32,
    /// Whole seconds since session start, frozen once terminal
    pub elapsed_secs: u32,
    pub player: Player,
    /// Player bullets in flight
    pub bullets: Vec<Projectile>,
    /// Enemy bullets in flight
    pub enemy_bullets: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Best score / best time across sessions (only ever raised)
    pub records: BestRecords,
    /// Per-tick event queue, drained by the host
    pub events: Vec<GameEvent>,
    /// Wall-clock time the current session started
    pub(crate) session_started_at: f64,
    /// Next wall-clock time the player is eligible to fire
    pub(crate) next_shot_at: f64,
    /// Wall-clock time of the most recent enemy spawn
    pub(crate) last_spawn_at: f64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session starting at `now_ms`
    pub fn new(
        seed: u64,
        surface: Surface,
        tuning: Tuning,
        records: BestRecords,
        now_ms: f64,
    ) -> Self {
        let player = Player::centered(&surface, tuning.player_speed);
        Self {
            seed,
            surface,
            tuning,
            phase: GamePhase::Running,
            score: 0,
            elapsed_secs: 0,
            player,
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            records,
            events: Vec::new(),
            session_started_at: now_ms,
            next_shot_at: now_ms,
            last_spawn_at: now_ms,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restart after game over: clear transient entities, zero the score,
    /// rewind all session timers to `now_ms`. Best records are untouched.
    pub fn reset(&mut self, now_ms: f64) {
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.score = 0;
        self.elapsed_secs = 0;
        self.phase = GamePhase::Running;
        self.player = Player::centered(&self.surface, self.tuning.player_speed);
        self.session_started_at = now_ms;
        self.next_shot_at = now_ms;
        self.last_spawn_at = now_ms;
    }

    /// Enter the terminal state. Idempotent: the record comparison runs at
    /// most once per Running -> GameOver transition, so simultaneous hits in
    /// one tick cannot compound.
    pub(crate) fn end_session(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let improved = self.records.submit(self.score, self.elapsed_secs);
        if improved {
            log::info!(
                "new best: score {} / {}s survived",
                self.records.best_score,
                self.records.best_time
            );
        }
        self.events.push(GameEvent::SessionEnded {
            score: self.score,
            elapsed_secs: self.elapsed_secs,
        });
    }

    /// Take this tick's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only per-frame snapshot for the render collaborator
    pub fn frame(&self, pointer: Vec2) -> Frame {
        Frame {
            player: self.player.rect(),
            aim_angle: aim_angle(self.player.center(), pointer),
            bullets: self.bullets.iter().map(Projectile::rect).collect(),
            enemies: self.enemies.iter().map(Enemy::rect).collect(),
            enemy_bullets: self.enemy_bullets.iter().map(Projectile::rect).collect(),
            score: self.score,
            elapsed_secs: self.elapsed_secs,
            best_score: self.records.best_score,
            best_time: self.records.best_time,
            game_over: self.phase == GamePhase::GameOver,
            pointer,
        }
    }

    /// Convenience constructor with default geometry and balance
    pub fn with_defaults(seed: u64, now_ms: f64) -> Self {
        Self::new(
            seed,
            Surface::default(),
            Tuning::default(),
            BestRecords::default(),
            now_ms,
        )
    }
}

/// Everything the render collaborator needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub player: Rect,
    /// Turret rotation: player center toward the pointer
    pub aim_angle: f32,
    pub bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub enemy_bullets: Vec<Rect>,
    pub score: u32,
    pub elapsed_secs: u32,
    pub best_score: u32,
    pub best_time: u32,
    pub game_over: bool,
    pub pointer: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawns_centered() {
        let surface = Surface::new(800.0, 600.0);
        let player = Player::centered(&surface, 3.0);
        assert_eq!(player.pos, Vec2::new(380.0, 280.0));
        assert_eq!(player.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_reset_round_trip() {
        let mut state = GameState::with_defaults(7, 0.0);
        state.score = 12;
        state.elapsed_secs = 34;
        state.phase = GamePhase::GameOver;
        state.enemies.push(Enemy {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::splat(crate::consts::ENEMY_SIZE),
            speed: 2.0,
            fire_interval_ms: 2500.0,
            next_fire_at: 0.0,
        });
        state.bullets.push(Projectile {
            pos: Vec2::ZERO,
            heading: 0.0,
            speed: 7.0,
            size: Vec2::new(5.0, 10.0),
        });

        state.reset(5000.0);

        assert_eq!(state.score, 0);
        assert_eq!(state.elapsed_secs, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.bullets.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.session_started_at, 5000.0);
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let mut state = GameState::with_defaults(7, 0.0);
        state.score = 5;
        state.elapsed_secs = 40;

        state.end_session();
        state.end_session();

        assert_eq!(state.records.best_score, 5);
        assert_eq!(state.records.best_time, 40);
        // One terminal event, not two
        let ended = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SessionEnded { .. }))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn test_reset_keeps_best_records() {
        let mut state = GameState::with_defaults(7, 0.0);
        state.score = 9;
        state.elapsed_secs = 21;
        state.end_session();
        state.reset(1000.0);
        assert_eq!(state.records.best_score, 9);
        assert_eq!(state.records.best_time, 21);
    }
}
