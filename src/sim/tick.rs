//! Per-frame simulation tick
//!
//! Fixed pipeline, one pass per animation frame: restart / clock / player
//! movement / player fire / spawn / kinematics + enemy fire / combat
//! resolution / player-hit check / off-screen cleanup. While terminal the
//! tick is a no-op until the host requests a restart.

use glam::Vec2;
use rand::Rng;

use super::collision::{Rect, rects_overlap};
use super::difficulty::{spawn_interval, speed_factor};
use super::state::{Enemy, GameEvent, GamePhase, GameState, Projectile};
use crate::aim_angle;
use crate::consts::*;

/// Input snapshot for a single tick.
///
/// Held keys are level-triggered booleans sampled by the host's event
/// collaborator; `restart` is edge-triggered and only meaningful while
/// terminal. The pointer is the last known aim target in surface
/// coordinates, defaulting to (0,0) before first movement.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Aim target in surface coordinates
    pub pointer: Vec2,
    /// Restart request (edge-triggered, honored only while terminal)
    pub restart: bool,
}

/// Advance the world by one frame.
///
/// `now_ms` is the host clock's current timestamp in milliseconds; all
/// cooldowns and the difficulty curve are wall-clock driven, so tick cadence
/// does not have to be uniform.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset(now_ms);
            state.events.push(GameEvent::SessionReset);
            log::info!("session restarted");
        }
        // Frozen frame either way; a restarted session begins next tick
        return;
    }

    state.elapsed_secs = (((now_ms - state.session_started_at) / 1000.0).floor()).max(0.0) as u32;

    move_player(state, input);
    fire_player(state, input, now_ms);
    spawn_enemies(state, now_ms);
    advance_entities(state, now_ms);
    resolve_combat(state);
    resolve_player_hits(state);
    cull_offscreen(state);
}

/// Apply held movement keys, then clamp to the surface.
///
/// Each held direction contributes ±speed exactly once, so diagonal input
/// composes additively and moves faster than a single axis. Accepted
/// property, not corrected.
fn move_player(state: &mut GameState, input: &TickInput) {
    let speed = state.player.speed;
    if input.up {
        state.player.pos.y -= speed;
    }
    if input.down {
        state.player.pos.y += speed;
    }
    if input.left {
        state.player.pos.x -= speed;
    }
    if input.right {
        state.player.pos.x += speed;
    }

    let max = Vec2::new(
        state.surface.width - state.player.size.x,
        state.surface.height - state.player.size.y,
    );
    state.player.pos = state.player.pos.clamp(Vec2::ZERO, max);
}

/// Fire a player bullet toward the pointer, gated by the shot cooldown.
///
/// Heading is fixed at the instant of firing from the player center toward
/// the last known pointer position; no homing afterwards.
fn fire_player(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if !input.fire || now_ms < state.next_shot_at {
        return;
    }
    let center = state.player.center();
    state.bullets.push(Projectile {
        pos: center,
        heading: aim_angle(center, input.pointer),
        speed: state.tuning.bullet_speed,
        size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
    });
    state.next_shot_at = now_ms + state.tuning.shot_cooldown_ms;
    state.events.push(GameEvent::ShotFired);
}

/// Spawn one enemy when the (time-shrinking) spawn gap has elapsed.
///
/// The enemy's speed captures the current speed factor permanently, and its
/// first eligible fire time is jittered within its own interval so freshly
/// spawned enemies never volley in sync.
fn spawn_enemies(state: &mut GameState, now_ms: f64) {
    let interval = spawn_interval(state.elapsed_secs, &state.tuning);
    if now_ms - state.last_spawn_at <= interval {
        return;
    }

    let factor = speed_factor(state.elapsed_secs, &state.tuning);
    let x = state
        .rng
        .random_range(0.0..(state.surface.width - ENEMY_SIZE));
    let speed =
        (state.tuning.base_enemy_speed + state.rng.random_range(0.0..state.tuning.enemy_speed_jitter))
            * factor;
    let fire_interval_ms = state
        .rng
        .random_range(state.tuning.enemy_fire_min_ms..state.tuning.enemy_fire_max_ms);
    let next_fire_at = now_ms + state.rng.random_range(0.0..fire_interval_ms);

    state.enemies.push(Enemy {
        pos: Vec2::new(x, -ENEMY_SIZE),
        size: Vec2::splat(ENEMY_SIZE),
        speed,
        fire_interval_ms,
        next_fire_at,
    });
    state.last_spawn_at = now_ms;
    state.events.push(GameEvent::EnemySpawned);
}

/// Move every projectile along its heading, march enemies straight down,
/// and let eligible enemies fire at the player's *current* center.
fn advance_entities(state: &mut GameState, now_ms: f64) {
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    for bullet in &mut state.enemy_bullets {
        bullet.advance();
    }

    let player_center = state.player.center();
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed;
        if now_ms >= enemy.next_fire_at {
            let center = enemy.center();
            state.enemy_bullets.push(Projectile {
                pos: center,
                heading: aim_angle(center, player_center),
                speed: state.tuning.enemy_bullet_speed,
                size: Vec2::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT),
            });
            enemy.next_fire_at = now_ms + enemy.fire_interval_ms;
        }
    }
}

/// Player bullets vs enemies over a stable snapshot.
///
/// Each bullet and each enemy participates in at most one removal-causing
/// collision per tick; survivors are kept by rebuilding the collections via
/// filter rather than splicing mid-iteration.
fn resolve_combat(state: &mut GameState) {
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut enemy_hit = vec![false; state.enemies.len()];
    let mut kills = 0u32;

    for (bi, bullet) in state.bullets.iter().enumerate() {
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if enemy_hit[ei] {
                continue;
            }
            if rects_overlap(&bullet.rect(), &enemy.rect()) {
                bullet_hit[bi] = true;
                enemy_hit[ei] = true;
                kills += 1;
                break; // this bullet is spent
            }
        }
    }

    if kills > 0 {
        state.score += kills;
        for _ in 0..kills {
            state.events.push(GameEvent::EnemyDestroyed);
        }

        let mut i = 0;
        state.bullets.retain(|_| {
            let keep = !bullet_hit[i];
            i += 1;
            keep
        });
        let mut i = 0;
        state.enemies.retain(|_| {
            let keep = !enemy_hit[i];
            i += 1;
            keep
        });
    }
}

/// Enemy fire (and, when contact is lethal, enemy bodies) vs the player.
///
/// Any single overlap ends the session; simultaneous hits do not compound
/// because the terminal transition is idempotent.
fn resolve_player_hits(state: &mut GameState) {
    let player_rect = state.player.rect();
    let shot_down = state
        .enemy_bullets
        .iter()
        .any(|b| rects_overlap(&b.rect(), &player_rect));
    let rammed = state.tuning.enemy_contact_lethal
        && state
            .enemies
            .iter()
            .any(|e| rects_overlap(&e.rect(), &player_rect));

    if shot_down || rammed {
        state.end_session();
        log::info!(
            "game over: score {} after {}s",
            state.score,
            state.elapsed_secs
        );
    }
}

/// Drop entities that have left the surface.
///
/// Projectiles live while any part of them is inside the bounds; enemies are
/// culled the moment their top edge reaches the bottom of the surface
/// (they spawn one body-height above the top, which stays in bounds).
fn cull_offscreen(state: &mut GameState) {
    let surface = state.surface;
    let in_bounds = |r: Rect| {
        r.max().x > 0.0 && r.min.x < surface.width && r.max().y > 0.0 && r.min.y < surface.height
    };
    state.bullets.retain(|b| in_bounds(b.rect()));
    state.enemy_bullets.retain(|b| in_bounds(b.rect()));
    state.enemies.retain(|e| e.pos.y < surface.height);
}
