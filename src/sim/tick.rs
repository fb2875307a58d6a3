//! Per-frame simulation step and match lifecycle
//!
//! The frame loop calls `advance` once per frame with the real elapsed time.
//! `start`/`restart`/`clear` are the discrete actions between frames.

use glam::Vec2;

use super::collision::resolve_interactions;
use super::curve::target_speed;
use super::state::{AudioCue, GameState, MatchPhase, PlaceMode, SoundEffect};
use crate::{clamp_to_arena, distance};

/// Directional input held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Desired direction, normalized; zero when nothing (or opposing keys) is held
    pub fn direction(&self) -> Vec2 {
        let mut mv = Vec2::ZERO;
        if self.left {
            mv.x -= 1.0;
        }
        if self.right {
            mv.x += 1.0;
        }
        if self.up {
            mv.y += 1.0;
        }
        if self.down {
            mv.y -= 1.0;
        }
        mv.normalize_or_zero()
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    OutOfLives,
    OutOfTime,
}

/// Begin a run: reset player, clock, buffs and target path, keep the level.
///
/// Accepted from `Idle` and `Ended`; returns `false` (and does nothing) while running.
pub fn restart(state: &mut GameState) -> bool {
    if state.is_running() {
        return false;
    }
    state.reset_run();
    state.phase = MatchPhase::Running;
    state.push_cue(AudioCue::StartAmbient);
    log::info!(
        "Run started: {} obstacles, {} collectibles, {} power-ups",
        state.level.obstacles.len(),
        state.level.collectibles.len(),
        state.level.powerups.len()
    );
    true
}

/// Alias for the first run of a session
pub fn start(state: &mut GameState) -> bool {
    restart(state)
}

/// Wipe the level and return to authoring. Valid from any phase.
pub fn clear(state: &mut GameState) {
    state.push_cue(AudioCue::StopAmbient);
    state.level.clear();
    state.mode = PlaceMode::None;
    state.phase = MatchPhase::Idle;
    state.player_won = false;
    state.player.score = 0;
    state.player.lives = state.rules.starting_lives;
    state.player.invulnerability = 0.0;
    state.buffs = Default::default();
    state.remaining_time = state.rules.total_time;
    state.accumulator = 0.0;
    log::info!("Level cleared");
}

/// Advance a running match by `dt` seconds. No-op unless running.
pub fn advance(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.is_running() {
        return;
    }

    // Movement
    let dir = input.direction();
    if dir != Vec2::ZERO {
        state.player.dir = dir;
        let boost = if state.buffs.speed.active {
            state.rules.speed_boost
        } else {
            1.0
        };
        let speed = state.rules.base_speed * boost;
        state.player.pos = clamp_to_arena(state.player.pos + dir * speed * dt, state.player.radius);
    }

    // Target glides along its curve, faster as the clock runs down
    let speed = target_speed(
        state.remaining_time,
        state.rules.total_time,
        state.rules.target_speed_min,
        state.rules.target_speed_max,
    );
    state.target.advance(speed * dt);

    resolve_interactions(state, dt);

    // Countdown. One second comes off per frame at most, even after a long stall.
    state.accumulator += dt;
    if state.accumulator >= 1.0 {
        state.remaining_time = state.remaining_time.saturating_sub(1);
        state.accumulator -= 1.0;
    }

    if let Some(outcome) = check_end(state) {
        finish(state, outcome);
    }
}

/// Evaluate the end conditions in priority order
pub fn check_end(state: &GameState) -> Option<Outcome> {
    if state.player.lives == 0 {
        return Some(Outcome::OutOfLives);
    }
    if state.remaining_time == 0 {
        return Some(Outcome::OutOfTime);
    }
    let reach = state.player.radius + state.rules.capture_radius;
    if distance(state.player.pos, state.target.pos) <= reach {
        return Some(Outcome::Won);
    }
    None
}

fn finish(state: &mut GameState, outcome: Outcome) {
    state.phase = MatchPhase::Ended;
    state.player_won = outcome == Outcome::Won;
    // Ambient stops before the terminal sting
    state.push_cue(AudioCue::StopAmbient);
    state.push_cue(AudioCue::OneShot(if state.player_won {
        SoundEffect::Win
    } else {
        SoundEffect::Lose
    }));
    log::info!(
        "Match over ({:?}), score {}, {}s left",
        outcome,
        state.player.score,
        state.remaining_time
    );
}

/// Visual-only animation (collectible spin, power-up bob). Runs in every phase.
pub fn animate(state: &mut GameState, dt: f32) {
    for c in state.level.collectibles.iter_mut().filter(|c| c.active) {
        c.rotation += 90.0 * dt;
        if c.rotation > 360.0 {
            c.rotation -= 360.0;
        }
    }
    for p in state.level.powerups.iter_mut().filter(|p| p.active) {
        p.phase += dt * 3.0;
    }
}
