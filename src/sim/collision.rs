//! Player interactions with placed entities
//!
//! Everything is circle-vs-circle. Contact is inclusive: touching edges count.

use glam::Vec2;

use super::state::{AudioCue, GameState, PowerUpKind, SoundEffect};
use crate::{clamp_to_arena, distance};

/// Whether two circles touch or overlap
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) <= ra + rb
}

/// Unit vector pointing from `from` to `to`, or `None` when they coincide
pub fn push_direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let mag = delta.length();
    if mag > 0.001 { Some(delta / mag) } else { None }
}

/// Resolve one frame of player-vs-level interactions and tick the buff timers.
///
/// Pickups are guarded by their `active` flag, so resolving twice in a frame
/// never pays out twice.
pub fn resolve_interactions(state: &mut GameState, dt: f32) {
    let rules = state.rules.clone();

    if state.player.invulnerability > 0.0 {
        state.player.invulnerability = (state.player.invulnerability - dt).max(0.0);
    }

    // Obstacles: lose a life (unless in the grace window), always get shoved out
    for i in 0..state.level.obstacles.len() {
        let ob = state.level.obstacles[i];
        if !circles_touch(state.player.pos, state.player.radius, ob.pos, ob.radius) {
            continue;
        }
        if state.player.invulnerability <= 0.0 {
            state.player.lives = state.player.lives.saturating_sub(1);
            state.player.invulnerability = rules.invulnerability_secs;
            state.push_cue(AudioCue::OneShot(SoundEffect::Hit));
            log::debug!("Hit obstacle at {:?}, lives left {}", ob.pos, state.player.lives);
        }
        if let Some(dir) = push_direction(ob.pos, state.player.pos) {
            state.player.pos = clamp_to_arena(
                state.player.pos + dir * rules.pushback,
                state.player.radius,
            );
        }
    }

    // Collectibles
    let value = if state.buffs.double_score.active {
        rules.collectible_value * 2
    } else {
        rules.collectible_value
    };
    let (player_pos, player_radius) = (state.player.pos, state.player.radius);
    let mut collected = 0;
    for c in state.level.collectibles.iter_mut().filter(|c| c.active) {
        if circles_touch(player_pos, player_radius, c.pos, c.radius) {
            c.active = false;
            collected += 1;
        }
    }
    for _ in 0..collected {
        state.player.score += value;
        state.push_cue(AudioCue::OneShot(SoundEffect::Collect));
    }
    if collected > 0 {
        log::debug!("Collected {} item(s), score {}", collected, state.player.score);
    }

    // Power-ups
    for p in state.level.powerups.iter_mut().filter(|p| p.active) {
        if !circles_touch(player_pos, player_radius, p.pos, p.radius) {
            continue;
        }
        p.active = false;
        match p.kind {
            PowerUpKind::Speed => state.buffs.speed.activate(rules.speed_buff_secs),
            PowerUpKind::DoubleScore => state.buffs.double_score.activate(rules.double_buff_secs),
        }
        log::debug!("Power-up {:?} activated", p.kind);
    }

    state.buffs.tick(dt);
}
