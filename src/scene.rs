//! Read-only frame snapshot for renderers
//!
//! Captured after the tick; holds copies, so the renderer can live on another
//! layer without touching `GameState`.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{
    Buffs, Collectible, GameState, MatchPhase, Obstacle, PlaceMode, PowerUp, PowerUpKind,
};

/// Step used when sampling the target's path for drawing
pub const PATH_SAMPLE_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub dir: Vec2,
    pub radius: f32,
    /// Blink while the hit grace window runs
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerUpView {
    /// Position including the bob offset
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
    pub active: bool,
}

/// HUD numbers and the end banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub remaining_time: u32,
    pub score: u32,
    pub lives: u32,
    pub phase: MatchPhase,
    pub player_won: bool,
    pub mode: PlaceMode,
    pub buffs: Buffs,
    /// Set once a match has ended
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub player: PlayerView,
    pub target: Vec2,
    /// Polyline of the target's current path
    pub target_path: Vec<Vec2>,
    pub obstacles: Vec<Obstacle>,
    /// All collectibles; draw only the `active` ones
    pub collectibles: Vec<Collectible>,
    pub powerups: Vec<PowerUpView>,
    /// Toolbox anchor x positions with their tool
    pub toolbox: Vec<(f32, PlaceMode)>,
    pub hud: Hud,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let banner = state.is_ended().then(|| {
            if state.player_won {
                format!("GAME WIN! Final Score: {}", state.player.score)
            } else {
                format!("GAME OVER. Final Score: {}", state.player.score)
            }
        });

        Self {
            player: PlayerView {
                pos: state.player.pos,
                dir: state.player.dir,
                radius: state.player.radius,
                invulnerable: state.player.invulnerability > 0.0,
            },
            target: state.target.pos,
            target_path: state.target.curve.sample(PATH_SAMPLE_STEP),
            obstacles: state.level.obstacles.clone(),
            collectibles: state.level.collectibles.clone(),
            powerups: state.level.powerups.iter().map(powerup_view).collect(),
            toolbox: TOOLBOX_ANCHORS
                .iter()
                .copied()
                .zip(PlaceMode::TOOLBOX)
                .collect(),
            hud: Hud {
                remaining_time: state.remaining_time,
                score: state.player.score,
                lives: state.player.lives,
                phase: state.phase,
                player_won: state.player_won,
                mode: state.mode,
                buffs: state.buffs,
                banner,
            },
        }
    }

    /// Collectibles still in play
    pub fn active_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| c.active)
    }
}

fn powerup_view(p: &PowerUp) -> PowerUpView {
    PowerUpView {
        pos: p.pos + Vec2::new(0.0, p.bob_offset()),
        radius: p.radius,
        kind: p.kind,
        active: p.active,
    }
}
