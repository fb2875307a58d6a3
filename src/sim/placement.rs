//! Level authoring: toolbox selection and entity placement
//!
//! Points are in world coordinates (y up). The toolbox is the bottom HUD
//! strip; the arena is the band between the two HUD strips.

use glam::Vec2;

use super::state::{Collectible, GameState, Obstacle, PlaceMode, PowerUp};
use crate::clamp_to_rect;
use crate::consts::*;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Toolbox click changed the placement tool
    ModeSelected(PlaceMode),
    /// Toolbox click between anchors
    ToolboxMiss,
    /// A new entity was stored
    Placed,
    /// Candidate crowded an existing entity, the target or the player
    Rejected,
    /// No tool selected, click outside the arena, or a match is running
    Ignored,
}

/// Toolbox tool under `x`, if any anchor is within tolerance
pub fn toolbox_mode_at(x: f32) -> Option<PlaceMode> {
    TOOLBOX_ANCHORS
        .iter()
        .position(|anchor| (x - anchor).abs() < TOOLBOX_TOLERANCE)
        .map(|i| PlaceMode::TOOLBOX[i])
}

#[inline]
pub fn in_toolbox(point: Vec2) -> bool {
    point.y <= BOTTOM_H
}

#[inline]
pub fn in_arena(point: Vec2) -> bool {
    point.y > GAME_Y0 && point.y < GAME_Y1
}

/// Handle a pointer click while authoring
pub fn place_at(state: &mut GameState, point: Vec2) -> PlaceOutcome {
    if state.is_running() {
        return PlaceOutcome::Ignored;
    }

    if in_toolbox(point) {
        return match toolbox_mode_at(point.x) {
            Some(mode) => {
                state.mode = mode;
                log::debug!("Placement tool: {}", mode.label());
                PlaceOutcome::ModeSelected(mode)
            }
            None => PlaceOutcome::ToolboxMiss,
        };
    }

    if !in_arena(point) || state.mode == PlaceMode::None {
        return PlaceOutcome::Ignored;
    }

    // Pull the click inside the arena so entities never straddle the border
    let pos = clamp_to_rect(
        point,
        Vec2::new(PLACEMENT_EDGE_PAD, GAME_Y0 + PLACEMENT_EDGE_PAD),
        Vec2::new(WIN_W - PLACEMENT_EDGE_PAD, GAME_Y1 - PLACEMENT_EDGE_PAD),
    );

    let radius = match state.mode {
        PlaceMode::Obstacle => OBSTACLE_RADIUS,
        PlaceMode::Collectible => COLLECTIBLE_RADIUS,
        PlaceMode::Power(_) => POWERUP_RADIUS,
        PlaceMode::None => return PlaceOutcome::Ignored,
    };

    if state.overlaps_existing(pos, radius) {
        log::debug!("Rejected {} at {:?}: too close", state.mode.label(), pos);
        return PlaceOutcome::Rejected;
    }

    match state.mode {
        PlaceMode::Obstacle => state.level.obstacles.push(Obstacle::new(pos)),
        PlaceMode::Collectible => state.level.collectibles.push(Collectible::new(pos)),
        PlaceMode::Power(kind) => state.level.powerups.push(PowerUp::new(pos, kind)),
        PlaceMode::None => return PlaceOutcome::Ignored,
    }
    PlaceOutcome::Placed
}
