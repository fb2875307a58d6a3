//! Space Explorer - an arena arcade game with an authoring mode
//!
//! Core modules:
//! - `sim`: Simulation core (state, per-frame advance, collisions, placement)
//! - `scene`: Read-only snapshot handed to whatever draws the frame
//! - `audio`: Cue dispatcher running on its own thread
//! - `platform`: Frame clock and window-coordinate helpers
//! - `settings`: Data-driven rules and audio preferences
//! - `editor`: Standalone Bézier control-point editor

pub mod audio;
pub mod editor;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::Scene;
pub use settings::{AudioSettings, Rules, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window dimensions (world units, y grows upward)
    pub const WIN_W: f32 = 1000.0;
    pub const WIN_H: f32 = 700.0;
    /// HUD strip heights
    pub const TOP_H: f32 = 100.0;
    pub const BOTTOM_H: f32 = 100.0;
    /// Vertical extent of the playable arena
    pub const GAME_Y0: f32 = BOTTOM_H;
    pub const GAME_Y1: f32 = WIN_H - TOP_H;

    /// dt used for the very first frame (no previous timestamp)
    pub const FIRST_FRAME_DT: f32 = 0.016;

    /// Player
    pub const PLAYER_RADIUS: f32 = 18.0;
    /// Extra gap between the player's edge and the arena border
    pub const PLAYER_EDGE_PAD: f32 = 2.0;
    pub const PLAYER_START: Vec2 = Vec2::new(80.0, (GAME_Y0 + GAME_Y1) * 0.5);

    /// Entity radii
    pub const OBSTACLE_RADIUS: f32 = 20.0;
    pub const COLLECTIBLE_RADIUS: f32 = 12.0;
    pub const POWERUP_RADIUS: f32 = 14.0;

    /// Placement
    pub const PLACEMENT_CLEARANCE: f32 = 6.0;
    /// Clicks are pulled this far inside the arena before the overlap test
    pub const PLACEMENT_EDGE_PAD: f32 = 20.0;
    /// Radius the target occupies for placement purposes
    pub const TARGET_PLACEMENT_RADIUS: f32 = 20.0;

    /// Toolbox anchors, in PlaceMode order: obstacle, collectible, speed, double
    pub const TOOLBOX_ANCHORS: [f32; 4] = [200.0, 320.0, 440.0, 560.0];
    pub const TOOLBOX_TOLERANCE: f32 = 30.0;

    /// Target rest position before the first run
    pub const TARGET_IDLE: Vec2 = Vec2::new(WIN_W - 80.0, (GAME_Y0 + GAME_Y1) * 0.5);
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a point into the rectangle `[min, max]` (component-wise)
#[inline]
pub fn clamp_to_rect(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    p.clamp(min, max)
}

/// Keep a body of radius `radius` inside the arena, with the usual edge pad
pub fn clamp_to_arena(p: Vec2, radius: f32) -> Vec2 {
    use consts::*;
    let pad = radius + PLAYER_EDGE_PAD;
    clamp_to_rect(
        p,
        Vec2::new(pad, GAME_Y0 + pad),
        Vec2::new(WIN_W - pad, GAME_Y1 - pad),
    )
}
