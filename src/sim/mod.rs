//! Simulation core
//!
//! All gameplay logic lives here. No rendering, audio or platform calls:
//! - Time comes in as `dt`, input as `TickInput` and click points
//! - Audio goes out as queued `AudioCue`s
//! - Single writer per frame (tick or placement, never both)

pub mod collision;
pub mod curve;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::{circles_touch, resolve_interactions};
pub use curve::{CubicBezier, PingPong, evaluate_cubic_bezier, target_speed};
pub use placement::{PlaceOutcome, place_at, toolbox_mode_at};
pub use state::{
    AudioCue, Buff, Buffs, Collectible, GameState, Level, MatchPhase, Obstacle, PlaceMode, Player,
    PowerUp, PowerUpKind, SoundEffect, Target,
};
pub use tick::{Outcome, TickInput, advance, animate, check_end, clear, restart, start};
