//! Game state and core simulation types
//!
//! One aggregate owns everything the frame loop touches. Only the tick and
//! placement code mutate it; renderers read it through `Scene`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::curve::{CubicBezier, PingPong};
use crate::consts::*;
use crate::distance;
use crate::settings::Rules;

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Authoring: entities may be placed
    Idle,
    /// Clock running, player in control
    Running,
    /// Won or lost; waits for restart or clear
    Ended,
}

/// Power-up flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    DoubleScore,
}

/// What a click in the arena will place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaceMode {
    #[default]
    None,
    Obstacle,
    Collectible,
    Power(PowerUpKind),
}

impl PlaceMode {
    /// Modes selectable from the toolbox, in anchor order
    pub const TOOLBOX: [PlaceMode; 4] = [
        PlaceMode::Obstacle,
        PlaceMode::Collectible,
        PlaceMode::Power(PowerUpKind::Speed),
        PlaceMode::Power(PowerUpKind::DoubleScore),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlaceMode::None => "None",
            PlaceMode::Obstacle => "Obstacle",
            PlaceMode::Collectible => "Collectible",
            PlaceMode::Power(PowerUpKind::Speed) => "Speed",
            PlaceMode::Power(PowerUpKind::DoubleScore) => "Double",
        }
    }
}

/// One-shot sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player ran into an obstacle
    Hit,
    /// Collectible picked up
    Collect,
    Win,
    Lose,
}

/// Audio request emitted by the simulation, drained by the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    StartAmbient,
    StopAmbient,
    OneShot(SoundEffect),
}

/// Static hazard; costs a life on contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: OBSTACLE_RADIUS,
        }
    }
}

/// Score pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    /// Cleared on pickup; the entry stays in storage
    pub active: bool,
    /// Spin angle in degrees (visual only)
    pub rotation: f32,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: COLLECTIBLE_RADIUS,
            active: true,
            rotation: 0.0,
        }
    }
}

/// Timed buff pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
    pub active: bool,
    /// Bob phase (visual only)
    pub phase: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            radius: POWERUP_RADIUS,
            kind,
            active: true,
            phase: 0.0,
        }
    }

    /// Vertical draw offset from the bob animation
    pub fn bob_offset(&self) -> f32 {
        self.phase.sin() * 6.0
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing direction (unit length)
    pub dir: Vec2,
    pub radius: f32,
    pub lives: u32,
    pub score: u32,
    /// Seconds left before another obstacle hit counts
    pub invulnerability: f32,
}

impl Player {
    pub fn new(lives: u32) -> Self {
        Self {
            pos: PLAYER_START,
            dir: Vec2::X,
            radius: PLAYER_RADIUS,
            lives,
            score: 0,
            invulnerability: 0.0,
        }
    }
}

/// A timed effect
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Buff {
    pub active: bool,
    /// Seconds left
    pub remaining: f32,
}

impl Buff {
    /// Switch on for `duration`; re-activation restarts the timer
    pub fn activate(&mut self, duration: f32) {
        self.active = true;
        self.remaining = duration;
    }

    /// Count down; switches off once the timer reaches zero
    pub fn tick(&mut self, dt: f32) {
        if self.active {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.active = false;
                self.remaining = 0.0;
            }
        }
    }
}

/// Active player buffs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Buffs {
    pub speed: Buff,
    pub double_score: Buff,
}

impl Buffs {
    pub fn tick(&mut self, dt: f32) {
        self.speed.tick(dt);
        self.double_score.tick(dt);
    }
}

/// The point the player must reach
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub curve: CubicBezier,
    pub motion: PingPong,
    pub pos: Vec2,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            curve: CubicBezier::idle_path(),
            motion: PingPong::default(),
            pos: TARGET_IDLE,
        }
    }
}

impl Target {
    /// Move along the curve by `delta` t-units and refresh the position
    pub fn advance(&mut self, delta: f32) {
        self.motion.step(delta);
        self.pos = self.curve.point_at(self.motion.t);
    }
}

/// Authored entities. Append-only while authoring, scanned linearly while running.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub powerups: Vec<PowerUp>,
}

impl Level {
    /// Whether a body at `pos` with `radius` comes within `clearance` of any entity.
    ///
    /// Inactive pickups still occupy their slot.
    pub fn overlaps(&self, pos: Vec2, radius: f32, clearance: f32) -> bool {
        let hits = |p: Vec2, r: f32| distance(pos, p) < radius + r + clearance;
        self.obstacles.iter().any(|o| hits(o.pos, o.radius))
            || self.collectibles.iter().any(|c| hits(c.pos, c.radius))
            || self.powerups.iter().any(|p| hits(p.pos, p.radius))
    }

    /// Total stored entities, active or not
    pub fn len(&self) -> usize {
        self.obstacles.len() + self.collectibles.len() + self.powerups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.collectibles.clear();
        self.powerups.clear();
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub rules: Rules,
    pub phase: MatchPhase,
    /// Meaningful once `phase == Ended`
    pub player_won: bool,
    /// Whole seconds left on the clock
    pub remaining_time: u32,
    /// Sub-second time feeding the 1 Hz countdown
    pub accumulator: f32,
    pub player: Player,
    pub target: Target,
    pub buffs: Buffs,
    pub level: Level,
    /// Current placement tool
    pub mode: PlaceMode,
    /// Audio requests not yet handed to the audio layer
    #[serde(skip)]
    cues: Vec<AudioCue>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    /// Fresh session in authoring mode
    pub fn new(rules: Rules) -> Self {
        Self {
            phase: MatchPhase::Idle,
            player_won: false,
            remaining_time: rules.total_time,
            accumulator: 0.0,
            player: Player::new(rules.starting_lives),
            target: Target::default(),
            buffs: Buffs::default(),
            level: Level::default(),
            mode: PlaceMode::None,
            cues: Vec::new(),
            rules,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Whether a new entity at `pos` would crowd an existing one, the target,
    /// or the player
    pub fn overlaps_existing(&self, pos: Vec2, radius: f32) -> bool {
        self.level.overlaps(pos, radius, PLACEMENT_CLEARANCE)
            || distance(pos, self.target.pos)
                < radius + TARGET_PLACEMENT_RADIUS + PLACEMENT_CLEARANCE
            || distance(pos, self.player.pos) < radius + self.player.radius + PLACEMENT_CLEARANCE
    }

    pub fn push_cue(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    /// Pending audio requests, oldest first
    pub fn pending_cues(&self) -> &[AudioCue] {
        &self.cues
    }

    /// Take all pending audio requests, oldest first
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    /// Put player, clock, buffs and target back to their run-start values
    pub(crate) fn reset_run(&mut self) {
        self.player = Player::new(self.rules.starting_lives);
        self.buffs = Buffs::default();
        self.remaining_time = self.rules.total_time;
        self.accumulator = 0.0;
        self.player_won = false;
        self.target = Target {
            curve: CubicBezier::run_path(),
            motion: PingPong::default(),
            pos: TARGET_IDLE,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::default();
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.player.lives, 5);
        assert_eq!(state.remaining_time, 120);
        assert!(state.level.is_empty());
        assert!(state.pending_cues().is_empty());
    }

    #[test]
    fn test_buff_expires_at_zero() {
        let mut buff = Buff::default();
        buff.activate(1.0);
        buff.tick(0.5);
        assert!(buff.active);
        buff.tick(0.5);
        assert!(!buff.active);
        assert_eq!(buff.remaining, 0.0);
    }

    #[test]
    fn test_buff_reactivation_resets_timer() {
        let mut buff = Buff::default();
        buff.activate(6.0);
        buff.tick(5.0);
        buff.activate(6.0);
        assert_eq!(buff.remaining, 6.0);
    }

    #[test]
    fn test_level_overlap_counts_inactive_pickups() {
        let mut level = Level::default();
        let mut c = Collectible::new(Vec2::new(300.0, 300.0));
        c.active = false;
        level.collectibles.push(c);
        assert!(level.overlaps(Vec2::new(320.0, 300.0), 10.0, 6.0));
        assert!(!level.overlaps(Vec2::new(400.0, 300.0), 10.0, 6.0));
    }

    #[test]
    fn test_overlaps_player_and_target() {
        let state = GameState::default();
        assert!(state.overlaps_existing(PLAYER_START + Vec2::new(30.0, 0.0), 12.0));
        assert!(state.overlaps_existing(TARGET_IDLE - Vec2::new(30.0, 0.0), 12.0));
        assert!(!state.overlaps_existing(Vec2::new(500.0, 350.0), 12.0));
    }

    #[test]
    fn test_drain_cues_empties_queue() {
        let mut state = GameState::default();
        state.push_cue(AudioCue::StartAmbient);
        state.push_cue(AudioCue::OneShot(SoundEffect::Hit));
        assert_eq!(
            state.drain_cues(),
            vec![AudioCue::StartAmbient, AudioCue::OneShot(SoundEffect::Hit)]
        );
        assert!(state.pending_cues().is_empty());
    }
}
