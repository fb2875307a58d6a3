//! Space Explorer entry point
//!
//! Headless driver: authors a small level through the same click path a
//! windowed frontend would use, runs one match with a steering autopilot,
//! and logs the outcome. Pass a settings JSON path as the first argument to
//! override rules or audio preferences.

use std::path::PathBuf;

use glam::Vec2;

use space_explorer::audio::{LogPlayer, start_audio_thread};
use space_explorer::platform::{FrameClock, window_to_world};
use space_explorer::sim::{
    GameState, PlaceOutcome, TickInput, advance, animate, place_at, restart,
};
use space_explorer::{Scene, Settings};

/// Simulated display refresh (ms per frame)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Keys are held along an axis only when the target is further than this
const STEER_DEADZONE: f32 = 4.0;

/// Window-space clicks: pick a tool from the toolbox, then drop entities
const LAYOUT: &[(f32, f32)] = &[
    (200.0, 650.0), // obstacle tool
    (400.0, 300.0),
    (560.0, 420.0),
    (700.0, 250.0),
    (320.0, 650.0), // collectible tool
    (250.0, 350.0),
    (450.0, 350.0),
    (650.0, 340.0),
    (440.0, 650.0), // speed tool
    (320.0, 420.0),
    (560.0, 650.0), // double-score tool
    (180.0, 300.0),
];

fn main() {
    env_logger::init();
    log::info!("Space Explorer (headless) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let mut state = GameState::new(settings.rules.clone());
    let audio = start_audio_thread(LogPlayer::default(), settings.audio.clone());

    for &(x, y) in LAYOUT {
        let outcome = place_at(&mut state, window_to_world(x, y));
        if outcome == PlaceOutcome::Rejected {
            log::info!("Placement at ({}, {}) rejected", x, y);
        }
    }
    log::info!("Authored {} entities", state.level.len());

    let mut clock = FrameClock::new();
    let mut now_ms = 0.0;
    restart(&mut state);
    clock.reset(now_ms);

    let max_frames = (settings.rules.total_time as usize + 5) * 60;
    for _ in 0..max_frames {
        now_ms += FRAME_MS;
        let dt = clock.tick(now_ms);

        let input = autopilot(&state);
        advance(&mut state, &input, dt);
        animate(&mut state, dt);
        audio.sender.dispatch(state.drain_cues());

        if state.is_ended() {
            break;
        }
    }

    let scene = Scene::capture(&state);
    match &scene.hud.banner {
        Some(banner) => log::info!("{}", banner),
        None => log::warn!("Match did not finish within the frame budget"),
    }
    match serde_json::to_string_pretty(&scene.hud) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize HUD: {}", err),
    }

    for notice in audio.poll_notices() {
        log::warn!("Audio problem: {:?} ({})", notice.cue, notice.message);
    }
    audio.join();
}

/// Hold the arrow keys that point at the target
fn autopilot(state: &GameState) -> TickInput {
    let to_target: Vec2 = state.target.pos - state.player.pos;
    TickInput {
        left: to_target.x < -STEER_DEADZONE,
        right: to_target.x > STEER_DEADZONE,
        up: to_target.y > STEER_DEADZONE,
        down: to_target.y < -STEER_DEADZONE,
    }
}
