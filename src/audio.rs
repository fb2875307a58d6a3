//! Audio cue dispatch
//!
//! The simulation only queues `AudioCue`s. The frontend drains them each frame
//! and hands them to an `AudioSender`; a dedicated thread plays them in order
//! through a `CuePlayer`. A player may block (e.g. waiting for a clip to end)
//! without stalling the frame loop. Failures are logged and reported back as
//! `AudioNotice`s; they never touch simulation state.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::Result;

use crate::settings::AudioSettings;
use crate::sim::{AudioCue, SoundEffect};

/// Output device abstraction
pub trait CuePlayer: Send {
    fn start_ambient(&mut self, volume: f32) -> Result<()>;
    fn stop_ambient(&mut self) -> Result<()>;
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<()>;
}

/// Player that only logs; used headless and when no device is available
#[derive(Debug, Default)]
pub struct LogPlayer {
    ambient_on: bool,
}

impl CuePlayer for LogPlayer {
    fn start_ambient(&mut self, volume: f32) -> Result<()> {
        self.ambient_on = true;
        log::info!("[audio] ambient loop on (volume {:.2})", volume);
        Ok(())
    }

    fn stop_ambient(&mut self) -> Result<()> {
        if self.ambient_on {
            log::info!("[audio] ambient loop off");
        }
        self.ambient_on = false;
        Ok(())
    }

    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<()> {
        log::info!("[audio] play {:?} (volume {:.2})", effect, volume);
        Ok(())
    }
}

/// Commands for the audio thread
#[derive(Debug, Clone)]
pub enum AudioCommand {
    Cue(AudioCue),
    SetSettings(AudioSettings),
    Shutdown,
}

/// A cue the player failed to perform
#[derive(Debug, Clone, PartialEq)]
pub struct AudioNotice {
    pub cue: AudioCue,
    pub message: String,
}

/// Cloneable handle to the audio thread. Sends never block and never fail
/// loudly: if the thread is gone the cue is dropped.
#[derive(Clone)]
pub struct AudioSender {
    tx: Sender<AudioCommand>,
}

impl AudioSender {
    fn send(&self, command: AudioCommand) {
        let _ = self.tx.send(command);
    }

    pub fn cue(&self, cue: AudioCue) {
        self.send(AudioCommand::Cue(cue));
    }

    /// Forward a frame's worth of cues, preserving order
    pub fn dispatch<I: IntoIterator<Item = AudioCue>>(&self, cues: I) {
        for cue in cues {
            self.cue(cue);
        }
    }

    pub fn set_settings(&self, settings: AudioSettings) {
        self.send(AudioCommand::SetSettings(settings));
    }

    pub fn shutdown(&self) {
        self.send(AudioCommand::Shutdown);
    }
}

/// Running audio thread: command handle, failure notices, join handle
pub struct AudioThread {
    pub sender: AudioSender,
    pub notices: Receiver<AudioNotice>,
    pub handle: Option<JoinHandle<()>>,
}

impl AudioThread {
    /// Ask the thread to stop after draining queued cues, and wait for it
    pub fn join(mut self) {
        self.sender.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Audio thread panicked");
            }
        }
    }

    /// Failure notices gathered so far (non-blocking)
    pub fn poll_notices(&self) -> Vec<AudioNotice> {
        self.notices.try_iter().collect()
    }
}

/// Spawn the audio thread around `player`
pub fn start_audio_thread<P: CuePlayer + 'static>(player: P, settings: AudioSettings) -> AudioThread {
    let (tx, rx) = mpsc::channel::<AudioCommand>();
    let (notice_tx, notice_rx) = mpsc::channel::<AudioNotice>();
    let handle = thread::Builder::new()
        .name("audio-thread".to_string())
        .spawn(move || run_audio_loop(rx, notice_tx, player, settings));
    let handle = match handle {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("Failed to spawn audio thread ({}); audio disabled", err);
            None
        }
    };
    AudioThread {
        sender: AudioSender { tx },
        notices: notice_rx,
        handle,
    }
}

fn run_audio_loop<P: CuePlayer>(
    rx: Receiver<AudioCommand>,
    notices: Sender<AudioNotice>,
    mut player: P,
    mut settings: AudioSettings,
) {
    while let Ok(command) = rx.recv() {
        match command {
            AudioCommand::Cue(cue) => {
                if let Err(err) = perform(&mut player, &settings, cue) {
                    log::warn!("Audio cue {:?} failed: {:#}", cue, err);
                    let _ = notices.send(AudioNotice {
                        cue,
                        message: format!("{:#}", err),
                    });
                }
            }
            AudioCommand::SetSettings(new_settings) => settings = new_settings,
            AudioCommand::Shutdown => break,
        }
    }
}

fn perform<P: CuePlayer>(player: &mut P, settings: &AudioSettings, cue: AudioCue) -> Result<()> {
    match cue {
        AudioCue::StartAmbient => {
            let volume = settings.effective_music_volume();
            if volume > 0.0 {
                player.start_ambient(volume)?;
            }
        }
        // Always honored, even when muted, so a loop never outlives its match
        AudioCue::StopAmbient => player.stop_ambient()?,
        AudioCue::OneShot(effect) => {
            let volume = settings.effective_sfx_volume();
            if volume > 0.0 {
                player.play(effect, volume)?;
            }
        }
    }
    Ok(())
}
