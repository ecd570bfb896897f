//! # Screen Reader
//!
//! Speech is an injected capability. Core code decides *what* to say and
//! returns it as an effect; a [`Speaker`] implementation decides *how*.
//!
//! - [`CommandSpeaker`]: pipes text to an external TTS program (`espeak-ng` by default)
//! - [`SilentSpeaker`]: logs only, used when no TTS program is configured

use log::{debug, info, warn};
use std::path::Path;
use std::process::{Child, Command, Stdio};

pub const ACTIVATION_MESSAGE: &str =
    "Screen reader activated. Move the selection over any element to hear it.";

/// Announcements this long or longer are skipped.
pub const MAX_ANNOUNCEMENT_CHARS: usize = 300;

// espeak-ng defaults: words per minute, pitch 0-99, amplitude 0-200
const ESPEAK_DEFAULT_SPEED: f32 = 175.0;
const ESPEAK_DEFAULT_PITCH: f32 = 50.0;
const ESPEAK_DEFAULT_AMPLITUDE: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: "en-IN",
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Build an utterance for `text`, or `None` if it should not be read out.
pub fn announcement(text: &str) -> Option<Utterance> {
    let text = text.trim();
    if text.is_empty() || text.chars().count() >= MAX_ANNOUNCEMENT_CHARS {
        return None;
    }
    Some(Utterance::new(text))
}

pub trait Speaker {
    /// Speak `utterance`, interrupting anything still being spoken.
    fn speak(&mut self, utterance: &Utterance);

    /// Stop speaking.
    fn cancel(&mut self);
}

pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, utterance: &Utterance) {
        debug!("(silent) speak: {}", utterance.text);
    }

    fn cancel(&mut self) {}
}

/// Speaks through an external program: `<program> <args...> <text>`.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
    failed: bool,
}

impl CommandSpeaker {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            child: None,
            failed: false,
        }
    }
}

impl CommandSpeaker {
    fn is_espeak(&self) -> bool {
        Path::new(&self.program)
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("espeak"))
    }

    /// Arguments for one utterance: the configured args, then espeak voice
    /// flags derived from the utterance for any flag not already configured.
    fn command_args(&self, utterance: &Utterance) -> Vec<String> {
        let mut args = self.args.clone();
        if !self.is_espeak() {
            return args;
        }
        let derived = [
            ("-v", utterance.lang.to_lowercase()),
            ("-s", scaled(ESPEAK_DEFAULT_SPEED, utterance.rate).to_string()),
            ("-p", scaled(ESPEAK_DEFAULT_PITCH, utterance.pitch).to_string()),
            ("-a", scaled(ESPEAK_DEFAULT_AMPLITUDE, utterance.volume).to_string()),
        ];
        for (flag, value) in derived {
            if !self.args.iter().any(|a| a == flag) {
                args.push(flag.to_string());
                args.push(value);
            }
        }
        args
    }
}

fn scaled(base: f32, factor: f32) -> u32 {
    (base * factor).round().max(0.0) as u32
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, utterance: &Utterance) {
        if self.failed {
            return;
        }
        self.cancel();
        let spawned = Command::new(&self.program)
            .args(self.command_args(utterance))
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                debug!("Speaking via {} (pid {})", self.program, child.id());
                self.child = Some(child);
            }
            Err(e) => {
                // Stay quiet after the first failure
                warn!("Failed to start speech program '{}': {}", self.program, e);
                self.failed = true;
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Pick a speaker for the configured program. An empty program means silence.
pub fn build_speaker(program: &str, args: &[String]) -> Box<dyn Speaker> {
    if program.trim().is_empty() {
        info!("No speech program configured, screen reader will be silent");
        Box::new(SilentSpeaker)
    } else {
        Box::new(CommandSpeaker::new(program.to_string(), args.to_vec()))
    }
}
