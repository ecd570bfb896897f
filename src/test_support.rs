//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::navigation::NavigationTree;
use crate::core::speech::{Speaker, Utterance};
use crate::core::state::App;

/// Creates a test App over the university menu, starting at home.
pub fn test_app() -> App {
    App::new(NavigationTree::university())
}

/// Shared log of what a [`RecordingSpeaker`] was asked to do.
#[derive(Debug, Default)]
pub struct SpeechLog {
    pub spoken: Vec<String>,
    pub cancels: usize,
}

/// A speaker that records utterances instead of producing audio.
#[derive(Clone, Default)]
pub struct RecordingSpeaker {
    pub log: Rc<RefCell<SpeechLog>>,
}

impl RecordingSpeaker {
    /// A speaker plus a handle to its log, for asserting after the speaker is moved.
    pub fn new() -> (Self, Rc<RefCell<SpeechLog>>) {
        let speaker = Self::default();
        let log = Rc::clone(&speaker.log);
        (speaker, log)
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, utterance: &Utterance) {
        self.log.borrow_mut().spoken.push(utterance.text.clone());
    }

    fn cancel(&mut self) {
        self.log.borrow_mut().cancels += 1;
    }
}
