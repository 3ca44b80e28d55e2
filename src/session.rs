//! Session state machine
//!
//! Top-level mode sequencing (configuration, optional pre-game question,
//! play) plus the in-play pause/question-interrupt cycle. Pause is never a
//! stored flag: it is computed from "is a fetch pending or a question
//! displayed", so there is exactly one source of truth. `set_question` and
//! `clear_question` (via [`Session::poll`] and [`Session::answer`]) are the
//! only two mutators of the question slot.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::provider::{QuestionService, QuestionSource};
use crate::question::Question;

/// Immutable per-session configuration, produced once by the setup step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub language: Language,
    pub prompt: String,
    pub questions_enabled: bool,
}

/// Top-level phase of play; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Initial state, waiting for the setup step
    Configuring,
    /// Fetching the pre-game question
    LoadingQuestion,
    /// Pre-game question displayed, waiting for the correct answer
    AwaitingPreGameQuestion,
    /// Simulation running (terminal; interrupts are a sub-state, not a
    /// transition out)
    Playing,
}

pub struct Session {
    mode: SessionMode,
    config: Option<SessionConfig>,
    service: QuestionService,
    /// The single question slot; at most one question pending or displayed
    question: Option<Question>,
    fetch_pending: bool,
}

impl Session {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            mode: SessionMode::Configuring,
            config: None,
            service: QuestionService::new(source),
            question: None,
            fetch_pending: false,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    /// The currently displayed question, if any
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Derived pause state: true while a question is being fetched or shown
    pub fn is_paused(&self) -> bool {
        self.fetch_pending || self.question.is_some()
    }

    /// True when the simulation should advance this frame
    pub fn simulating(&self) -> bool {
        self.mode == SessionMode::Playing && !self.is_paused()
    }

    /// Submit the setup-step configuration
    ///
    /// Questions disabled goes straight to `Playing` with no fetch; enabled
    /// starts the pre-game fetch and moves to `LoadingQuestion`.
    pub fn submit_config(&mut self, config: SessionConfig) {
        if self.mode != SessionMode::Configuring {
            log::warn!("config submitted outside Configuring, ignored");
            return;
        }
        if config.questions_enabled {
            self.mode = SessionMode::LoadingQuestion;
            self.fetch_pending = true;
            self.service.request(&config.prompt, config.language);
        } else {
            self.mode = SessionMode::Playing;
        }
        self.config = Some(config);
    }

    /// Request an in-play question interrupt (from a catch event)
    ///
    /// Ignored unless playing with questions enabled and the question slot
    /// is completely idle - at most one fetch is ever in flight.
    pub fn request_interrupt(&mut self) {
        if self.mode != SessionMode::Playing {
            return;
        }
        if self.fetch_pending || self.question.is_some() {
            return;
        }
        let Some(config) = &self.config else {
            return;
        };
        if !config.questions_enabled {
            return;
        }
        self.fetch_pending = true;
        self.service.request(&config.prompt, config.language);
    }

    /// Drain the provider channel; call once per frame
    ///
    /// A resolved question fills the slot and, during the pre-game fetch,
    /// advances to `AwaitingPreGameQuestion`. Results arriving with no fetch
    /// pending (e.g. after a reset) are dropped.
    pub fn poll(&mut self) {
        while let Some(question) = self.service.try_recv() {
            if !self.fetch_pending {
                log::debug!("dropping stale question result");
                continue;
            }
            self.fetch_pending = false;
            self.question = Some(question);
            if self.mode == SessionMode::LoadingQuestion {
                self.mode = SessionMode::AwaitingPreGameQuestion;
            }
        }
    }

    /// Submit an answer to the displayed question
    ///
    /// Correct clears the question (resuming on the next frame) and, for the
    /// pre-game question, enters `Playing`. Wrong answers change nothing -
    /// the player retries the same question indefinitely.
    pub fn answer(&mut self, answer: &str) -> bool {
        let Some(question) = &self.question else {
            return false;
        };
        if !question.is_correct(answer) {
            return false;
        }
        self.question = None;
        if self.mode == SessionMode::AwaitingPreGameQuestion {
            self.mode = SessionMode::Playing;
        }
        true
    }
}
