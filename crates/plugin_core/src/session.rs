//! Session state machine: one run from category load to result relay.

use shared::{
    domain::{Category, RawParameters, TriviaResponse},
    error::PARAMETER_NOTIFICATION,
    protocol::{BridgeReply, BridgeRequest},
};
use tracing::{debug, warn};

use crate::request::{build_url, validate};
use crate::suggest::{self, Suggestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingCategories,
    Ready,
    AwaitingQuestions,
    Done,
}

/// What the host should do after the core processed one bridge reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CategoriesLoaded { count: usize },
    Completed(TriviaResponse),
    Ignored,
}

/// Outcome of submitting the collected parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Parameters validated; send this to the bridge and await the reply.
    Fetch(BridgeRequest),
    /// Validation failed. Surface the notification; the session is over.
    Rejected { notification: String },
    /// The session was not interactive; nothing happened.
    Ignored,
}

/// Session-scoped state: the current phase and the category list loaded at
/// startup. One instance per run; `Done` is terminal.
pub struct Session {
    base_url: String,
    phase: SessionPhase,
    categories: Vec<Category>,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            phase: SessionPhase::Idle,
            categories: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Begin the session by requesting the category list from the bridge.
    pub fn start(&mut self) -> BridgeRequest {
        self.phase = SessionPhase::AwaitingCategories;
        BridgeRequest::Category
    }

    /// Suggestion list for one input field, backed by the loaded categories.
    pub fn suggestions(&self, field: &str, query: &str) -> Option<Vec<Suggestion>> {
        suggest::suggestions(field, query, &self.categories)
    }

    /// Submit the collected parameters.
    ///
    /// In the interactive phase this validates, builds the request URL, and
    /// moves to awaiting the question payload. A validation failure ends the
    /// session with the fixed notification. Outside the interactive phase
    /// the submission is logged and ignored.
    pub fn submit(&mut self, raw: &RawParameters) -> SubmitOutcome {
        if self.phase != SessionPhase::Ready {
            warn!(phase = ?self.phase, "parameters submitted while not interactive; ignoring");
            return SubmitOutcome::Ignored;
        }

        match validate(raw) {
            Ok(parameters) => {
                let url = build_url(&self.base_url, &parameters);
                debug!(%url, "question request built");
                self.phase = SessionPhase::AwaitingQuestions;
                SubmitOutcome::Fetch(BridgeRequest::Questions { url })
            }
            Err(error) => {
                warn!(%error, "parameter validation failed; ending session");
                self.phase = SessionPhase::Done;
                SubmitOutcome::Rejected {
                    notification: PARAMETER_NOTIFICATION.to_string(),
                }
            }
        }
    }

    /// Feed one bridge reply into the state machine.
    ///
    /// Replies that do not match the awaited state are logged and ignored
    /// without a state change, including everything after `Done`.
    pub fn handle_reply(&mut self, reply: BridgeReply) -> SessionEvent {
        match (self.phase, reply) {
            (SessionPhase::AwaitingCategories, BridgeReply::Category(payload)) => {
                self.categories = payload.into_categories();
                self.phase = SessionPhase::Ready;
                debug!(count = self.categories.len(), "category list loaded");
                SessionEvent::CategoriesLoaded {
                    count: self.categories.len(),
                }
            }
            (SessionPhase::AwaitingQuestions, BridgeReply::Questions(payload)) => {
                self.phase = SessionPhase::Done;
                SessionEvent::Completed(payload.into_response())
            }
            (phase, reply) => {
                warn!(?phase, kind = reply.kind(), "unexpected bridge reply; ignoring");
                SessionEvent::Ignored
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
