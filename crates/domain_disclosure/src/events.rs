//! Domain events for a disclosure session
//!
//! Events record every significant step of a questionnaire session. They
//! are used for:
//! - Audit trails of what the applicant declared
//! - Feeding analytics on where applicants drop out

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::SessionId;

use crate::answer::AnswerInput;
use crate::ports::CancellationOutcome;

/// Domain events emitted by the disclosure engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisclosureEvent {
    /// Session created from a question bank
    QuestionnaireStarted {
        session_id: SessionId,
        group_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// An answer was applied to a group (before evaluation)
    AnswerApplied {
        session_id: SessionId,
        group_id: u32,
        input: AnswerInput,
        timestamp: DateTime<Utc>,
    },

    /// A group was answered without disqualification
    GroupCompleted {
        session_id: SessionId,
        group_id: u32,
        timestamp: DateTime<Utc>,
    },

    /// A group's answer declined the applicant
    Disqualified {
        session_id: SessionId,
        group_id: u32,
        timestamp: DateTime<Utc>,
    },

    /// The applicant closed the disqualification dialog to revise
    ReturnedToRevise {
        session_id: SessionId,
        group_id: u32,
        timestamp: DateTime<Utc>,
    },

    /// The applicant cancelled the application
    ApplicationCancelled {
        session_id: SessionId,
        group_id: u32,
        outcome: CancellationOutcome,
        timestamp: DateTime<Utc>,
    },

    /// All groups answered; payload sent to the completion sink
    QuestionnaireCompleted {
        session_id: SessionId,
        answer_count: usize,
        timestamp: DateTime<Utc>,
    },
}

impl DisclosureEvent {
    /// Returns the session this event belongs to
    pub fn session_id(&self) -> SessionId {
        match self {
            DisclosureEvent::QuestionnaireStarted { session_id, .. }
            | DisclosureEvent::AnswerApplied { session_id, .. }
            | DisclosureEvent::GroupCompleted { session_id, .. }
            | DisclosureEvent::Disqualified { session_id, .. }
            | DisclosureEvent::ReturnedToRevise { session_id, .. }
            | DisclosureEvent::ApplicationCancelled { session_id, .. }
            | DisclosureEvent::QuestionnaireCompleted { session_id, .. } => *session_id,
        }
    }

    /// Returns the event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DisclosureEvent::QuestionnaireStarted { timestamp, .. }
            | DisclosureEvent::AnswerApplied { timestamp, .. }
            | DisclosureEvent::GroupCompleted { timestamp, .. }
            | DisclosureEvent::Disqualified { timestamp, .. }
            | DisclosureEvent::ReturnedToRevise { timestamp, .. }
            | DisclosureEvent::ApplicationCancelled { timestamp, .. }
            | DisclosureEvent::QuestionnaireCompleted { timestamp, .. } => *timestamp,
        }
    }

    /// Returns a short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            DisclosureEvent::QuestionnaireStarted { .. } => "QuestionnaireStarted",
            DisclosureEvent::AnswerApplied { .. } => "AnswerApplied",
            DisclosureEvent::GroupCompleted { .. } => "GroupCompleted",
            DisclosureEvent::Disqualified { .. } => "Disqualified",
            DisclosureEvent::ReturnedToRevise { .. } => "ReturnedToRevise",
            DisclosureEvent::ApplicationCancelled { .. } => "ApplicationCancelled",
            DisclosureEvent::QuestionnaireCompleted { .. } => "QuestionnaireCompleted",
        }
    }
}
