//! Medical Disclosure Domain
//!
//! This crate implements the medical-disclosure questionnaire that an
//! applicant answers before a policy can be issued. Each question group is
//! either a single yes/no question or a checklist of conditions; a
//! disqualifying answer declines the applicant.
//!
//! # Session Lifecycle
//!
//! ```text
//! InProgress -> (Disqualified -> InProgress)* -> Completed
//!                     |
//!                     +-> Cancelled
//! ```

pub mod answer;
pub mod question;
pub mod bank;
pub mod store;
pub mod evaluator;
pub mod navigation;
pub mod disqualification;
pub mod ports;
pub mod output;
pub mod events;
pub mod settings;
pub mod engine;
pub mod scheduler;
pub mod error;

pub use answer::{Answer, AnswerInput};
pub use question::{DetailStyle, GroupKind, GroupResponse, HeadSegment, QuestionGroup, QuestionItem, SegmentKind};
pub use bank::QuestionBank;
pub use store::QuestionGroupStore;
pub use evaluator::Verdict;
pub use navigation::{Navigator, Step};
pub use disqualification::{DisqualificationChoice, DisqualificationNotice, Resolution, DISQUALIFICATION_MESSAGE};
pub use ports::{
    CancellationContext, CancellationOutcome, CancellationPolicy, CancellationScreen, CompletionSink,
    DelegatedCancellation, DisqualificationHandler, UsageMode,
};
pub use output::DisclosureAnswer;
pub use events::DisclosureEvent;
pub use settings::{ChecklistPolicy, EngineSettings};
pub use engine::{
    DisclosureEngine, DisclosureEngineBuilder, PendingEvaluation, Progress, QuestionnaireState, Settlement,
    Transition,
};
pub use scheduler::DeferredEvaluator;
pub use error::DisclosureError;
