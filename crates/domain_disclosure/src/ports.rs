//! Collaborator ports of the disclosure engine
//!
//! The engine never decides where a completed questionnaire goes or what
//! cancelling an application means. Callers plug those in here.
//!
//! # Usage
//!
//! ```rust,ignore
//! let engine = DisclosureEngine::builder(bank)
//!     .completion_sink(Arc::new(ApplicationDraft::new()))
//!     .disqualification_handler(Arc::new(ModalPresenter::new()))
//!     .cancellation_policy(UsageMode::Applicant.cancellation_policy(|_| {}))
//!     .build()?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, DomainPort, SessionId};

use crate::disqualification::DisqualificationNotice;
use crate::output::DisclosureAnswer;

/// Receives the finalized answers of a successfully completed questionnaire
pub trait CompletionSink: DomainPort {
    fn on_complete(&self, session_id: SessionId, answers: &[DisclosureAnswer]);
}

/// Presents the blocking disqualification dialog
pub trait DisqualificationHandler: DomainPort {
    fn on_disqualified(&self, notice: &DisqualificationNotice);
}

/// Context passed to a cancellation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationContext {
    pub session_id: SessionId,
    pub application_id: Option<ApplicationId>,
    /// Id of the group whose answer disqualified the applicant
    pub group_id: u32,
}

/// What the cancellation policy did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationOutcome {
    /// Caller should show the dedicated cancellation outcome screen
    CancellationScreen,
    /// Cancellation was handed to an externally supplied callback
    Delegated,
}

/// Strategy invoked when the applicant chooses to cancel
pub trait CancellationPolicy: DomainPort {
    fn on_cancel(&self, context: &CancellationContext) -> CancellationOutcome;
}

/// Applicant flow: route to the cancellation outcome screen
#[derive(Debug, Clone, Copy, Default)]
pub struct CancellationScreen;

impl DomainPort for CancellationScreen {}

impl CancellationPolicy for CancellationScreen {
    fn on_cancel(&self, context: &CancellationContext) -> CancellationOutcome {
        tracing::info!(session_id = %context.session_id, "Routing to cancellation screen");
        CancellationOutcome::CancellationScreen
    }
}

type CancelCallback = Box<dyn Fn(&CancellationContext) + Send + Sync>;

/// Insured-party flow: delegate to a callback supplied by the caller
pub struct DelegatedCancellation {
    callback: CancelCallback,
}

impl DelegatedCancellation {
    pub fn new(callback: impl Fn(&CancellationContext) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for DelegatedCancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedCancellation").finish_non_exhaustive()
    }
}

impl DomainPort for DelegatedCancellation {}

impl CancellationPolicy for DelegatedCancellation {
    fn on_cancel(&self, context: &CancellationContext) -> CancellationOutcome {
        tracing::info!(session_id = %context.session_id, "Delegating cancellation to caller");
        (self.callback)(context);
        CancellationOutcome::Delegated
    }
}

/// Which flow embeds the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageMode {
    /// New application by the applicant
    #[default]
    Applicant,
    /// Flow run on behalf of an insured party
    Insured,
}

impl UsageMode {
    /// Picks the cancellation strategy for this mode
    ///
    /// `on_insured_cancel` is only used in `Insured` mode.
    pub fn cancellation_policy(
        self,
        on_insured_cancel: impl Fn(&CancellationContext) + Send + Sync + 'static,
    ) -> Arc<dyn CancellationPolicy> {
        match self {
            UsageMode::Applicant => Arc::new(CancellationScreen),
            UsageMode::Insured => Arc::new(DelegatedCancellation::new(on_insured_cancel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn context() -> CancellationContext {
        CancellationContext {
            session_id: SessionId::new(),
            application_id: None,
            group_id: 1,
        }
    }

    #[test]
    fn test_applicant_mode_shows_screen_without_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let policy = UsageMode::Applicant.cancellation_policy(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(policy.on_cancel(&context()), CancellationOutcome::CancellationScreen);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_insured_mode_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let policy = UsageMode::Insured.cancellation_policy(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(policy.on_cancel(&context()), CancellationOutcome::Delegated);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_usage_mode_deserializes_snake_case() {
        let mode: UsageMode = serde_json::from_str("\"insured\"").unwrap();
        assert_eq!(mode, UsageMode::Insured);
    }
}
