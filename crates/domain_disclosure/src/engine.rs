//! Disclosure questionnaire engine
//!
//! Walks an applicant through an ordered question bank. Each answer is
//! applied to the store immediately and evaluated later, when the caller
//! settles the returned [`PendingEvaluation`]. Evaluation either advances,
//! stays on a revisited group, opens the disqualification dialog, or
//! completes the questionnaire.
//!
//! # State machine
//!
//! ```text
//! InProgress(0) ──answer/settle──▶ InProgress(n+1) ──...──▶ Completed
//!       │                                ▲
//!       └──disqualifying answer──▶ Disqualified(n) ──return──┘
//!                                        │
//!                                        └──cancel──▶ Cancelled
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use core_kernel::{ApplicationId, SessionId};

use crate::answer::AnswerInput;
use crate::bank::QuestionBank;
use crate::disqualification::{DisqualificationChoice, DisqualificationNotice, Resolution};
use crate::error::DisclosureError;
use crate::evaluator::{evaluate, Verdict};
use crate::events::DisclosureEvent;
use crate::navigation::{Navigator, Step};
use crate::output::collect_answers;
use crate::ports::{CancellationContext, CancellationPolicy, CompletionSink, DisqualificationHandler};
use crate::question::QuestionGroup;
use crate::settings::EngineSettings;
use crate::store::QuestionGroupStore;

/// Externally visible state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionnaireState {
    InProgress { current: usize },
    /// The disqualification dialog is open for this group
    Disqualified { group_index: usize },
    Completed,
    /// The applicant cancelled from the disqualification dialog
    Cancelled,
}

impl QuestionnaireState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestionnaireState::Completed | QuestionnaireState::Cancelled)
    }
}

impl fmt::Display for QuestionnaireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionnaireState::InProgress { current } => write!(f, "in progress at question {}", current + 1),
            QuestionnaireState::Disqualified { group_index } => {
                write!(f, "disqualified at question {}", group_index + 1)
            }
            QuestionnaireState::Completed => write!(f, "completed"),
            QuestionnaireState::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Answering,
    Disqualified { group_index: usize },
    Completed,
    Cancelled,
}

/// Ticket for an answer that has been applied but not yet evaluated
///
/// Only the most recent ticket can be settled; a newer answer supersedes
/// it. Navigation is refused while a ticket is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEvaluation {
    generation: u64,
    group_index: usize,
}

impl PendingEvaluation {
    pub fn group_index(&self) -> usize {
        self.group_index
    }
}

/// Result of evaluating an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    /// A revisited group was changed; the session stays on it
    Stayed { index: usize },
    Disqualified { index: usize },
    Completed,
}

/// Result of settling a [`PendingEvaluation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied(Transition),
    /// The ticket was replaced by a newer answer or already settled
    Superseded,
}

/// Answered versus total groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub current: usize,
    pub furthest: usize,
}

impl Progress {
    /// Whole-number percentage of groups answered
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered * 100) / self.total) as u8
    }
}

pub struct DisclosureEngine {
    session_id: SessionId,
    application_id: Option<ApplicationId>,
    store: QuestionGroupStore,
    navigator: Navigator,
    settings: EngineSettings,
    phase: Phase,
    pending: Option<PendingEvaluation>,
    generation: u64,
    completion_sink: Arc<dyn CompletionSink>,
    disqualification_handler: Arc<dyn DisqualificationHandler>,
    cancellation_policy: Arc<dyn CancellationPolicy>,
    events: Vec<DisclosureEvent>,
}

impl fmt::Debug for DisclosureEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureEngine")
            .field("session_id", &self.session_id)
            .field("state", &self.state())
            .field("furthest", &self.navigator.furthest())
            .field("completed", self.navigator.completed())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl DisclosureEngine {
    pub fn builder(bank: QuestionBank) -> DisclosureEngineBuilder {
        DisclosureEngineBuilder::new(bank)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn application_id(&self) -> Option<ApplicationId> {
        self.application_id
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn state(&self) -> QuestionnaireState {
        match self.phase {
            Phase::Answering => QuestionnaireState::InProgress {
                current: self.navigator.current(),
            },
            Phase::Disqualified { group_index } => QuestionnaireState::Disqualified { group_index },
            Phase::Completed => QuestionnaireState::Completed,
            Phase::Cancelled => QuestionnaireState::Cancelled,
        }
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn furthest_index(&self) -> usize {
        self.navigator.furthest()
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        self.navigator.completed()
    }

    pub fn current_group(&self) -> &QuestionGroup {
        self.store.group(self.navigator.current())
    }

    pub fn group(&self, index: usize) -> &QuestionGroup {
        self.store.group(index)
    }

    pub fn groups(&self) -> &[QuestionGroup] {
        self.store.groups()
    }

    pub fn pending(&self) -> Option<PendingEvaluation> {
        self.pending
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.navigator.completed().len(),
            total: self.store.len(),
            current: self.navigator.current(),
            furthest: self.navigator.furthest(),
        }
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<DisclosureEvent> {
        std::mem::take(&mut self.events)
    }

    /// Applies an answer to the current group and arms its evaluation
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn answer(&mut self, input: AnswerInput) -> Result<PendingEvaluation, DisclosureError> {
        self.require_answering("answer")?;

        let group_index = self.navigator.current();
        self.store.apply_answer(group_index, input);
        let group_id = self.store.group(group_index).id;
        debug!(group_id, ?input, "Answer applied");

        if let Some(previous) = self.pending {
            debug!(generation = previous.generation, "Superseding pending evaluation");
        }
        self.generation += 1;
        let ticket = PendingEvaluation {
            generation: self.generation,
            group_index,
        };
        self.pending = Some(ticket);

        self.events.push(DisclosureEvent::AnswerApplied {
            session_id: self.session_id,
            group_id,
            input,
            timestamp: Utc::now(),
        });
        Ok(ticket)
    }

    /// Evaluates a previously applied answer
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn settle(&mut self, ticket: PendingEvaluation) -> Result<Settlement, DisclosureError> {
        if self.pending != Some(ticket) {
            debug!(generation = ticket.generation, "Ignoring superseded evaluation");
            return Ok(Settlement::Superseded);
        }
        self.pending = None;
        Ok(Settlement::Applied(self.run_evaluation(ticket.group_index)))
    }

    /// Applies and evaluates an answer without the display delay
    pub fn answer_now(&mut self, input: AnswerInput) -> Result<Transition, DisclosureError> {
        let ticket = self.answer(input)?;
        self.pending = None;
        Ok(self.run_evaluation(ticket.group_index))
    }

    /// Both controls stay hidden while an answer awaits evaluation
    pub fn can_go_previous(&self) -> bool {
        self.is_idle() && self.navigator.can_go_previous()
    }

    /// Also hidden while the current group holds a disqualifying answer
    pub fn can_go_next(&self) -> bool {
        self.is_idle()
            && self.current_group_accepted()
            && self.navigator.can_go_next(self.current_group().main_answer())
    }

    /// Moves back one group; does not touch furthest or completed groups
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn go_previous(&mut self) -> Result<usize, DisclosureError> {
        self.require_answering("go to the previous question")?;
        self.require_no_pending()?;
        let index = self.navigator.go_previous()?;
        debug!(index, "Moved to previous question");
        Ok(index)
    }

    /// Moves forward one group from a revisited group answered "no"
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn go_next(&mut self) -> Result<usize, DisclosureError> {
        self.require_answering("go to the next question")?;
        self.require_no_pending()?;
        if !self.current_group_accepted() {
            return Err(DisclosureError::NavigationUnavailable(format!(
                "question {} holds a disqualifying answer",
                self.navigator.current() + 1
            )));
        }
        let main_answer = self.current_group().main_answer();
        let index = self.navigator.go_next(main_answer)?;
        debug!(index, "Moved to next question");
        Ok(index)
    }

    /// Handles the applicant's choice in the disqualification dialog
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn resolve_disqualification(
        &mut self,
        choice: DisqualificationChoice,
    ) -> Result<Resolution, DisclosureError> {
        let Phase::Disqualified { group_index } = self.phase else {
            return Err(DisclosureError::invalid_state("resolve disqualification", self.state()));
        };
        let group_id = self.store.group(group_index).id;

        match choice {
            DisqualificationChoice::ReturnToRevise => {
                self.phase = Phase::Answering;
                debug!(group_id, "Returned to revise answer");
                self.events.push(DisclosureEvent::ReturnedToRevise {
                    session_id: self.session_id,
                    group_id,
                    timestamp: Utc::now(),
                });
                Ok(Resolution::Returned { index: group_index })
            }
            DisqualificationChoice::CancelApplication => {
                let context = CancellationContext {
                    session_id: self.session_id,
                    application_id: self.application_id,
                    group_id,
                };
                let outcome = self.cancellation_policy.on_cancel(&context);
                self.phase = Phase::Cancelled;
                info!(group_id, ?outcome, "Application cancelled");
                self.events.push(DisclosureEvent::ApplicationCancelled {
                    session_id: self.session_id,
                    group_id,
                    outcome,
                    timestamp: Utc::now(),
                });
                Ok(Resolution::Cancelled(outcome))
            }
        }
    }

    fn run_evaluation(&mut self, group_index: usize) -> Transition {
        let group = self.store.group(group_index);
        let group_id = group.id;

        if evaluate(group, self.settings.checklist_policy) == Verdict::Disqualified {
            return self.disqualify(group_index, group_id);
        }

        self.events.push(DisclosureEvent::GroupCompleted {
            session_id: self.session_id,
            group_id,
            timestamp: Utc::now(),
        });

        match self.navigator.record_completion(group_index) {
            Step::Advance { to } => {
                debug!(group_id, to, "Advanced to next question");
                Transition::Advanced { from: group_index, to }
            }
            Step::Stay { at } => {
                debug!(group_id, "Revised answer accepted, staying on question");
                Transition::Stayed { index: at }
            }
            Step::Finish => self.finish(),
        }
    }

    fn disqualify(&mut self, group_index: usize, group_id: u32) -> Transition {
        self.phase = Phase::Disqualified { group_index };
        warn!(group_id, "Applicant disqualified");
        self.events.push(DisclosureEvent::Disqualified {
            session_id: self.session_id,
            group_id,
            timestamp: Utc::now(),
        });

        let notice = DisqualificationNotice::new(self.session_id, group_id, group_index);
        self.disqualification_handler.on_disqualified(&notice);
        Transition::Disqualified { index: group_index }
    }

    fn finish(&mut self) -> Transition {
        let answers = collect_answers(self.store.groups());
        self.phase = Phase::Completed;
        info!(answer_count = answers.len(), "Questionnaire completed");

        self.completion_sink.on_complete(self.session_id, &answers);
        self.events.push(DisclosureEvent::QuestionnaireCompleted {
            session_id: self.session_id,
            answer_count: answers.len(),
            timestamp: Utc::now(),
        });
        Transition::Completed
    }

    fn current_group_accepted(&self) -> bool {
        evaluate(self.current_group(), self.settings.checklist_policy) == Verdict::Accepted
    }

    fn is_idle(&self) -> bool {
        self.phase == Phase::Answering && self.pending.is_none()
    }

    /// An applied answer must be evaluated before the applicant can leave its group
    fn require_no_pending(&self) -> Result<(), DisclosureError> {
        match self.pending {
            Some(ticket) => Err(DisclosureError::NavigationUnavailable(format!(
                "answer to question {} is awaiting evaluation",
                ticket.group_index + 1
            ))),
            None => Ok(()),
        }
    }

    fn require_answering(&self, operation: &str) -> Result<(), DisclosureError> {
        if self.phase == Phase::Answering {
            Ok(())
        } else {
            Err(DisclosureError::invalid_state(operation, self.state()))
        }
    }
}

/// Builder for [`DisclosureEngine`]
pub struct DisclosureEngineBuilder {
    bank: QuestionBank,
    settings: EngineSettings,
    session_id: Option<SessionId>,
    application_id: Option<ApplicationId>,
    completion_sink: Option<Arc<dyn CompletionSink>>,
    disqualification_handler: Option<Arc<dyn DisqualificationHandler>>,
    cancellation_policy: Option<Arc<dyn CancellationPolicy>>,
}

impl DisclosureEngineBuilder {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            settings: EngineSettings::default(),
            session_id: None,
            application_id: None,
            completion_sink: None,
            disqualification_handler: None,
            cancellation_policy: None,
        }
    }

    pub fn settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    pub fn completion_sink(mut self, sink: Arc<dyn CompletionSink>) -> Self {
        self.completion_sink = Some(sink);
        self
    }

    pub fn disqualification_handler(mut self, handler: Arc<dyn DisqualificationHandler>) -> Self {
        self.disqualification_handler = Some(handler);
        self
    }

    pub fn cancellation_policy(mut self, policy: Arc<dyn CancellationPolicy>) -> Self {
        self.cancellation_policy = Some(policy);
        self
    }

    /// Builds the engine, positioned at the first group
    pub fn build(self) -> Result<DisclosureEngine, DisclosureError> {
        self.bank.validate()?;

        let completion_sink = self
            .completion_sink
            .ok_or(DisclosureError::MissingCollaborator("completion sink"))?;
        let disqualification_handler = self
            .disqualification_handler
            .ok_or(DisclosureError::MissingCollaborator("disqualification handler"))?;
        let cancellation_policy = self
            .cancellation_policy
            .ok_or(DisclosureError::MissingCollaborator("cancellation policy"))?;

        let session_id = self.session_id.unwrap_or_else(SessionId::new_v7);
        let group_count = self.bank.len();
        info!(%session_id, group_count, "Starting disclosure questionnaire");

        Ok(DisclosureEngine {
            session_id,
            application_id: self.application_id,
            navigator: Navigator::new(group_count),
            store: QuestionGroupStore::new(self.bank),
            settings: self.settings,
            phase: Phase::Answering,
            pending: None,
            generation: 0,
            completion_sink,
            disqualification_handler,
            cancellation_policy,
            events: vec![DisclosureEvent::QuestionnaireStarted {
                session_id,
                group_count,
                timestamp: Utc::now(),
            }],
        })
    }
}
