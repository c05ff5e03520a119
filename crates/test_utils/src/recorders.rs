//! Recording Collaborator Doubles
//!
//! Port implementations that record every call, plus a harness that wires
//! them into an engine.

use std::sync::{Arc, Mutex};

use core_kernel::{DomainPort, SessionId};
use domain_disclosure::{
    CancellationContext, CancellationOutcome, CancellationPolicy, CompletionSink, DisclosureAnswer,
    DisclosureEngine, DisqualificationHandler, DisqualificationNotice, EngineSettings, QuestionBank,
};

/// Completion sink that keeps every payload it receives
#[derive(Debug, Default)]
pub struct RecordingCompletionSink {
    completions: Mutex<Vec<(SessionId, Vec<DisclosureAnswer>)>>,
}

impl RecordingCompletionSink {
    pub fn completions(&self) -> Vec<(SessionId, Vec<DisclosureAnswer>)> {
        self.completions.lock().unwrap().clone()
    }

    /// Answers of the most recent completion
    pub fn last_answers(&self) -> Option<Vec<DisclosureAnswer>> {
        self.completions.lock().unwrap().last().map(|(_, answers)| answers.clone())
    }

    pub fn count(&self) -> usize {
        self.completions.lock().unwrap().len()
    }
}

impl DomainPort for RecordingCompletionSink {}

impl CompletionSink for RecordingCompletionSink {
    fn on_complete(&self, session_id: SessionId, answers: &[DisclosureAnswer]) {
        self.completions.lock().unwrap().push((session_id, answers.to_vec()));
    }
}

/// Disqualification handler that keeps every notice it receives
#[derive(Debug, Default)]
pub struct RecordingDisqualificationHandler {
    notices: Mutex<Vec<DisqualificationNotice>>,
}

impl RecordingDisqualificationHandler {
    pub fn notices(&self) -> Vec<DisqualificationNotice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl DomainPort for RecordingDisqualificationHandler {}

impl DisqualificationHandler for RecordingDisqualificationHandler {
    fn on_disqualified(&self, notice: &DisqualificationNotice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// Cancellation policy that records contexts and returns a fixed outcome
#[derive(Debug)]
pub struct RecordingCancellation {
    outcome: CancellationOutcome,
    contexts: Mutex<Vec<CancellationContext>>,
}

impl RecordingCancellation {
    pub fn new(outcome: CancellationOutcome) -> Self {
        Self {
            outcome,
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn contexts(&self) -> Vec<CancellationContext> {
        self.contexts.lock().unwrap().clone()
    }
}

impl Default for RecordingCancellation {
    fn default() -> Self {
        Self::new(CancellationOutcome::CancellationScreen)
    }
}

impl DomainPort for RecordingCancellation {}

impl CancellationPolicy for RecordingCancellation {
    fn on_cancel(&self, context: &CancellationContext) -> CancellationOutcome {
        self.contexts.lock().unwrap().push(context.clone());
        self.outcome
    }
}

/// The recording doubles of a harness, detached from its engine
#[derive(Clone)]
pub struct Recorders {
    pub sink: Arc<RecordingCompletionSink>,
    pub handler: Arc<RecordingDisqualificationHandler>,
    pub cancellation: Arc<RecordingCancellation>,
}

/// An engine wired to recording doubles
pub struct EngineHarness {
    pub engine: DisclosureEngine,
    pub sink: Arc<RecordingCompletionSink>,
    pub handler: Arc<RecordingDisqualificationHandler>,
    pub cancellation: Arc<RecordingCancellation>,
}

impl EngineHarness {
    /// Builds a harness with default settings
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_settings(bank, EngineSettings::default())
    }

    pub fn with_settings(bank: QuestionBank, settings: EngineSettings) -> Self {
        let sink = Arc::new(RecordingCompletionSink::default());
        let handler = Arc::new(RecordingDisqualificationHandler::default());
        let cancellation = Arc::new(RecordingCancellation::default());

        let engine = DisclosureEngine::builder(bank)
            .settings(settings)
            .completion_sink(sink.clone())
            .disqualification_handler(handler.clone())
            .cancellation_policy(cancellation.clone())
            .build()
            .expect("test bank must be valid");

        Self {
            engine,
            sink,
            handler,
            cancellation,
        }
    }

    /// Separates the engine from its recorders, e.g. to hand it to a `DeferredEvaluator`
    pub fn split(self) -> (DisclosureEngine, Recorders) {
        let recorders = Recorders {
            sink: self.sink,
            handler: self.handler,
            cancellation: self.cancellation,
        };
        (self.engine, recorders)
    }
}
