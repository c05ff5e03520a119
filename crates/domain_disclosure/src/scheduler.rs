//! Deferred answer evaluation
//!
//! An answer is applied at once so the checkmark renders, and evaluated
//! after the configured delay. The schedule has a single slot: a newer
//! answer aborts the evaluation still waiting in it.

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::answer::AnswerInput;
use crate::engine::{DisclosureEngine, PendingEvaluation, Settlement};
use crate::error::DisclosureError;

type ScheduledEvaluation = JoinHandle<Result<Settlement, DisclosureError>>;

pub struct DeferredEvaluator {
    engine: Arc<Mutex<DisclosureEngine>>,
    delay: Duration,
    scheduled: Mutex<Option<ScheduledEvaluation>>,
}

impl DeferredEvaluator {
    /// Wraps an engine, using its configured advance delay
    pub fn new(engine: DisclosureEngine) -> Self {
        let delay = engine.settings().advance_delay();
        Self {
            engine: Arc::new(Mutex::new(engine)),
            delay,
            scheduled: Mutex::new(None),
        }
    }

    /// Shared handle to the wrapped engine
    pub fn engine(&self) -> Arc<Mutex<DisclosureEngine>> {
        Arc::clone(&self.engine)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Applies the answer now and schedules its evaluation after the delay
    ///
    /// The slot stays locked from applying the answer until its task is
    /// stored, so concurrent answers fill the slot in ticket order.
    pub async fn answer(&self, input: AnswerInput) -> Result<PendingEvaluation, DisclosureError> {
        let mut scheduled = self.scheduled.lock().await;
        let ticket = self.engine.lock().await.answer(input)?;

        let engine = Arc::clone(&self.engine);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            engine.lock().await.settle(ticket)
        });

        if let Some(previous) = scheduled.replace(handle) {
            previous.abort();
            tracing::debug!("Aborted superseded evaluation");
        }
        Ok(ticket)
    }

    /// Waits for the scheduled evaluation, if any, and returns its settlement
    pub async fn flush(&self) -> Option<Result<Settlement, DisclosureError>> {
        let handle = self.scheduled.lock().await.take()?;
        match handle.await {
            Ok(settlement) => Some(settlement),
            Err(err) if err.is_cancelled() => Some(Ok(Settlement::Superseded)),
            Err(err) => panic::resume_unwind(err.into_panic()),
        }
    }

    /// Drops the scheduled evaluation without running it
    ///
    /// The engine keeps the unsettled ticket, so navigation stays unavailable
    /// until the group is answered again.
    pub async fn cancel(&self) -> bool {
        match self.scheduled.lock().await.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}
