//! Terminal adapters for the disclosure ports

use std::io::Write;
use std::sync::Mutex;

use core_kernel::{DomainPort, SessionId};
use domain_disclosure::{
    CompletionSink, DisclosureAnswer, DisqualificationHandler, DisqualificationNotice,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRecord<'a> {
    session_id: SessionId,
    answers: &'a [DisclosureAnswer],
}

/// Writes the completion payload as one JSON document
pub struct JsonCompletionSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> JsonCompletionSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send + 'static> DomainPort for JsonCompletionSink<W> {}

impl<W: Write + Send + 'static> CompletionSink for JsonCompletionSink<W> {
    fn on_complete(&self, session_id: SessionId, answers: &[DisclosureAnswer]) {
        let record = CompletionRecord { session_id, answers };
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let written = serde_json::to_writer_pretty(&mut *writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(writer));
        if let Err(err) = written {
            tracing::error!(%session_id, error = %err, "Failed to write completion payload");
        }
    }
}

/// Logs disqualification; the runner prompts for the choice itself
#[derive(Debug, Default)]
pub struct LoggingDisqualificationHandler;

impl DomainPort for LoggingDisqualificationHandler {}

impl DisqualificationHandler for LoggingDisqualificationHandler {
    fn on_disqualified(&self, notice: &DisqualificationNotice) {
        tracing::warn!(
            session_id = %notice.session_id,
            group_id = notice.group_id,
            "Showing disqualification dialog"
        );
    }
}
