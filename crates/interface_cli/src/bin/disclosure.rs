//! Disclosure CLI Binary
//!
//! Runs one medical disclosure questionnaire on the terminal and prints the
//! completed answers as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in question bank
//! cargo run --bin disclosure-cli
//!
//! # Run with environment variables
//! DISCLOSURE_USAGE_MODE=insured DISCLOSURE_QUESTION_BANK_PATH=bank.json cargo run --bin disclosure-cli
//! ```
//!
//! # Environment Variables
//!
//! * `DISCLOSURE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `DISCLOSURE_USAGE_MODE` - `applicant` or `insured` (default: applicant)
//! * `DISCLOSURE_QUESTION_BANK_PATH` - JSON question bank (default: built-in bank)
//! * `DISCLOSURE_ENGINE__ADVANCE_DELAY_MS` - Delay before an answer is evaluated (default: 300)
//! * `DISCLOSURE_ENGINE__CHECKLIST_POLICY` - `group_answer_only` or `any_item_checked`

use std::sync::Arc;

use domain_disclosure::{DeferredEvaluator, DisclosureEngine};
use interface_cli::{
    run_session, CliConfig, DialoguerPrompter, JsonCompletionSink, LoggingDisqualificationHandler,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::load().unwrap_or_else(|err| {
        eprintln!("Invalid configuration ({err}), using defaults");
        CliConfig::default()
    });

    init_tracing(&config.log_level);

    let bank = config.load_bank()?;
    tracing::info!(
        groups = bank.len(),
        usage_mode = ?config.usage_mode,
        checklist_policy = ?config.engine.checklist_policy,
        "Starting disclosure questionnaire"
    );

    let cancellation = config.usage_mode.cancellation_policy(|context| {
        tracing::info!(
            session_id = %context.session_id,
            group_id = context.group_id,
            "Returning to the insured-party flow"
        );
    });

    let engine = DisclosureEngine::builder(bank)
        .settings(config.engine.clone())
        .completion_sink(Arc::new(JsonCompletionSink::new(std::io::stdout())))
        .disqualification_handler(Arc::new(LoggingDisqualificationHandler))
        .cancellation_policy(cancellation)
        .build()?;

    let evaluator = DeferredEvaluator::new(engine);
    let outcome = run_session(&evaluator, &mut DialoguerPrompter::default()).await?;

    tracing::info!(?outcome, "Disclosure session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging on stderr.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
