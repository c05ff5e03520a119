//! Terminal runner for the medical disclosure questionnaire
//!
//! Wires configuration, logging and terminal adapters around a
//! [`domain_disclosure::DisclosureEngine`].

pub mod config;
pub mod adapters;
pub mod prompt;
pub mod runner;

pub use config::CliConfig;
pub use adapters::{JsonCompletionSink, LoggingDisqualificationHandler};
pub use prompt::{DialoguerPrompter, GroupAction, GroupScreen, Prompter};
pub use runner::{run_session, SessionOutcome};
