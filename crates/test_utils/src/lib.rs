//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! disclosure workspace test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built question banks and settings
//! - `builders`: Builder patterns for question groups and banks
//! - `recorders`: Recording port doubles and an engine harness
//! - `assertions`: Custom assertion helpers for disclosure types
//! - `generators`: Property-based interaction generators

pub mod fixtures;
pub mod builders;
pub mod recorders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use recorders::*;
pub use assertions::*;
pub use generators::*;
