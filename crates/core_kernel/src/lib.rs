//! Core Kernel - Foundational types shared by the disclosure workspace
//!
//! This crate provides the building blocks used across domain crates:
//! - Strongly-typed session and application identifiers
//! - The port marker trait that collaborator interfaces extend

pub mod identifiers;
pub mod ports;

pub use identifiers::{ApplicationId, SessionId};
pub use ports::DomainPort;
