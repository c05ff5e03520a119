//! Ports infrastructure
//!
//! Domain crates describe the collaborators they need as port traits.
//! Callers plug in adapters: a UI layer, a recording double in tests, or
//! a terminal runner.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      Engine (domain crate)   │
//! └──────────────────────────────┘
//!                │ calls
//!                ▼
//! ┌──────────────────────────────┐
//! │  Port traits (CompletionSink,│
//! │  CancellationPolicy, ...)    │
//! └──────────────────────────────┘
//!         ▲                ▲
//!   ┌─────┴─────┐    ┌─────┴─────┐
//!   │ UI adapter│    │ Test double│
//!   └───────────┘    └───────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! pub trait CompletionSink: DomainPort {
//!     fn on_complete(&self, session: SessionId, answers: &[DisclosureAnswer]);
//! }
//! ```

/// Marker trait for all domain ports
///
/// Port implementations are shared behind `Arc` and may be invoked from a
/// scheduled task, so they must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}
