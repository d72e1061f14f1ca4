//! Dispatch policies.
//!
//! This module groups the knobs that control **how** handler failures of one
//! publish call are reported.
//!
//! ## Contents
//! - [`FailureMode`] capture failures as results, or propagate the first one
//!
//! ## Quick wiring
//! ```text
//! DispatchConfig { failure: FailureMode, timeout: Duration, spawn: bool }
//!      └─► dispatch::Runner uses:
//!           - failure to pick join_all (capture) or try_join_all (propagate)
//! ```
//!
//! ## Defaults
//! - `FailureMode::Capture` (one bad subscriber never hides the others' results).

mod failure;

pub use failure::FailureMode;
