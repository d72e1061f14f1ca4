//! # Failure policy for the dispatch runner.
//!
//! [`FailureMode`] determines what a failing handler does to the rest of a publish call.
//!
//! - [`FailureMode::Capture`] the failure is stored in place as an `Err` entry (default).
//! - [`FailureMode::Propagate`] the first failure aborts the join and is returned to the caller.
//!
//! ## Choosing the right mode
//!
//! **Independent subscribers** (audit, metrics, notifications):
//! ```text
//! FailureMode::Capture    → every subscriber runs; results = [Ok, Err, Ok, ...]
//! ```
//!
//! **All-or-nothing** (one failure makes the whole fan-out meaningless):
//! ```text
//! FailureMode::Propagate  → publish returns Err(first failure);
//!                           in-place handlers still running are dropped
//! ```

/// Policy controlling how handler failures surface from a publish call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Failures become in-place `Err` results; the join always completes.
    #[default]
    Capture,
    /// The first failure (by completion time) is returned as the publish error.
    Propagate,
}

impl FailureMode {
    /// True for [`FailureMode::Capture`].
    pub fn captures(self) -> bool {
        matches!(self, FailureMode::Capture)
    }
}
