//! # Outcome of a publish call.
//!
//! [`Delivery::Disabled`] means no dispatch happened at all; it is distinct from
//! `Delivered(vec![])`, a dispatch that matched zero subscribers.

use crate::error::HandlerError;

/// Result of [`Event::publish`](crate::Event::publish).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery<R> {
    /// The event was disabled; no handler was considered.
    Disabled,
    /// Per-target results in registration order.
    Delivered(Vec<Result<R, HandlerError>>),
}

impl<R> Delivery<R> {
    /// True if no dispatch occurred.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Delivery::Disabled)
    }

    /// Per-target results, or `None` when disabled.
    pub fn results(&self) -> Option<&[Result<R, HandlerError>]> {
        match self {
            Delivery::Disabled => None,
            Delivery::Delivered(results) => Some(results),
        }
    }

    /// Consumes into per-target results, or `None` when disabled.
    pub fn into_results(self) -> Option<Vec<Result<R, HandlerError>>> {
        match self {
            Delivery::Disabled => None,
            Delivery::Delivered(results) => Some(results),
        }
    }

    /// Number of handlers that were dispatched (0 when disabled).
    pub fn len(&self) -> usize {
        self.results().map_or(0, <[_]>::len)
    }

    /// True if nothing was dispatched, whether disabled or unmatched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects successful values, failing on the first `Err` in registration order.
    ///
    /// `None` when disabled.
    pub fn into_values(self) -> Option<Result<Vec<R>, HandlerError>> {
        self.into_results()
            .map(|results| results.into_iter().collect())
    }
}
