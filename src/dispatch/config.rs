//! # Dispatch runner configuration.
//!
//! Provides [`DispatchConfig`] centralized settings for the default [`Runner`](crate::Runner).
//!
//! Config is used in two ways:
//! 1. **Runner creation**: `Runner::new(config)`
//! 2. **Event creation**: `Event::with_config(name, config)`
//!
//! ## Sentinel values
//! - `timeout = 0s` → no timeout (treated as `None` by [`DispatchConfig::timeout_limit`])

use std::time::Duration;

use crate::policies::FailureMode;

/// Configuration for the dispatch runner.
///
/// ## Field semantics
/// - `failure`: capture failures in place, or propagate the first one
/// - `timeout`: per-invocation limit (`0s` = no timeout)
/// - `spawn`: run each invocation on its own tokio task (`false` = poll in place)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// How handler failures surface from a publish call.
    pub failure: FailureMode,

    /// Per-invocation timeout.
    ///
    /// - `Duration::ZERO` = no timeout (handler runs until completion)
    /// - `> 0` = a handler still running after `timeout` resolves as
    ///   `HandlerError::Timeout` at its own position
    pub timeout: Duration,

    /// Run each invocation on a dedicated `tokio::spawn` task.
    ///
    /// - `false` = all invocations are polled concurrently inside the publishing task
    /// - `true` = invocations may run in parallel on a multi-threaded runtime;
    ///   requires being inside a tokio runtime
    ///
    /// Results are joined positionally either way.
    pub spawn: bool,
}

impl DispatchConfig {
    /// Returns the per-invocation timeout as an `Option`.
    ///
    /// - `None` → no timeout
    /// - `Some(d)` → timeout applied per invocation
    #[inline]
    pub fn timeout_limit(&self) -> Option<Duration> {
        if self.timeout == Duration::ZERO {
            None
        } else {
            Some(self.timeout)
        }
    }
}

impl Default for DispatchConfig {
    /// Default configuration:
    ///
    /// - `failure = FailureMode::Capture` (failures returned in place)
    /// - `timeout = 0s` (no timeout)
    /// - `spawn = false` (poll in the publishing task)
    fn default() -> Self {
        Self {
            failure: FailureMode::default(),
            timeout: Duration::ZERO,
            spawn: false,
        }
    }
}
