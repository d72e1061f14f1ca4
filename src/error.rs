//! Error types used by events, identities and the dispatch runner.
//!
//! This module defines two main error enums:
//!
//! - [`EventError`] — errors raised synchronously while building identities or registering subscribers.
//! - [`HandlerError`] — errors produced while a subscriber handles a published message.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Publishing on a disabled event is **not** an error; see [`Delivery::Disabled`](crate::Delivery::Disabled).

use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

/// # Errors produced at registration time.
///
/// These are raised by the dynamic identity factories
/// ([`Publisher::try_from_any`](crate::Publisher::try_from_any),
/// [`Subscriber::try_from_any`](crate::Subscriber::try_from_any)), never by `publish`.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Publisher was built from something that is neither a string nor a `Publisher`.
    #[error("publisher name type mismatch: must be one of [String, &str, Arc<str>, Publisher], got {got}")]
    Naming {
        /// Type name of the rejected value.
        got: &'static str,
    },

    /// Subscriber handler is not invocable at all.
    #[error("handler must implement `Handle` or be a `Subscriber`, got {got}")]
    NotCallable {
        /// Type name of the rejected value.
        got: &'static str,
    },

    /// Subscriber handler is invocable but not asynchronous.
    #[error("handler `{name}` must be asynchronous")]
    NotCoroutine {
        /// Type name of the rejected blocking callable.
        name: &'static str,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventcast::EventError;
    ///
    /// let err = EventError::Naming { got: "u32" };
    /// assert_eq!(err.as_label(), "event_naming");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::Naming { .. } => "event_naming",
            EventError::NotCallable { .. } => "event_not_callable",
            EventError::NotCoroutine { .. } => "event_not_coroutine",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::Naming { got } => format!("invalid publisher name type: {got}"),
            EventError::NotCallable { got } => format!("not callable: {got}"),
            EventError::NotCoroutine { name } => format!("not a coroutine: {name}"),
        }
    }
}

/// # Errors produced while handling a published message.
///
/// `Fail` comes from the handler body itself; `Timeout`, `Panicked` and `Canceled`
/// are produced by the dispatch runner around it.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// Handler returned an error.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Handler exceeded the runner's per-invocation timeout.
    #[error("timed out after {timeout:?}")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout: Duration,
    },

    /// Handler panicked; the panic was caught by the runner.
    #[error("subscriber `{subscriber}` panicked: {info}")]
    Panicked {
        /// Name of the subscriber that panicked.
        subscriber: String,
        /// Panic payload, when it was a string.
        info: String,
    },

    /// Dispatch was cancelled before the handler finished.
    #[error("dispatch cancelled")]
    Canceled,
}

impl HandlerError {
    /// Shorthand for [`HandlerError::Fail`] from anything displayable.
    ///
    /// # Example
    /// ```
    /// use eventcast::HandlerError;
    ///
    /// let err = HandlerError::fail("connection refused");
    /// assert_eq!(err.to_string(), "handler failed: connection refused");
    /// ```
    pub fn fail(error: impl Display) -> Self {
        HandlerError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventcast::HandlerError;
    /// use std::time::Duration;
    ///
    /// let err = HandlerError::Timeout { timeout: Duration::from_secs(1) };
    /// assert_eq!(err.as_label(), "handler_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Timeout { .. } => "handler_timeout",
            HandlerError::Panicked { .. } => "handler_panicked",
            HandlerError::Canceled => "handler_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Fail { error } => format!("error: {error}"),
            HandlerError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            HandlerError::Panicked { subscriber, info } => {
                format!("panic in {subscriber}: {info}")
            }
            HandlerError::Canceled => "dispatch cancelled".to_string(),
        }
    }

    /// Indicates whether the error was produced by the runner rather than the handler body.
    ///
    /// Returns `true` for [`HandlerError::Timeout`], [`HandlerError::Panicked`]
    /// and [`HandlerError::Canceled`].
    pub fn is_runner_fault(&self) -> bool {
        !matches!(self, HandlerError::Fail { .. })
    }
}
