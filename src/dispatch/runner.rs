//! # Run the invocations of one publish call.
//!
//! [`Dispatch`] is the scheduling boundary an [`Event`](crate::Event) delegates to:
//! it receives every pending [`Invocation`] matched by a publish call, runs them
//! concurrently and returns their results **positionally** (input order, not
//! completion order).
//!
//! [`Runner`] is the default implementation:
//! - **Concurrent join** with `futures::future::join_all` / `try_join_all`
//! - **Panic isolation** (panics are caught and reported as `HandlerError::Panicked`)
//! - **Timeout** per invocation if configured (wraps it in `tokio::time::timeout`)
//! - **Cancellation** through an optional [`CancellationToken`]
//!
//! ## Flow
//! ```text
//! run([inv1, inv2, inv3])
//!     ├─► guard(inv1) ──► catch_unwind ─► timeout? ─► cancel? ─┐
//!     ├─► guard(inv2) ──► ...                                  ├─► join (positional)
//!     └─► guard(inv3) ──► ...                                  ┘
//!                                                              └─► [r1, r2, r3]
//! ```
//!
//! ## Rules
//! - Output length equals input length in `Capture` mode.
//! - A timed out, panicked or cancelled invocation only affects its own slot.
//! - In `Propagate` mode the remaining in-place futures are dropped; spawned
//!   tasks are detached and run to completion on their own.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{join_all, try_join_all};
use futures::FutureExt;
use tokio::task::JoinError;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

use crate::dispatch::{BoxHandlerFuture, DispatchConfig, Invocation};
use crate::error::HandlerError;
use crate::policies::FailureMode;

/// # Concurrent fan-out/join over pending invocations.
///
/// Implementations must return results in the order of `invocations`.
/// `Err` at the outer level means the whole join was aborted.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use eventcast::{Dispatch, HandlerError, Invocation};
///
/// /// Runs invocations one after another.
/// struct Sequential;
///
/// #[async_trait]
/// impl<R: Send + 'static> Dispatch<R> for Sequential {
///     async fn run(
///         &self,
///         invocations: Vec<Invocation<R>>,
///     ) -> Result<Vec<Result<R, HandlerError>>, HandlerError> {
///         let mut out = Vec::with_capacity(invocations.len());
///         for inv in invocations {
///             let (_, fut) = inv.into_parts();
///             out.push(fut.await);
///         }
///         Ok(out)
///     }
/// }
/// ```
#[async_trait]
pub trait Dispatch<R>: Send + Sync + 'static {
    /// Runs all invocations and joins their results positionally.
    async fn run(
        &self,
        invocations: Vec<Invocation<R>>,
    ) -> Result<Vec<Result<R, HandlerError>>, HandlerError>;
}

/// Default dispatch runner.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    cfg: DispatchConfig,
    cancel: Option<CancellationToken>,
}

impl Runner {
    /// Creates a runner with the given configuration.
    pub fn new(cfg: DispatchConfig) -> Self {
        Self { cfg, cancel: None }
    }

    /// Attaches a cancellation token.
    ///
    /// Once the token is cancelled, every invocation still pending resolves as
    /// [`HandlerError::Canceled`] at its own position.
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.cfg
    }

    /// Wraps one invocation with panic isolation, timeout and cancellation.
    ///
    /// In spawn mode the invocation starts running on its own task right away.
    fn prepare<R: Send + 'static>(&self, invocation: Invocation<R>) -> BoxHandlerFuture<R> {
        let (subscriber, future) = invocation.into_parts();
        let guarded = guard(
            Arc::clone(&subscriber),
            future,
            self.cfg.timeout_limit(),
            self.cancel.clone(),
        );
        if !self.cfg.spawn {
            return guarded.boxed();
        }

        let handle = tokio::spawn(guarded);
        async move {
            handle
                .await
                .unwrap_or_else(|err| Err(from_join_error(&subscriber, err)))
        }
        .boxed()
    }
}

#[async_trait]
impl<R: Send + 'static> Dispatch<R> for Runner {
    async fn run(
        &self,
        invocations: Vec<Invocation<R>>,
    ) -> Result<Vec<Result<R, HandlerError>>, HandlerError> {
        let pending: Vec<BoxHandlerFuture<R>> = invocations
            .into_iter()
            .map(|inv| self.prepare(inv))
            .collect();

        trace!(
            count = pending.len(),
            failure = ?self.cfg.failure,
            spawn = self.cfg.spawn,
            "joining invocations"
        );

        match self.cfg.failure {
            FailureMode::Capture => Ok(join_all(pending).await),
            FailureMode::Propagate => {
                let values = try_join_all(pending).await?;
                Ok(values.into_iter().map(Ok).collect())
            }
        }
    }
}

async fn guard<R>(
    subscriber: Arc<str>,
    future: BoxHandlerFuture<R>,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
) -> Result<R, HandlerError> {
    let work = attempt(&subscriber, future, timeout);
    match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => {
                warn!(subscriber = %subscriber, "handler cancelled");
                Err(HandlerError::Canceled)
            }
            res = work => res,
        },
        None => work.await,
    }
}

async fn attempt<R>(
    subscriber: &str,
    future: BoxHandlerFuture<R>,
    timeout: Option<Duration>,
) -> Result<R, HandlerError> {
    let caught = AssertUnwindSafe(future).catch_unwind();
    let outcome = match timeout {
        Some(dur) => match time::timeout(dur, caught).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => {
                warn!(subscriber = %subscriber, timeout = ?dur, "handler timed out");
                return Err(HandlerError::Timeout { timeout: dur });
            }
        },
        None => caught.await,
    };

    outcome.unwrap_or_else(|payload| {
        let info = panic_info(payload.as_ref());
        warn!(subscriber = %subscriber, info = %info, "handler panicked");
        Err(HandlerError::Panicked {
            subscriber: subscriber.to_string(),
            info,
        })
    })
}

fn from_join_error(subscriber: &str, err: JoinError) -> HandlerError {
    if err.is_panic() {
        let info = panic_info(err.into_panic().as_ref());
        HandlerError::Panicked {
            subscriber: subscriber.to_string(),
            info,
        }
    } else {
        warn!(subscriber = %subscriber, "handler task aborted");
        HandlerError::Canceled
    }
}

fn panic_info(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
