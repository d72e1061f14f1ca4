//! # Pending handler invocation.
//!
//! [`Invocation`] is one not-yet-polled handler call produced by
//! [`Event::publish`](crate::Event::publish). It owns everything it needs
//! (`'static`), so a runner may poll it in place or move it onto its own task.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::HandlerError;

/// Boxed handler future as carried by an [`Invocation`].
pub type BoxHandlerFuture<R> = BoxFuture<'static, Result<R, HandlerError>>;

/// A pending call of one subscriber.
pub struct Invocation<R> {
    subscriber: Arc<str>,
    future: BoxHandlerFuture<R>,
}

impl<R: 'static> Invocation<R> {
    /// Wraps a handler future together with the name of the subscriber it belongs to.
    pub fn new<F>(subscriber: impl Into<Arc<str>>, future: F) -> Self
    where
        F: Future<Output = Result<R, HandlerError>> + Send + 'static,
    {
        Self {
            subscriber: subscriber.into(),
            future: Box::pin(future),
        }
    }
}

impl<R> Invocation<R> {
    /// Name of the subscriber this invocation calls.
    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    /// Splits into the subscriber name and the handler future.
    pub fn into_parts(self) -> (Arc<str>, BoxHandlerFuture<R>) {
        (self.subscriber, self.future)
    }
}

impl<R> fmt::Debug for Invocation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("subscriber", &self.subscriber)
            .finish_non_exhaustive()
    }
}
