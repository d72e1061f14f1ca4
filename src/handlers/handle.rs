//! # Asynchronous handler abstraction.
//!
//! This module defines the [`Handle`] trait, the capability a
//! [`Subscriber`](crate::Subscriber) wraps. The common handle type is
//! [`HandlerRef`], an `Arc<dyn Handle<M, R>>` suitable for sharing between
//! registrations and in-flight invocations.
//!
//! [`BlockingHandlerRef`] names the shape of a *synchronous* callable. It is
//! never invoked by this crate; the dynamic factory
//! [`Subscriber::try_from_any`](crate::Subscriber::try_from_any) recognizes it
//! only to reject it with [`EventError::NotCoroutine`](crate::EventError::NotCoroutine).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::handlers::Envelope;

/// Shared handle to an asynchronous handler.
pub type HandlerRef<M, R> = Arc<dyn Handle<M, R>>;

/// Shared synchronous callable; rejected at registration time.
pub type BlockingHandlerRef<M, R> =
    Arc<dyn Fn(&Envelope<M>) -> Result<R, HandlerError> + Send + Sync>;

/// # Asynchronous message handler.
///
/// A `Handle` has a stable [`name`](Handle::name), which is also its identity
/// for unsubscribe purposes, and an async [`handle`](Handle::handle) method.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use eventcast::{Envelope, Handle, HandlerError};
///
/// struct Upper;
///
/// #[async_trait]
/// impl Handle<String, String> for Upper {
///     async fn handle(&self, envelope: Envelope<String>) -> Result<String, HandlerError> {
///         Ok(envelope.message().to_uppercase())
///     }
///
///     fn name(&self) -> &str { "upper" }
/// }
/// ```
#[async_trait]
pub trait Handle<M, R>: Send + Sync + 'static {
    /// Handles one delivered message.
    ///
    /// Called once per matching registration per publish call. Suspension
    /// points are entirely up to the implementation.
    async fn handle(&self, envelope: Envelope<M>) -> Result<R, HandlerError>;

    /// Returns the handler name used for identity, logs and panic reports.
    ///
    /// The default uses `type_name::<Self>()`, so two values of the same type
    /// are the same subscriber. Override it when instances must be told apart.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
