//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Envelope<M>) -> Fut`, producing a fresh
//! future per delivery. No state is shared between deliveries unless the closure
//! captures an `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use eventcast::{Envelope, Handle, HandlerError, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef<u32, u32> = HandlerFn::arc("double", |env: Envelope<u32>| async move {
//!     Ok::<_, HandlerError>(env.message() * 2)
//! });
//!
//! assert_eq!(h.name(), "double");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::handlers::{Envelope, Handle};

/// Function-backed handler implementation.
///
/// Identity is the explicit `name`; two `HandlerFn`s with the same name are the
/// same subscriber even when their closures differ.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<M, R, F, Fut> Handle<M, R> for HandlerFn<F>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(Envelope<M>) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
{
    async fn handle(&self, envelope: Envelope<M>) -> Result<R, HandlerError> {
        (self.f)(envelope).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
