//! # Subscriber identity.
//!
//! [`Subscriber`] wraps a shared asynchronous handler ([`HandlerRef`]) together
//! with an identity derived from the handler's [`name`](crate::Handle::name).
//!
//! ## Rules
//! - Equality and hashing go through the identity string `subscriber:<name>`,
//!   never through handler pointer identity.
//! - Two distinct handlers that share a name are the **same** subscriber for
//!   unsubscribe purposes. Use [`Subscriber::ptr_eq`] to tell instances apart.
//! - Invoking a subscriber delegates to the wrapped handler.
//!
//! ## Example
//! ```rust
//! use eventcast::{Envelope, HandlerError, Subscriber};
//!
//! let a: Subscriber<(), ()> = Subscriber::from_fn("audit", |_env: Envelope<()>| async {
//!     Ok::<(), HandlerError>(())
//! });
//! let b: Subscriber<(), ()> = Subscriber::from_fn("audit", |_env: Envelope<()>| async {
//!     Err::<(), _>(HandlerError::fail("different body"))
//! });
//!
//! assert_eq!(a, b);
//! assert!(!a.ptr_eq(&b));
//! assert_eq!(a.id(), "subscriber:audit");
//! ```

use std::any::{type_name, Any};
use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::dispatch::Invocation;
use crate::error::{EventError, HandlerError};
use crate::handlers::{BlockingHandlerRef, Envelope, Handle, HandlerFn, HandlerRef};

/// Handler identity compared by name.
pub struct Subscriber<M, R> {
    name: Arc<str>,
    id: Arc<str>,
    handler: HandlerRef<M, R>,
}

impl<M, R> Subscriber<M, R>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
{
    /// Type tag used as the identity prefix.
    pub const TAG: &'static str = "subscriber";

    /// Wraps a shared handler; the identity is taken from [`Handle::name`](crate::Handle::name).
    pub fn new(handler: HandlerRef<M, R>) -> Self {
        let name: Arc<str> = Arc::from(handler.name());
        let id = format!("{}:{}", Self::TAG, name).into();
        Self { name, id, handler }
    }

    /// Wraps a closure as a [`HandlerFn`] named `name`.
    pub fn from_fn<F, Fut>(name: impl Into<std::borrow::Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Envelope<M>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
    {
        Self::new(HandlerFn::arc(name, f))
    }

    /// Builds a subscriber from a dynamically typed value.
    ///
    /// Accepts a `Subscriber<M, R>` (cloned) or a [`HandlerRef<M, R>`].
    ///
    /// # Errors
    /// - [`EventError::NotCoroutine`] for a [`BlockingHandlerRef<M, R>`] (callable, but synchronous).
    /// - [`EventError::NotCallable`] for any other type.
    pub fn try_from_any<T: Any>(value: &T) -> Result<Self, EventError> {
        let any = value as &dyn Any;
        if let Some(subscriber) = any.downcast_ref::<Subscriber<M, R>>() {
            return Ok(subscriber.clone());
        }
        if let Some(handler) = any.downcast_ref::<HandlerRef<M, R>>() {
            return Ok(Self::new(Arc::clone(handler)));
        }
        if any.is::<BlockingHandlerRef<M, R>>() {
            return Err(EventError::NotCoroutine {
                name: type_name::<T>(),
            });
        }
        Err(EventError::NotCallable {
            got: type_name::<T>(),
        })
    }

    /// Builds the pending call of this subscriber for one envelope.
    ///
    /// Nothing runs until the returned invocation is polled.
    pub fn invoke(&self, envelope: Envelope<M>) -> Invocation<R> {
        let handler = Arc::clone(&self.handler);
        Invocation::new(Arc::clone(&self.name), async move {
            handler.handle(envelope).await
        })
    }

    /// Calls the wrapped handler directly.
    pub async fn call(&self, envelope: Envelope<M>) -> Result<R, HandlerError> {
        self.handler.handle(envelope).await
    }
}

impl<M, R> Subscriber<M, R> {
    /// Returns the subscriber name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identity string (`subscriber:<name>`) used for equality.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the wrapped handler.
    pub fn handler(&self) -> &HandlerRef<M, R> {
        &self.handler
    }

    /// True if both subscribers wrap the very same handler allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<M, R> Clone for Subscriber<M, R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            id: Arc::clone(&self.id),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<M, R> From<HandlerRef<M, R>> for Subscriber<M, R>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
{
    fn from(handler: HandlerRef<M, R>) -> Self {
        Self::new(handler)
    }
}

impl<M, R> PartialEq for Subscriber<M, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<M, R> Eq for Subscriber<M, R> {}

impl<M, R> Hash for Subscriber<M, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<M, R> PartialEq<str> for Subscriber<M, R> {
    fn eq(&self, other: &str) -> bool {
        &*self.name == other
    }
}

impl<M, R> PartialEq<&str> for Subscriber<M, R> {
    fn eq(&self, other: &&str) -> bool {
        &*self.name == *other
    }
}

impl<M, R> fmt::Debug for Subscriber<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscriber").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Shout;

    #[async_trait]
    impl Handle<String, String> for Shout {
        async fn handle(&self, envelope: Envelope<String>) -> Result<String, HandlerError> {
            Ok(envelope.message().to_uppercase())
        }
    }

    fn envelope(message: &str) -> Envelope<String> {
        Envelope::new(Arc::new(message.to_string()), None, Arc::from("ev"))
    }

    #[test]
    fn test_default_name_is_type_name() {
        let s: Subscriber<String, String> = Subscriber::new(Arc::new(Shout));
        assert!(s.name().ends_with("Shout"));
        assert_eq!(s.id(), format!("subscriber:{}", s.name()));
    }

    #[test]
    fn test_same_name_different_handlers_are_equal() {
        let a: Subscriber<String, String> = Subscriber::new(Arc::new(Shout));
        let b: Subscriber<String, String> = Subscriber::new(Arc::new(Shout));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_different_names_are_not_equal() {
        let a: Subscriber<(), ()> =
            Subscriber::from_fn("a", |_e: Envelope<()>| async { Ok::<(), HandlerError>(()) });
        let b: Subscriber<(), ()> =
            Subscriber::from_fn("b", |_e: Envelope<()>| async { Ok::<(), HandlerError>(()) });
        assert_ne!(a, b);
        assert_eq!(a, "a");
    }

    #[tokio::test]
    async fn test_call_and_invoke_delegate_to_handler() {
        let s: Subscriber<String, String> = Subscriber::new(Arc::new(Shout));
        assert_eq!(s.call(envelope("hi")).await.unwrap(), "HI");

        let inv = s.invoke(envelope("there"));
        assert_eq!(inv.subscriber(), s.name());
        let (_, fut) = inv.into_parts();
        assert_eq!(fut.await.unwrap(), "THERE");
    }

    #[test]
    fn test_try_from_any_accepts_subscriber_and_handler_ref() {
        let s: Subscriber<String, String> = Subscriber::new(Arc::new(Shout));
        let copy = Subscriber::<String, String>::try_from_any(&s).unwrap();
        assert_eq!(copy, s);
        assert!(copy.ptr_eq(&s));

        let handler: HandlerRef<String, String> = Arc::new(Shout);
        let from_ref = Subscriber::<String, String>::try_from_any(&handler).unwrap();
        assert_eq!(from_ref, s);
    }

    #[test]
    fn test_try_from_any_rejects_blocking_callable() {
        let blocking: BlockingHandlerRef<String, String> =
            Arc::new(|env: &Envelope<String>| Ok::<_, HandlerError>(env.message().clone()));
        let err = Subscriber::<String, String>::try_from_any(&blocking).unwrap_err();
        assert!(matches!(err, EventError::NotCoroutine { .. }));
    }

    #[test]
    fn test_try_from_any_rejects_non_callable() {
        let err = Subscriber::<String, String>::try_from_any(&42i64).unwrap_err();
        assert_eq!(err, EventError::NotCallable { got: "i64" });
    }
}
