//! # eventcast
//!
//! **eventcast** is a small in-process publish/subscribe primitive for async Rust.
//!
//! Named [`Event`]s hold subscriptions of asynchronous handlers ([`Subscriber`]s),
//! each optionally filtered on a [`Publisher`]. Publishing fans one message out to
//! every matching subscriber concurrently and returns their results in
//! registration order.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Subscriber  │   │  Subscriber  │   │  Subscriber  │
//!     │  (broadcast) │   │ (from "x")   │   │ (from "y")   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Event "orders"                                                   │
//! │  - registrations: [(A, None), (B, Some("x")), (C, Some("y"))]     │
//! │  - enabled: bool                                                  │
//! │  - runner: Arc<dyn Dispatch<R>>                                   │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                │ publish_from(msg, "x")
//!                                ▼
//!                  filter (insertion order, skip paused)
//!                    A ✓ (broadcast)  B ✓ (x == x)  C ✗
//!                                │
//!                                ▼
//!                  Runner::run([inv A, inv B])
//!                  (join_all, catch_unwind, timeout, cancel)
//!                                │
//!                                ▼
//!                  Delivery::Delivered([result A, result B])
//! ```
//!
//! ### Matching
//! - A publish **without** publisher reaches only broadcast subscriptions.
//! - A publish **with** publisher `P` reaches broadcast subscriptions and those filtered on `P`.
//! - A disabled event returns [`Delivery::Disabled`], never an empty `Delivered`.
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                         |
//! |-------------------|-----------------------------------------------------------------|--------------------------------------------|
//! | **Events**        | Register, filter, publish, enable/disable, pause/resume.        | [`Event`], [`Registration`], [`Delivery`]  |
//! | **Identity**      | Value-equal publisher/subscriber identities.                    | [`Publisher`], [`Subscriber`]              |
//! | **Handlers**      | Async handlers as trait objects or closures.                    | [`Handle`], [`HandlerFn`], [`Envelope`]    |
//! | **Dispatch**      | Ordered concurrent join with failure isolation.                 | [`Dispatch`], [`Runner`], [`FailureMode`]  |
//! | **Errors**        | Typed registration and handler errors.                          | [`EventError`], [`HandlerError`]           |
//! | **Configuration** | Runner settings.                                                | [`DispatchConfig`]                         |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use eventcast::{Envelope, Event, HandlerError, Publisher};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut event: Event<String, String> = Event::new("greetings");
//!
//!     // Broadcast subscriber: receives every publish.
//!     event.subscribe_fn("everyone", |env: Envelope<String>| async move {
//!         Ok::<_, HandlerError>(format!("everyone got {}", env.message()))
//!     });
//!
//!     // Filtered subscriber: receives only publishes signed by "admin".
//!     event.subscribe_fn_from("admins", "admin", |env: Envelope<String>| async move {
//!         let from = env.publisher().map(Publisher::name).unwrap_or_default();
//!         Ok::<_, HandlerError>(format!("admins got {} from {}", env.message(), from))
//!     });
//!
//!     let anonymous = event.publish("hello".into()).await?;
//!     assert_eq!(anonymous.len(), 1);
//!
//!     let signed = event.publish_from("hello".into(), "admin").await?;
//!     assert_eq!(signed.len(), 2);
//!     Ok(())
//! }
//! ```
mod dispatch;
mod error;
mod events;
mod handlers;
mod identity;
mod policies;

// ---- Public re-exports ----

pub use dispatch::{BoxHandlerFuture, Dispatch, DispatchConfig, Invocation, Runner};
pub use error::{EventError, HandlerError};
pub use events::{subscribe, Delivery, Event, Registration};
pub use handlers::{BlockingHandlerRef, Envelope, Handle, HandlerFn, HandlerRef};
pub use identity::{Publisher, Subscriber};
pub use policies::FailureMode;

// Optional: expose a simple built-in logger handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
