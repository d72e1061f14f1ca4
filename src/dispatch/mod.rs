//! # Dispatch: running the handlers matched by one publish call.
//!
//! ## Contents
//! - [`Invocation`] one pending, owned handler call
//! - [`Dispatch`] the fan-out/join seam an [`Event`](crate::Event) delegates to
//! - [`Runner`] default runner (positional join, panic isolation, timeout, cancellation)
//! - [`DispatchConfig`] runner settings
//!
//! ```text
//! Event::publish ──► [Invocation; n] ──► Dispatch::run ──► [Result<R, HandlerError>; n]
//! ```

mod config;
mod invocation;
mod runner;

pub use config::DispatchConfig;
pub use invocation::{BoxHandlerFuture, Invocation};
pub use runner::{Dispatch, Runner};
