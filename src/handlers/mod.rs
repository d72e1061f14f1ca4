//! # Handler abstractions.
//!
//! This module provides the handler-related types:
//! - [`Handle`] - trait for implementing async message handlers
//! - [`HandlerFn`] - function-backed handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handle<M, R>>`)
//! - [`Envelope`] - the call-scoped context every handler receives

mod envelope;
mod handle;
mod handler_fn;
#[cfg(feature = "logging")]
mod log;

pub use envelope::Envelope;
pub use handle::{BlockingHandlerRef, Handle, HandlerRef};
pub use handler_fn::HandlerFn;
#[cfg(feature = "logging")]
pub use log::LogWriter;
