//! # LogWriter — simple envelope logger
//!
//! A minimal handler that logs every delivered [`Envelope`] through `tracing`.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! INFO eventcast::handlers::log: delivered event="orders" publisher=Some("webhook") message=Order { id: 7 }
//! INFO eventcast::handlers::log: delivered event="orders" publisher=None message=Order { id: 8 }
//! ```

use std::fmt::Debug;

use async_trait::async_trait;
use tracing::info;

use crate::error::HandlerError;
use crate::handlers::{Envelope, Handle};

/// Envelope writer handler.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<M> Handle<M, ()> for LogWriter
where
    M: Debug + Send + Sync + 'static,
{
    async fn handle(&self, e: Envelope<M>) -> Result<(), HandlerError> {
        info!(
            event = e.event(),
            publisher = ?e.publisher().map(|p| p.name()),
            message = ?e.message(),
            "delivered"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
