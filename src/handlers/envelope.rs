//! # Call-scoped delivery context.
//!
//! Every handler invocation receives one [`Envelope`]: the published message,
//! the publisher the call was made with (if any) and the name of the event.
//! The message is shared (`Arc`) across all targets of a single publish call.

use std::fmt;
use std::sync::Arc;

use crate::identity::Publisher;

/// Message plus the context it was published in.
pub struct Envelope<M> {
    message: Arc<M>,
    publisher: Option<Publisher>,
    event: Arc<str>,
}

impl<M> Envelope<M> {
    /// Creates an envelope.
    pub fn new(message: Arc<M>, publisher: Option<Publisher>, event: Arc<str>) -> Self {
        Self {
            message,
            publisher,
            event,
        }
    }

    /// The published message.
    pub fn message(&self) -> &M {
        &self.message
    }

    /// Shared handle to the published message.
    pub fn message_arc(&self) -> &Arc<M> {
        &self.message
    }

    /// Publisher the message was published with; `None` for publisher-less calls.
    pub fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }

    /// Name of the event the message was published on.
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl<M> Clone for Envelope<M> {
    fn clone(&self) -> Self {
        Self {
            message: Arc::clone(&self.message),
            publisher: self.publisher.clone(),
            event: Arc::clone(&self.event),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Envelope<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("message", &self.message)
            .field("publisher", &self.publisher)
            .field("event", &self.event)
            .finish()
    }
}
