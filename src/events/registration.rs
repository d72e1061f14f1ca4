//! # Registration record.
//!
//! A [`Registration`] associates one [`Subscriber`] with an optional
//! [`Publisher`] filter and a pause flag. Records are immutable: pausing or
//! resuming replaces the record with [`Registration::with_paused`].
//!
//! ## Matching
//! ```text
//! filter \ call      None (no publisher)   Some(P)
//! None (broadcast)   match                 match
//! Some(P)            no match              match
//! Some(Q)            no match              no match
//! paused             never matches
//! ```

use std::fmt;

use crate::identity::{Publisher, Subscriber};

/// One subscription on an event.
pub struct Registration<M, R> {
    subscriber: Subscriber<M, R>,
    publisher: Option<Publisher>,
    paused: bool,
}

impl<M, R> Registration<M, R> {
    /// Creates an active registration.
    pub fn new(subscriber: Subscriber<M, R>, publisher: Option<Publisher>) -> Self {
        Self {
            subscriber,
            publisher,
            paused: false,
        }
    }

    /// The subscribed handler identity.
    pub fn subscriber(&self) -> &Subscriber<M, R> {
        &self.subscriber
    }

    /// The publisher filter; `None` for a broadcast subscription.
    pub fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }

    /// True if this registration is excluded from dispatch.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True for a subscription without publisher filter.
    pub fn is_broadcast(&self) -> bool {
        self.publisher.is_none()
    }

    /// Returns a copy of this record with the given pause flag.
    #[must_use]
    pub fn with_paused(&self, paused: bool) -> Self {
        Self {
            subscriber: self.subscriber.clone(),
            publisher: self.publisher.clone(),
            paused,
        }
    }

    /// True if the record stores exactly this `(subscriber, publisher)` pair.
    pub fn is_pair(&self, subscriber: &Subscriber<M, R>, publisher: Option<&Publisher>) -> bool {
        self.subscriber == *subscriber && self.publisher.as_ref() == publisher
    }

    /// True if a publish call made with `publisher` should reach this record.
    pub fn accepts(&self, publisher: Option<&Publisher>) -> bool {
        if self.paused {
            return false;
        }
        match (&self.publisher, publisher) {
            (None, _) => true,
            (Some(filter), Some(call)) => filter == call,
            (Some(_), None) => false,
        }
    }
}

impl<M, R> Clone for Registration<M, R> {
    fn clone(&self) -> Self {
        self.with_paused(self.paused)
    }
}

impl<M, R> PartialEq for Registration<M, R> {
    fn eq(&self, other: &Self) -> bool {
        self.subscriber == other.subscriber
            && self.publisher == other.publisher
            && self.paused == other.paused
    }
}

impl<M, R> fmt::Debug for Registration<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("subscriber", &self.subscriber)
            .field("publisher", &self.publisher)
            .field("paused", &self.paused)
            .finish()
    }
}
