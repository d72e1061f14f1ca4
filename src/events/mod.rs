//! Events: the fan-out point and its bookkeeping.
//!
//! This module groups the event **data model** and the **dispatch** entry points.
//!
//! ## Contents
//! - [`Event`] named fan-out point (subscribe / unsubscribe / publish / enable / pause)
//! - [`Registration`] one `(subscriber, publisher filter, paused)` record
//! - [`Delivery`] result of a publish call (`Disabled` vs `Delivered`)
//! - [`subscribe`] free-standing registration helper
//!
//! See `dispatch/mod.rs` for how matched registrations are run.

mod delivery;
mod event;
mod registration;

pub use delivery::Delivery;
pub use event::{subscribe, Event};
pub use registration::Registration;
