//! # Identity wrappers.
//!
//! [`Publisher`] and [`Subscriber`] normalize a raw name or handler into a
//! comparable, hashable-by-value identity. Both compare through an identity
//! string `<tag>:<name>`, so two independently built wrappers with the same
//! name are equal while remaining distinct instances.
//!
//! ```text
//! Publisher::new("x")         ──► id "publisher:x"
//! Subscriber::new(handler)    ──► id "subscriber:<handler.name()>"
//! ```

mod publisher;
mod subscriber;

pub use publisher::Publisher;
pub use subscriber::Subscriber;
