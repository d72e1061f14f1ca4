//! # Named fan-out point.
//!
//! An [`Event`] owns an ordered list of [`Registration`]s, an enabled flag and a
//! dispatch runner. Publishing filters the registrations against the call's
//! publisher, builds one [`Invocation`](crate::Invocation) per match and hands
//! them to the runner.
//!
//! ## Dispatch
//! ```text
//! publish(message, publisher?)
//!   ├─ disabled?            ──► Delivery::Disabled
//!   ├─ for reg in registrations (insertion order):
//!   │     !paused && (reg.publisher == None || reg.publisher == publisher)
//!   │        └─► Invocation(Envelope { message, publisher, event })
//!   ├─ no match             ──► Delivery::Delivered([])   (runner not called)
//!   └─ runner.run(invocations) ──► Delivery::Delivered([r1, r2, ...])
//! ```
//!
//! ## Rules
//! - A call without publisher reaches only broadcast registrations.
//! - A call with publisher `P` reaches broadcast registrations and those filtered on `P`.
//! - Results are in registration order regardless of completion order.
//! - The same subscriber may be registered any number of times; each entry dispatches.
//! - Mutation needs `&mut Event`, so the list cannot change under an in-flight publish.
//!   There is no internal locking; wrap the event yourself to share it across tasks.
//!
//! ## Example
//! ```rust
//! use eventcast::{Delivery, Envelope, Event, HandlerError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), HandlerError> {
//! let mut orders: Event<u32, String> = Event::new("orders");
//!
//! orders.subscribe_fn("audit", |env: Envelope<u32>| async move {
//!     Ok::<_, HandlerError>(format!("audit saw #{}", env.message()))
//! });
//! orders.subscribe_fn_from("billing", "webhook", |env: Envelope<u32>| async move {
//!     Ok::<_, HandlerError>(format!("billing saw #{}", env.message()))
//! });
//!
//! let d = orders.publish(7).await?;
//! assert_eq!(d, Delivery::Delivered(vec![Ok("audit saw #7".to_string())]));
//!
//! let d = orders.publish_from(8, "webhook").await?;
//! assert_eq!(d.len(), 2);
//!
//! orders.disable();
//! assert!(orders.publish(9).await?.is_disabled());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dispatch::{Dispatch, DispatchConfig, Invocation, Runner};
use crate::error::HandlerError;
use crate::events::{Delivery, Registration};
use crate::handlers::Envelope;
use crate::identity::{Publisher, Subscriber};

/// Registers `subscriber` on `event`, optionally filtered on `publisher`.
///
/// Free-standing form of [`Event::subscribe`] / [`Event::subscribe_from`];
/// returns the registered subscriber.
pub fn subscribe<M, R>(
    event: &mut Event<M, R>,
    subscriber: impl Into<Subscriber<M, R>>,
    publisher: Option<Publisher>,
) -> Subscriber<M, R>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
{
    event.register(subscriber.into(), publisher)
}

/// Named async event emitter.
pub struct Event<M, R = ()> {
    name: Arc<str>,
    registrations: Vec<Registration<M, R>>,
    enabled: bool,
    runner: Arc<dyn Dispatch<R>>,
}

impl<M, R> Event<M, R>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
{
    /// Name used by [`Event::default`].
    pub const DEFAULT_NAME: &'static str = "Event";

    /// Creates an enabled event with no registrations and the default [`Runner`].
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            registrations: Vec::new(),
            enabled: true,
            runner: Arc::new(Runner::default()),
        }
    }

    /// Creates an event whose default [`Runner`] uses `cfg`.
    pub fn with_config(name: impl Into<Arc<str>>, cfg: DispatchConfig) -> Self {
        Self::new(name).with_runner(Runner::new(cfg))
    }

    /// Replaces the dispatch runner.
    #[must_use]
    pub fn with_runner(mut self, runner: impl Dispatch<R>) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    /// Event name; fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    // === State ===

    /// True unless the event was disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables dispatch (idempotent).
    pub fn enable(&mut self) -> &mut Self {
        self.set_enabled(true)
    }

    /// Disables dispatch (idempotent); publish then returns [`Delivery::Disabled`].
    pub fn disable(&mut self) -> &mut Self {
        self.set_enabled(false)
    }

    /// Flips the enabled flag.
    pub fn toggle(&mut self) -> &mut Self {
        self.set_enabled(!self.enabled)
    }

    fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        if self.enabled != enabled {
            debug!(event = %self.name, enabled, "event state changed");
        }
        self.enabled = enabled;
        self
    }

    // === Registration ===

    /// Registrations in dispatch order.
    pub fn registrations(&self) -> &[Registration<M, R>] {
        &self.registrations
    }

    /// Number of registrations (paused ones included).
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registers a broadcast subscription and returns the subscriber.
    pub fn subscribe(&mut self, subscriber: impl Into<Subscriber<M, R>>) -> Subscriber<M, R> {
        self.register(subscriber.into(), None)
    }

    /// Registers a subscription filtered on `publisher` and returns the subscriber.
    pub fn subscribe_from(
        &mut self,
        subscriber: impl Into<Subscriber<M, R>>,
        publisher: impl Into<Publisher>,
    ) -> Subscriber<M, R> {
        self.register(subscriber.into(), Some(publisher.into()))
    }

    /// Wraps `f` as a subscriber named `name` and registers it as broadcast.
    pub fn subscribe_fn<F, Fut>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        f: F,
    ) -> Subscriber<M, R>
    where
        F: Fn(Envelope<M>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
    {
        self.register(Subscriber::from_fn(name, f), None)
    }

    /// Wraps `f` as a subscriber named `name` and registers it filtered on `publisher`.
    pub fn subscribe_fn_from<F, Fut>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        publisher: impl Into<Publisher>,
        f: F,
    ) -> Subscriber<M, R>
    where
        F: Fn(Envelope<M>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
    {
        self.register(Subscriber::from_fn(name, f), Some(publisher.into()))
    }

    fn register(
        &mut self,
        subscriber: Subscriber<M, R>,
        publisher: Option<Publisher>,
    ) -> Subscriber<M, R> {
        debug!(
            event = %self.name,
            subscriber = subscriber.name(),
            publisher = ?publisher.as_ref().map(Publisher::name),
            "subscribed"
        );
        self.registrations
            .push(Registration::new(subscriber.clone(), publisher));
        subscriber
    }

    /// Removes every broadcast registration of `subscriber`.
    ///
    /// Returns the number of removed entries; `0` is not an error.
    pub fn unsubscribe(&mut self, subscriber: &Subscriber<M, R>) -> usize {
        self.remove_where(|reg| reg.is_pair(subscriber, None))
    }

    /// Removes every registration of `subscriber` filtered on `publisher`.
    pub fn unsubscribe_from(
        &mut self,
        subscriber: &Subscriber<M, R>,
        publisher: impl Into<Publisher>,
    ) -> usize {
        let publisher = publisher.into();
        self.remove_where(|reg| reg.is_pair(subscriber, Some(&publisher)))
    }

    /// Removes every registration whose subscriber is named `name` and whose
    /// filter equals `publisher`.
    pub fn unsubscribe_named(&mut self, name: &str, publisher: Option<Publisher>) -> usize {
        self.remove_where(|reg| {
            reg.subscriber().name() == name && reg.publisher() == publisher.as_ref()
        })
    }

    fn remove_where<F>(&mut self, matches: F) -> usize
    where
        F: Fn(&Registration<M, R>) -> bool,
    {
        let before = self.registrations.len();
        self.registrations.retain(|reg| !matches(reg));
        let removed = before - self.registrations.len();
        debug!(event = %self.name, removed, "unsubscribed");
        removed
    }

    // === Pause / resume ===

    /// Pauses every registration filtered on one of `publishers`.
    ///
    /// Returns the number of records whose flag changed.
    pub fn pause<I, P>(&mut self, publishers: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<Publisher>,
    {
        let set: HashSet<Publisher> = publishers.into_iter().map(Into::into).collect();
        self.mark_filtered(&set, true)
    }

    /// Resumes every registration filtered on one of `publishers`.
    pub fn resume<I, P>(&mut self, publishers: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<Publisher>,
    {
        let set: HashSet<Publisher> = publishers.into_iter().map(Into::into).collect();
        self.mark_filtered(&set, false)
    }

    /// Pauses every broadcast registration.
    pub fn pause_broadcast(&mut self) -> usize {
        self.mark(true, Registration::is_broadcast)
    }

    /// Resumes every broadcast registration.
    pub fn resume_broadcast(&mut self) -> usize {
        self.mark(false, Registration::is_broadcast)
    }

    /// Sets the pause flag on every registration storing this exact pair.
    pub fn set_paused(
        &mut self,
        subscriber: &Subscriber<M, R>,
        publisher: Option<Publisher>,
        paused: bool,
    ) -> usize {
        self.mark(paused, |reg| reg.is_pair(subscriber, publisher.as_ref()))
    }

    fn mark_filtered(&mut self, publishers: &HashSet<Publisher>, paused: bool) -> usize {
        self.mark(paused, |reg| {
            reg.publisher().is_some_and(|p| publishers.contains(p))
        })
    }

    fn mark<F>(&mut self, paused: bool, select: F) -> usize
    where
        F: Fn(&Registration<M, R>) -> bool,
    {
        let mut changed = 0;
        for reg in self.registrations.iter_mut() {
            if reg.is_paused() != paused && select(&*reg) {
                *reg = reg.with_paused(paused);
                changed += 1;
            }
        }
        debug!(event = %self.name, paused, changed, "pause flags updated");
        changed
    }

    // === Dispatch ===

    /// Publishes `message` without publisher; only broadcast registrations are reached.
    ///
    /// # Errors
    /// Only in [`FailureMode::Propagate`](crate::FailureMode::Propagate): the first handler failure.
    pub async fn publish(&self, message: M) -> Result<Delivery<R>, HandlerError> {
        self.dispatch(message, None).await
    }

    /// Publishes `message` signed by `publisher`; broadcast registrations and
    /// registrations filtered on an equal publisher are reached.
    ///
    /// # Errors
    /// Only in [`FailureMode::Propagate`](crate::FailureMode::Propagate): the first handler failure.
    pub async fn publish_from(
        &self,
        message: M,
        publisher: impl Into<Publisher>,
    ) -> Result<Delivery<R>, HandlerError> {
        self.dispatch(message, Some(publisher.into())).await
    }

    async fn dispatch(
        &self,
        message: M,
        publisher: Option<Publisher>,
    ) -> Result<Delivery<R>, HandlerError> {
        if !self.enabled {
            trace!(event = %self.name, "event disabled; publish skipped");
            return Ok(Delivery::Disabled);
        }

        let invocations = self.invocations(message, publisher.as_ref());
        trace!(
            event = %self.name,
            publisher = ?publisher.as_ref().map(Publisher::name),
            matched = invocations.len(),
            "publishing"
        );

        if invocations.is_empty() {
            return Ok(Delivery::Delivered(Vec::new()));
        }
        self.runner.run(invocations).await.map(Delivery::Delivered)
    }

    fn invocations(&self, message: M, publisher: Option<&Publisher>) -> Vec<Invocation<R>> {
        let message = Arc::new(message);
        self.registrations
            .iter()
            .filter(|reg| reg.accepts(publisher))
            .map(|reg| {
                let envelope =
                    Envelope::new(Arc::clone(&message), publisher.cloned(), Arc::clone(&self.name));
                reg.subscriber().invoke(envelope)
            })
            .collect()
    }
}

impl<M, R> Default for Event<M, R>
where
    M: Send + Sync + 'static,
    R: Send + 'static,
{
    /// Creates an event named [`Event::DEFAULT_NAME`].
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl<M, R> fmt::Debug for Event<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("registrations", &self.registrations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::Barrier;

    use crate::dispatch::DispatchConfig;
    use crate::policies::FailureMode;

    type Ev = Event<&'static str, String>;

    /// Handler answering `"<tag>|<message>|<publisher or ->|<event>"`.
    fn tagger(tag: &'static str) -> Subscriber<&'static str, String> {
        Subscriber::from_fn(tag, move |env: Envelope<&'static str>| async move {
            Ok::<_, HandlerError>(format!(
                "{}|{}|{}|{}",
                tag,
                env.message(),
                env.publisher().map(Publisher::name).unwrap_or("-"),
                env.event()
            ))
        })
    }

    fn sleeper(tag: &'static str, ms: u64) -> Subscriber<&'static str, String> {
        Subscriber::from_fn(tag, move |_env: Envelope<&'static str>| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok::<_, HandlerError>(tag.to_string())
        })
    }

    fn values(d: Delivery<String>) -> Vec<String> {
        d.into_values()
            .expect("event should be enabled")
            .expect("all handlers should succeed")
    }

    // === State ===

    #[test]
    fn test_default_name_and_enabled() {
        let ev: Ev = Event::default();
        assert_eq!(ev.name(), "Event");
        assert!(ev.is_enabled());
        assert!(ev.is_empty());
    }

    #[test]
    fn test_disable() {
        let mut ev: Ev = Event::new("test_disable");
        ev.disable();
        assert!(!ev.is_enabled());
        ev.disable();
        assert!(!ev.is_enabled());
        ev.enable().enable();
        assert!(ev.is_enabled());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut ev: Ev = Event::new("test_toggle");
        ev.toggle();
        assert!(!ev.is_enabled());
        ev.toggle();
        assert!(ev.is_enabled());
    }

    // === Registration ===

    #[test]
    fn test_subscribe_n_times_keeps_call_order() {
        let mut ev: Ev = Event::new("n_times");
        let a = ev.subscribe(tagger("a"));
        ev.subscribe_from(tagger("a"), "x");
        ev.subscribe(tagger("b"));
        ev.subscribe(tagger("a"));

        let names: Vec<_> = ev
            .registrations()
            .iter()
            .map(|r| (r.subscriber().name(), r.publisher().map(Publisher::name)))
            .collect();
        assert_eq!(
            names,
            vec![("a", None), ("a", Some("x")), ("b", None), ("a", None)]
        );
        assert_eq!(ev.registrations()[0].subscriber(), &a);
    }

    #[test]
    fn test_builder_sugar_returns_registered_subscriber() {
        let mut ev: Ev = Event::new("sugar");
        let nice = ev.subscribe_fn_from(
            "nice_handler",
            "my_choice",
            |_e: Envelope<&'static str>| async { Ok::<_, HandlerError>(String::new()) },
        );
        assert_eq!(ev.len(), 1);
        assert_eq!(ev.registrations()[0].publisher().unwrap(), "my_choice");
        assert_eq!(ev.registrations()[0].subscriber(), &nice);

        let standalone = subscribe(&mut ev, tagger("standalone"), None);
        assert_eq!(ev.len(), 2);
        assert!(ev.registrations()[1].is_broadcast());
        assert!(ev.registrations()[1].subscriber().ptr_eq(&standalone));
    }

    #[test]
    fn test_unsubscribe_removes_only_matching_pairs() {
        let mut ev: Ev = Event::new("unsubscribe_me");
        ev.subscribe(tagger("a"));
        ev.subscribe_from(tagger("a"), "x");
        ev.subscribe(tagger("b"));
        ev.subscribe(tagger("a"));

        assert_eq!(ev.unsubscribe(&tagger("a")), 2);
        assert_eq!(ev.len(), 2);
        assert_eq!(ev.registrations()[0].publisher().unwrap(), "x");
        assert_eq!(ev.registrations()[1].subscriber().name(), "b");

        assert_eq!(ev.unsubscribe_from(&tagger("a"), "y"), 0);
        assert_eq!(ev.unsubscribe_from(&tagger("a"), "x"), 1);
        assert_eq!(ev.unsubscribe(&tagger("nobody")), 0);
        assert_eq!(ev.len(), 1);
    }

    #[test]
    fn test_unsubscribe_by_equal_but_distinct_instance() {
        let mut ev: Ev = Event::new("alias");
        let original = ev.subscribe(tagger("i_will_do_it"));
        let alias = tagger("i_will_do_it");
        assert!(!alias.ptr_eq(&original));

        assert_eq!(ev.unsubscribe(&alias), 1);
        assert!(ev.is_empty());
    }

    #[test]
    fn test_unsubscribe_named() {
        let mut ev: Ev = Event::new("named");
        ev.subscribe(tagger("a"));
        ev.subscribe_from(tagger("a"), "x");
        assert_eq!(ev.unsubscribe_named("a", Some(Publisher::new("x"))), 1);
        assert_eq!(ev.unsubscribe_named("a", None), 1);
        assert!(ev.is_empty());
    }

    // === Dispatch ===

    #[tokio::test]
    async fn test_publish_to_all() {
        let mut ev: Ev = Event::new("publish_to_all");
        ev.subscribe(tagger("first"));
        ev.subscribe(tagger("second"));

        let out = values(ev.publish("test message").await.unwrap());
        assert_eq!(
            out,
            vec![
                "first|test message|-|publish_to_all",
                "second|test message|-|publish_to_all"
            ]
        );
    }

    #[tokio::test]
    async fn test_publish_to_specific() {
        let mut ev: Ev = Event::new("publish_to_secret");
        ev.subscribe_from(tagger("omitted"), "omit");
        ev.subscribe_from(tagger("received"), "secret");

        let out = values(ev.publish_from("secret message", "secret").await.unwrap());
        assert_eq!(out, vec!["received|secret message|secret|publish_to_secret"]);
    }

    #[tokio::test]
    async fn test_publish_to_all_but_specific() {
        let mut ev: Ev = Event::new("all_but_omit");
        ev.subscribe_from(tagger("omitted"), Publisher::new("omit"));
        ev.subscribe(tagger("received"));

        let out = values(ev.publish_from("m", Publisher::new("broadcast")).await.unwrap());
        assert_eq!(out, vec!["received|m|broadcast|all_but_omit"]);
    }

    #[tokio::test]
    async fn test_broadcast_and_filter_scenario() {
        let mut ev: Ev = Event::new("E");
        let a = ev.subscribe(tagger("A"));
        ev.subscribe_from(tagger("B"), "x");

        assert_eq!(values(ev.publish("m").await.unwrap()), vec!["A|m|-|E"]);
        assert_eq!(
            values(ev.publish_from("m", "x").await.unwrap()),
            vec!["A|m|x|E", "B|m|x|E"]
        );
        assert_eq!(values(ev.publish_from("m", "y").await.unwrap()), vec!["A|m|y|E"]);

        ev.unsubscribe(&a);
        assert_eq!(values(ev.publish_from("m", "x").await.unwrap()), vec!["B|m|x|E"]);
    }

    #[tokio::test]
    async fn test_results_follow_registration_order() {
        let mut ev: Ev = Event::new("ordering");
        ev.subscribe(sleeper("slow", 60));
        ev.subscribe(sleeper("fast", 1));
        ev.subscribe(sleeper("medium", 20));

        assert_eq!(values(ev.publish("m").await.unwrap()), vec!["slow", "fast", "medium"]);
    }

    #[tokio::test]
    async fn test_handlers_run_concurrently() {
        let barrier = Arc::new(Barrier::new(2));
        let mut ev: Event<(), ()> = Event::new("concurrent");
        for name in ["left", "right"] {
            let barrier = Arc::clone(&barrier);
            ev.subscribe_fn(name, move |_e: Envelope<()>| {
                let barrier = Arc::clone(&barrier);
                async move {
                    barrier.wait().await;
                    Ok::<(), HandlerError>(())
                }
            });
        }

        let d = tokio::time::timeout(Duration::from_secs(5), ev.publish(()))
            .await
            .expect("handlers must not run one after another")
            .unwrap();
        assert_eq!(d, Delivery::Delivered(vec![Ok(()), Ok(())]));
    }

    #[tokio::test]
    async fn test_disabled_is_distinct_from_no_match() {
        let mut ev: Ev = Event::new("sentinel");
        assert_eq!(
            ev.publish("m").await.unwrap(),
            Delivery::Delivered(Vec::new())
        );

        ev.subscribe_from(tagger("filtered"), "x");
        assert_eq!(
            ev.publish("m").await.unwrap(),
            Delivery::Delivered(Vec::new())
        );

        ev.disable();
        assert_eq!(ev.publish_from("m", "x").await.unwrap(), Delivery::Disabled);
        assert!(!ev.is_enabled());

        ev.toggle();
        assert_eq!(values(ev.publish_from("m", "x").await.unwrap()).len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_captured_in_place_by_default() {
        let mut ev: Ev = Event::new("capture");
        ev.subscribe(tagger("ok"));
        ev.subscribe_fn("broken", |_e: Envelope<&'static str>| async {
            Err::<String, _>(HandlerError::fail("nope"))
        });
        ev.subscribe(tagger("after"));

        let results = ev.publish("m").await.unwrap().into_results().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref(), Ok("ok|m|-|capture"));
        assert_eq!(results[1], Err(HandlerError::fail("nope")));
        assert_eq!(results[2].as_deref(), Ok("after|m|-|capture"));
    }

    #[tokio::test]
    async fn test_propagate_mode_returns_error() {
        let cfg = DispatchConfig {
            failure: FailureMode::Propagate,
            ..DispatchConfig::default()
        };
        let mut ev: Ev = Event::with_config("propagate", cfg);
        ev.subscribe(tagger("ok"));
        ev.subscribe_fn("broken", |_e: Envelope<&'static str>| async {
            Err::<String, _>(HandlerError::fail("nope"))
        });

        assert_eq!(
            ev.publish("m").await.unwrap_err(),
            HandlerError::fail("nope")
        );
    }

    // === Pause / resume ===

    #[tokio::test]
    async fn test_pause_excludes_without_removing() {
        let mut ev: Ev = Event::new("pause");
        ev.subscribe(tagger("A"));
        ev.subscribe_from(tagger("B"), "x");
        ev.subscribe_from(tagger("C"), "y");

        assert_eq!(ev.pause(["x", "y"]), 2);
        assert_eq!(ev.pause(["x"]), 0);
        assert_eq!(ev.len(), 3);
        assert_eq!(values(ev.publish_from("m", "x").await.unwrap()), vec!["A|m|x|pause"]);

        assert_eq!(ev.resume([Publisher::new("x")]), 1);
        assert_eq!(
            values(ev.publish_from("m", "x").await.unwrap()),
            vec!["A|m|x|pause", "B|m|x|pause"]
        );
        assert!(ev.registrations()[2].is_paused());
    }

    #[tokio::test]
    async fn test_pause_broadcast_and_single_pair() {
        let mut ev: Ev = Event::new("pause_pair");
        let a = ev.subscribe(tagger("A"));
        let b = ev.subscribe_from(tagger("B"), "x");

        assert_eq!(ev.pause_broadcast(), 1);
        assert_eq!(values(ev.publish_from("m", "x").await.unwrap()), vec!["B|m|x|pause_pair"]);

        assert_eq!(ev.set_paused(&b, Some(Publisher::new("x")), true), 1);
        assert_eq!(ev.publish_from("m", "x").await.unwrap(), Delivery::Delivered(Vec::new()));

        assert_eq!(ev.resume_broadcast(), 1);
        assert_eq!(ev.set_paused(&a, None, false), 0);
        assert_eq!(values(ev.publish("m").await.unwrap()), vec!["A|m|-|pause_pair"]);
    }
}
