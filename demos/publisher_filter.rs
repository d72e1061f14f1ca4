//! # Example: publisher_filter
//!
//! Demonstrates publisher filters, unsubscribe and pause/resume.
//!
//! ## Flow
//! ```text
//! Event "E"
//!     ├─► A (broadcast)
//!     ├─► B (from "x")
//!     │
//!     ├─► publish("m")          ──► [A]
//!     ├─► publish_from("m","x") ──► [A, B]
//!     ├─► publish_from("m","y") ──► [A]
//!     ├─► pause(["x"])          ──► publish_from("m","x") ──► [A]
//!     └─► unsubscribe(A)        ──► publish_from("m","x") ──► [B]   (after resume)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example publisher_filter
//! ```

use eventcast::{Delivery, Envelope, Event, HandlerError, Publisher, Subscriber};

fn named(tag: &'static str) -> Subscriber<&'static str, String> {
    Subscriber::from_fn(tag, move |env: Envelope<&'static str>| async move {
        let from = env.publisher().map(Publisher::name).unwrap_or("<none>");
        Ok::<_, HandlerError>(format!("{tag} got {} from {from}", env.message()))
    })
}

fn show(label: &str, d: &Delivery<String>) {
    match d.results() {
        Some(results) => {
            let lines: Vec<_> = results
                .iter()
                .map(|r| r.as_deref().unwrap_or("<error>"))
                .collect();
            println!("{label:<28} => {lines:?}");
        }
        None => println!("{label:<28} => <disabled>"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), HandlerError> {
    let mut event: Event<&'static str, String> = Event::new("E");
    let a = event.subscribe(named("A"));
    event.subscribe_from(named("B"), "x");

    show("publish(m)", &event.publish("m").await?);
    show("publish_from(m, x)", &event.publish_from("m", "x").await?);
    show("publish_from(m, y)", &event.publish_from("m", "y").await?);

    event.pause(["x"]);
    show("paused x, publish_from(m, x)", &event.publish_from("m", "x").await?);
    event.resume(["x"]);

    event.unsubscribe(&a);
    show("without A, publish_from(m,x)", &event.publish_from("m", "x").await?);

    Ok(())
}
