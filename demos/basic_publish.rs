//! # Example: basic_publish
//!
//! Minimal broadcast event: two subscribers, one publish, ordered results.
//!
//! Shows how to:
//! - Register closures with [`Event::subscribe_fn`].
//! - Publish a message and read the per-subscriber results.
//! - Disable the event and observe [`Delivery::Disabled`].
//!
//! ## Flow
//! ```text
//! Event "greetings"
//!     ├─► subscribe_fn("shout")
//!     ├─► subscribe_fn("whisper")
//!     └─► publish("hello") ──► ["HELLO", "hello..."]
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_publish
//! ```

use eventcast::{Delivery, Envelope, Event, HandlerError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut greetings: Event<String, String> = Event::new("greetings");

    greetings.subscribe_fn("shout", |env: Envelope<String>| async move {
        Ok::<_, HandlerError>(env.message().to_uppercase())
    });
    greetings.subscribe_fn("whisper", |env: Envelope<String>| async move {
        Ok::<_, HandlerError>(format!("{}...", env.message().to_lowercase()))
    });

    match greetings.publish("Hello".to_string()).await? {
        Delivery::Delivered(results) => {
            for (i, res) in results.iter().enumerate() {
                println!("[result] #{i} {res:?}");
            }
        }
        Delivery::Disabled => println!("[disabled]"),
    }

    greetings.disable();
    let after = greetings.publish("ignored".to_string()).await?;
    println!("[after-disable] disabled={}", after.is_disabled());

    Ok(())
}
