//! # Example: log_writer
//!
//! Attaches the built-in [`LogWriter`] handler and prints deliveries through
//! `tracing_subscriber`.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use std::sync::Arc;

use eventcast::{Event, HandlerError, HandlerRef, LogWriter};

#[derive(Debug)]
#[allow(dead_code)]
struct Order {
    id: u32,
    total_cents: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), HandlerError> {
    tracing_subscriber::fmt()
        .with_env_filter("eventcast=debug")
        .init();

    let writer: HandlerRef<Order, ()> = Arc::new(LogWriter::new());

    let mut orders: Event<Order> = Event::new("orders");
    orders.subscribe(writer.clone());
    orders.subscribe_from(writer, "webhook");

    orders
        .publish(Order {
            id: 7,
            total_cents: 1_250,
        })
        .await?;
    orders
        .publish_from(
            Order {
                id: 8,
                total_cents: 990,
            },
            "webhook",
        )
        .await?;

    Ok(())
}
