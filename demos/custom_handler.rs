//! # Custom Handler Example
//!
//! Shows how to implement [`Handle`] on your own type to keep state across
//! deliveries, and how name-based identity drives unsubscribe.
//!
//! The example counts:
//! - Total deliveries
//! - Deliveries signed by a publisher
//!
//! ## Run
//! ```bash
//! cargo run --example custom_handler
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use async_trait::async_trait;
use eventcast::{Envelope, Event, Handle, HandlerError, HandlerRef, Subscriber};

struct MetricsHandler {
    total: AtomicU64,
    signed: AtomicU64,
}

impl MetricsHandler {
    fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            signed: AtomicU64::new(0),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Metrics:");
        println!(" ├─► Total:  {}", self.total.load(Ordering::Relaxed));
        println!(" └─► Signed: {}", self.signed.load(Ordering::Relaxed));
    }
}

#[async_trait]
impl Handle<u64, u64> for MetricsHandler {
    async fn handle(&self, env: Envelope<u64>) -> Result<u64, HandlerError> {
        if env.publisher().is_some() {
            self.signed.fetch_add(1, Ordering::Relaxed);
        }
        Ok(self.total.fetch_add(1, Ordering::Relaxed) + env.message())
    }

    fn name(&self) -> &str {
        "metrics"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), HandlerError> {
    let metrics = Arc::new(MetricsHandler::new());
    let handler: HandlerRef<u64, u64> = metrics.clone();

    let mut ticks: Event<u64, u64> = Event::new("ticks");
    ticks.subscribe(handler.clone());
    ticks.subscribe_from(handler, "scheduler");

    for i in 0..3 {
        ticks.publish(i).await?;
        ticks.publish_from(i, "scheduler").await?;
    }
    metrics.print_stats();

    // Any handler named "metrics" identifies the same subscriber.
    let alias: Subscriber<u64, u64> =
        Subscriber::from_fn("metrics", |_env: Envelope<u64>| async { Ok::<_, HandlerError>(0) });
    let removed = ticks.unsubscribe(&alias);
    println!();
    println!("removed {removed} broadcast registration(s); {} left", ticks.len());

    Ok(())
}
