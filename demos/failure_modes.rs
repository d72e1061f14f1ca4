//! # Example: failure_modes
//!
//! Compares the two [`FailureMode`]s and shows timeout and panic isolation.
//!
//! ## Flow
//! ```text
//! subscribers: [ok, fails, panics, sleeps 2s]
//!
//! Capture   + timeout 100ms ──► [Ok, Err(Fail), Err(Panicked), Err(Timeout)]
//! Propagate                 ──► Err(first failure)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example failure_modes
//! ```

use std::time::Duration;

use eventcast::{DispatchConfig, Envelope, Event, FailureMode, HandlerError};

fn build(cfg: DispatchConfig) -> Event<u32, u32> {
    let mut ev = Event::with_config("jobs", cfg);
    ev.subscribe_fn("ok", |env: Envelope<u32>| async move {
        Ok::<_, HandlerError>(*env.message())
    });
    ev.subscribe_fn("fails", |_env: Envelope<u32>| async move {
        Err::<u32, _>(HandlerError::fail("database unavailable"))
    });
    ev.subscribe_fn("panics", |env: Envelope<u32>| async move {
        if *env.message() > 0 {
            panic!("unexpected input");
        }
        Ok::<_, HandlerError>(0)
    });
    ev.subscribe_fn("sleeps", |env: Envelope<u32>| async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Ok::<_, HandlerError>(*env.message())
    });
    ev
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("eventcast=warn")
        .init();

    let capture = build(DispatchConfig {
        failure: FailureMode::Capture,
        timeout: Duration::from_millis(100),
        ..DispatchConfig::default()
    });
    match capture.publish(7).await {
        Ok(delivery) => {
            for res in delivery.into_results().unwrap_or_default() {
                match res {
                    Ok(v) => println!("[capture] ok={v}"),
                    Err(e) => println!("[capture] {}: {}", e.as_label(), e.as_message()),
                }
            }
        }
        Err(e) => println!("[capture] unexpected error: {e}"),
    }

    let propagate = build(DispatchConfig {
        failure: FailureMode::Propagate,
        ..DispatchConfig::default()
    });
    match propagate.publish(7).await {
        Ok(_) => println!("[propagate] unexpected success"),
        Err(e) => println!("[propagate] aborted: {e}"),
    }
}
