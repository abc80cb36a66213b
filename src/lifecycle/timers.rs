//! The desk's timed processes.
//!
//! Each function is the body of one long-lived task. They suspend only at their
//! sleeps and hold no order state across them; everything goes through the
//! [`DeskClient`]. A closed desk ends the loop.

use crate::clients::DeskClient;
use crate::order_actor::DeskError;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Creates `count` orders after `delay`, `spacing` apart, ignoring the cap.
pub async fn run_seeder(desk: DeskClient, delay: Duration, spacing: Duration, count: usize) {
    sleep(delay).await;

    for i in 0..count {
        match desk.create_order().await {
            Ok(order) => debug!(seeded = i + 1, created = order.is_some(), "Seeder tick"),
            Err(e) => {
                if stop_on(&e, "Seeder") {
                    return;
                }
            }
        }
        sleep(spacing).await;
    }
    info!(count, "Initial orders seeded");
}

/// Every `interval`, creates one order unless the desk is at its cap.
pub async fn run_generator(desk: DeskClient, interval: Duration) {
    loop {
        sleep(interval).await;

        match desk.generate_order().await {
            Ok(order) => debug!(created = order.is_some(), "Generator tick"),
            Err(e) => {
                if stop_on(&e, "Generator") {
                    return;
                }
            }
        }
    }
}

/// Every `interval`, expires the orders whose time-to-live has passed.
pub async fn run_sweeper(desk: DeskClient, interval: Duration) {
    loop {
        sleep(interval).await;

        match desk.sweep_expired(Instant::now()).await {
            Ok(expired) => debug!(expired = expired.len(), "Sweeper tick"),
            Err(e) => {
                if stop_on(&e, "Sweeper") {
                    return;
                }
            }
        }
    }
}

fn stop_on(error: &DeskError, process: &'static str) -> bool {
    match error {
        DeskError::Closed => {
            info!(process, "Desk closed, stopping");
            true
        }
        DeskError::Dropped => {
            warn!(process, error = %error, "Tick failed, retrying next cycle");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::order_actor::DeskRequest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    fn closed_desk() -> DeskClient {
        let (sender, receiver) = mpsc::channel(4);
        drop(receiver);
        DeskClient::new(sender, EventBus::default())
    }

    /// Desk stand-in that drops the reply of its first request and answers the rest empty.
    fn flaky_desk() -> (DeskClient, Arc<AtomicUsize>, JoinHandle<()>) {
        let (sender, mut receiver) = mpsc::channel(4);
        let received = Arc::new(AtomicUsize::new(0));
        let seen = received.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    continue;
                }
                match request {
                    DeskRequest::CreateOrder { respond_to, .. } => {
                        let _ = respond_to.send(None);
                    }
                    DeskRequest::SweepExpired { respond_to, .. } => {
                        let _ = respond_to.send(Vec::new());
                    }
                    _ => {}
                }
            }
        });
        (DeskClient::new(sender, EventBus::default()), received, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_generator_stops_when_desk_closed() {
        let run = run_generator(closed_desk(), Duration::from_secs(1));
        assert!(timeout(Duration::from_secs(10), run).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_stops_when_desk_closed() {
        let run = run_sweeper(closed_desk(), Duration::from_secs(1));
        assert!(timeout(Duration::from_secs(10), run).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeder_stops_early_when_desk_closed() {
        let run = run_seeder(
            closed_desk(),
            Duration::from_secs(1),
            Duration::from_secs(100),
            5,
        );
        // A full run would take over 400s of spacing.
        assert!(timeout(Duration::from_secs(10), run).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generator_keeps_ticking_after_dropped_reply() {
        let (desk, received, fake) = flaky_desk();
        let generator = tokio::spawn(run_generator(desk, Duration::from_secs(1)));

        sleep(Duration::from_millis(3500)).await;

        assert!(received.load(Ordering::SeqCst) >= 3);
        assert!(!generator.is_finished());
        generator.abort();
        fake.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_keeps_ticking_after_dropped_reply() {
        let (desk, received, fake) = flaky_desk();
        let sweeper = tokio::spawn(run_sweeper(desk, Duration::from_secs(1)));

        sleep(Duration::from_millis(3500)).await;

        assert!(received.load(Ordering::SeqCst) >= 3);
        assert!(!sweeper.is_finished());
        sweeper.abort();
        fake.abort();
    }
}
