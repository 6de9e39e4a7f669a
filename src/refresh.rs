use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::time_client::FetchOutcome;

/// How often the screen refreshes itself while auto-refresh is on.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Handle to the periodic refresh task.
///
/// [`stop`](AutoRefresh::stop) (or dropping the handle) halts future ticks; a
/// fetch already underway still runs to completion and its outcome is still
/// delivered.
pub struct AutoRefresh {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AutoRefresh {
    /// Spawns a task that runs `fetch` every `period` and delivers each
    /// outcome into `outcomes`.
    ///
    /// The task is generic over the fetch operation, so it knows nothing
    /// about HTTP: the screen hands it a closure around
    /// [`TimeClient::fetch`](crate::time_client::TimeClient::fetch), tests
    /// hand it stubs. The first interval tick (which fires immediately) is
    /// skipped because the screen already fetches once on startup.
    pub fn start<F, Fut>(
        period: Duration,
        outcomes: mpsc::Sender<FetchOutcome>,
        mut fetch: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        let (cancel, mut cancelled) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                tokio::select! {
                    // checked first so that stopping wins over a tick due at
                    // the same instant
                    biased;

                    changed = cancelled.changed() => {
                        if changed.is_err() || *cancelled.borrow_and_update() {
                            info!("Auto-refresh stopped");
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        debug!("Auto-refresh tick");
                        // once underway, the fetch runs to completion; the
                        // flag is only re-read between cycles
                        let outcome = fetch().await;
                        if outcomes.send(outcome).await.is_err() {
                            // the state owner hung up
                            break;
                        }
                    }
                }
            }
        });

        Self { cancel, task }
    }

    /// Stops future scheduled fetches. A fetch already in flight still
    /// completes and its outcome is still delivered.
    pub fn stop(&self) {
        let _ = self.cancel.send(true);
    }

    /// Waits for the task to wind down.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::time::{advance, sleep};

    use super::*;
    use crate::error::FetchError;

    const PERIOD: Duration = Duration::from_secs(30);

    // Fetch stub that counts its calls; the outcome itself does not matter
    // to the scheduler, so a canned error keeps the fixture small.
    fn counting_fetch(
        counter: Arc<AtomicUsize>,
    ) -> impl FnMut() -> std::future::Ready<FetchOutcome> {
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(Err(FetchError::Timeout))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_one_outcome_per_tick() {
        let (tx, mut rx) = mpsc::channel(8);
        let counter = Arc::new(AtomicUsize::new(0));
        let auto = AutoRefresh::start(PERIOD, tx, counting_fetch(counter.clone()));

        // with the clock paused, recv() lets the runtime auto-advance to the
        // next tick deadline
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        auto.stop();
        auto.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_future_scheduled_fetches() {
        let (tx, mut rx) = mpsc::channel(8);
        let counter = Arc::new(AtomicUsize::new(0));
        let auto = AutoRefresh::start(PERIOD, tx, counting_fetch(counter.clone()));

        // one scheduled fetch completes...
        assert!(rx.recv().await.is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // ...then the flag flips and no further fetch ever runs
        auto.stop();
        auto.join().await;
        advance(PERIOD * 4).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_before_the_first_tick_means_no_fetch_at_all() {
        let (tx, mut rx) = mpsc::channel(8);
        let counter = Arc::new(AtomicUsize::new(0));
        let auto = AutoRefresh::start(PERIOD, tx, counting_fetch(counter.clone()));

        auto.stop();
        auto.join().await;
        advance(PERIOD * 4).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_in_flight_when_stopped_still_delivers() {
        let (tx, mut rx) = mpsc::channel(8);
        let counter = Arc::new(AtomicUsize::new(0));
        let slow_fetch = {
            let counter = counter.clone();
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async {
                    sleep(Duration::from_secs(45)).await;
                    Err(FetchError::Timeout)
                }
            }
        };
        let auto = AutoRefresh::start(PERIOD, tx, slow_fetch);

        // let the task park on its first tick before touching the clock
        tokio::task::yield_now().await;

        // reach the first tick so the slow fetch is underway
        advance(PERIOD).await;
        tokio::task::yield_now().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // flip the flag mid-fetch; the outcome must still arrive
        auto.stop();
        assert!(rx.recv().await.is_some());

        auto.join().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
