//! Periodic session re-probe while authenticated.

use std::sync::{Mutex, Weak};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::AbortHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Receiver of keep-alive ticks.
#[async_trait]
pub trait SessionRefreshHandler: Send + Sync {
    async fn on_keep_alive_tick(&self);
}

/// Keep-alive timer.
///
/// The spawned loop holds only a weak reference to its handler and ends on
/// its own once the handler is dropped.
pub struct SessionKeepAlive {
    interval: Duration,
    task: Mutex<Option<AbortHandle>>,
}

impl SessionKeepAlive {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking every `interval`, first tick one interval from now.
    ///
    /// Restarts the loop if one is already running. A zero interval leaves
    /// the timer stopped.
    pub fn start(&self, handler: Weak<dyn SessionRefreshHandler>) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = task.take() {
            existing.abort();
        }
        if self.interval.is_zero() {
            warn!("keep-alive interval is zero, timer not started");
            return;
        }

        let period = self.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(handler) = handler.upgrade() else {
                    debug!("keep-alive handler dropped, stopping loop");
                    break;
                };
                debug!("keep-alive tick");
                handler.on_keep_alive_tick().await;
            }
        });

        *task = Some(handle.abort_handle());
        debug!(interval_secs = period.as_secs(), "keep-alive started");
    }

    /// Stop the loop. Returns `true` if one was running.
    pub fn stop(&self) -> bool {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        match task.take() {
            Some(handle) => {
                handle.abort();
                debug!("keep-alive stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        let task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        task.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SessionKeepAlive {
    fn drop(&mut self) {
        self.stop();
    }
}
