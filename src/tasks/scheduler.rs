//! Refresh/Purge Scheduler
//!
//! Background task that drives the ticket refresh and the daily purge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveTime};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::cache::SharedStats;
use crate::config::Config;
use crate::tasks::{Fetcher, Purger, Schedule};

/// Timing parameters of the scheduler loop.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    /// Time between two refreshes, measured from the scheduler start
    pub refresh_interval: Duration,
    /// Local wall-clock time of the daily purge
    pub purge_time: NaiveTime,
    /// Polling granularity of the loop
    pub tick: Duration,
}

impl SchedulerSettings {
    /// Reads the scheduler settings out of the process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            refresh_interval: config.refresh_every(),
            purge_time: config.purge_time,
            tick: config.scheduler_tick(),
        }
    }
}

// == Run Guard ==
/// Allows at most one refresh in flight.
#[derive(Debug, Default, Clone)]
struct RunGuard {
    running: Arc<AtomicBool>,
}

impl RunGuard {
    fn try_acquire(&self) -> Option<RunPermit> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunPermit {
                running: self.running.clone(),
            })
    }
}

/// Releases the guard when dropped, including when the refresh task is cancelled.
struct RunPermit {
    running: Arc<AtomicBool>,
}

impl Drop for RunPermit {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Spawns the scheduler loop.
///
/// Every tick the loop checks the shutdown token, then asks the [`Schedule`]
/// whether the refresh or the purge is due. Refreshes run on their own task so
/// a slow upstream never delays the purge or shutdown; a refresh that comes
/// due while the previous one is still running is skipped. The purge runs
/// inline.
///
/// # Returns
/// A JoinHandle that completes once `shutdown` has been cancelled and the
/// loop has exited.
pub fn spawn_scheduler(
    fetcher: Fetcher,
    purger: Purger,
    stats: SharedStats,
    settings: SchedulerSettings,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting scheduler: refresh every {}s, purge daily at {}",
            settings.refresh_interval.as_secs(),
            settings.purge_time.format("%H:%M")
        );

        let mut schedule = Schedule::new(
            settings.refresh_interval,
            settings.purge_time,
            Instant::now(),
            Local::now().naive_local(),
        );
        let guard = RunGuard::default();

        let mut ticker = tokio::time::interval(settings.tick.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            if schedule.refresh_due(Instant::now()) {
                match guard.try_acquire() {
                    Some(permit) => {
                        let fetcher = fetcher.clone();
                        let shutdown = shutdown.clone();
                        tokio::spawn(async move {
                            let _permit = permit;
                            tokio::select! {
                                _ = shutdown.cancelled() => {
                                    debug!("Refresh abandoned on shutdown");
                                }
                                // Outcome is logged and recorded by the fetcher
                                _ = fetcher.run() => {}
                            }
                        });
                    }
                    None => {
                        stats.write().await.record_skip();
                        warn!("Previous refresh still running, skipping this cycle");
                    }
                }
            }

            if schedule.purge_due(Local::now().naive_local()) {
                if let Err(e) = purger.run().await {
                    error!("Daily purge failed: {}", e);
                }
                info!(
                    "Next purge at {}",
                    schedule.next_purge().format("%Y-%m-%d %H:%M")
                );
            }
        }

        info!("Scheduler stopped");
    })
}
