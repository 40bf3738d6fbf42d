//! Job Due-Times
//!
//! Tracks when the refresh and purge jobs are next due. Clocks are passed in
//! so the bookkeeping can be driven from tests.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tokio::time::Instant;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Due-time state for the refresh and purge jobs.
#[derive(Debug, Clone)]
pub struct Schedule {
    refresh_interval: Duration,
    next_refresh: Instant,
    purge_time: NaiveTime,
    next_purge: NaiveDateTime,
    last_purged: Option<NaiveDate>,
}

impl Schedule {
    /// Creates a schedule anchored at `started`.
    ///
    /// The first refresh is due at `started`; later ones every
    /// `refresh_interval` after it. The purge is due at the next occurrence of
    /// `purge_time` in local wall-clock time, today if not yet passed.
    pub fn new(
        refresh_interval: Duration,
        purge_time: NaiveTime,
        started: Instant,
        now_local: NaiveDateTime,
    ) -> Self {
        Self {
            refresh_interval: refresh_interval.max(MIN_INTERVAL),
            next_refresh: started,
            purge_time,
            next_purge: first_occurrence(purge_time, now_local),
            last_purged: None,
        }
    }

    /// Returns true when a refresh is due at `now` and advances to the next slot.
    ///
    /// Slots stay aligned to the start time. Slots that passed while nobody
    /// polled are skipped, not queued.
    pub fn refresh_due(&mut self, now: Instant) -> bool {
        if now < self.next_refresh {
            return false;
        }

        while self.next_refresh <= now {
            self.next_refresh += self.refresh_interval;
        }
        true
    }

    /// Returns true when the purge is due at `now_local` and has not already
    /// fired on that calendar day. Advances to the next occurrence strictly
    /// after `now_local` either way.
    ///
    /// An occurrence missed entirely (process stalled past midnight) fires
    /// late on the next poll and counts as that day's purge.
    pub fn purge_due(&mut self, now_local: NaiveDateTime) -> bool {
        if now_local < self.next_purge {
            return false;
        }

        self.next_purge = occurrence_after(self.purge_time, now_local);

        let today = now_local.date();
        if self.last_purged == Some(today) {
            return false;
        }
        self.last_purged = Some(today);
        true
    }

    /// When the next refresh is due.
    pub fn next_refresh(&self) -> Instant {
        self.next_refresh
    }

    /// When the next purge is due, in local wall-clock time.
    pub fn next_purge(&self) -> NaiveDateTime {
        self.next_purge
    }
}

/// `time` today if it is still ahead of (or equal to) `now`, else tomorrow.
fn first_occurrence(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today >= now {
        today
    } else {
        tomorrow_at(time, now.date())
    }
}

/// The first occurrence of `time` strictly after `now`.
fn occurrence_after(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        tomorrow_at(time, now.date())
    }
}

fn tomorrow_at(time: NaiveTime, date: NaiveDate) -> NaiveDateTime {
    date.succ_opt()
        .map(|next| next.and_time(time))
        .unwrap_or(NaiveDateTime::MAX)
}
