//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use chrono::NaiveTime;

/// Default upstream ticket listing endpoint.
pub const DEFAULT_API_URL: &str = "https://api.movidesk.com/public/v1/tickets";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Values are fixed once the process has started.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upstream ticket listing endpoint
    pub api_url: String,
    /// Token appended to upstream requests as the `token` query parameter
    pub api_token: String,
    /// Seconds between two upstream refreshes
    pub refresh_interval: u64,
    /// Local wall-clock time of the daily purge
    pub purge_time: NaiveTime,
    /// Upstream request timeout in seconds
    pub request_timeout: u64,
    /// Scheduler polling granularity in milliseconds
    pub scheduler_tick_ms: u64,
    /// Maximum number of tickets a single refresh may store
    pub max_tickets: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `TICKETS_API_URL` - Upstream endpoint (default: Movidesk public tickets API)
    /// - `TICKETS_API_TOKEN` - Upstream token (default: empty)
    /// - `REFRESH_INTERVAL` - Refresh frequency in seconds (default: 600)
    /// - `PURGE_TIME` - Daily purge time as `HH:MM` (default: 23:59)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 30)
    /// - `SCHEDULER_TICK_MS` - Scheduler polling granularity (default: 1000)
    /// - `MAX_TICKETS` - Store capacity per refresh (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            api_url: env::var("TICKETS_API_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            api_token: env::var("TICKETS_API_TOKEN")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.api_token),
            refresh_interval: parsed_var("REFRESH_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.refresh_interval),
            purge_time: env::var("PURGE_TIME")
                .ok()
                .and_then(|v| parse_time_of_day(&v))
                .unwrap_or(defaults.purge_time),
            request_timeout: parsed_var("REQUEST_TIMEOUT")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout),
            scheduler_tick_ms: parsed_var("SCHEDULER_TICK_MS")
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.scheduler_tick_ms),
            max_tickets: parsed_var("MAX_TICKETS").unwrap_or(defaults.max_tickets),
        }
    }

    /// Refresh interval as a Duration.
    pub fn refresh_every(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    /// Upstream request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Scheduler tick as a Duration.
    pub fn scheduler_tick(&self) -> Duration {
        Duration::from_millis(self.scheduler_tick_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            refresh_interval: 600,
            purge_time: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
            request_timeout: 30,
            scheduler_tick_ms: 1000,
            max_tickets: 10_000,
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
