//! Configuration management for the dashboard worker

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DashboardError, Result};

/// Dashboard worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API
    pub api_base: String,

    /// Seconds between refresh cycles
    pub refresh_interval_seconds: u64,

    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Where to mirror the assembled dashboard page (disabled when unset)
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:5000".to_string(),
            refresh_interval_seconds: 60,
            request_timeout_seconds: 30,
            snapshot_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base: env::var("DASHBOARD_API_BASE").unwrap_or(defaults.api_base),

            refresh_interval_seconds: env::var("REFRESH_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval_seconds),

            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),

            snapshot_path: env::var("DASHBOARD_SNAPSHOT_PATH").ok().map(PathBuf::from),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(DashboardError::Config("api_base must not be empty".into()));
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "api_base must be an http(s) URL, got {:?}",
                self.api_base
            )));
        }
        if self.refresh_interval_seconds == 0 {
            return Err(DashboardError::Config(
                "refresh_interval_seconds must be positive".into(),
            ));
        }
        if self.request_timeout_seconds == 0 {
            return Err(DashboardError::Config(
                "request_timeout_seconds must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Refresh interval as a Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
