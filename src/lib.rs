//! Dashboard Worker - polling dashboard renderer for the freelancer
//! survival-kit backend
//!
//! A long-running worker that keeps an in-memory dashboard in sync with
//! four read-only JSON endpoints (alerts, opportunities, finance summary,
//! client summary).
//!
//! # Architecture
//! - `poller` drives refresh cycles: an immediate one at startup, then one
//!   per interval tick, with an owned start/stop lifecycle
//! - `client` is the typed HTTP access to the backend endpoints
//! - `types` holds the decoded view-models, one per endpoint
//! - `render` turns view-models into HTML fragments and installs them into
//!   named regions through an injectable sink
//! - `format` covers money/timestamp display (zh-CN conventions)
//!
//! # Failure model
//! The four tasks of a cycle are independent: a failing endpoint is logged
//! and its region keeps the previous content; the other three tasks still
//! complete within the same cycle.

mod client;
mod config;
mod error;
mod format;
mod poller;
mod render;
mod types;

pub use client::{DashboardApi, DashboardClient};
pub use config::Config;
pub use error::{DashboardError, Result};
pub use format::{escape, money, timestamp, yuan};
pub use poller::{CycleReport, DashboardPoller, PollerHandle, TaskReport};
pub use render::html::dashboard_html;
pub use render::{FileMirror, MemoryRegions, RegionSink, SharedSink, region};
pub use types::{
    Alert, AlertLevel, ClientSummary, FinanceSummary, Opportunity, Prediction, TaxEstimation,
};
