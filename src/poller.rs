//! Refresh scheduler
//!
//! [`DashboardPoller`] owns the backend API handle, the region sink and the
//! cycle interval. A refresh cycle runs the four endpoint tasks
//! concurrently; each task is fully isolated (fetch → decode → render →
//! replace region) and a failure only skips that task's region update.
//!
//! Cycles are spawned fire-and-forget: a slow backend never delays the next
//! tick, overlapping cycles are tolerated, and the last response to resolve
//! wins. No retry, no back-off, no jitter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::client::DashboardApi;
use crate::error::Result;
use crate::render::{SharedSink, fragments, region};

/// Outcome of one endpoint task within a cycle
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub ok: bool,
    pub error: Option<String>,
}

impl TaskReport {
    fn from_result(cycle_id: Uuid, region: &'static str, result: Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    %cycle_id,
                    region,
                    error = %e,
                    "refresh task failed, keeping previous content"
                );
                Self {
                    ok: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Result of one refresh cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub alerts: TaskReport,
    pub opportunities: TaskReport,
    pub finance: TaskReport,
    pub clients: TaskReport,
}

impl CycleReport {
    /// Whether every task in the cycle succeeded
    pub fn all_ok(&self) -> bool {
        self.failed_count() == 0
    }

    /// Number of failed tasks in the cycle
    pub fn failed_count(&self) -> usize {
        [&self.alerts, &self.opportunities, &self.finance, &self.clients]
            .iter()
            .filter(|t| !t.ok)
            .count()
    }
}

/// Periodic dashboard refresher with an owned start/stop lifecycle
pub struct DashboardPoller<A: DashboardApi> {
    api: A,
    sink: SharedSink,
    interval: Duration,
}

impl<A: DashboardApi + 'static> DashboardPoller<A> {
    pub fn new(api: A, sink: SharedSink, interval: Duration) -> Self {
        Self {
            api,
            sink,
            interval,
        }
    }

    /// Run one refresh cycle: all four tasks, concurrently and independently
    pub async fn run_cycle(&self) -> CycleReport {
        let cycle_id = Uuid::new_v4();

        let (alerts, opportunities, finance, clients) = futures::join!(
            self.refresh_alerts(),
            self.refresh_opportunities(),
            self.refresh_finance(),
            self.refresh_clients(),
        );

        let report = CycleReport {
            cycle_id,
            alerts: TaskReport::from_result(cycle_id, region::ALERTS, alerts),
            opportunities: TaskReport::from_result(cycle_id, region::OPPORTUNITIES, opportunities),
            finance: TaskReport::from_result(cycle_id, region::FINANCE, finance),
            clients: TaskReport::from_result(cycle_id, region::CLIENTS, clients),
        };

        if report.all_ok() {
            tracing::debug!(%cycle_id, "refresh cycle complete");
        } else {
            tracing::warn!(
                %cycle_id,
                failed = report.failed_count(),
                "refresh cycle completed with failures"
            );
        }

        report
    }

    /// Start the scheduling loop: one immediate cycle, then one per interval
    /// tick until the handle is stopped
    pub fn start(self) -> PollerHandle {
        let poller = Arc::new(self);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poller.interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let cycle = Arc::clone(&poller);
                        tokio::spawn(async move {
                            cycle.run_cycle().await;
                        });
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        PollerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }

    async fn refresh_alerts(&self) -> Result<()> {
        let alerts = self.api.alerts().await?;
        self.install(region::ALERTS, fragments::alerts(&alerts));
        Ok(())
    }

    async fn refresh_opportunities(&self) -> Result<()> {
        let opportunities = self.api.opportunities().await?;
        self.install(region::OPPORTUNITIES, fragments::opportunities(&opportunities));
        Ok(())
    }

    async fn refresh_finance(&self) -> Result<()> {
        let summary = self.api.finance_summary().await?;
        self.install(region::FINANCE, fragments::finance(&summary));
        Ok(())
    }

    async fn refresh_clients(&self) -> Result<()> {
        let summary = self.api.client_summary().await?;
        self.install(region::CLIENTS, fragments::clients(&summary));
        Ok(())
    }

    fn install(&self, region: &'static str, html: String) {
        match self.sink.lock() {
            Ok(mut sink) => sink.replace(region, html),
            Err(_) => tracing::error!(region, "region sink lock poisoned, dropping update"),
        }
    }
}

/// Handle to a running poller loop
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal shutdown and wait for the scheduling loop to exit
    ///
    /// Cycles already in flight are not cancelled.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
