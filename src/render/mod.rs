//! Rendering: region sinks and fragment builders
//!
//! Rendering is split in two, so the transformation logic stays testable
//! without any rendering environment:
//! - `fragments`: pure view-model → HTML fragment functions
//! - [`RegionSink`]: the injected boundary that installs a fragment into a
//!   named region, replacing whatever was there
//!
//! # Submodules
//! - `fragments.rs`: one builder per endpoint
//! - `html.rs`: page shell and full-page assembly
//! - `css.rs`: styling with CSS custom properties

pub mod css;
pub mod fragments;
pub mod html;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

/// Stable region names, each exclusively owned by one refresh task
pub mod region {
    pub const ALERTS: &str = "alerts-content";
    pub const OPPORTUNITIES: &str = "opportunities-content";
    pub const FINANCE: &str = "finance-content";
    pub const CLIENTS: &str = "clients-content";

    pub const ALL: [&str; 4] = [ALERTS, OPPORTUNITIES, FINANCE, CLIENTS];
}

/// Where rendered fragments go
///
/// `replace` is full replacement: no merging, no diffing. Regions are
/// disjoint, so tasks never contend over content, only over the sink lock.
pub trait RegionSink: Send {
    /// Replace the content of a named region
    fn replace(&mut self, region: &str, html: String);
}

/// Shared, injectable sink handle used by the poller
pub type SharedSink = Arc<Mutex<dyn RegionSink + Send>>;

/// In-memory region store, the default sink
///
/// A region that was never written simply does not exist yet; writing to an
/// unknown region name creates it.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegions {
    fragments: HashMap<String, String>,
    last_updated: Option<DateTime<Utc>>,
}

impl MemoryRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a region, if it has ever been filled
    pub fn get(&self, region: &str) -> Option<&str> {
        self.fragments.get(region).map(String::as_str)
    }

    /// When any region was last replaced
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

impl RegionSink for MemoryRegions {
    fn replace(&mut self, region: &str, html: String) {
        self.fragments.insert(region.to_string(), html);
        self.last_updated = Some(Utc::now());
    }
}

/// Sink that mirrors the assembled page to a file after every replacement
///
/// Write failures are logged and skipped; the in-memory state stays
/// authoritative.
#[derive(Debug)]
pub struct FileMirror {
    inner: MemoryRegions,
    path: PathBuf,
}

impl FileMirror {
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: MemoryRegions::new(),
            path,
        }
    }

    /// The in-memory regions backing this mirror
    pub fn regions(&self) -> &MemoryRegions {
        &self.inner
    }
}

impl RegionSink for FileMirror {
    fn replace(&mut self, region: &str, html: String) {
        self.inner.replace(region, html);

        let page = html::dashboard_html(&self.inner);
        if let Err(e) = std::fs::write(&self.path, page) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to mirror dashboard page"
            );
        }
    }
}
