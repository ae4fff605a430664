//! Snapshot store collaborator.
//!
//! Extraction callers keep raw page snapshots for reproducibility. The core
//! only ever writes through the [`SnapshotStore`] trait and never reads the
//! store back; the provided implementation is a minimal JSON-lines append
//! log.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Write-only sink for raw page snapshots.
pub trait SnapshotStore {
    /// Append one snapshot.
    fn record(&mut self, url: &str, domain: &str, html: &str, fetched_at: &str) -> Result<()>;
}

#[derive(Serialize)]
struct SnapshotRow<'a> {
    url: &'a str,
    domain: &'a str,
    fetched_at: &'a str,
    html: &'a str,
}

/// Append-log snapshot store: one JSON object per line.
pub struct JsonlSnapshotStore {
    path: PathBuf,
}

impl JsonlSnapshotStore {
    /// Create a store appending to the given file. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonlSnapshotStore {
    fn record(&mut self, url: &str, domain: &str, html: &str, fetched_at: &str) -> Result<()> {
        let row = serde_json::to_string(&SnapshotRow {
            url,
            domain,
            fetched_at,
            html,
        })
        .map_err(|err| Error::Snapshot(err.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{row}")?;
        Ok(())
    }
}

/// Record a snapshot, filling in domain and fetch time.
pub fn snapshot_page(store: &mut dyn SnapshotStore, url: &str, html: &str) -> Result<()> {
    let domain = domain_of(url).unwrap_or_default();
    let fetched_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    store.record(url, &domain, html, &fetched_at)
}

/// Host part of a URL, if it has one.
#[must_use]
pub fn domain_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
