//! CSV export of per-replication metrics.
//!
//! One row per replication with the header
//! `replication,median_response_time,coverage,lost_calls`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{MetricsResult, ReplicationMetrics};

pub struct MetricsCsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl MetricsCsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> MetricsResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record(["replication", "median_response_time", "coverage", "lost_calls"])?;
        Ok(Self { rows, finished: false })
    }

    pub fn write_replication(&mut self, replication: usize, metrics: &ReplicationMetrics) -> MetricsResult<()> {
        self.rows.write_record(&[
            replication.to_string(),
            metrics.median_response_time.to_string(),
            metrics.coverage.to_string(),
            metrics.lost_calls.to_string(),
        ])?;
        Ok(())
    }

    /// Write `replications` in order, numbering them from 0.
    pub fn write_all(&mut self, replications: &[ReplicationMetrics]) -> MetricsResult<()> {
        for (i, m) in replications.iter().enumerate() {
            self.write_replication(i, m)?;
        }
        Ok(())
    }

    pub fn finish(&mut self) -> MetricsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
