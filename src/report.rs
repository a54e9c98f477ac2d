//! Run report types.

use chrono::{DateTime, Utc};
use seed_core::EntityKind;
use seed_writer::WriteMetrics;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one generation stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    /// Population generated by this stage.
    pub entity: EntityKind,
    /// Number of records the configuration asked for.
    pub requested: u64,
    /// Output file, or `None` for a dry run.
    pub path: Option<PathBuf>,
    /// Number of records written.
    pub records_written: u64,
    /// Size of the output file.
    pub bytes_written: u64,
    /// Number of times the sink pushed back.
    pub stalls: u64,
    /// Wall time spent generating and writing.
    pub duration: Duration,
}

impl StageReport {
    /// Report for a stage that was planned but not executed.
    pub fn planned(entity: EntityKind, requested: u64) -> Self {
        Self {
            entity,
            requested,
            path: None,
            records_written: 0,
            bytes_written: 0,
            stalls: 0,
            duration: Duration::ZERO,
        }
    }

    /// Report for a stage that streamed its records to `path`.
    pub fn written(
        entity: EntityKind,
        requested: u64,
        path: PathBuf,
        metrics: &WriteMetrics,
    ) -> Self {
        Self {
            entity,
            requested,
            path: Some(path),
            records_written: metrics.records_written,
            bytes_written: metrics.bytes_written,
            stalls: metrics.stalls,
            duration: metrics.total_duration,
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub seed: u64,
    /// The instant every timestamp in the run looks back from.
    #[serde(with = "seed_core::timestamp")]
    pub anchor: DateTime<Utc>,
    pub out_dir: PathBuf,
    pub dry_run: bool,
    /// One entry per stage, in generation order.
    pub stages: Vec<StageReport>,
    pub total_duration: Duration,
}

impl RunReport {
    /// Create an empty report.
    pub fn new(seed: u64, anchor: DateTime<Utc>, out_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            seed,
            anchor,
            out_dir,
            dry_run,
            stages: Vec::new(),
            total_duration: Duration::ZERO,
        }
    }

    /// Get the total number of records written.
    pub fn total_records(&self) -> u64 {
        self.stages.iter().map(|s| s.records_written).sum()
    }

    /// Get the total number of bytes written.
    pub fn total_bytes(&self) -> u64 {
        self.stages.iter().map(|s| s.bytes_written).sum()
    }

    /// Get the total number of sink stalls.
    pub fn total_stalls(&self) -> u64 {
        self.stages.iter().map(|s| s.stalls).sum()
    }

    /// Report for one stage, if it ran.
    pub fn stage(&self, entity: EntityKind) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.entity == entity)
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let mode = if self.dry_run { "DRY RUN" } else { "COMPLETE" };

        let mut summary = format!(
            "Seed Report: {}\n\
             ============\n\
             Seed: {}\n\
             Anchor: {}\n\
             Output: {}\n\n",
            mode,
            self.seed,
            seed_core::timestamp::format_iso_millis(&self.anchor),
            self.out_dir.display()
        );

        summary.push_str("Stages:\n");
        for stage in &self.stages {
            summary.push_str(&format!(
                "- {}: {} / {} records, {} bytes, {} stalls, {:?}\n",
                stage.entity,
                stage.records_written,
                stage.requested,
                stage.bytes_written,
                stage.stalls,
                stage.duration
            ));
        }

        summary.push_str(&format!(
            "\nTotals:\n\
             - Records: {}\n\
             - Bytes: {}\n\
             - Stalls: {}\n\
             - Duration: {:?}\n",
            self.total_records(),
            self.total_bytes(),
            self.total_stalls(),
            self.total_duration
        ));

        summary
    }
}
