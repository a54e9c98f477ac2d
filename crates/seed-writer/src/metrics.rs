//! Metrics from a streaming write.

use std::time::Duration;

/// Metrics from writing one JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteMetrics {
    /// Number of array elements written.
    pub records_written: u64,
    /// Bytes handed to the sink, brackets and separators included.
    pub bytes_written: u64,
    /// Number of times the sink pushed back and the writer suspended.
    pub stalls: u64,
    /// Total time taken, including generation of lazily produced records.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
