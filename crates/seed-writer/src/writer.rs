//! Streaming JSON array writer.
//!
//! Elements are encoded one at a time into a reusable scratch buffer and
//! handed to the sink with `write_all`, which suspends whenever the sink
//! reports it is full. Peak memory is the sink's buffer plus one encoded
//! element, however long the sequence.

use futures::{Stream, StreamExt};
use serde::Serialize;
use std::convert::Infallible;
use std::error::Error;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::error::WriterError;
use crate::metrics::WriteMetrics;
use crate::probe::BackpressureProbe;

/// Default sink buffer for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Log progress every this many records.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Initial capacity of the per-element scratch buffer.
const SCRATCH_CAPACITY: usize = 512;

/// Options for file output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Size of the buffer between the encoder and the file. Smaller buffers
    /// mean more frequent backpressure.
    pub buffer_size: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl WriterOptions {
    /// Set the buffer size. Zero is raised to one byte.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }
}

/// Incremental writer for one JSON array.
///
/// The opening bracket is written before the first element (or by
/// [`finish`](Self::finish) for an empty array), a comma precedes every
/// element after the first, and `finish` closes the array, flushes and shuts
/// the sink down.
pub struct JsonArrayWriter<W> {
    sink: BackpressureProbe<W>,
    scratch: Vec<u8>,
    opened: bool,
    records: u64,
    bytes: u64,
    started: Instant,
}

impl<W: AsyncWrite + Unpin> JsonArrayWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: BackpressureProbe::new(sink),
            scratch: Vec::with_capacity(SCRATCH_CAPACITY),
            opened: false,
            records: 0,
            bytes: 0,
            started: Instant::now(),
        }
    }

    /// Number of elements written so far.
    pub fn records_written(&self) -> u64 {
        self.records
    }

    async fn open(&mut self) -> Result<(), WriterError> {
        if !self.opened {
            self.sink.write_all(b"[").await?;
            self.bytes += 1;
            self.opened = true;
        }
        Ok(())
    }

    /// Append one element to the array.
    pub async fn push<T: Serialize + ?Sized>(&mut self, item: &T) -> Result<(), WriterError> {
        self.open().await?;

        self.scratch.clear();
        if self.records > 0 {
            self.scratch.push(b',');
        }
        serde_json::to_writer(&mut self.scratch, item)?;

        self.sink.write_all(&self.scratch).await?;
        self.bytes += self.scratch.len() as u64;
        self.records += 1;

        if self.records % PROGRESS_INTERVAL == 0 {
            debug!("Written {} records", self.records);
        }
        Ok(())
    }

    /// Close the array and resolve once the sink is flushed and shut down.
    pub async fn finish(mut self) -> Result<WriteMetrics, WriterError> {
        self.open().await?;
        self.sink.write_all(b"]").await?;
        self.bytes += 1;

        self.sink.flush().await?;
        self.sink.shutdown().await?;

        Ok(WriteMetrics {
            records_written: self.records,
            bytes_written: self.bytes,
            stalls: self.sink.stalls(),
            total_duration: self.started.elapsed(),
        })
    }
}

/// Write every element of an async stream as one JSON array.
///
/// The first `Err` item aborts the write with [`WriterError::Source`]; the
/// sink is left holding a truncated array.
pub async fn stream_json_array<W, S, T, E>(sink: W, items: S) -> Result<WriteMetrics, WriterError>
where
    W: AsyncWrite + Unpin,
    S: Stream<Item = Result<T, E>>,
    T: Serialize,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    futures::pin_mut!(items);
    let mut writer = JsonArrayWriter::new(sink);

    while let Some(item) = items.next().await {
        let item = item.map_err(WriterError::from_source)?;
        writer.push(&item).await?;
    }

    writer.finish().await
}

/// Write a fallible sequence as one JSON array.
pub async fn try_write_json_array<W, I, T, E>(
    sink: W,
    items: I,
) -> Result<WriteMetrics, WriterError>
where
    W: AsyncWrite + Unpin,
    I: IntoIterator<Item = Result<T, E>>,
    T: Serialize,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    stream_json_array(sink, futures::stream::iter(items)).await
}

/// Write a sequence as one JSON array.
pub async fn write_json_array<W, I, T>(sink: W, items: I) -> Result<WriteMetrics, WriterError>
where
    W: AsyncWrite + Unpin,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    try_write_json_array(sink, items.into_iter().map(Ok::<T, Infallible>)).await
}

/// Stream a fallible sequence into a JSON array file at `path`.
///
/// Missing parent directories are created first. An existing file is
/// truncated. On error the file may hold a partial array.
pub async fn try_write_json_array_file<P, I, T, E>(
    path: P,
    items: I,
    options: &WriterOptions,
) -> Result<WriteMetrics, WriterError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Result<T, E>>,
    T: Serialize,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    debug!(
        "Streaming JSON array to '{}' (buffer {} bytes)",
        path.display(),
        options.buffer_size
    );

    let file = File::create(path).await?;
    let sink = BufWriter::with_capacity(options.buffer_size, file);
    let metrics = try_write_json_array(sink, items).await?;

    info!(
        "Wrote {} records ({} bytes, {} stalls) to '{}' in {:?} ({:.2} records/sec)",
        metrics.records_written,
        metrics.bytes_written,
        metrics.stalls,
        path.display(),
        metrics.total_duration,
        metrics.records_per_second()
    );

    Ok(metrics)
}

/// Stream a sequence into a JSON array file at `path`.
pub async fn write_json_array_file<P, I, T>(
    path: P,
    items: I,
    options: &WriterOptions,
) -> Result<WriteMetrics, WriterError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    try_write_json_array_file(path, items.into_iter().map(Ok::<T, Infallible>), options).await
}
