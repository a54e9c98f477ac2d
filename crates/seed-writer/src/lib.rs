//! Streaming JSON array output with backpressure.
//!
//! Records are serialized one by one and written through an
//! [`AsyncWrite`](tokio::io::AsyncWrite) sink. Each write awaits the sink, so a
//! slow consumer suspends the producer instead of letting encoded records pile
//! up in memory. The output is always one JSON array: `[` then the elements
//! separated by `,` then `]`, with no whitespace.
//!
//! # Example
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use seed_writer::write_json_array;
//!
//! let mut out = Vec::new();
//! let metrics = write_json_array(&mut out, ["a", "b"]).await.unwrap();
//!
//! assert_eq!(out, br#"["a","b"]"#);
//! assert_eq!(metrics.records_written, 2);
//! # });
//! ```

pub mod error;
pub mod metrics;
pub mod probe;
pub mod writer;

// Re-exports for convenience
pub use error::WriterError;
pub use metrics::WriteMetrics;
pub use probe::BackpressureProbe;
pub use writer::{
    stream_json_array, try_write_json_array, try_write_json_array_file, write_json_array,
    write_json_array_file, JsonArrayWriter, WriterOptions, DEFAULT_BUFFER_SIZE,
};
