//! socialgraph-seed library
//!
//! Drives a full generation run: resolves the configuration, runs the
//! users → follows → posts → likes → comments stages from one seeded RNG
//! stream, and streams each population into its own JSON array file.
//!
//! The building blocks live in the workspace crates:
//!
//! - `seed-core`: entity records, [`SeedConfig`] and timestamp encoding
//! - `seed-generator`: the RNG, samplers and lazy entity generators
//! - `seed-writer`: the backpressure-aware JSON array writer

pub mod args;
pub mod pipeline;
pub mod report;

pub use args::GenerateArgs;
pub use pipeline::{run_generate, write_report, GenerateOptions};
pub use report::{RunReport, StageReport};

pub use seed_core::{EntityKind, SeedConfig};
