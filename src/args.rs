//! CLI argument definitions for the generate command.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use seed_core::SeedConfig;
use seed_writer::{WriterOptions, DEFAULT_BUFFER_SIZE};
use std::path::PathBuf;

use crate::pipeline::GenerateOptions;

/// Arguments for one generation run.
///
/// Counts, seed and anchor are optional here so that only flags given on the
/// command line override the YAML configuration.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to a YAML configuration file (missing keys use built-in defaults)
    #[arg(long, short = 'c', value_name = "PATH", env = "SOCIALGRAPH_SEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of users to generate
    #[arg(long)]
    pub users: Option<u64>,

    /// Number of distinct follow edges to generate
    #[arg(long)]
    pub follows: Option<u64>,

    /// Number of posts to generate
    #[arg(long)]
    pub posts: Option<u64>,

    /// Number of likes to generate
    #[arg(long)]
    pub likes: Option<u64>,

    /// Number of comments to generate
    #[arg(long)]
    pub comments: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "SOCIALGRAPH_SEED")]
    pub seed: Option<u64>,

    /// Instant that every timestamp looks back from (RFC 3339, default: now)
    #[arg(long, value_name = "RFC3339")]
    pub anchor: Option<DateTime<Utc>>,

    /// Output directory (one JSON file per entity)
    #[arg(long, short = 'o', default_value = "public/data/seed-default")]
    pub out_dir: PathBuf,

    /// Write buffer size in bytes for each output file
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Validate the configuration and log the plan without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl GenerateArgs {
    /// Load the YAML configuration, if any, and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<SeedConfig> {
        let base = match &self.config {
            Some(path) => SeedConfig::from_file(path)
                .with_context(|| format!("Failed to load seed config from {path:?}"))?,
            None => SeedConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    /// Overlay every flag that was given onto `config`.
    pub fn apply_overrides(&self, mut config: SeedConfig) -> SeedConfig {
        if let Some(users) = self.users {
            config.users = users;
        }
        if let Some(follows) = self.follows {
            config.follows = follows;
        }
        if let Some(posts) = self.posts {
            config.posts = posts;
        }
        if let Some(likes) = self.likes {
            config.likes = likes;
        }
        if let Some(comments) = self.comments {
            config.comments = comments;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(anchor) = self.anchor {
            config.anchor = Some(anchor);
        }
        config
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            out_dir: self.out_dir.clone(),
            writer: WriterOptions::default().with_buffer_size(self.buffer_size),
            dry_run: self.dry_run,
        }
    }
}
