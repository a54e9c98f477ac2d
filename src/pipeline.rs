//! Generation pipeline: validates a configuration, then runs every stage in
//! dependency order and streams each population to its own file.

use anyhow::Context;
use chrono::{SubsecRound, Utc};
use seed_core::{EntityKind, SeedConfig};
use seed_generator::SocialGraphGenerator;
use seed_writer::{write_json_array_file, WriteMetrics, WriterOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::report::{RunReport, StageReport};

/// Where and how a run writes its output.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving `users.json`, `follows.json`, and so on.
    pub out_dir: PathBuf,
    pub writer: WriterOptions,
    /// Validate and plan only.
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            writer: WriterOptions::default(),
            dry_run: false,
        }
    }

    /// Output path for one population.
    pub fn path_for(&self, entity: EntityKind) -> PathBuf {
        self.out_dir.join(entity.file_name())
    }
}

/// Run a full generation.
///
/// The configuration is validated before anything is written. Without a
/// pinned anchor the wall clock at run start (truncated to milliseconds) is
/// used, and recorded in the report so the run can be reproduced.
pub async fn run_generate(
    config: &SeedConfig,
    options: &GenerateOptions,
) -> anyhow::Result<RunReport> {
    config.validate().context("Invalid seed configuration")?;

    let started = Instant::now();
    let anchor = config.anchor.unwrap_or_else(|| Utc::now().trunc_subsecs(3));
    let seed = config.effective_seed();
    let mut generator = SocialGraphGenerator::from_config(config, anchor);
    let mut report = RunReport::new(seed, anchor, options.out_dir.clone(), options.dry_run);

    info!(
        "Generating social graph (seed={}, anchor={}) into '{}'",
        seed,
        seed_core::timestamp::format_iso_millis(&anchor),
        options.out_dir.display()
    );

    for entity in EntityKind::ALL {
        let count = config.count(entity);
        let path = options.path_for(entity);

        if options.dry_run {
            info!("Would write {} {} to '{}'", count, entity, path.display());
            report.stages.push(StageReport::planned(entity, count));
            continue;
        }

        info!("Generating {} {}", count, entity);
        let metrics = run_stage(&mut generator, config, entity, &path, &options.writer)
            .await
            .with_context(|| format!("Failed to generate {entity} into {path:?}"))?;
        report
            .stages
            .push(StageReport::written(entity, count, path, &metrics));
    }

    report.total_duration = started.elapsed();
    info!(
        "Generated {} records ({} bytes) in {:?}",
        report.total_records(),
        report.total_bytes(),
        report.total_duration
    );

    Ok(report)
}

async fn run_stage(
    generator: &mut SocialGraphGenerator,
    config: &SeedConfig,
    entity: EntityKind,
    path: &Path,
    writer: &WriterOptions,
) -> anyhow::Result<WriteMetrics> {
    let count = config.count(entity);
    let metrics = match entity {
        EntityKind::Users => write_json_array_file(path, generator.users(count), writer).await?,
        EntityKind::Follows => {
            let follows = generator.follows(config.users, count)?;
            write_json_array_file(path, follows, writer).await?
        }
        EntityKind::Posts => {
            let posts = generator.posts(config.users, count)?;
            write_json_array_file(path, posts, writer).await?
        }
        EntityKind::Likes => {
            let likes = generator.likes(config.users, config.posts, count)?;
            write_json_array_file(path, likes, writer).await?
        }
        EntityKind::Comments => {
            let comments = generator.comments(config.users, config.posts, count)?;
            write_json_array_file(path, comments, writer).await?
        }
    };
    Ok(metrics)
}

/// Write `report` as pretty-printed JSON, creating parent directories.
pub async fn write_report(report: &RunReport, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create report directory {parent:?}"))?;
    }
    let json = serde_json::to_vec_pretty(report).context("Failed to serialize run report")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write run report to {path:?}"))?;
    info!("Run report written to '{}'", path.display());
    Ok(())
}
