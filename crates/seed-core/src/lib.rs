//! Core types shared by the socialgraph-seed crates.
//!
//! This crate holds the entity records written to the output files, the
//! run configuration consumed by the generators, and the timestamp encoding
//! every entity uses. It has no knowledge of how entities are generated or
//! written.
//!
//! # Example
//!
//! ```rust
//! use seed_core::{EntityKind, SeedConfig};
//!
//! let config = SeedConfig::from_yaml(r#"
//! users: 5
//! follows: 6
//! posts: 3
//! likes: 10
//! comments: 4
//! seed: 1
//! "#).unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.effective_seed(), 1);
//! assert_eq!(EntityKind::Follows.file_name(), "follows.json");
//! ```

pub mod config;
pub mod model;
pub mod timestamp;

pub use config::{ConfigError, SeedConfig, DEFAULT_SEED};
pub use model::{Comment, EntityKind, Follow, Like, Post, User};
