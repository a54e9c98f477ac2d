//! Run configuration.
//!
//! A [`SeedConfig`] names the size of every entity population plus the seed
//! and anchor instant that make a run reproducible. It can be loaded from
//! YAML or built in code; [`SeedConfig::validate`] checks the preconditions
//! the generators rely on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::model::EntityKind;

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u64 = 42;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// More follow edges requested than distinct non-self pairs exist
    #[error("Cannot generate {follows} distinct follows among {users} users (at most {max})")]
    FollowsUnsatisfiable { follows: u64, users: u64, max: u64 },

    /// A population references another population that is empty
    #[error("Cannot generate {count} {entity} without any {requires}")]
    MissingPopulation {
        entity: EntityKind,
        count: u64,
        requires: EntityKind,
    },
}

/// Sizes and reproducibility knobs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedConfig {
    pub users: u64,
    pub follows: u64,
    pub posts: u64,
    pub likes: u64,
    pub comments: u64,
    /// RNG seed. `None` means [`DEFAULT_SEED`].
    pub seed: Option<u64>,
    /// The "now" that every timestamp looks back from. `None` lets the
    /// caller pick the wall clock at run start.
    pub anchor: Option<DateTime<Utc>>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 10_000,
            follows: 100_000,
            posts: 50_000,
            likes: 200_000,
            comments: 100_000,
            seed: None,
            anchor: None,
        }
    }
}

impl SeedConfig {
    /// A configuration with every count set to zero.
    pub fn empty() -> Self {
        Self {
            users: 0,
            follows: 0,
            posts: 0,
            likes: 0,
            comments: 0,
            seed: None,
            anchor: None,
        }
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string. Missing keys fall back to
    /// [`SeedConfig::default`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the anchor instant.
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// The seed to use, applying the default when none was given.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Count for a given population.
    pub fn count(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Users => self.users,
            EntityKind::Follows => self.follows,
            EntityKind::Posts => self.posts,
            EntityKind::Likes => self.likes,
            EntityKind::Comments => self.comments,
        }
    }

    /// Largest number of distinct follow edges `users` can support.
    pub fn max_follows(users: u64) -> u64 {
        users.saturating_mul(users.saturating_sub(1))
    }

    /// Check that every population can be generated without dangling
    /// references or an unsatisfiable follow target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = Self::max_follows(self.users);
        if self.follows > max {
            return Err(ConfigError::FollowsUnsatisfiable {
                follows: self.follows,
                users: self.users,
                max,
            });
        }

        let requirements = [
            (EntityKind::Posts, EntityKind::Users),
            (EntityKind::Likes, EntityKind::Users),
            (EntityKind::Likes, EntityKind::Posts),
            (EntityKind::Comments, EntityKind::Users),
            (EntityKind::Comments, EntityKind::Posts),
        ];
        for (entity, requires) in requirements {
            let count = self.count(entity);
            if count > 0 && self.count(requires) == 0 {
                return Err(ConfigError::MissingPopulation {
                    entity,
                    count,
                    requires,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config(users: u64, follows: u64, posts: u64, likes: u64, comments: u64) -> SeedConfig {
        SeedConfig {
            users,
            follows,
            posts,
            likes,
            comments,
            ..SeedConfig::empty()
        }
    }

    #[test]
    fn test_defaults_match_moderate_dataset() {
        let config = SeedConfig::default();
        assert_eq!(config.users, 10_000);
        assert_eq!(config.follows, 100_000);
        assert_eq!(config.posts, 50_000);
        assert_eq!(config.likes, 200_000);
        assert_eq!(config.comments, 100_000);
        assert_eq!(config.effective_seed(), DEFAULT_SEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_fills_missing_keys_with_defaults() {
        let config = SeedConfig::from_yaml("users: 5\nseed: 7\n").unwrap();
        assert_eq!(config.users, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.posts, SeedConfig::default().posts);
    }

    #[test]
    fn test_from_yaml_parses_anchor() {
        let config = SeedConfig::from_yaml("anchor: 2024-06-01T00:00:00Z\n").unwrap();
        let anchor = config.anchor.unwrap();
        assert_eq!(anchor.timestamp(), 1_717_200_000);
    }

    #[test]
    fn test_from_yaml_rejects_negative_counts() {
        assert!(matches!(
            SeedConfig::from_yaml("users: -1\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "users: 3\nfollows: 6\nposts: 0\nlikes: 0\ncomments: 0").unwrap();

        let loaded = SeedConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config(3, 6, 0, 0, 0));
    }

    #[test]
    fn test_from_file_missing() {
        let result = SeedConfig::from_file("/nonexistent/seed.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_max_follows() {
        assert_eq!(SeedConfig::max_follows(0), 0);
        assert_eq!(SeedConfig::max_follows(1), 0);
        assert_eq!(SeedConfig::max_follows(5), 20);
        assert_eq!(SeedConfig::max_follows(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_validate_accepts_saturated_follows() {
        assert!(config(5, 20, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsatisfiable_follows() {
        let err = config(5, 21, 0, 0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FollowsUnsatisfiable {
                follows: 21,
                users: 5,
                max: 20
            }
        ));
        assert_eq!(
            err.to_string(),
            "Cannot generate 21 distinct follows among 5 users (at most 20)"
        );
    }

    #[test]
    fn test_validate_rejects_likes_without_posts() {
        let err = config(5, 0, 0, 3, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingPopulation {
                entity: EntityKind::Likes,
                count: 3,
                requires: EntityKind::Posts
            }
        ));
        assert_eq!(err.to_string(), "Cannot generate 3 likes without any posts");
    }

    #[test]
    fn test_validate_rejects_posts_without_users() {
        let err = config(0, 0, 2, 0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingPopulation {
                entity: EntityKind::Posts,
                requires: EntityKind::Users,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_accepts_all_zero() {
        assert!(SeedConfig::empty().validate().is_ok());
    }
}
