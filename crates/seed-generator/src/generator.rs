//! Run-level generator that owns the single RNG stream.

use chrono::{DateTime, Utc};
use seed_core::{EntityKind, SeedConfig};

use crate::generators::follows::DEFAULT_MAX_FOLLOW_ATTEMPTS;
use crate::generators::{Comments, Follows, Likes, Posts, Users};
use crate::rng::Mulberry32;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// More follows requested than distinct non-self pairs exist
    #[error("Cannot generate {requested} distinct follows among {users} users (at most {max})")]
    FollowsUnsatisfiable { requested: u64, users: u64, max: u64 },

    /// Records would reference an empty population
    #[error("Cannot generate {entity} without any {requires}")]
    EmptyPopulation {
        entity: EntityKind,
        requires: EntityKind,
    },
}

/// Produces every population of a run from one seeded RNG stream.
///
/// Stage methods borrow the generator mutably and return lazy iterators, so
/// one stage must be dropped before the next starts. Consuming the stages in
/// the same order with the same seed and anchor reproduces the same records.
#[derive(Debug, Clone)]
pub struct SocialGraphGenerator {
    rng: Mulberry32,
    anchor: DateTime<Utc>,
    max_follow_attempts: u64,
}

impl SocialGraphGenerator {
    /// Create a generator for `seed`, with timestamps looking back from `anchor`.
    pub fn new(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self {
            rng: Mulberry32::new(seed),
            anchor,
            max_follow_attempts: DEFAULT_MAX_FOLLOW_ATTEMPTS,
        }
    }

    /// Create a generator from a configuration. `default_anchor` is used when
    /// the configuration does not pin one.
    pub fn from_config(config: &SeedConfig, default_anchor: DateTime<Utc>) -> Self {
        Self::new(
            config.effective_seed(),
            config.anchor.unwrap_or(default_anchor),
        )
    }

    /// Override how many consecutive rejected follow draws are tolerated
    /// before the remaining edges come from a scan of the free pairs.
    pub fn with_max_follow_attempts(mut self, attempts: u64) -> Self {
        self.max_follow_attempts = attempts.max(1);
        self
    }

    /// The instant timestamps look back from.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// The RNG in its current state.
    pub fn rng(&self) -> &Mulberry32 {
        &self.rng
    }

    /// Users `1..=count`.
    pub fn users(&mut self, count: u64) -> Users<'_> {
        Users::new(&mut self.rng, self.anchor, count)
    }

    /// `count` distinct follow edges among `users` users.
    pub fn follows(&mut self, users: u64, count: u64) -> Result<Follows<'_>, GenerationError> {
        Follows::new(
            &mut self.rng,
            self.anchor,
            users,
            count,
            self.max_follow_attempts,
        )
    }

    /// Posts `1..=count` authored by users `1..=users`.
    pub fn posts(&mut self, users: u64, count: u64) -> Result<Posts<'_>, GenerationError> {
        Posts::new(&mut self.rng, self.anchor, users, count)
    }

    /// Likes `1..=count` over users `1..=users` and posts `1..=posts`.
    pub fn likes(
        &mut self,
        users: u64,
        posts: u64,
        count: u64,
    ) -> Result<Likes<'_>, GenerationError> {
        Likes::new(&mut self.rng, self.anchor, users, posts, count)
    }

    /// Comments `1..=count` over users `1..=users` and posts `1..=posts`.
    pub fn comments(
        &mut self,
        users: u64,
        posts: u64,
        count: u64,
    ) -> Result<Comments<'_>, GenerationError> {
        Comments::new(&mut self.rng, self.anchor, users, posts, count)
    }
}
