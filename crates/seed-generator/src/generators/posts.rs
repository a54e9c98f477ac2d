//! Post generation. Authorship is concentrated on early users.

use chrono::{DateTime, Utc};
use seed_core::{EntityKind, Post};

use super::require_population;
use crate::generator::GenerationError;
use crate::rng::Mulberry32;
use crate::samplers::{iso_timestamp, skewed_or_uniform_id, synthetic_sentence};

pub const AUTHOR_SKEW_WEIGHT: f64 = 0.7;
pub const AUTHOR_SKEW: f64 = 1.15;
pub const POST_LOOKBACK_DAYS: u32 = 120;
pub const POST_MIN_WORDS: u32 = 6;
pub const POST_MAX_WORDS: u32 = 24;

/// Lazily generates posts with ids `1..=count`, authored by users `1..=users`.
pub struct Posts<'a> {
    rng: &'a mut Mulberry32,
    anchor: DateTime<Utc>,
    users: u64,
    next_id: u64,
    count: u64,
}

impl<'a> Posts<'a> {
    pub fn new(
        rng: &'a mut Mulberry32,
        anchor: DateTime<Utc>,
        users: u64,
        count: u64,
    ) -> Result<Self, GenerationError> {
        require_population(EntityKind::Posts, count, EntityKind::Users, users)?;
        Ok(Self {
            rng,
            anchor,
            users,
            next_id: 1,
            count,
        })
    }
}

impl Iterator for Posts<'_> {
    type Item = Post;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id > self.count {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let author_id = skewed_or_uniform_id(self.rng, self.users, AUTHOR_SKEW_WEIGHT, AUTHOR_SKEW);
        Some(Post {
            id,
            author_id,
            content: synthetic_sentence(self.rng, POST_MIN_WORDS, POST_MAX_WORDS),
            created_at: iso_timestamp(self.rng, self.anchor, POST_LOOKBACK_DAYS),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - (self.next_id - 1)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Posts<'_> {}
