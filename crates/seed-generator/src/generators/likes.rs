//! Like generation. Likes pile up on early (popular) posts.

use chrono::{DateTime, Utc};
use seed_core::{EntityKind, Like};

use super::require_population;
use crate::generator::GenerationError;
use crate::rng::Mulberry32;
use crate::samplers::{iso_timestamp, skewed_or_uniform_id, uniform_id};

pub const LIKED_POST_SKEW_WEIGHT: f64 = 0.8;
pub const LIKED_POST_SKEW: f64 = 1.2;
pub const LIKE_LOOKBACK_DAYS: u32 = 60;

/// Lazily generates likes with ids `1..=count`.
pub struct Likes<'a> {
    rng: &'a mut Mulberry32,
    anchor: DateTime<Utc>,
    users: u64,
    posts: u64,
    next_id: u64,
    count: u64,
}

impl<'a> Likes<'a> {
    pub fn new(
        rng: &'a mut Mulberry32,
        anchor: DateTime<Utc>,
        users: u64,
        posts: u64,
        count: u64,
    ) -> Result<Self, GenerationError> {
        require_population(EntityKind::Likes, count, EntityKind::Users, users)?;
        require_population(EntityKind::Likes, count, EntityKind::Posts, posts)?;
        Ok(Self {
            rng,
            anchor,
            users,
            posts,
            next_id: 1,
            count,
        })
    }
}

impl Iterator for Likes<'_> {
    type Item = Like;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id > self.count {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let user_id = uniform_id(self.rng, self.users);
        let post_id =
            skewed_or_uniform_id(self.rng, self.posts, LIKED_POST_SKEW_WEIGHT, LIKED_POST_SKEW);
        Some(Like {
            id,
            user_id,
            post_id,
            created_at: iso_timestamp(self.rng, self.anchor, LIKE_LOOKBACK_DAYS),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - (self.next_id - 1)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Likes<'_> {}
