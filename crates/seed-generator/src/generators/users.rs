//! User generation.

use chrono::{DateTime, Utc};
use seed_core::User;

use crate::rng::Mulberry32;
use crate::samplers::iso_timestamp;

/// How far back join dates reach.
pub const USER_LOOKBACK_DAYS: u32 = 900;

/// Lazily generates users with ids `1..=count`.
pub struct Users<'a> {
    rng: &'a mut Mulberry32,
    anchor: DateTime<Utc>,
    next_id: u64,
    count: u64,
}

impl<'a> Users<'a> {
    pub fn new(rng: &'a mut Mulberry32, anchor: DateTime<Utc>, count: u64) -> Self {
        Self {
            rng,
            anchor,
            next_id: 1,
            count,
        }
    }
}

impl Iterator for Users<'_> {
    type Item = User;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id > self.count {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        Some(User {
            id,
            username: format!("user{id}"),
            name: format!("User {id}"),
            joined_at: iso_timestamp(self.rng, self.anchor, USER_LOOKBACK_DAYS),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - (self.next_id - 1)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Users<'_> {}
