//! Follow-edge generation with preferential attachment.
//!
//! Followers are drawn uniformly; followees favour low ids so that early
//! users collect most of the followers. Draws that would produce a self
//! follow or repeat an existing edge are rejected and retried without
//! consuming an output slot. When the graph is so close to saturation that
//! random draws keep landing on taken pairs, the remaining edges are taken
//! from a forward scan over the pairs still free.

use chrono::{DateTime, Utc};
use seed_core::{Follow, SeedConfig};
use std::collections::HashSet;

use crate::generator::GenerationError;
use crate::rng::Mulberry32;
use crate::samplers::{iso_timestamp, skewed_or_uniform_id, uniform_id};

/// Probability that a followee is drawn from the skewed distribution.
pub const FOLLOWEE_SKEW_WEIGHT: f64 = 0.7;

/// Skew factor for followee selection.
pub const FOLLOWEE_SKEW: f64 = 1.25;

/// How far back follow dates reach.
pub const FOLLOW_LOOKBACK_DAYS: u32 = 800;

/// Consecutive rejected draws tolerated before switching to the scan.
pub const DEFAULT_MAX_FOLLOW_ATTEMPTS: u64 = 1_000_000;

/// Lazily generates exactly `count` distinct, non-self follow edges.
pub struct Follows<'a> {
    rng: &'a mut Mulberry32,
    anchor: DateTime<Utc>,
    users: u64,
    remaining: u64,
    emitted: u64,
    max_attempts: u64,
    seen: HashSet<(u64, u64)>,
    scanning: bool,
    /// Next `(follower, followee)` the scan examines. Every pair before it
    /// is already taken.
    cursor: (u64, u64),
}

impl<'a> Follows<'a> {
    /// Fails fast when `count` exceeds the number of distinct directed pairs
    /// among `users` users.
    pub fn new(
        rng: &'a mut Mulberry32,
        anchor: DateTime<Utc>,
        users: u64,
        count: u64,
        max_attempts: u64,
    ) -> Result<Self, GenerationError> {
        let max = SeedConfig::max_follows(users);
        if count > max {
            return Err(GenerationError::FollowsUnsatisfiable {
                requested: count,
                users,
                max,
            });
        }

        Ok(Self {
            rng,
            anchor,
            users,
            remaining: count,
            emitted: 0,
            max_attempts: max_attempts.max(1),
            seen: HashSet::with_capacity(count as usize),
            scanning: false,
            cursor: (1, 1),
        })
    }

    /// Number of edges emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Whether random drawing has been abandoned for the scan.
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    fn draw_edge(&mut self) -> Option<(u64, u64)> {
        for _ in 0..self.max_attempts {
            let follower = uniform_id(self.rng, self.users);
            let followee =
                skewed_or_uniform_id(self.rng, self.users, FOLLOWEE_SKEW_WEIGHT, FOLLOWEE_SKEW);

            if follower != followee && self.seen.insert((follower, followee)) {
                return Some((follower, followee));
            }
        }
        None
    }

    fn scan_edge(&mut self) -> Option<(u64, u64)> {
        let (mut follower, mut followee) = self.cursor;
        while follower <= self.users {
            let pair = (follower, followee);
            followee += 1;
            if followee > self.users {
                followee = 1;
                follower += 1;
            }
            if pair.0 != pair.1 && self.seen.insert(pair) {
                self.cursor = (follower, followee);
                return Some(pair);
            }
        }
        self.cursor = (follower, followee);
        None
    }
}

impl Iterator for Follows<'_> {
    type Item = Follow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let drawn = if self.scanning {
            None
        } else {
            self.draw_edge()
        };
        let (follower, followee) = match drawn {
            Some(pair) => pair,
            None => {
                if !self.scanning {
                    tracing::debug!(
                        "No new follow edge after {} draws ({} of {} emitted), scanning free pairs",
                        self.max_attempts,
                        self.emitted,
                        self.emitted + self.remaining
                    );
                    self.scanning = true;
                }
                // A free pair always exists while `remaining > 0`, since
                // the count was checked against the pair space up front.
                self.scan_edge()?
            }
        };

        self.remaining -= 1;
        self.emitted += 1;
        Some(Follow {
            follower_id: follower,
            followee_id: followee,
            created_at: iso_timestamp(self.rng, self.anchor, FOLLOW_LOOKBACK_DAYS),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Follows<'_> {}
