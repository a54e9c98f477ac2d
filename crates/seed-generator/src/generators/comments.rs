//! Comment generation.

use chrono::{DateTime, Utc};
use seed_core::{Comment, EntityKind};

use super::require_population;
use crate::generator::GenerationError;
use crate::rng::Mulberry32;
use crate::samplers::{iso_timestamp, skewed_or_uniform_id, synthetic_sentence, uniform_id};

pub const COMMENTED_POST_SKEW_WEIGHT: f64 = 0.75;
pub const COMMENTED_POST_SKEW: f64 = 1.25;
pub const COMMENT_LOOKBACK_DAYS: u32 = 45;
pub const COMMENT_MIN_WORDS: u32 = 4;
pub const COMMENT_MAX_WORDS: u32 = 18;

/// Lazily generates comments with ids `1..=count`.
pub struct Comments<'a> {
    rng: &'a mut Mulberry32,
    anchor: DateTime<Utc>,
    users: u64,
    posts: u64,
    next_id: u64,
    count: u64,
}

impl<'a> Comments<'a> {
    pub fn new(
        rng: &'a mut Mulberry32,
        anchor: DateTime<Utc>,
        users: u64,
        posts: u64,
        count: u64,
    ) -> Result<Self, GenerationError> {
        require_population(EntityKind::Comments, count, EntityKind::Users, users)?;
        require_population(EntityKind::Comments, count, EntityKind::Posts, posts)?;
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

impl Iterator for Comments<'_> {
    type Item = Comment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id > self.count {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let user_id = uniform_id(self.rng, self.users);
        let post_id = skewed_or_uniform_id(
            self.rng,
            self.posts,
            COMMENTED_POST_SKEW_WEIGHT,
            COMMENTED_POST_SKEW,
        );
        Some(Comment {
            id,
            user_id,
            post_id,
            content: synthetic_sentence(self.rng, COMMENT_MIN_WORDS, COMMENT_MAX_WORDS),
            created_at: iso_timestamp(self.rng, self.anchor, COMMENT_LOOKBACK_DAYS),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - (self.next_id - 1)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Comments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn anchor() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_717_243_200_000).unwrap()
    }

    #[test]
    fn test_comment_fields() {
        let mut rng = Mulberry32::new(42);
        let earliest = anchor() - Duration::days(i64::from(COMMENT_LOOKBACK_DAYS));

        for (i, comment) in Comments::new(&mut rng, anchor(), 12, 40, 1_000)
            .unwrap()
            .enumerate()
        {
            assert_eq!(comment.id, i as u64 + 1);
            assert!((1..=12).contains(&comment.user_id));
            assert!((1..=40).contains(&comment.post_id));
            assert!(comment.created_at >= earliest && comment.created_at <= anchor());

            let words = comment.content.trim_end_matches('.').split(' ').count() as u32;
            assert!((COMMENT_MIN_WORDS..=COMMENT_MAX_WORDS).contains(&words));
        }
    }

    #[test]
    fn test_requires_users() {
        let mut rng = Mulberry32::new(42);
        assert!(matches!(
            Comments::new(&mut rng, anchor(), 0, 10, 1),
            Err(GenerationError::EmptyPopulation {
                entity: EntityKind::Comments,
                requires: EntityKind::Users
            })
        ));
    }
}
