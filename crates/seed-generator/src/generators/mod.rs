//! Lazy entity generators, one per population.
//!
//! Each generator is an iterator that borrows the run's RNG mutably and
//! builds one record per `next()` call. Nothing is materialized: memory use
//! is independent of the requested count, except for the follow-edge
//! de-duplication set.

pub mod comments;
pub mod follows;
pub mod likes;
pub mod posts;
pub mod users;

pub use comments::Comments;
pub use follows::Follows;
pub use likes::Likes;
pub use posts::Posts;
pub use users::Users;

use seed_core::EntityKind;

use crate::generator::GenerationError;

/// Reject a non-empty population whose records would reference an empty one.
pub(crate) fn require_population(
    entity: EntityKind,
    count: u64,
    requires: EntityKind,
    available: u64,
) -> Result<(), GenerationError> {
    if count > 0 && available == 0 {
        return Err(GenerationError::EmptyPopulation { entity, requires });
    }
    Ok(())
}
