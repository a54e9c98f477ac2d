//! Deterministic social-graph data generation.
//!
//! This crate produces users, follows, posts, likes and comments whose
//! connectivity follows a power law: a handful of early users and posts
//! attract most of the follows, likes and comments. Everything is driven by a
//! single seeded [`Mulberry32`] stream, so the same seed, anchor and stage
//! order always yield the same records.
//!
//! # Architecture
//!
//! ```text
//!  seed ─▶ Mulberry32 ─▶ samplers ─────────────▶ generators
//!                        unit / uniform_int       Users    (1..=users)
//!                        skewed_index             Follows  (distinct, no self loops)
//!                        iso_timestamp            Posts    (skewed authors)
//!                        synthetic_sentence       Likes    (skewed posts)
//!                                                 Comments (skewed posts)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use seed_generator::SocialGraphGenerator;
//!
//! let anchor: DateTime<Utc> = "2024-06-01T00:00:00Z".parse().unwrap();
//! let mut generator = SocialGraphGenerator::new(42, anchor);
//!
//! let users: Vec<_> = generator.users(10).collect();
//! let follows: Vec<_> = generator.follows(10, 25).unwrap().collect();
//!
//! assert_eq!(users.len(), 10);
//! assert_eq!(follows.len(), 25);
//! ```

pub mod generator;
pub mod generators;
pub mod rng;
pub mod samplers;

// Re-exports for convenience
pub use generator::{GenerationError, SocialGraphGenerator};
pub use generators::{Comments, Follows, Likes, Posts, Users};
pub use rng::Mulberry32;
