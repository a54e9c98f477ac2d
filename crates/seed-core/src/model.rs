//! Entity records produced by a generation run.
//!
//! Every record is an immutable value. Ids are dense and 1-based within their
//! own population; foreign-key-like fields always point inside the referenced
//! population.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user account. The root entity of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    #[serde(with = "crate::timestamp")]
    pub joined_at: DateTime<Utc>,
}

/// A directed follow edge between two distinct users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub follower_id: u64,
    pub followee_id: u64,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub author_id: u64,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A like left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: u64,
    pub user_id: u64,
    pub post_id: u64,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub user_id: u64,
    pub post_id: u64,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// The five entity populations, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Users,
    Follows,
    Posts,
    Likes,
    Comments,
}

impl EntityKind {
    /// All entity kinds in dependency order. Later stages reference ids
    /// produced by earlier ones.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Users,
        EntityKind::Follows,
        EntityKind::Posts,
        EntityKind::Likes,
        EntityKind::Comments,
    ];

    /// Lowercase plural name, e.g. `"users"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Follows => "follows",
            EntityKind::Posts => "posts",
            EntityKind::Likes => "likes",
            EntityKind::Comments => "comments",
        }
    }

    /// Output file name for this population, e.g. `"users.json"`.
    pub fn file_name(&self) -> &'static str {
        match self {
            EntityKind::Users => "users.json",
            EntityKind::Follows => "follows.json",
            EntityKind::Posts => "posts.json",
            EntityKind::Likes => "likes.json",
            EntityKind::Comments => "comments.json",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
