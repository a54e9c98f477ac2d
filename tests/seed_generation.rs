//! End-to-end tests for socialgraph-seed runs.
//!
//! These drive the library the same way the binary does and inspect the
//! JSON files it leaves behind.

use chrono::{DateTime, Duration, Utc};
use seed_core::{Comment, EntityKind, Follow, Like, Post, SeedConfig, User};
use seed_generator::SocialGraphGenerator;
use seed_writer::{write_json_array_file, WriterOptions};
use serde::de::DeserializeOwned;
use socialgraph_seed::{run_generate, GenerateOptions};
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn anchor() -> DateTime<Utc> {
    "2024-06-01T12:00:00Z".parse().unwrap()
}

fn config(users: u64, follows: u64, posts: u64, likes: u64, comments: u64, seed: u64) -> SeedConfig {
    SeedConfig {
        users,
        follows,
        posts,
        likes,
        comments,
        ..SeedConfig::empty()
    }
    .with_seed(seed)
    .with_anchor(anchor())
}

fn read<T: DeserializeOwned>(dir: &Path, entity: EntityKind) -> Vec<T> {
    let bytes = std::fs::read(dir.join(entity.file_name())).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn generate(config: &SeedConfig, dir: &Path) {
    run_generate(config, &GenerateOptions::new(dir)).await.unwrap();
}

async fn follow_pairs(seed: u64) -> Vec<(u64, u64)> {
    let temp_dir = TempDir::new().unwrap();
    generate(&config(5, 6, 0, 0, 0, seed), temp_dir.path()).await;
    read::<Follow>(temp_dir.path(), EntityKind::Follows)
        .into_iter()
        .map(|f| (f.follower_id, f.followee_id))
        .collect()
}

#[tokio::test]
async fn test_same_seed_and_anchor_give_identical_files() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = config(200, 1_500, 300, 2_000, 800, 42);

    generate(&config, first.path()).await;
    generate(&config, second.path()).await;

    for entity in EntityKind::ALL {
        let a = std::fs::read(first.path().join(entity.file_name())).unwrap();
        let b = std::fs::read(second.path().join(entity.file_name())).unwrap();
        assert_eq!(a, b, "{entity} differs between runs");
    }
}

#[tokio::test]
async fn test_small_scenario_follow_edges() {
    assert_eq!(
        follow_pairs(1).await,
        vec![(2, 4), (5, 3), (3, 1), (1, 3), (1, 5), (4, 2)]
    );
}

#[tokio::test]
async fn test_different_seed_gives_different_edges() {
    let seed_2 = follow_pairs(2).await;
    assert_eq!(seed_2, vec![(4, 2), (1, 2), (1, 4), (3, 2), (3, 4), (5, 2)]);
    assert_ne!(seed_2, follow_pairs(1).await);
}

#[tokio::test]
async fn test_ids_are_contiguous_and_references_resolve() {
    let temp_dir = TempDir::new().unwrap();
    let (n_users, n_posts) = (150u64, 400u64);
    generate(&config(n_users, 3_000, n_posts, 2_500, 1_200, 3), temp_dir.path()).await;

    let users: Vec<User> = read(temp_dir.path(), EntityKind::Users);
    let follows: Vec<Follow> = read(temp_dir.path(), EntityKind::Follows);
    let posts: Vec<Post> = read(temp_dir.path(), EntityKind::Posts);
    let likes: Vec<Like> = read(temp_dir.path(), EntityKind::Likes);
    let comments: Vec<Comment> = read(temp_dir.path(), EntityKind::Comments);

    assert!(users.iter().map(|u| u.id).eq(1..=n_users));
    assert!(posts.iter().map(|p| p.id).eq(1..=n_posts));
    assert!(likes.iter().map(|l| l.id).eq(1..=2_500));
    assert!(comments.iter().map(|c| c.id).eq(1..=1_200));

    let user_range = 1..=n_users;
    let post_range = 1..=n_posts;

    let mut edges = HashSet::new();
    for follow in &follows {
        assert_ne!(follow.follower_id, follow.followee_id);
        assert!(user_range.contains(&follow.follower_id));
        assert!(user_range.contains(&follow.followee_id));
        assert!(edges.insert((follow.follower_id, follow.followee_id)));
    }
    assert_eq!(edges.len(), 3_000);

    assert!(posts.iter().all(|p| user_range.contains(&p.author_id)));
    assert!(likes
        .iter()
        .all(|l| user_range.contains(&l.user_id) && post_range.contains(&l.post_id)));
    assert!(comments
        .iter()
        .all(|c| user_range.contains(&c.user_id) && post_range.contains(&c.post_id)));
}

#[tokio::test]
async fn test_timestamps_fall_inside_lookback_windows() {
    let temp_dir = TempDir::new().unwrap();
    generate(&config(100, 400, 200, 500, 300, 11), temp_dir.path()).await;

    let within = |ts: DateTime<Utc>, days: i64| {
        ts <= anchor() && ts >= anchor() - Duration::days(days)
    };

    let users: Vec<User> = read(temp_dir.path(), EntityKind::Users);
    let follows: Vec<Follow> = read(temp_dir.path(), EntityKind::Follows);
    let posts: Vec<Post> = read(temp_dir.path(), EntityKind::Posts);
    let likes: Vec<Like> = read(temp_dir.path(), EntityKind::Likes);
    let comments: Vec<Comment> = read(temp_dir.path(), EntityKind::Comments);

    assert!(users.iter().all(|u| within(u.joined_at, 900)));
    assert!(follows.iter().all(|f| within(f.created_at, 800)));
    assert!(posts.iter().all(|p| within(p.created_at, 120)));
    assert!(likes.iter().all(|l| within(l.created_at, 60)));
    assert!(comments.iter().all(|c| within(c.created_at, 45)));
}

#[tokio::test]
async fn test_text_content_is_sentence_shaped() {
    let temp_dir = TempDir::new().unwrap();
    generate(&config(20, 0, 100, 0, 100, 5), temp_dir.path()).await;

    let posts: Vec<Post> = read(temp_dir.path(), EntityKind::Posts);
    let comments: Vec<Comment> = read(temp_dir.path(), EntityKind::Comments);

    for post in &posts {
        let words = post.content.trim_end_matches('.').split(' ').count();
        assert!((6..=24).contains(&words), "post has {words} words");
        assert!(post.content.ends_with('.'));
        assert!(post.content.starts_with(|c: char| c.is_ascii_uppercase()));
    }
    for comment in &comments {
        let words = comment.content.trim_end_matches('.').split(' ').count();
        assert!((4..=18).contains(&words), "comment has {words} words");
    }
}

#[tokio::test]
async fn test_early_users_attract_most_followers() {
    let temp_dir = TempDir::new().unwrap();
    generate(&config(1_000, 20_000, 0, 0, 0, 42), temp_dir.path()).await;

    let follows: Vec<Follow> = read(temp_dir.path(), EntityKind::Follows);
    let head = follows.iter().filter(|f| f.followee_id <= 100).count();
    let share = head as f64 / follows.len() as f64;

    // A uniform draw would put about 10% of edges on the first tenth.
    assert!(share > 0.4, "head share {share}");
}

#[tokio::test]
async fn test_anchor_is_embedded_in_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_generate(&config(3, 2, 1, 1, 1, 8), &GenerateOptions::new(temp_dir.path()))
        .await
        .unwrap();

    assert_eq!(report.anchor, anchor());
    assert_eq!(report.seed, 8);
    assert!(report.summary().contains("Anchor: 2024-06-01T12:00:00.000Z"));
}

#[tokio::test]
#[ignore = "writes a million records twice; run with --ignored"]
async fn test_million_records_tiny_buffer_matches_large_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let tiny = temp_dir.path().join("tiny").join("users.json");
    let large = temp_dir.path().join("large").join("users.json");

    for (path, buffer_size) in [(&tiny, 64), (&large, 4 << 20)] {
        let mut generator = SocialGraphGenerator::new(42, anchor());
        let metrics = write_json_array_file(
            path,
            generator.users(1_000_000),
            &WriterOptions::default().with_buffer_size(buffer_size),
        )
        .await
        .unwrap();
        assert_eq!(metrics.records_written, 1_000_000);
    }

    let tiny_bytes = std::fs::read(&tiny).unwrap();
    assert_eq!(tiny_bytes, std::fs::read(&large).unwrap());

    let users: Vec<User> = serde_json::from_slice(&tiny_bytes).unwrap();
    assert_eq!(users.len(), 1_000_000);
    assert_eq!(users.last().unwrap().id, 1_000_000);
}
