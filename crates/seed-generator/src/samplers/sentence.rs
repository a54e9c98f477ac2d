//! Synthetic sentence generation for post and comment bodies.

use rand::RngCore;

use super::{uniform_choice, uniform_int};

/// Domain-themed vocabulary sentences are drawn from.
pub const VOCABULARY: [&str; 32] = [
    "social",
    "feed",
    "ranking",
    "realtime",
    "graph",
    "network",
    "post",
    "comment",
    "like",
    "follow",
    "engagement",
    "signal",
    "score",
    "decay",
    "affinity",
    "AI",
    "system",
    "event",
    "stream",
    "cache",
    "redis",
    "kafka",
    "neo4j",
    "postgres",
    "scale",
    "optimize",
    "trend",
    "topic",
    "interest",
    "ranker",
    "feature",
    "boost",
];

/// Build a sentence of `min_words..=max_words` vocabulary words.
///
/// The first letter is upper-cased and a period is appended. Consumes one
/// draw for the word count plus one per word.
pub fn synthetic_sentence<R: RngCore + ?Sized>(
    rng: &mut R,
    min_words: u32,
    max_words: u32,
) -> String {
    let count = uniform_int(rng, i64::from(min_words), i64::from(max_words));

    let mut out = String::new();
    for i in 0..count {
        if let Some(word) = uniform_choice(rng, &VOCABULARY[..]) {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
    }

    let mut chars = out.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    sentence.push('.');
    sentence
}
