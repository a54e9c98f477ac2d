//! Timestamp sampling relative to a fixed anchor instant.

use chrono::{DateTime, Utc};
use rand::RngCore;

use super::uniform_int;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Uniform instant in `[anchor - lookback_days, anchor]` at millisecond
/// resolution. One draw.
pub fn iso_timestamp<R: RngCore + ?Sized>(
    rng: &mut R,
    anchor: DateTime<Utc>,
    lookback_days: u32,
) -> DateTime<Utc> {
    let now = anchor.timestamp_millis();
    let past = now - i64::from(lookback_days) * MILLIS_PER_DAY;
    let t = uniform_int(rng, past, now);
    DateTime::from_timestamp_millis(t).unwrap_or(anchor)
}
