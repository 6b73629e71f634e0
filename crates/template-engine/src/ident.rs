//! Injected clock and id sources for the render path
//!
//! Document ids have the form `LA-<base36 millis>-<6 char random>`, upper-cased.
//! Rendering takes both collaborators as inputs so tests can pin them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of "now" for generation dates and id timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used outside tests
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of the random id suffix
pub trait IdSource: Send + Sync {
    /// Six base36 characters (lower case; the id is upper-cased as a whole)
    fn random_suffix(&self) -> String;
}

/// Draws suffix characters from v4 UUID bytes
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn random_suffix(&self) -> String {
        Uuid::new_v4()
            .as_bytes()
            .iter()
            .take(6)
            .map(|b| BASE36_ALPHABET[(*b % 36) as usize] as char)
            .collect()
    }
}

/// Compose a fresh document id from a timestamp and a random suffix
pub fn document_id(now: DateTime<Utc>, ids: &dyn IdSource) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    format!("LA-{}-{}", to_base36(millis), ids.random_suffix()).to_uppercase()
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
