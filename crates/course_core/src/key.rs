//! Course id → numeric key → bucket index.
//!
//! The permissive reader behaves like C's `atoi`: skip leading whitespace,
//! take an optional sign and as many decimal digits as follow, ignore the
//! rest. An id with no leading digits reads as [`FALLBACK_KEY`], so `"ABC"`
//! and `"0"` land in the same bucket. Values outside `i64` saturate.
//!
//! Buckets follow `(unsigned)atoi(id) % table_size`: the key is truncated to
//! its low 32 bits and read as unsigned, so `-1` becomes `u32::MAX`.

use crate::consts::FALLBACK_KEY;
use crate::errors::{CourseError, Result};
use serde::{Deserialize, Serialize};

/// How ids that are not plain integers are treated on insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Best-effort leading-integer read; garbage collapses to key 0.
    #[default]
    Permissive,
    /// Reject anything that is not a whole signed decimal integer.
    Strict,
}

pub fn parse_key(id: &str) -> i64 {
    let s = id.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
    }
    if seen { acc } else { FALLBACK_KEY }
}

pub fn parse_key_strict(id: &str) -> Result<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| CourseError::MalformedKey(id.to_string()))
}

#[inline]
pub fn bucket_index(key: i64, table_size: usize) -> usize {
    debug_assert!(table_size > 0);
    let wrapped = key as i32 as u32;
    (u64::from(wrapped) % table_size as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_key("100"), 100);
        assert_eq!(parse_key("  42"), 42);
        assert_eq!(parse_key("+7"), 7);
        assert_eq!(parse_key("-15"), -15);
        assert_eq!(parse_key("300abc"), 300);
        assert_eq!(parse_key("12 34"), 12);
        assert_eq!(parse_key("\t\n\x0b\x0c\r 9"), 9);
    }

    #[test]
    fn only_ascii_whitespace_is_skipped() {
        assert_eq!(parse_key("\u{a0}42"), 0);
        assert_eq!(parse_key("\u{2003}42"), 0);
    }

    #[test]
    fn non_numeric_falls_back_to_zero() {
        assert_eq!(parse_key("ABC"), 0);
        assert_eq!(parse_key("CSCI100"), 0);
        assert_eq!(parse_key(""), 0);
        assert_eq!(parse_key("-"), 0);
        assert_eq!(parse_key("   "), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_key("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_key("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn strict_rejects_trailing_garbage() {
        assert_eq!(parse_key_strict(" 105 ").unwrap(), 105);
        assert_eq!(parse_key_strict("-3").unwrap(), -3);
        for bad in ["ABC", "100a", "", "1 2", "99999999999999999999999"] {
            match parse_key_strict(bad) {
                Err(CourseError::MalformedKey(id)) => assert_eq!(id, bad),
                other => panic!("expected MalformedKey for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn bucket_index_stays_in_range() {
        assert_eq!(bucket_index(105, 5), 0);
        assert_eq!(bucket_index(7, 5), 2);
        assert_eq!(bucket_index(-1, 180), 75);
        assert_eq!(bucket_index(-1, 5), 0);
        assert_eq!(bucket_index(-7, 5), 4);
        // low 32 bits only, like an int truncated from strtol's long
        assert_eq!(bucket_index(i64::MAX, 180), 75);
        assert_eq!(bucket_index(i64::MIN, 180), 0);
        assert_eq!(bucket_index(1 << 32, 7), 0);
        for k in [-1000i64, -1, 0, 1, 179, 180, i64::MAX, i64::MIN] {
            assert!(bucket_index(k, 180) < 180);
        }
    }
}
