// crates/course_core/src/consts.rs

/// Bucket count used when no explicit size is configured.
pub const DEFAULT_TABLE_SIZE: usize = 180;

/// Bucket a malformed id collapses to under the permissive policy.
pub const FALLBACK_KEY: i64 = 0;
