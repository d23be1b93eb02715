//! Test helpers for generating unique test data
//!
//! Usernames are unique in the ledger schema, so tests derive them from a ULID
//! suffix instead of hard-coding names.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique username short enough for the 50-character limit.
///
/// Keeps at most 16 characters of the prefix.
pub fn unique_username(prefix: &str) -> String {
    let prefix: String = prefix.chars().take(16).collect();
    format!("{}_{}", prefix, Ulid::new().to_string().to_lowercase())
}
