//! Log sanitization utilities
//!
//! Keeps response bodies short in debug/error logs and keeps passwords and
//! session tokens out of them entirely.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const SECRET_VISIBLE_PREFIX: usize = 2;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) with a suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret for logging, keeping only a short prefix.
///
/// Secrets of `SECRET_VISIBLE_PREFIX` characters or fewer are masked completely.
pub fn mask_secret(s: &str) -> String {
    let count = s.chars().count();
    if count <= SECRET_VISIBLE_PREFIX {
        return "*".repeat(count.max(1));
    }
    let prefix: String = s.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(count - SECRET_VISIBLE_PREFIX))
}
