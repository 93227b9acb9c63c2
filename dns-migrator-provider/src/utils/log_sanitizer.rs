//! Log sanitization utilities
//!
//! Zone payloads contain DKIM keys and SPF records, and request headers carry
//! bearer tokens. Neither should appear in full in debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const VISIBLE_SECRET_CHARS: usize = 4;

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the longest
/// prefix that fits on a char boundary followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask an API token, keeping only its first few characters.
///
/// Short tokens are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= VISIBLE_SECRET_CHARS * 2 {
        return "*".repeat(count.max(1));
    }
    let visible: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
    format!("{visible}***")
}
