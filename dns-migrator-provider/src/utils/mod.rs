//! Utility modules.

/// Lenient serde helpers for loosely typed API payloads.
pub mod serde_helpers;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
