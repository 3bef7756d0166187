//! The built-in character set used when callers do not supply one.

use std::sync::LazyLock;

/// Uppercase letters, lowercase letters, digits, then symbols
pub const DEFAULT_CHARACTERS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%^&*()-_=+[]{};:,.<>/?~",
);

static DEFAULT_CHARSET: LazyLock<Vec<char>> =
    LazyLock::new(|| DEFAULT_CHARACTERS.chars().collect());

/// The process-wide default character set
///
/// Every call returns the same slice, so membership checks against it are
/// deterministic.
pub fn default_character_set() -> &'static [char] {
    &DEFAULT_CHARSET
}
