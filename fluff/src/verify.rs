//! Helpers for checking generated values against the charset they came from.

use std::collections::HashMap;
use std::fmt;

/// Occurrence count per character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: HashMap<char, usize>,
}

impl Histogram {
    /// Count every character yielded by `chars`
    pub fn of(chars: impl IntoIterator<Item = char>) -> Self {
        let mut counts = HashMap::new();
        for c in chars {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of times `c` occurred
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn contains(&self, c: char) -> bool {
        self.counts.contains_key(&c)
    }

    /// Number of distinct characters
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of characters counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

/// First character of `generated` that does not appear in `charset`
pub fn first_foreign_char(generated: &str, charset: &[char]) -> Option<char> {
    let histogram = Histogram::of(charset.iter().copied());
    generated.chars().find(|c| !histogram.contains(*c))
}

/// A generated value contained a character outside its character set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignCharacter {
    pub character: char,
    /// Character offset of the first occurrence in the generated value
    pub position: usize,
}

impl fmt::Display for ForeignCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character {:?} at position {} is not in the character set",
            self.character, self.position
        )
    }
}

impl std::error::Error for ForeignCharacter {}

/// Check that `generated` only uses characters from `charset`
pub fn check_only_contains(generated: &str, charset: &[char]) -> Result<(), ForeignCharacter> {
    let histogram = Histogram::of(charset.iter().copied());
    match generated
        .chars()
        .enumerate()
        .find(|(_, c)| !histogram.contains(*c))
    {
        Some((position, character)) => {
            tracing::debug!(%character, position, "generated value left its character set");
            Err(ForeignCharacter {
                character,
                position,
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let histogram = Histogram::of("abracadabra".chars());

        assert_eq!(histogram.count('a'), 5);
        assert_eq!(histogram.count('b'), 2);
        assert_eq!(histogram.count('z'), 0);
        assert_eq!(histogram.distinct(), 5);
        assert_eq!(histogram.total(), 11);
        assert!(histogram.contains('c'));
        assert!(!histogram.contains('z'));
    }

    #[test]
    fn test_histogram_empty() {
        let histogram = Histogram::of("".chars());
        assert_eq!(histogram, Histogram::default());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.iter().count(), 0);
    }

    #[test]
    fn test_first_foreign_char() {
        let charset = ['1', '2', '3'];

        assert_eq!(first_foreign_char("3121331223", &charset), None);
        assert_eq!(first_foreign_char("3121331228", &charset), Some('8'));
        assert_eq!(first_foreign_char("", &charset), None);
    }

    #[test]
    fn test_check_only_contains() {
        let charset = ['1', '2', '3'];

        assert!(check_only_contains("3121331223", &charset).is_ok());

        let error = check_only_contains("3121331228", &charset).unwrap_err();
        assert_eq!(
            error,
            ForeignCharacter {
                character: '8',
                position: 9,
            }
        );
        assert_eq!(
            error.to_string(),
            "Character '8' at position 9 is not in the character set"
        );
    }

    #[test]
    fn test_check_only_contains_counts_chars_not_bytes() {
        let error = check_only_contains("ééx", &['é']).unwrap_err();
        assert_eq!(error.position, 2);
        assert_eq!(error.character, 'x');
    }
}
