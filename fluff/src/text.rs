//! Character and string generators
//!
//! Both generators sample uniformly, with replacement, from an ordered
//! character set. Duplicates in the set are kept, so a character listed twice
//! is twice as likely to be drawn.

use rand::Rng;

use crate::charset::default_character_set;
use crate::error::{FluffError, FluffResult};
use crate::generator::Generator;

// ============================================================================
// Character Generator
// ============================================================================

/// Generator for single characters drawn from a non-empty charset
#[derive(Debug, Clone, Copy)]
pub struct CharGenerator<'a> {
    charset: &'a [char],
}

impl<'a> CharGenerator<'a> {
    /// Create a character generator over `charset`
    pub fn new(charset: &'a [char]) -> FluffResult<Self> {
        if charset.is_empty() {
            return Err(FluffError::empty_charset());
        }
        Ok(Self { charset })
    }

    pub fn charset(&self) -> &'a [char] {
        self.charset
    }
}

impl CharGenerator<'static> {
    /// Create a character generator over the default charset
    pub fn default_charset() -> Self {
        Self {
            charset: default_character_set(),
        }
    }
}

impl Default for CharGenerator<'static> {
    fn default() -> Self {
        Self::default_charset()
    }
}

impl Generator<char> for CharGenerator<'_> {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> char {
        self.charset[rng.gen_range(0..self.charset.len())]
    }
}

// ============================================================================
// String Generator
// ============================================================================

/// Generator for strings of a fixed length
#[derive(Debug, Clone, Copy)]
pub struct StringGenerator<'a> {
    char_generator: CharGenerator<'a>,
    length: usize,
}

impl<'a> StringGenerator<'a> {
    /// Create a string generator producing `length` characters from `charset`
    pub fn new(length: usize, charset: &'a [char]) -> FluffResult<Self> {
        Ok(Self {
            char_generator: CharGenerator::new(charset)?,
            length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn charset(&self) -> &'a [char] {
        self.char_generator.charset()
    }
}

impl StringGenerator<'static> {
    /// Create a string generator over the default charset
    pub fn default_charset(length: usize) -> Self {
        Self {
            char_generator: CharGenerator::default_charset(),
            length,
        }
    }
}

impl Generator<String> for StringGenerator<'_> {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> String {
        (0..self.length)
            .map(|_| self.char_generator.generate(rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::thread_rng;

    #[test]
    fn test_char_generator() {
        let charset = ['a', 'b', 'd', 'e', 'f', 'g'];
        let generator = CharGenerator::new(&charset).unwrap();
        let mut rng = thread_rng();

        for _ in 0..50 {
            assert!(charset.contains(&generator.generate(&mut rng)));
        }
    }

    #[test]
    fn test_char_generator_rejects_empty_charset() {
        assert!(CharGenerator::new(&[]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_char_generator_default() {
        let generator = CharGenerator::default();
        assert_eq!(generator.charset(), default_character_set());
    }

    #[test]
    fn test_generators_borrow_charset() {
        let charset = ['p', 'q'];
        let generator = CharGenerator::new(&charset).unwrap();
        assert!(std::ptr::eq(generator.charset(), &charset[..]));

        let generator = StringGenerator::default_charset(5);
        assert_eq!(generator.length(), 5);
        assert!(std::ptr::eq(generator.charset(), default_character_set()));
    }

    #[test]
    fn test_string_generator_length_and_charset() {
        let charset = ['1', '2', '3'];
        let generator = StringGenerator::new(10, &charset).unwrap();
        let mut rng = thread_rng();

        let value = generator.generate(&mut rng);
        assert_eq!(value.chars().count(), 10);
        assert!(value.chars().all(|c| charset.contains(&c)));
    }

    #[test]
    fn test_string_generator_zero_length() {
        let generator = StringGenerator::default_charset(0);
        let mut rng = thread_rng();

        assert_eq!(generator.generate(&mut rng), "");
    }

    #[test]
    fn test_string_generator_non_ascii_charset() {
        let charset = ['é', 'ß', '日'];
        let generator = StringGenerator::new(8, &charset).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let value = generator.generate(&mut rng);
        assert_eq!(value.chars().count(), 8);
        assert!(value.chars().all(|c| charset.contains(&c)));
    }

    #[test]
    fn test_string_generator_is_deterministic_under_seed() {
        let generator = StringGenerator::default_charset(16);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);

        assert_eq!(generator.generate(&mut rng1), generator.generate(&mut rng2));
    }
}
