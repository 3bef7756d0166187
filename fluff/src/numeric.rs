//! Positive integer generation.

use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::config::DEFAULT_MAX_INT;
use crate::error::{FluffError, FluffResult};
use crate::generator::Generator;

/// Generator for integers in `1..=max`
///
/// Generic over any primitive integer type
#[derive(Debug, Clone, Copy)]
pub struct PositiveIntGenerator<T> {
    max: T,
}

impl<T> PositiveIntGenerator<T>
where
    T: num_traits::PrimInt + SampleUniform,
{
    /// Create a positive integer generator with an inclusive upper bound
    pub fn new(max: T) -> FluffResult<Self> {
        if max < T::one() {
            return Err(FluffError::invalid_argument(
                "max",
                "upper bound must be at least 1",
            ));
        }
        Ok(Self { max })
    }

    /// Generator spanning every positive value of `T`
    pub fn full_range() -> Self {
        Self { max: T::max_value() }
    }

    pub fn max(&self) -> T {
        self.max
    }
}

impl Default for PositiveIntGenerator<u32> {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_INT,
        }
    }
}

impl<T> Generator<T> for PositiveIntGenerator<T>
where
    T: num_traits::PrimInt + SampleUniform,
{
    fn generate(&self, rng: &mut dyn rand::RngCore) -> T {
        rng.gen_range(T::one()..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::thread_rng;

    #[test]
    fn test_positive_int_generator() {
        let generator = PositiveIntGenerator::new(i32::MAX).unwrap();
        let mut rng = thread_rng();

        for _ in 0..1000 {
            assert!(generator.generate(&mut rng) > 0);
        }
    }

    #[test]
    fn test_positive_int_generator_small_bound() {
        let generator = PositiveIntGenerator::new(3u8).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let mut seen = [false; 3];
        for _ in 0..200 {
            let value = generator.generate(&mut rng);
            assert!((1..=3).contains(&value));
            seen[usize::from(value) - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_positive_int_generator_signed_full_range() {
        let generator = PositiveIntGenerator::<i64>::full_range();
        let mut rng = thread_rng();

        assert_eq!(generator.max(), i64::MAX);
        for _ in 0..100 {
            assert!(generator.generate(&mut rng) >= 1);
        }
    }

    #[test]
    fn test_positive_int_generator_default_bound() {
        let generator = PositiveIntGenerator::<u32>::default();
        assert_eq!(generator.max(), 2_147_483_647);
    }

    #[test]
    fn test_positive_int_generator_rejects_non_positive_bound() {
        assert!(PositiveIntGenerator::new(0u32).is_err());
        assert!(PositiveIntGenerator::new(-5i32).is_err());
    }
}
