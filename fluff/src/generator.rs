//! Core generator trait and the enumeration picker.

use rand::Rng;

use crate::error::{FluffError, FluffResult};

/// Core generator trait for creating random fixture data
pub trait Generator<T> {
    /// Generate a random value of type T using the provided RNG
    fn generate(&self, rng: &mut dyn rand::RngCore) -> T;
}

/// A generator that chooses uniformly from a borrowed collection of values
#[derive(Debug, Clone, Copy)]
pub struct OneOfGenerator<'a, T> {
    values: &'a [T],
}

impl<'a, T: Clone> OneOfGenerator<'a, T> {
    /// Create a new one-of generator; `values` must not be empty
    pub fn new(values: &'a [T]) -> FluffResult<Self> {
        if values.is_empty() {
            return Err(FluffError::empty_values());
        }
        Ok(Self { values })
    }

    /// The candidates this generator picks from
    pub fn values(&self) -> &'a [T] {
        self.values
    }
}

impl<T: Clone> Generator<T> for OneOfGenerator<'_, T> {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> T {
        let index = rng.gen_range(0..self.values.len());
        self.values[index].clone()
    }
}
