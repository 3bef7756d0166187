//! The `Fluffer`: one random source feeding every fixture generator.

use rand::RngCore;
use rand::rngs::{StdRng, ThreadRng};
use tracing::{debug, trace};

use crate::charset::default_character_set;
use crate::config::FluffConfig;
use crate::datetime::{CalendarDate, DateGenerator};
use crate::error::FluffResult;
use crate::generator::{Generator, OneOfGenerator};
use crate::numeric::PositiveIntGenerator;
use crate::rng::{DefaultRngProvider, RngProvider};
use crate::text::{CharGenerator, StringGenerator};

/// Produces random fixture values from an owned random source
///
/// Every operation takes `&mut self`, so a single instance is never shared
/// between threads while drawing. Seed it (or hand it a custom RNG) for
/// reproducible output.
///
/// ```rust
/// use fluff::Fluffer;
///
/// let mut fluffer = Fluffer::seeded(42);
/// let name = fluffer.random_string_from(8, &['a', 'b', 'c']).unwrap();
/// assert_eq!(name.len(), 8);
///
/// let date = fluffer.random_date();
/// assert_eq!(date.matches('-').count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Fluffer<R = StdRng> {
    rng: R,
    dates: DateGenerator,
    ints: PositiveIntGenerator<u32>,
}

impl Fluffer<StdRng> {
    /// Create a fluffer seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(DefaultRngProvider.create_random_rng())
    }

    /// Create a fluffer whose output is fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(DefaultRngProvider.create_rng(Some(seed)))
    }

    /// Create a fluffer from a validated configuration
    pub fn with_config(config: FluffConfig) -> FluffResult<Self> {
        Self::with_provider(&DefaultRngProvider, config)
    }
}

impl Default for Fluffer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Fluffer<ThreadRng> {
    /// Create a fluffer over the calling thread's RNG
    pub fn thread_local() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl<R: RngCore> Fluffer<R> {
    /// Wrap an existing RNG using the default bounds
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            dates: DateGenerator::default(),
            ints: PositiveIntGenerator::default(),
        }
    }

    /// Build a fluffer whose RNG comes from `provider`, seeded per `config`
    pub fn with_provider<P>(provider: &P, config: FluffConfig) -> FluffResult<Self>
    where
        P: RngProvider<Rng = R>,
    {
        config.validate()?;
        debug!(
            seeded = config.seed.is_some(),
            min_year = config.min_year,
            max_year = config.max_year,
            max_int = config.max_int,
            "configured fluffer"
        );

        Ok(Self {
            rng: provider.create_rng(config.seed),
            dates: DateGenerator::new(config.min_year, config.max_year)?,
            ints: PositiveIntGenerator::new(config.max_int)?,
        })
    }

    /// The default character set used by `random_string` and `random_char`
    pub fn default_character_set(&self) -> &'static [char] {
        default_character_set()
    }

    /// A string of `length` characters from the default character set
    pub fn random_string(&mut self, length: usize) -> String {
        let value = StringGenerator::default_charset(length).generate(&mut self.rng);
        trace!(length, "generated random string");
        value
    }

    /// A string of `length` characters sampled uniformly from `charset`
    ///
    /// A zero length always yields `""`, even for an empty charset.
    pub fn random_string_from(&mut self, length: usize, charset: &[char]) -> FluffResult<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let generator = StringGenerator::new(length, charset)
            .inspect_err(|err| debug!(%err, length, "rejected random string request"))?;
        let value = generator.generate(&mut self.rng);
        trace!(length, charset_len = charset.len(), "generated random string");
        Ok(value)
    }

    /// One character from the default character set
    pub fn random_char(&mut self) -> char {
        let value = CharGenerator::default_charset().generate(&mut self.rng);
        trace!(%value, "generated random char");
        value
    }

    /// One character sampled uniformly from `charset`
    pub fn random_char_from(&mut self, charset: &[char]) -> FluffResult<char> {
        let generator = CharGenerator::new(charset)
            .inspect_err(|err| debug!(%err, "rejected random char request"))?;
        let value = generator.generate(&mut self.rng);
        trace!(%value, charset_len = charset.len(), "generated random char");
        Ok(value)
    }

    /// A date formatted as `YYYY-MM-DD`
    pub fn random_date(&mut self) -> String {
        self.random_calendar_date().to_string()
    }

    /// A date in structured form
    pub fn random_calendar_date(&mut self) -> CalendarDate {
        let date = self.dates.generate(&mut self.rng);
        trace!(%date, "generated random date");
        date
    }

    /// One element of `values`, chosen uniformly and returned by value
    pub fn random_enum<T: Clone>(&mut self, values: &[T]) -> FluffResult<T> {
        let generator = OneOfGenerator::new(values)
            .inspect_err(|err| debug!(%err, "rejected random enum request"))?;
        Ok(generator.generate(&mut self.rng))
    }

    /// An integer in `1..=max`, where `max` defaults to 2^31 - 1
    pub fn random_int(&mut self) -> u32 {
        let value = self.ints.generate(&mut self.rng);
        trace!(value, "generated random int");
        value
    }

    /// Inclusive upper bound used by `random_int`
    pub fn max_int(&self) -> u32 {
        self.ints.max()
    }

    /// Mutable access to the underlying RNG, e.g. to draw values fluff has no
    /// operation for from the same stream
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the fluffer and hand back its RNG in its current state
    pub fn into_rng(self) -> R {
        self.rng
    }
}

// ============================================================================
// Thread-local convenience functions
// ============================================================================

/// `Fluffer::random_string` over the calling thread's RNG
pub fn random_string(length: usize) -> String {
    Fluffer::thread_local().random_string(length)
}

/// `Fluffer::random_string_from` over the calling thread's RNG
pub fn random_string_from(length: usize, charset: &[char]) -> FluffResult<String> {
    Fluffer::thread_local().random_string_from(length, charset)
}

/// `Fluffer::random_char` over the calling thread's RNG
pub fn random_char() -> char {
    Fluffer::thread_local().random_char()
}

/// `Fluffer::random_char_from` over the calling thread's RNG
pub fn random_char_from(charset: &[char]) -> FluffResult<char> {
    Fluffer::thread_local().random_char_from(charset)
}

/// `Fluffer::random_date` over the calling thread's RNG
pub fn random_date() -> String {
    Fluffer::thread_local().random_date()
}

/// `Fluffer::random_enum` over the calling thread's RNG
pub fn random_enum<T: Clone>(values: &[T]) -> FluffResult<T> {
    Fluffer::thread_local().random_enum(values)
}

/// `Fluffer::random_int` over the calling thread's RNG
pub fn random_int() -> u32 {
    Fluffer::thread_local().random_int()
}
