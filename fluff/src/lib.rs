//! # Fluff - Random Fixture Data
//!
//! Fluff produces throwaway values for tests: strings and characters drawn
//! from a character set, `YYYY-MM-DD` dates, picks from a list of candidates,
//! and positive integers. Sampling is always uniform.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluff::{Fluffer, default_character_set};
//!
//! let mut fluffer = Fluffer::new();
//!
//! let token = fluffer.random_string(10);
//! assert_eq!(token.chars().count(), 10);
//! assert!(token.chars().all(|c| default_character_set().contains(&c)));
//!
//! let pin = fluffer.random_string_from(4, &['0', '1', '2', '3']).unwrap();
//! assert!(pin.chars().all(|c| "0123".contains(c)));
//!
//! let colour = fluffer.random_enum(&["red", "green", "blue"]).unwrap();
//! assert!(["red", "green", "blue"].contains(&colour));
//!
//! assert!(fluffer.random_int() > 0);
//! ```
//!
//! ## Reproducible output
//!
//! ```rust
//! use fluff::{FluffConfig, Fluffer};
//!
//! let config = FluffConfig::new().with_seed(7).with_year_range(1990, 1999);
//! let mut left = Fluffer::with_config(config.clone()).unwrap();
//! let mut right = Fluffer::with_config(config).unwrap();
//!
//! assert_eq!(left.random_date(), right.random_date());
//! ```
//!
//! The free functions ([`random_string`], [`random_date`], ...) draw from the
//! calling thread's RNG and are safe to call from many threads at once.

pub mod charset;
pub mod config;
pub mod datetime;
pub mod error;
pub mod fluffer;
pub mod generator;
pub mod numeric;
pub mod rng;
pub mod text;
pub mod verify;

// Re-export the main public API
pub use charset::{DEFAULT_CHARACTERS, default_character_set};
pub use config::{ConfigError, FluffConfig};
pub use datetime::{CalendarDate, DateGenerator, days_in_month};
pub use error::{FluffError, FluffResult};
pub use fluffer::{
    Fluffer, random_char, random_char_from, random_date, random_enum, random_int, random_string,
    random_string_from,
};
pub use generator::{Generator, OneOfGenerator};
pub use numeric::PositiveIntGenerator;
pub use rng::{DefaultRngProvider, RngProvider, SeededRngProvider};
pub use text::{CharGenerator, StringGenerator};
pub use verify::{ForeignCharacter, Histogram, check_only_contains, first_foreign_char};
