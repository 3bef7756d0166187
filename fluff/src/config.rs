//! Configuration for seeding and bounding a `Fluffer`.

/// Largest year a generated date may carry; keeps `YYYY` at four digits
pub const MAX_YEAR: u16 = 9999;

/// Default upper bound for `random_int` (2^31 - 1)
pub const DEFAULT_MAX_INT: u32 = i32::MAX as u32;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Year range is empty, starts at zero, or exceeds four digits
    InvalidYearRange { min: u16, max: u16 },
    /// Invalid integer upper bound (must be > 0)
    InvalidMaxInt(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidYearRange { min, max } => write!(
                f,
                "Invalid year range: {}..={} (must satisfy 1 <= min <= max <= {})",
                min, max, MAX_YEAR
            ),
            ConfigError::InvalidMaxInt(n) => {
                write!(f, "Invalid max int: {} (must be > 0)", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a `Fluffer`
#[derive(Debug, Clone, PartialEq)]
pub struct FluffConfig {
    /// Optional seed for reproducible output
    pub seed: Option<u64>,
    /// Smallest year `random_date` may produce
    pub min_year: u16,
    /// Largest year `random_date` may produce
    pub max_year: u16,
    /// Inclusive upper bound for `random_int`
    pub max_int: u32,
}

impl Default for FluffConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_year: 1,
            max_year: MAX_YEAR,
            max_int: DEFAULT_MAX_INT,
        }
    }
}

impl FluffConfig {
    /// Create a configuration with the default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Restrict generated years to `min..=max`
    pub fn with_year_range(mut self, min: u16, max: u16) -> Self {
        self.min_year = min;
        self.max_year = max;
        self
    }

    /// Set the inclusive upper bound for generated integers
    pub fn with_max_int(mut self, max: u32) -> Self {
        self.max_int = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_year == 0 || self.min_year > self.max_year || self.max_year > MAX_YEAR {
            return Err(ConfigError::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }
        if self.max_int == 0 {
            return Err(ConfigError::InvalidMaxInt(self.max_int));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FluffConfig::default();
        assert!(config.seed.is_none());
        assert_eq!(config.min_year, 1);
        assert_eq!(config.max_year, 9999);
        assert_eq!(config.max_int, 2_147_483_647);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_chain() {
        let config = FluffConfig::new()
            .with_seed(7)
            .with_year_range(1970, 2038)
            .with_max_int(100);

        assert_eq!(config.seed, Some(7));
        assert_eq!((config.min_year, config.max_year), (1970, 2038));
        assert_eq!(config.max_int, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_year_ranges() {
        for (min, max) in [(0, 10), (2000, 1999), (1, 10_000)] {
            let config = FluffConfig::new().with_year_range(min, max);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidYearRange { min, max })
            );
        }
    }

    #[test]
    fn test_config_rejects_zero_max_int() {
        let config = FluffConfig::new().with_max_int(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxInt(0)));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidYearRange { min: 5, max: 2 };
        assert_eq!(
            format!("{}", error),
            "Invalid year range: 5..=2 (must satisfy 1 <= min <= max <= 9999)"
        );
    }
}
