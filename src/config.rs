//! Construction parameters for `ChainedHashMap`.

use thiserror::Error;

/// Number of buckets a default map starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// Entries-per-bucket ratio at which a map doubles its bucket array.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("initial capacity must be greater than zero")]
    ZeroCapacity,
    #[error("initial capacity {0} has no power-of-two bucket count")]
    CapacityTooLarge(usize),
    #[error("load factor must be finite and admit at least one entry per initial bucket array, got {0}")]
    InvalidLoadFactor(f64),
}

/// Initial bucket count and growth threshold of a map.
///
/// The capacity is rounded up to the next power of two when the map is
/// built. The load factor is fixed for the lifetime of the map and must
/// satisfy `capacity * load_factor >= 1`, so a single doubling always makes
/// room for the next entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks the parameters and returns the bucket count the map starts
    /// with.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let capacity = self
            .initial_capacity
            .checked_next_power_of_two()
            .ok_or(ConfigError::CapacityTooLarge(self.initial_capacity))?;
        if (capacity as f64) * self.load_factor < 1.0 {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(capacity)
    }
}
