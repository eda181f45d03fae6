//! Configuration for ruling extraction.

use crate::error::{Error, Result};

/// Minimum length a clipped segment must exceed to be kept as a ruling.
pub const RULING_MINIMUM_LENGTH: f32 = 0.01;

/// Per-page ruling extraction configuration.
///
/// Each extractor owns its own copy, so pages processed in parallel never
/// share settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RulingConfig {
    /// Extract rulings from painted paths. When false, painting operators only
    /// reset the current path.
    pub extract_rulings: bool,

    /// Clipped segments must be strictly longer than this to be emitted.
    pub min_ruling_length: f32,
}

impl Default for RulingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RulingConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            extract_rulings: true,
            min_ruling_length: RULING_MINIMUM_LENGTH,
        }
    }

    /// Enable or disable ruling extraction.
    pub fn with_extract_rulings(mut self, enable: bool) -> Self {
        self.extract_rulings = enable;
        self
    }

    /// Set the minimum ruling length.
    pub fn with_min_ruling_length(mut self, length: f32) -> Self {
        self.min_ruling_length = length;
        self
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.min_ruling_length.is_finite() || self.min_ruling_length < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_ruling_length must be finite and non-negative, got {}",
                self.min_ruling_length
            )));
        }
        Ok(())
    }
}
