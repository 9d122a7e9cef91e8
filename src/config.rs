//! Mining thresholds.

use crate::error::Result;
use crate::support::{validate_fraction, MIN_CONFIDENCE, MIN_SUPPORT};

/// Validated thresholds for a mining run. Both lie in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    min_support: f64,
    min_confidence: f64,
}

impl MiningConfig {
    /// Checks both thresholds before anything is mined.
    pub fn new(min_support: f64, min_confidence: f64) -> Result<MiningConfig> {
        Ok(MiningConfig {
            min_support: validate_fraction(MIN_SUPPORT, min_support)?,
            min_confidence: validate_fraction(MIN_CONFIDENCE, min_confidence)?,
        })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}

#[cfg(test)]
mod tests {
    use super::MiningConfig;
    use crate::error::MiningError;

    #[test]
    fn test_valid_config() {
        let config = MiningConfig::new(0.25, 1.0).unwrap();
        assert_eq!(config.min_support(), 0.25);
        assert_eq!(config.min_confidence(), 1.0);
    }

    #[test]
    fn test_invalid_thresholds() {
        match MiningConfig::new(0.0, 0.5) {
            Err(MiningError::InvalidThreshold { name, .. }) => assert_eq!(name, "Minimum support"),
            other => panic!("unexpected {:?}", other),
        }
        match MiningConfig::new(0.5, 1.5) {
            Err(MiningError::InvalidThreshold { name, value }) => {
                assert_eq!(name, "Minimum confidence");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
