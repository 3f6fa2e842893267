use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::{DEFAULT_SEGMENT_COUNT, SPIN_DURATION_MS};

/// Tunable parameters of a wheel. Anything that comes from outside the
/// program (URL overrides) goes through [`WheelConfig::validated`] first.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct WheelConfig {
    // Fewer than two segments leaves the wheel without a single prize.
    #[validate(range(min = 2, max = 36))]
    pub segment_count: u32,
    #[validate(range(min = 500, max = 10000))]
    pub spin_duration_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            spin_duration_ms: SPIN_DURATION_MS,
        }
    }
}

impl WheelConfig {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        self.validate()?;
        Ok(self)
    }

    pub fn segments(&self) -> usize {
        self.segment_count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WheelConfig::default();
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.spin_duration_ms, 3500);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_rejects_wheel_without_prizes() {
        let config = WheelConfig { segment_count: 1, ..WheelConfig::default() };
        let errors = config.validated().unwrap_err();
        assert!(errors.field_errors().contains_key("segment_count"));
    }

    #[test]
    fn test_rejects_out_of_range_duration() {
        let too_fast = WheelConfig { spin_duration_ms: 100, ..WheelConfig::default() };
        let too_slow = WheelConfig { spin_duration_ms: 60_000, ..WheelConfig::default() };
        assert!(too_fast.validated().is_err());
        assert!(too_slow.validated().is_err());
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: WheelConfig =
            serde_json::from_str(r#"{"segment_count":8,"spin_duration_ms":2000}"#).unwrap();
        assert_eq!(config, WheelConfig { segment_count: 8, spin_duration_ms: 2000 });
    }
}
