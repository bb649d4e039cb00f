use serde::{Deserialize, Serialize};

use crate::BlurError;

pub const DEFAULT_THRESHOLD: f32 = 35.0;
pub const DEFAULT_MIN_ZERO: f32 = 0.05;

/// Decision parameters for one analysis run.
///
/// `threshold` is the edge-energy level a tile must exceed on some scale to
/// count as an edge. `min_zero` is the Dirac/Astep ratio under which an image
/// is declared blurred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub threshold: f32,
    pub min_zero: f32,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_zero: DEFAULT_MIN_ZERO,
        }
    }
}

impl BlurConfig {
    pub fn validate(&self) -> Result<(), BlurError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(BlurError::InvalidConfig {
                reason: "threshold must be finite and non-negative",
            });
        }
        if !self.min_zero.is_finite() || self.min_zero < 0.0 {
            return Err(BlurError::InvalidConfig {
                reason: "min_zero must be finite and non-negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlurConfig, DEFAULT_MIN_ZERO, DEFAULT_THRESHOLD};
    use crate::BlurError;

    #[test]
    fn defaults_are_35_and_five_percent() {
        let cfg = BlurConfig::default();
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cfg.min_zero, DEFAULT_MIN_ZERO);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: BlurConfig = serde_json::from_str(r#"{ "threshold": 20.0 }"#).expect("valid json");
        assert_eq!(cfg.threshold, 20.0);
        assert_eq!(cfg.min_zero, DEFAULT_MIN_ZERO);
    }

    #[test]
    fn rejects_negative_or_nan_threshold() {
        for threshold in [-1.0f32, f32::NAN, f32::INFINITY] {
            let cfg = BlurConfig {
                threshold,
                ..BlurConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(BlurError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn rejects_negative_or_nan_min_zero() {
        for min_zero in [-0.01f32, f32::NAN, f32::NEG_INFINITY] {
            let cfg = BlurConfig {
                min_zero,
                ..BlurConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(BlurError::InvalidConfig { .. })
            ));
        }

        let zero = BlurConfig {
            min_zero: 0.0,
            ..BlurConfig::default()
        };
        assert!(zero.validate().is_ok());
    }
}
