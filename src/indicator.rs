//! Thermal Risk Classification
//!
//! Maps a computed heat load index onto the five-tier risk scale used for
//! feedlot management decisions. The medium/high boundary is the only
//! configurable band edge; the rest of the scale is fixed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::ensure_non_negative;

/// Default HLI boundary separating medium from high risk.
pub const DEFAULT_THRESHOLD: f64 = 86.0;

/// Thermal risk tier, ordered from negligible to extreme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskIndicator {
    /// No measurable heat load
    Negligible = 1,

    /// Comfortable conditions, no intervention needed
    Low = 2,

    /// Accumulating load; watch susceptible animals
    Medium = 3,

    /// Above the management threshold; mitigation advised
    High = 4,

    /// Dangerous load regardless of threshold
    Extreme = 5,
}

impl RiskIndicator {
    /// Ordinal value on the 1-5 scale.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Friendly name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskIndicator::Negligible => "Negligible",
            RiskIndicator::Low => "Low",
            RiskIndicator::Medium => "Medium",
            RiskIndicator::High => "High",
            RiskIndicator::Extreme => "Extreme",
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> &'static [RiskIndicator] {
        &[
            RiskIndicator::Negligible,
            RiskIndicator::Low,
            RiskIndicator::Medium,
            RiskIndicator::High,
            RiskIndicator::Extreme,
        ]
    }
}

/// Classify an HLI value against a medium/high threshold.
///
/// Band edges follow the published scale verbatim. Note the scale leaves
/// `(0, 1]` and `(20, 21]` uncovered by a named band; values there fall
/// through to `Extreme`. Kept as observed pending confirmation of the
/// intended boundaries.
pub fn classify(hli_value: f64, threshold: f64) -> Result<RiskIndicator> {
    ensure_non_negative("heat load index", hli_value)?;
    ensure_non_negative("threshold", threshold)?;

    let tier = if hli_value == 0.0 {
        RiskIndicator::Negligible
    } else if hli_value > 1.0 && hli_value <= 20.0 {
        RiskIndicator::Low
    } else if hli_value > 21.0 && hli_value <= threshold {
        RiskIndicator::Medium
    } else if hli_value > threshold && hli_value <= 100.0 {
        RiskIndicator::High
    } else {
        RiskIndicator::Extreme
    };

    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HliError;

    #[test]
    fn tiers_are_ordered() {
        assert!(RiskIndicator::Negligible < RiskIndicator::Low);
        assert!(RiskIndicator::Medium < RiskIndicator::High);
        assert!(RiskIndicator::High < RiskIndicator::Extreme);
        assert_eq!(RiskIndicator::Negligible.ordinal(), 1);
        assert_eq!(RiskIndicator::Extreme.ordinal(), 5);
        assert_eq!(RiskIndicator::all().len(), 5);
    }

    #[test]
    fn classifies_each_named_band() {
        assert_eq!(classify(0.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Negligible);
        assert_eq!(classify(19.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Low);
        assert_eq!(classify(22.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Medium);
        assert_eq!(classify(97.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::High);
        assert_eq!(classify(300.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Extreme);
    }

    #[test]
    fn uncovered_gaps_fall_through_to_extreme() {
        // (0, 1] and (20, 21] have no named band on the observed scale.
        assert_eq!(classify(0.5, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Extreme);
        assert_eq!(classify(1.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Extreme);
        assert_eq!(classify(20.5, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Extreme);
        assert_eq!(classify(21.0, DEFAULT_THRESHOLD).unwrap(), RiskIndicator::Extreme);
    }

    #[test]
    fn threshold_moves_medium_high_boundary() {
        assert_eq!(classify(90.0, 95.0).unwrap(), RiskIndicator::Medium);
        assert_eq!(classify(90.0, 86.0).unwrap(), RiskIndicator::High);
    }

    #[test]
    fn rejects_negative_value_and_threshold() {
        assert!(matches!(
            classify(-1.0, DEFAULT_THRESHOLD),
            Err(HliError::NegativeValue { .. })
        ));
        assert!(matches!(
            classify(98.0, -1.0),
            Err(HliError::NegativeValue { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert!(matches!(
            classify(f64::NAN, DEFAULT_THRESHOLD),
            Err(HliError::InvalidInputType { .. })
        ));
    }
}
