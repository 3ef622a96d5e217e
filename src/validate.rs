//! Measurement validation.
//!
//! Two checks cover every input the formulas accept: the value must be a
//! usable finite number, and magnitude-only measurements (humidity, wind
//! speed, solar radiation) must not be negative. Temperatures skip the
//! sign check; sub-zero readings are physically valid.

use crate::error::{HliError, Result};

/// Confirm a candidate is a usable finite number.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HliError::InvalidInputType {
            field,
            value: value.to_string(),
        })
    }
}

/// Confirm a magnitude-only measurement is finite and not negative.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        Err(HliError::NegativeValue { field, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_accepts_negative_temperature() {
        assert!(ensure_finite("air temperature", -8.3).is_ok());
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(matches!(
            ensure_finite("relative humidity", f64::NAN),
            Err(HliError::InvalidInputType { .. })
        ));
        assert!(matches!(
            ensure_finite("wind speed", f64::INFINITY),
            Err(HliError::InvalidInputType { .. })
        ));
    }

    #[test]
    fn non_negative_rejects_below_zero() {
        let err = ensure_non_negative("wind speed", -12.9).unwrap_err();
        assert!(err.to_string().contains("-12.9"));
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(ensure_non_negative("solar radiation", 0.0).is_ok());
    }
}
