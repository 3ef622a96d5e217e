//! Heat Load Index Formulas
//!
//! The Gaughan et al. (2008) thermal comfort index for feedlot beef
//! cattle. Two regime-specific estimates are blended by a logistic weight
//! over black globe temperature, centered at 25 °C, so the formula switch
//! has no hard discontinuity. When no black globe sensor is available the
//! reading is estimated from air temperature and solar radiation.

use crate::error::{HliError, Result};
use crate::indicator::{classify, DEFAULT_THRESHOLD};
use crate::reading::{EnvironmentalReading, HliResult, Measurements};
use crate::validate::{ensure_finite, ensure_non_negative};

/// Heat Load Index from a direct black globe reading.
///
/// Unbounded on both sides: extreme inputs yield extreme indices by
/// formula definition.
pub fn compute_black_globe_index(bg_temp: f64, rel_hum: f64, wind_speed: f64) -> Result<f64> {
    ensure_finite("black globe temperature", bg_temp)?;
    ensure_non_negative("relative humidity", rel_hum)?;
    ensure_non_negative("wind speed", wind_speed)?;

    // Logistic weight between the hot and mild regimes.
    let frac_high = 1.0 / (1.0 + (-(bg_temp - 25.0) / 2.25).exp());

    let hli_high =
        1.55 * bg_temp + 0.38 * rel_hum - 0.5 * wind_speed + (2.4 - wind_speed).exp() + 8.62;
    let hli_low = 1.3 * bg_temp + 0.28 * rel_hum - wind_speed + 10.66;

    Ok(frac_high * hli_high + (1.0 - frac_high) * hli_low)
}

/// Heat Load Index without a black globe sensor.
///
/// Estimates the black globe temperature from air temperature and solar
/// radiation, then delegates to [`compute_black_globe_index`]. The
/// estimate takes `sqrt(air_temp)`, so sub-zero air temperatures are
/// rejected on this path ([`HliError::BlackGlobeEstimateDomain`]) even
/// though they are valid on the direct path.
pub fn compute_no_black_globe_index(
    air_temp: f64,
    rel_hum: f64,
    solar_rad: f64,
    wind_speed: f64,
) -> Result<f64> {
    ensure_finite("air temperature", air_temp)?;
    ensure_non_negative("relative humidity", rel_hum)?;
    ensure_non_negative("solar radiation", solar_rad)?;
    ensure_non_negative("wind speed", wind_speed)?;

    if air_temp < 0.0 {
        return Err(HliError::BlackGlobeEstimateDomain { air_temp });
    }

    let pred_bg =
        1.33 * air_temp - 2.65 * air_temp.sqrt() + 3.21 * (solar_rad + 1.0).log10() + 3.5;

    compute_black_globe_index(pred_bg, rel_hum, wind_speed)
}

/// Evaluate a measurement bag.
///
/// Picks the formula path the supplied fields support, computes the
/// index, and when `want_indicator` is set classifies it against the
/// bag's threshold (default [`DEFAULT_THRESHOLD`]).
pub fn evaluate(measurements: &Measurements, want_indicator: bool) -> Result<HliResult> {
    let threshold = measurements.threshold.unwrap_or(DEFAULT_THRESHOLD);

    let index = match measurements.resolve()? {
        EnvironmentalReading::BlackGlobe {
            bg_temp,
            rel_hum,
            wind_speed,
        } => compute_black_globe_index(bg_temp, rel_hum, wind_speed)?,
        EnvironmentalReading::AirSolar {
            air_temp,
            solar_rad,
            rel_hum,
            wind_speed,
        } => compute_no_black_globe_index(air_temp, rel_hum, solar_rad, wind_speed)?,
    };

    let indicator = if want_indicator {
        Some(classify(index, threshold)?)
    } else {
        None
    };

    Ok(HliResult { index, indicator })
}
