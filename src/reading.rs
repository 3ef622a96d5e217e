//! Measurement value objects.
//!
//! A [`Measurements`] bag carries whatever named readings the caller has;
//! [`Measurements::resolve`] decides which of the two computable shapes
//! those fields support and returns the corresponding
//! [`EnvironmentalReading`] variant. Bags are transient: built per call,
//! never mutated, discarded after the evaluation returns.

use serde::{Deserialize, Serialize};

use crate::error::{HliError, Result};
use crate::indicator::RiskIndicator;

/// Open bag of named environmental measurements for one evaluation.
/// Absent fields stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    /// Black globe temperature (°C), may be negative
    pub bg_temp: Option<f64>,
    /// Air temperature (°C), may be negative
    pub air_temp: Option<f64>,
    /// Relative humidity (%)
    pub rel_hum: Option<f64>,
    /// Solar radiation intensity
    pub solar_rad: Option<f64>,
    /// Wind speed (km/h)
    pub wind_speed: Option<f64>,
    /// Medium/high risk boundary override
    pub threshold: Option<f64>,
}

/// A measurement set resolved to one of the two computable shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentalReading {
    /// Direct black globe reading
    BlackGlobe {
        bg_temp: f64,
        rel_hum: f64,
        wind_speed: f64,
    },

    /// Black globe estimated from air temperature and solar radiation
    AirSolar {
        air_temp: f64,
        solar_rad: f64,
        rel_hum: f64,
        wind_speed: f64,
    },
}

fn required(field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or(HliError::MissingRequiredField { field })
}

impl Measurements {
    /// Resolve which formula shape this bag supports.
    ///
    /// The humidity/wind gate fires only when both are absent; a bag with
    /// one of the pair present passes the gate and fails later, at field
    /// extraction, naming the specific missing field. A present black
    /// globe reading always wins over an air/solar pair.
    pub fn resolve(&self) -> Result<EnvironmentalReading> {
        if self.rel_hum.is_none() && self.wind_speed.is_none() {
            return Err(HliError::MissingRequiredField {
                field: "rel_hum and wind_speed",
            });
        }

        if let Some(bg_temp) = self.bg_temp {
            return Ok(EnvironmentalReading::BlackGlobe {
                bg_temp,
                rel_hum: required("rel_hum", self.rel_hum)?,
                wind_speed: required("wind_speed", self.wind_speed)?,
            });
        }

        if let (Some(air_temp), Some(solar_rad)) = (self.air_temp, self.solar_rad) {
            return Ok(EnvironmentalReading::AirSolar {
                air_temp,
                solar_rad,
                rel_hum: required("rel_hum", self.rel_hum)?,
                wind_speed: required("wind_speed", self.wind_speed)?,
            });
        }

        Err(HliError::UnsupportedInputCombination)
    }
}

/// Output of one evaluation: the computed index and, when requested, its
/// risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HliResult {
    pub index: f64,
    pub indicator: Option<RiskIndicator>,
}
