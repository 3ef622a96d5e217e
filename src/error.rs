//! Failure taxonomy for heat load evaluation.
//!
//! Every message embeds the literal offending value, not just the field
//! name, so callers and tests can pattern-match on it. The engine signals
//! failures through its `Result` channel only; it never logs.

use thiserror::Error;

/// Errors raised by the HLI engine and its measurement plumbing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HliError {
    /// A required numeric field was not a usable number: NaN, infinite,
    /// or a non-numeric spreadsheet cell.
    #[error("{field} must be a numeric value, got {value}")]
    InvalidInputType { field: &'static str, value: String },

    /// Relative humidity, wind speed, solar radiation, HLI value, or
    /// threshold was below zero.
    #[error("{field}: {value} cannot be negative")]
    NegativeValue { field: &'static str, value: f64 },

    /// A measurement the selected formula path needs was absent.
    #[error("required measurement missing: {field}")]
    MissingRequiredField { field: &'static str },

    /// Neither a black globe reading nor a complete air temperature and
    /// solar radiation pair was supplied.
    #[error("must supply bg_temp, or both air_temp and solar_rad")]
    UnsupportedInputCombination,

    /// The black globe estimate takes sqrt(air_temp), which has no real
    /// value below 0 °C.
    #[error("black globe estimate undefined for negative air temperature: {air_temp}")]
    BlackGlobeEstimateDomain { air_temp: f64 },
}

pub type Result<T> = std::result::Result<T, HliError>;
