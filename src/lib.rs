//! Heat Load Index for feedlot cattle
//!
//! Implements the thermal comfort index proposed by Gaughan et al. (2008)
//! for feedlot beef cattle, with the accompanying five-tier risk scale.
//!
//! - `validate`: finite-number and non-negativity checks on measurements
//! - `reading`: measurement bags and the two computable input shapes
//! - `hli`: the two formula paths and the evaluation dispatcher
//! - `indicator`: risk tiers and the threshold classifier
//! - `excel`: spreadsheet extraction glue (calamine), kept outside the core
//!
//! The engine is pure: no I/O, no logging, no state between calls.

pub mod error;
pub mod excel;
pub mod hli;
pub mod indicator;
pub mod reading;
pub mod validate;

// Re-export the public evaluation surface
pub use error::HliError;
pub use hli::{compute_black_globe_index, compute_no_black_globe_index, evaluate};
pub use indicator::{classify, RiskIndicator, DEFAULT_THRESHOLD};
pub use reading::{EnvironmentalReading, HliResult, Measurements};
