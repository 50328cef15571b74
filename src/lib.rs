//! Mean Trophic Level (MTL) computation for fishery catch data.
//!
//! The MTL is the catch-mass-weighted average trophic level of a landed
//! catch, used as a marine ecosystem health indicator. The trophic level
//! reference table is fixed and process-wide; the calculation is a pure,
//! single-pass function over the caller's catch rows.

mod error;
mod metrics;
mod trophic;

pub mod schema;

pub use error::MtlError;
pub use metrics::{calculate_mtl, calculate_mtl_from_records, CatchRecord};
pub use trophic::{trophic_level, TROPHIC_LEVELS};
