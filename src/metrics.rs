//! Mean Trophic Level (MTL) calculation for fishery catch data.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::error::MtlError;
use crate::schema::catch;
use crate::trophic;

/// One catch row: a species and its landed mass in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchRecord {
    pub species_name: String,
    pub catch_kg: f64,
}

impl CatchRecord {
    pub fn new(species_name: impl Into<String>, catch_kg: f64) -> Self {
        Self {
            species_name: species_name.into(),
            catch_kg,
        }
    }
}

/// Calculate the weighted Mean Trophic Level of a catch.
///
/// The DataFrame must contain a `species_name` string column and a `catch_kg`
/// column that is numeric or coercible to numeric. Rows with an invalid, zero
/// or negative catch are ignored. Species not found in the trophic level
/// table are skipped with a single aggregated warning.
///
/// Fails with [`MtlError::MissingColumn`] if a required column is absent,
/// [`MtlError::TypeMismatch`] if a column has an unusable dtype, and
/// [`MtlError::Validation`] if no row contributes any valid catch.
pub fn calculate_mtl(df: &DataFrame) -> Result<f64, MtlError> {
    require_columns(df, &catch::REQUIRED)?;

    let species = df
        .column(catch::SPECIES_NAME)?
        .as_materialized_series()
        .str()
        .map_err(|_| {
            MtlError::TypeMismatch(format!(
                "column '{}' must be a string column",
                catch::SPECIES_NAME
            ))
        })?;

    // Non-strict cast: values that fail coercion become null and are
    // treated like any other invalid catch. The input is never mutated.
    let catches = df
        .column(catch::CATCH_KG)?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|_| {
            MtlError::TypeMismatch(format!(
                "column '{}' must be numeric or coercible to numeric",
                catch::CATCH_KG
            ))
        })?;
    let catches = catches.f64()?;

    let outcome = weighted_mean(species.into_iter().zip(catches))?;
    Ok(outcome.mtl)
}

/// Calculate the MTL over explicit catch records.
///
/// Same semantics as [`calculate_mtl`] without the tabular boundary: the
/// record type already guarantees the shape, so only
/// [`MtlError::Validation`] can occur.
pub fn calculate_mtl_from_records(records: &[CatchRecord]) -> Result<f64, MtlError> {
    let rows = records
        .iter()
        .map(|r| (Some(r.species_name.as_str()), Some(r.catch_kg)));
    let outcome = weighted_mean(rows)?;
    Ok(outcome.mtl)
}

pub(crate) struct MtlOutcome {
    pub(crate) mtl: f64,
    pub(crate) missing_species: BTreeSet<String>,
}

/// Single-pass weighted average over (species, catch) rows.
///
/// Rows whose catch is null, non-finite, zero or negative are skipped.
/// Unmatched species are collected and reported once; they only become an
/// error when nothing at all contributes to the total.
pub(crate) fn weighted_mean<'a, I>(rows: I) -> Result<MtlOutcome, MtlError>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<f64>)>,
{
    let mut total_catch = 0.0;
    let mut weighted_sum = 0.0;
    let mut missing_species: BTreeSet<String> = BTreeSet::new();

    for (species, catch_kg) in rows {
        let catch_kg = match catch_kg {
            Some(c) if c.is_finite() && c > 0.0 => c,
            _ => continue, // ignore invalid catch values
        };

        let species = species.unwrap_or("");
        match trophic::trophic_level(species) {
            Some(tl) => {
                weighted_sum += tl * catch_kg;
                total_catch += catch_kg;
            }
            None => {
                missing_species.insert(species.to_string());
            }
        }
    }

    if !missing_species.is_empty() {
        log::warn!(
            "Species not found in trophic level dictionary: {:?}. \
             These species are excluded from MTL calculation.",
            missing_species
        );
    }

    if total_catch == 0.0 {
        return Err(MtlError::Validation(
            "No valid catch data with known trophic levels. Cannot compute MTL.".to_string(),
        ));
    }

    Ok(MtlOutcome {
        mtl: weighted_sum / total_catch,
        missing_species,
    })
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), MtlError> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(MtlError::MissingColumn(format!(
                "catch data must contain columns {:?}",
                catch::REQUIRED
            )));
        }
    }
    Ok(())
}
