//! Common Validation Utilities
//!
//! Shared checks used by every measurement path. All of them are pure
//! functions: no allocation, no state, errors instead of panics.
//!
//! ## Check Order
//!
//! A raw input goes through these steps, stopping at the first failure:
//!
//! ```text
//! coerce()          type / coercibility, booleans rejected before coercion
//!   -> check_finite()    NaN and infinities
//!   -> check_positive()  zero and negatives
//! ```
//!
//! Booleans are rejected before any numeric conversion happens. Converting
//! `true` to `1.0` first would let it pass every later check.

use crate::{
    constants::thresholds::MIN_MEASUREMENT_EXCLUSIVE,
    errors::{SortError, SortResult},
    measurement::{Field, RawMeasurement},
    traits::Validatable,
};

/// Coerce a raw input into an `f64` without checking its range
pub fn coerce(field: Field, raw: RawMeasurement<'_>) -> SortResult<f64> {
    let invalid_type = || SortError::InvalidType {
        field,
        found: raw.type_name(),
    };

    match raw {
        RawMeasurement::Bool(_) => Err(invalid_type()),
        RawMeasurement::Int(i) => Ok(i as f64),
        RawMeasurement::UInt(u) => Ok(u as f64),
        RawMeasurement::Float(f) => Ok(f),
        RawMeasurement::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid_type()),
        RawMeasurement::Null | RawMeasurement::Unsupported(_) => Err(invalid_type()),
    }
}

/// Reject NaN and infinities
pub fn check_finite(field: Field, value: f64) -> SortResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(SortError::InvalidValue { field, value })
    }
}

/// Reject zero and negative values
pub fn check_positive(field: Field, value: f64) -> SortResult<()> {
    if value > MIN_MEASUREMENT_EXCLUSIVE {
        Ok(())
    } else {
        Err(SortError::InvalidValue { field, value })
    }
}

/// Finiteness then positivity
pub fn check_measurement(field: Field, value: f64) -> SortResult<f64> {
    check_finite(field, value)?;
    check_positive(field, value)?;
    Ok(value)
}
