//! Error Types for Parcel Validation Failures
//!
//! ## Design
//!
//! ParcelGuard's error system mirrors the two ways a measurement can be
//! unusable:
//!
//! 1. **Wrong type**: the input is not a number at all (text that does not
//!    parse, a boolean, a null, a structured value).
//! 2. **Wrong value**: the input is a number but not a usable measurement
//!    (zero, negative, NaN, infinite).
//!
//! Both variants name the offending [`Field`], so a caller can point at the
//! exact input that was rejected. Errors are `Copy` and carry no heap data,
//! only `&'static str` descriptions and the coerced `f64`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use parcelguard_core::{classify_raw, ErrorKind, SortError};
//!
//! fn exit_code(result: Result<&'static str, SortError>) -> i32 {
//!     match result {
//!         Ok(_) => 0,
//!         Err(e) => match e.kind() {
//!             // Caller sent something that is not a number
//!             ErrorKind::InvalidType => 2,
//!             // Caller sent a number outside the measurement domain
//!             ErrorKind::InvalidValue => 3,
//!         },
//!     }
//! }
//!
//! let result = classify_raw(true, 10, 10, 1).map(|c| c.as_str());
//! assert_eq!(exit_code(result), 2);
//! ```

use thiserror_no_std::Error;

use crate::measurement::Field;

/// Result type for sorting operations
pub type SortResult<T> = Result<T, SortError>;

/// Validation errors raised before a parcel can be classified
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SortError {
    /// Input cannot be interpreted as a real number, or is a boolean
    #[error("{field} must be a number, got {found}")]
    InvalidType {
        /// Which measurement was rejected
        field: Field,
        /// Short description of what was supplied instead
        found: &'static str,
    },

    /// Input is numeric but not finite, or not strictly positive
    #[error("{field} must be a finite number greater than zero, got {value}")]
    InvalidValue {
        /// Which measurement was rejected
        field: Field,
        /// The value after numeric coercion
        value: f64,
    },
}

/// Coarse classification of a [`SortError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SortError::InvalidType`]
    InvalidType,
    /// See [`SortError::InvalidValue`]
    InvalidValue,
}

impl SortError {
    /// The kind of failure, without field detail
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    /// The measurement that failed validation
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidType { field, .. } | Self::InvalidValue { field, .. } => *field,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SortError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidType { field, found } =>
                defmt::write!(fmt, "{} must be a number, got {}", field.as_str(), found),
            Self::InvalidValue { field, value } =>
                defmt::write!(fmt, "{} must be finite and > 0, got {}", field.as_str(), value),
        }
    }
}
