//! Core sorting engine for ParcelGuard
//!
//! Classifies parcels into handling stacks from their dimensions and mass.
//! Every measurement is validated before it reaches the decision logic, so
//! the classifier only ever sees finite, strictly positive values.
//!
//! Key constraints:
//! - No heap allocation, usable from `no_std` firmware on sorting hardware
//! - No shared state, safe to call from any number of threads
//! - Thresholds are fixed constants, see [`constants::thresholds`]
//!
//! ```
//! use parcelguard_core::{classify, Category};
//!
//! // 100 x 100 x 100 cm hits the volume threshold exactly
//! assert_eq!(classify(100.0, 100.0, 100.0, 1.0)?, Category::Special);
//!
//! // Both bulky and heavy
//! assert_eq!(classify(150.0, 100.0, 100.0, 20.0)?, Category::Rejected);
//! # Ok::<(), parcelguard_core::SortError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod category;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod package;
pub mod sorter;
pub mod traits;
pub mod validators;

// Public API
pub use category::Category;
pub use errors::{ErrorKind, SortError, SortResult};
pub use measurement::{Field, RawMeasurement};
pub use package::Package;
pub use sorter::{classify, classify_raw, PackageSorter, SortingConstraints};
pub use traits::{Classifier, Validatable, Validator};
pub use validators::MeasurementValidator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
