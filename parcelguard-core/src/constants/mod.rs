//! Constants for ParcelGuard Core
//!
//! Every numeric limit the sorter applies is defined here, with units in the
//! name. The thresholds are fixed: there is no runtime override, so two
//! builds of the same version always sort a parcel the same way.
//!
//! ## Organization
//!
//! - **Thresholds**: bulkiness and weight limits that drive classification

/// Bulkiness and weight limits for parcel classification.
pub mod thresholds;

pub use thresholds::{BULKY_DIMENSION_CM, BULKY_VOLUME_CM3, HEAVY_MASS_KG};
