//! Sorting Thresholds for ParcelGuard
//!
//! Limits that decide whether a parcel is bulky or heavy. All comparisons
//! against these values are inclusive: a parcel measuring exactly the
//! threshold counts as bulky (or heavy).

// ===== BULKINESS =====

/// Single-dimension bulkiness limit (cm).
///
/// A parcel with any side at or above this length is bulky, regardless of
/// its volume. Applies equally to width, height and length.
pub const BULKY_DIMENSION_CM: f64 = 150.0;

/// Volume bulkiness limit (cm³).
///
/// Compared against the direct product `width * height * length`. One cubic
/// metre.
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;

// ===== WEIGHT =====

/// Mass limit (kg).
///
/// A parcel at or above this mass is heavy.
pub const HEAVY_MASS_KG: f64 = 20.0;

// ===== MEASUREMENT DOMAIN =====

/// Smallest accepted measurement, exclusive.
///
/// Measurements must be strictly greater than this value.
pub const MIN_MEASUREMENT_EXCLUSIVE: f64 = 0.0;
