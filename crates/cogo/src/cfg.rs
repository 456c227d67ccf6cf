//! Numeric policy for the COGO engine.
//!
//! Policy
//! - One tolerance (`EPS`) for every degeneracy test in `intersect`. Solvers
//!   compare dimensionless quantities against it (sine of the angle between two
//!   directions, discriminants scaled by the squared radius) so the same value
//!   works for site-local and grid-sized coordinates alike.
//! - Output precision is fixed at 4 decimals. Internal construction geometry
//!   stays unrounded until the final result.

/// Degeneracy tolerance shared by all intersection solvers.
pub const EPS: f64 = 1e-9;

/// Decimal places of every coordinate and distance the engine reports.
pub const OUTPUT_DECIMALS: u32 = 4;

/// Decimal places of a reported slope percentage.
pub const SLOPE_DECIMALS: u32 = 3;

/// Length of the construction rays used by the bearing×bearing solver.
pub const CONSTRUCTION_LENGTH: f64 = 1000.0;

/// Seconds of arc in a full circle.
pub(crate) const FULL_CIRCLE_SECONDS: i64 = 360 * 3600;
