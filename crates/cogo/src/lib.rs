//! Surveying coordinate geometry (COGO).
//!
//! Bearings in degrees-minutes-seconds, inverse and polar projection between
//! points, two-constraint intersections, and traverse reduction to
//! coordinates. The engine is pure: no I/O, no shared state, every call a
//! deterministic function of its arguments.
//!
//! Conventions
//! - Bearings are clockwise from North (`x` = easting, `y` = northing).
//! - Reported coordinates and distances are rounded to 4 decimals
//!   (`cfg::OUTPUT_DECIMALS`).
//! - Degenerate geometry is `None`, never an error. `CogoError` covers
//!   malformed input at the boundary (DMS text, raw direction flags).

pub mod angle;
pub mod api;
pub mod cfg;
pub mod convert;
pub mod error;
pub mod intersect;
pub mod point;
pub mod traverse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::Angle;
pub use error::{CogoError, Result};
pub use nalgebra::{Point2, Point3, Vector3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::intersect::PointPair;
    pub use crate::point::{angle_between, distance_between, inverse, project, Inverse};
    pub use crate::traverse::{
        angle_traverse, angle_traverse_from, bearing_traverse, Closure, ReferenceDirection,
        RotationDirection, TraverseAngleLeg, TraverseLeg,
    };
    pub use nalgebra::{Point2, Point3};
}
