pub mod face;
pub mod polyline;
pub mod properties;
pub mod region;

pub use face::PlanarFace;
pub use polyline::Polyline;
pub use properties::AreaMassProperties;
pub use region::PlanarRegion;

use crate::math::Point3;

/// Trait for bounded curves with distinguished endpoints.
///
/// The decomposition only ever needs the two endpoints of a boundary curve
/// (to build the connecting edges of an offset band), so this is the whole
/// curve contract the orchestration layer depends on.
pub trait BoundedCurve {
    /// Returns the start point of the curve.
    fn start_point(&self) -> Point3;

    /// Returns the end point of the curve.
    fn end_point(&self) -> Point3;
}
