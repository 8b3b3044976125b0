pub mod planar;

pub use planar::PlanarKernel;

use crate::error::Result;
use crate::geometry::{AreaMassProperties, BoundedCurve};
use crate::math::Point3;

/// Which side of the seed curve an offset lands on, relative to the face.
///
/// The direction is an explicit parameter rather than a sign convention of
/// the backend: `Inward` always moves across the face interior, `Outward`
/// always moves away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSide {
    /// Offset across the face interior.
    Inward,
    /// Offset away from the face.
    Outward,
}

/// Capability interface of the geometry backend the decomposition runs on.
///
/// The orchestration layer never constructs geometry itself; it chains these
/// operations and checks their result cardinality. The multi-result methods
/// may legitimately return 0, 1 or more results — the caller decides what
/// counts as an error (the decomposer treats anything but exactly 1 as a
/// fatal ambiguity).
pub trait GeometryKernel {
    /// Curve representation of the backend.
    type Curve: BoundedCurve + Clone;
    /// Bounded surface representation of the backend.
    type Face;
    /// Capped planar region representation of the backend.
    type Region;

    /// Offsets `curve` across `face` by `distance` to the given side,
    /// using `tolerance` as the geometric coincidence tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying offset operation fails outright.
    fn offset_on_surface(
        &self,
        curve: &Self::Curve,
        face: &Self::Face,
        distance: f64,
        side: OffsetSide,
        tolerance: f64,
    ) -> Result<Vec<Self::Curve>>;

    /// Joins curves with coincident endpoints (under `tolerance`) into
    /// maximal chains, one output curve per connected chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying join operation fails outright.
    fn join_curves(&self, curves: &[Self::Curve], tolerance: f64) -> Result<Vec<Self::Curve>>;

    /// Caps a closed planar loop into bounded regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying cap operation fails outright.
    fn cap_planar_loop(&self, loop_curve: &Self::Curve) -> Result<Vec<Self::Region>>;

    /// Creates a straight curve from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error for degenerate (zero-length) input.
    fn make_line(&self, start: Point3, end: Point3) -> Result<Self::Curve>;

    /// Computes compound area mass properties over a list of regions.
    ///
    /// An empty list yields [`AreaMassProperties::empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if a region is degenerate or the computation fails.
    fn region_properties(&self, regions: &[Self::Region]) -> Result<AreaMassProperties>;

    /// Computes area mass properties of a whole face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is degenerate or the computation fails.
    fn face_properties(&self, face: &Self::Face) -> Result<AreaMassProperties>;
}
