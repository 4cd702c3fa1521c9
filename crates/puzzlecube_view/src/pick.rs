//! Mapping a pick ray to the cubie and face it strikes.

use std::cmp::Reverse;

use cubemath::cgmath::{EuclideanSpace, Point3, Vector3};
use cubemath::{Axis, LatticeVec, Sign, SignedAxis};
use float_ord::FloatOrd;
use puzzlecube_core::solved_location;

/// Hit positions are clamped to just inside the outer faces of the puzzle,
/// measured in cubie half-widths.
const CLAMP_EXTENT: f32 = 2.9;

/// Half-line cast from the viewer into the scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Point3<f32>,
    /// Unit direction.
    pub direction: Vector3<f32>,
}
impl Ray {
    /// Returns the point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Intersects rays with scene geometry.
pub trait RayCaster {
    /// Returns the nearest intersection point along `ray`, if any.
    fn cast(&self, ray: &Ray) -> Option<Point3<f32>>;
}

/// Static geometry of a solved puzzle: one axis-aligned box per cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PuzzleGeometry {
    /// Half-width of one cubie.
    pub scale: f32,
}
impl Default for PuzzleGeometry {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
impl RayCaster for PuzzleGeometry {
    fn cast(&self, ray: &Ray) -> Option<Point3<f32>> {
        (0..puzzlecube_core::CUBE_COUNT)
            .filter_map(|i| {
                let center = solved_location(i).to_vec3() * (2.0 * self.scale);
                intersect_box(ray, Point3::from_vec(center), self.scale)
            })
            .min_by_key(|&t| FloatOrd(t))
            .map(|t| ray.at(t))
    }
}

/// Slab test against an axis-aligned cube. Returns the distance along the
/// ray to the entry point.
fn intersect_box(ray: &Ray, center: Point3<f32>, half_size: f32) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in Axis::iter() {
        let i = axis.index();
        let lo = center[i] - half_size;
        let hi = center[i] + half_size;
        let o = ray.origin[i];
        let d = ray.direction[i];
        if d == 0.0 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let (t0, t1) = {
            let a = (lo - o) / d;
            let b = (hi - o) / d;
            if a <= b { (a, b) } else { (b, a) }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Cubie and face struck by a pick ray.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PickResult {
    /// Lattice location of the cubie.
    pub location: LatticeVec,
    /// Outward normal of the face that was struck.
    pub axis: SignedAxis,
}
impl PickResult {
    /// Interprets a point on the surface of geometry with cubie half-width
    /// `scale`.
    ///
    /// Each coordinate is clamped to just inside the outer faces, then halved
    /// and rounded to the nearest lattice coordinate. The face is the one
    /// whose axis has the largest absolute coordinate; ties prefer X, then Y,
    /// then Z. Returns `None` for the center of the puzzle.
    pub fn from_intersection(point: Point3<f32>, scale: f32) -> Option<Self> {
        let mut location = LatticeVec::ZERO;
        for axis in Axis::iter() {
            let i = axis.index();
            let x = (point[i] / scale).clamp(-CLAMP_EXTENT, CLAMP_EXTENT) / 2.0;
            location[axis] = (x + 0.5).floor() as i32;
        }
        if location.is_zero() {
            return None;
        }

        let axis = Axis::iter()
            .max_by_key(|axis| (FloatOrd(point[axis.index()].abs()), Reverse(axis.index())))?;
        let axis = SignedAxis::new(axis, Sign::of_float(point[axis.index()]))?;

        Some(Self { location, axis })
    }
}

/// Resolves pick rays into [`PickResult`]s using a [`RayCaster`].
#[derive(Debug, Clone)]
pub struct PickResolver<C = PuzzleGeometry> {
    caster: C,
    scale: f32,
}
impl Default for PickResolver<PuzzleGeometry> {
    fn default() -> Self {
        Self::new(PuzzleGeometry::default())
    }
}
impl PickResolver<PuzzleGeometry> {
    /// Constructs a resolver over the static puzzle geometry.
    pub fn new(geometry: PuzzleGeometry) -> Self {
        Self::with_caster(geometry, geometry.scale)
    }
}
impl<C: RayCaster> PickResolver<C> {
    /// Constructs a resolver over arbitrary geometry whose cubies have
    /// half-width `scale`.
    pub fn with_caster(caster: C, scale: f32) -> Self {
        Self { caster, scale }
    }

    /// Returns the cubie and face struck by `ray`, or `None` if it misses.
    pub fn resolve(&self, ray: &Ray) -> Option<PickResult> {
        let point = self.caster.cast(ray)?;
        let ret = PickResult::from_intersection(point, self.scale);
        log::trace!("pick {ray:?} -> {ret:?}");
        ret
    }
}
