//! The geometry engine: cube vertices, rotation and perspective projection.

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Focal constant of the fixed camera.
const FOCAL: f64 = 300.0;

/// Camera distance in hundreds of scene units.
const CAMERA_DISTANCE: f64 = 4.0;

/// Euler angles in radians, applied X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
}

impl Rotation {
    pub fn new(ax: f64, ay: f64, az: f64) -> Self {
        Self { ax, ay, az }
    }
}

/// A cube face: four vertex indices (in winding order) and its palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 4],
    pub color_index: usize,
}

/// The six faces of the vertex layout produced by [`cube_vertices`].
pub const FACES: [Face; 6] = [
    Face { indices: [0, 1, 2, 3], color_index: 0 },
    Face { indices: [4, 5, 6, 7], color_index: 1 },
    Face { indices: [0, 4, 7, 3], color_index: 2 },
    Face { indices: [1, 5, 6, 2], color_index: 3 },
    Face { indices: [0, 1, 5, 4], color_index: 4 },
    Face { indices: [3, 2, 6, 7], color_index: 5 },
];

/// Corners of an axis-aligned cube centered at the origin.
///
/// Back face (z = -s) first, counter-clockwise from (-s, -s), then the
/// front face in the same order.
pub fn cube_vertices(half_extent: f64) -> [Point3<f64>; 8] {
    let s = half_extent;
    [
        Point3::new(-s, -s, -s),
        Point3::new(s, -s, -s),
        Point3::new(s, s, -s),
        Point3::new(-s, s, -s),
        Point3::new(-s, -s, s),
        Point3::new(s, -s, s),
        Point3::new(s, s, s),
        Point3::new(-s, s, s),
    ]
}

/// Rotates a point about X, then Y, then Z.
pub fn rotate(p: &Point3<f64>, rot: Rotation) -> Point3<f64> {
    let (sa, ca) = rot.ax.sin_cos();
    let y1 = p.y * ca - p.z * sa;
    let z1 = p.y * sa + p.z * ca;

    let (sb, cb) = rot.ay.sin_cos();
    let x2 = p.x * cb + z1 * sb;
    let z2 = -p.x * sb + z1 * cb;

    let (sc, cc) = rot.az.sin_cos();
    Point3::new(x2 * cc - y1 * sc, x2 * sc + y1 * cc, z2)
}

/// Perspective projection onto the screen around `center`.
///
/// `f = 300 / (4 + z/100)`, screen = center + (x, y) * f / 100.
pub fn project(p: &Point3<f64>, center: Point2<f64>) -> Point2<f64> {
    let f = FOCAL / (CAMERA_DISTANCE + p.z / 100.0);
    Point2::new(center.x + p.x * f / 100.0, center.y + p.y * f / 100.0)
}

/// Rotates every vertex.
pub fn rotate_all(vertices: &[Point3<f64>; 8], rot: Rotation) -> [Point3<f64>; 8] {
    vertices.map(|v| rotate(&v, rot))
}

/// Projects every vertex.
pub fn project_all(vertices: &[Point3<f64>; 8], center: Point2<f64>) -> [Point2<f64>; 8] {
    vertices.map(|v| project(&v, center))
}
