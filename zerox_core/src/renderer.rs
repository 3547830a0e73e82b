//! The face renderer: painter's-algorithm cube drawing.

use crate::color::FACE_COUNT;
use crate::geometry::{cube_vertices, project_all, rotate_all, Face, Rotation, FACES};
use nalgebra::{Point2, Point3};
use std::cmp::Ordering;
use zerox_canvas::{Color, Surface};

/// Per-channel lift of a face's outline over its fill.
const OUTLINE_LIFT: u8 = 20;

/// Mean depth of a face's four rotated vertices.
fn face_depth(face: &Face, rotated: &[Point3<f64>; 8]) -> f64 {
    face.indices.iter().map(|&i| rotated[i].z).sum::<f64>() / 4.0
}

/// Faces in draw order: farthest (largest mean Z) first.
///
/// The sort is stable, so faces at exactly equal depth keep their
/// `FACES` order.
pub fn face_order(rotated: &[Point3<f64>; 8]) -> [Face; 6] {
    let mut faces = FACES;
    faces.sort_by(|a, b| {
        face_depth(b, rotated)
            .partial_cmp(&face_depth(a, rotated))
            .unwrap_or(Ordering::Equal)
    });
    faces
}

/// Draws a cube from its projected and rotated vertices.
///
/// No Z-buffer: correct for a convex cube, which is all this scene holds.
pub fn draw_cube<S: Surface>(
    surface: &mut S,
    projected: &[Point2<f64>; 8],
    rotated: &[Point3<f64>; 8],
    colors: &[Color; FACE_COUNT],
) {
    for face in face_order(rotated) {
        let fill = colors[face.color_index % colors.len()];
        let quad = face.indices.map(|i| projected[i]);
        surface.fill_polygon(&quad, fill, Some(fill.brighten(OUTLINE_LIFT)));
    }
}

/// Builds, rotates, projects and draws a cube of the given half-extent.
pub fn render_cube<S: Surface>(
    surface: &mut S,
    half_extent: f64,
    rotation: Rotation,
    center: Point2<f64>,
    colors: &[Color; FACE_COUNT],
) {
    let rotated = rotate_all(&cube_vertices(half_extent), rotation);
    let projected = project_all(&rotated, center);
    draw_cube(surface, &projected, &rotated, colors);
}
