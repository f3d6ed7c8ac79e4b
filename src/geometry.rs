// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// A 2D point laid out exactly as the vertex shader reads it: two `f32`s,
/// no padding, so a `&[Point2]` can be uploaded as an interleaved buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn midpoint(a: Point2, b: Point2) -> Point2 {
        a.to_vec2().lerp(b.to_vec2(), 0.5).into()
    }

    pub fn distance(a: Point2, b: Point2) -> f32 {
        a.to_vec2().distance(b.to_vec2())
    }
}

impl From<Vec2> for Point2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        p.to_vec2()
    }
}

impl From<[f32; 2]> for Point2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// The bounding triangle of the gasket.
///
/// Non-collinearity of the vertices is not enforced; use
/// [`Triangle::is_degenerate`] if the input is untrusted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    pub const fn new(vertices: [Point2; 3]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Vertex `j`, with `j` taken modulo 3.
    pub fn vertex(&self, j: usize) -> Point2 {
        self.vertices[j % 3]
    }

    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = self.vertices.map(Point2::to_vec2);
        (b - a).perp_dot(c - a) * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.signed_area().abs() <= f32::EPSILON
    }

    /// Closed containment test. `epsilon` widens every edge to absorb
    /// `f32` rounding for points that sit on the boundary.
    pub fn contains(&self, point: Point2, epsilon: f32) -> bool {
        let [a, b, c] = self.vertices.map(Point2::to_vec2);
        let p = point.to_vec2();

        let d0 = (b - a).perp_dot(p - a);
        let d1 = (c - b).perp_dot(p - b);
        let d2 = (a - c).perp_dot(p - c);

        let has_neg = d0 < -epsilon || d1 < -epsilon || d2 < -epsilon;
        let has_pos = d0 > epsilon || d1 > epsilon || d2 > epsilon;
        !(has_neg && has_pos)
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_VERTICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_averages_coordinates() {
        let m = Point2::midpoint(Point2::new(-1.0, -1.0), Point2::new(0.0, 1.0));
        assert_eq!(m, Point2::new(-0.5, 0.0));
    }

    #[test]
    fn point_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<Point2>(), 8);
        let pts = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&pts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn default_triangle_is_clockwise_and_not_degenerate() {
        let tri = Triangle::default();
        assert!((tri.signed_area() + 2.0).abs() < 1e-6);
        assert!(!tri.is_degenerate());
    }

    #[test]
    fn collinear_vertices_are_degenerate() {
        let tri = Triangle::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ]);
        assert!(tri.is_degenerate());
    }

    #[test]
    fn contains_interior_boundary_and_rejects_outside() {
        let tri = Triangle::default();
        assert!(tri.contains(Point2::new(0.0, 0.0), 0.0));
        assert!(tri.contains(Point2::new(0.0, -1.0), 0.0));
        assert!(tri.contains(Point2::new(1.0, -1.0), 0.0));
        assert!(!tri.contains(Point2::new(0.9, 0.9), 0.0));
        assert!(!tri.contains(Point2::new(0.0, -1.5), 0.0));
    }

    #[test]
    fn vertex_index_wraps() {
        let tri = Triangle::default();
        assert_eq!(tri.vertex(3), tri.vertex(0));
        assert_eq!(tri.vertex(5), Point2::new(1.0, -1.0));
    }
}
