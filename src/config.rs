// src/config.rs
// Startup parameters for the gasket. Everything is fixed at compile time;
// GasketConfig only bundles them so setup code takes one value.

use crate::geometry::{Point2, Triangle};

pub const NUM_POINTS: usize = 5000;

// Corners of the gasket, in clip space (legs in a 2:1 ratio)
pub const DEFAULT_VERTICES: [Point2; 3] = [
    Point2::new(-1.0, -1.0),
    Point2::new(0.0, 1.0),
    Point2::new(1.0, -1.0),
];

pub const WINDOW_TITLE: &str = "Sierpinski Gasket";
pub const CANVAS_WIDTH: u32 = 512;
pub const CANVAS_HEIGHT: u32 = 512;

// DOM id the canvas is attached to on wasm32; falls back to <body>
pub const CANVAS_ELEMENT_ID: &str = "gl-canvas";

pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0]; // white
pub const POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // red

#[derive(Clone, Debug, PartialEq)]
pub struct GasketConfig {
    pub triangle: Triangle,
    pub num_points: usize,
    pub clear_color: [f64; 4],
    pub point_color: [f32; 4],
}

impl Default for GasketConfig {
    fn default() -> Self {
        Self {
            triangle: Triangle::new(DEFAULT_VERTICES),
            num_points: NUM_POINTS,
            clear_color: CLEAR_COLOR,
            point_color: POINT_COLOR,
        }
    }
}

impl GasketConfig {
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn with_triangle(mut self, triangle: Triangle) -> Self {
        self.triangle = triangle;
        self
    }

    pub fn clear_color_wgpu(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GasketConfig::default();
        assert_eq!(config.num_points, 5000);
        assert_eq!(config.triangle.vertices(), &DEFAULT_VERTICES);
        assert_eq!(config.clear_color_wgpu(), wgpu::Color::WHITE);
    }

    #[test]
    fn builder_overrides() {
        let tri = Triangle::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        let config = GasketConfig::default().with_num_points(10).with_triangle(tri);
        assert_eq!(config.num_points, 10);
        assert_eq!(config.triangle, tri);
    }
}
