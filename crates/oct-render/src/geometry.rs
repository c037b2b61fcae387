//! Octagon geometry in drawing units, y pointing up.

use oct_core::RenderConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertices of a flat-topped octagon at angles `22.5° + 45°·k`.
pub fn octagon_vertices(radius: f64) -> [Point; 8] {
    std::array::from_fn(|k| {
        let angle = (22.5 + 45.0 * k as f64).to_radians();
        Point::new(radius * angle.cos(), radius * angle.sin())
    })
}

/// Edges starting with the top one, then counter-clockwise.
pub fn edges_from_top(vertices: &[Point; 8]) -> [(Point, Point); 8] {
    std::array::from_fn(|k| {
        let from = (k + 1) % 8;
        let to = (k + 2) % 8;
        (vertices[from], vertices[to])
    })
}

pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Radius of the ring for place value `8^power`.
pub fn ring_radius(config: &RenderConfig, power: usize) -> f64 {
    config.base_radius + power as f64 * config.ring_spacing
}
