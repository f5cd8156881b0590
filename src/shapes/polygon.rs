//! Regular polygons
//!
//! Vertices start at canvas "up" (-90°). Even-sided polygons get an extra
//! half step so a flat edge faces up instead of a vertex.

use super::{Color, Point, Shape};
use crate::canvas::Path;

/// Angle of vertex 0 in degrees
pub fn start_angle(sides: usize, rotation: f64) -> f64 {
    let mut theta = -90.0 + rotation;
    if sides % 2 == 0 && sides > 0 {
        theta += 360.0 / sides as f64 / 2.0;
    }
    theta
}

/// Vertices of a regular polygon
///
/// # Arguments
/// * `sides` - Number of sides (0 yields no vertices)
/// * `center` - Center of the circumscribed circle
/// * `radius` - Distance from center to each vertex
/// * `rotation` - Rotational offset in degrees
pub fn regular_polygon(sides: usize, center: Point, radius: f64, rotation: f64) -> Vec<Point> {
    if sides == 0 {
        return Vec::new();
    }

    let step = 360.0 / sides as f64;
    let start = start_angle(sides, rotation);

    (0..sides)
        .map(|i| {
            let theta = (start + i as f64 * step).to_radians();
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// A regular polygon with its drawing style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    pub sides: usize,
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub rotation: f64,
    pub fill: bool,
}

impl RegularPolygon {
    pub fn new(sides: usize, center: Point, radius: f64, color: Color) -> Self {
        Self {
            sides,
            center,
            radius,
            color,
            rotation: 0.0,
            fill: false,
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn vertices(&self) -> Vec<Point> {
        regular_polygon(self.sides, self.center, self.radius, self.rotation)
    }
}

impl Shape for RegularPolygon {
    fn path(&self) -> Path {
        Path::closed_polyline(&self.vertices())
    }

    fn color(&self) -> Color {
        self.color
    }

    fn is_filled(&self) -> bool {
        self.fill
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Op, Recorder, Segment};
    use crate::shapes::{approx_eq, EPSILON};

    const CENTER: Point = Point::new(250.0, 250.0);

    #[test]
    fn test_vertex_count_and_radius() {
        for n in 3..=16 {
            let verts = regular_polygon(n, CENTER, 120.0, 17.0);
            assert_eq!(verts.len(), n);
            for v in &verts {
                assert!(approx_eq(CENTER.distance(*v), 120.0), "n={} v={:?}", n, v);
            }
        }
    }

    #[test]
    fn test_odd_first_vertex_points_up() {
        for n in [3, 5, 7, 9] {
            for rotation in [0.0, 12.5, -30.0] {
                let v0 = regular_polygon(n, CENTER, 100.0, rotation)[0];
                assert!(approx_eq(CENTER.angle_to(v0), -90.0 + rotation));
            }
        }
    }

    #[test]
    fn test_even_first_vertex_has_half_step() {
        for n in [4, 6, 8, 12] {
            for rotation in [0.0, 10.0] {
                let v0 = regular_polygon(n, CENTER, 100.0, rotation)[0];
                let expected = -90.0 + rotation + 180.0 / n as f64;
                assert!(approx_eq(CENTER.angle_to(v0), expected), "n={}", n);
            }
        }
    }

    #[test]
    fn test_square_has_flat_top() {
        let verts = regular_polygon(4, CENTER, 100.0, 0.0);
        // Vertex 0 is the top-right corner, vertex 3 the top-left one
        assert!((verts[0].y - verts[3].y).abs() < EPSILON);
        assert!(verts[0].y < CENTER.y);
    }

    #[test]
    fn test_zero_radius_collapses() {
        let verts = regular_polygon(5, CENTER, 0.0, 0.0);
        assert_eq!(verts.len(), 5);
        assert!(verts.iter().all(|v| v.distance(CENTER) < EPSILON));
    }

    #[test]
    fn test_zero_sides_is_empty() {
        assert!(regular_polygon(0, CENTER, 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_outline_only_strokes() {
        let mut rec = Recorder::default();
        RegularPolygon::new(3, CENTER, 50.0, Color::rgb(0.0, 0.5, 0.0)).draw(&mut rec);

        assert_eq!(rec.ops.len(), 1);
        let Op::Stroke(path, color) = &rec.ops[0] else {
            panic!("expected a stroke, got {:?}", rec.ops[0]);
        };
        assert_eq!(*color, Color::rgb(0.0, 0.5, 0.0));
        // move + 2 lines + line back to the start
        assert_eq!(path.segments().len(), 4);
        assert!(matches!(path.segments()[3], Segment::LineTo(_)));
    }

    #[test]
    fn test_filled_polygon_fills_then_strokes_same_color() {
        let mut rec = Recorder::default();
        let red = Color::rgb(1.0, 0.0, 0.0);
        RegularPolygon::new(6, CENTER, 50.0, red).filled().draw(&mut rec);

        assert_eq!(rec.ops.len(), 2);
        match (&rec.ops[0], &rec.ops[1]) {
            (Op::Fill(fill_path, fill_color), Op::Stroke(stroke_path, stroke_color)) => {
                assert_eq!(fill_color, stroke_color);
                assert_eq!(*fill_color, red);
                assert_eq!(fill_path, stroke_path);
                assert_eq!(fill_path.segments().last(), Some(&Segment::Close));
            }
            other => panic!("unexpected ops {:?}", other),
        }
    }
}
