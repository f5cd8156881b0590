//! Path commands handed to a surface

use crate::shapes::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Two control points, then the end point
    CubicTo(Point, Point, Point),
    Close,
}

/// An ordered list of path commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the first vertex, line through the rest, line back to the first
    pub fn closed_polyline(vertices: &[Point]) -> Self {
        let mut path = Self::new();
        let Some((&first, rest)) = vertices.split_first() else {
            return path;
        };

        path.move_to(first);
        for &v in rest {
            path.line_to(v);
        }
        path.line_to(first);
        path
    }

    pub fn move_to(&mut self, p: Point) {
        self.segments.push(Segment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.segments.push(Segment::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.segments.push(Segment::CubicTo(c1, c2, end));
    }

    pub fn close(&mut self) {
        self.segments.push(Segment::Close);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every point the path references, control points included
    #[cfg(test)]
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|seg| match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) => vec![p],
            Segment::CubicTo(c1, c2, end) => vec![c1, c2, end],
            Segment::Close => vec![],
        })
    }

    /// Convert to a rasterizer path; `None` for empty or zero-area paths
    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                Segment::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                Segment::CubicTo(c1, c2, end) => pb.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    end.x as f32,
                    end.y as f32,
                ),
                Segment::Close => pb.close(),
            }
        }
        pb.finish()
    }
}
