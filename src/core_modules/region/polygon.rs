use super::{Line, Rect, Region, RegionIter};
use crate::core_modules::point::Point;
use std::fmt;

/// Closed polygon over an ordered list of vertices; the last vertex connects
/// back to the first.
///
/// - A point is inside when it lies on an edge, or when the even-odd rule
///   puts it in the interior.
/// - Self-intersecting outlines are allowed; overlaps alternate in/out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Each vertex paired with its successor, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let successors = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(successors.copied())
    }

    /// One line per edge, in vertex order.
    pub fn outline(&self) -> Vec<Line> {
        self.edges().map(|(from, to)| Line::new(from, to)).collect()
    }

    pub fn translate(&self, offset: Point) -> Polygon {
        Polygon::new(self.vertices.iter().map(|v| *v + offset).collect())
    }

    fn on_edge(point: Point, from: Point, to: Point) -> bool {
        let cross = (to.x as i128 - from.x as i128) * (point.y as i128 - from.y as i128)
            - (to.y as i128 - from.y as i128) * (point.x as i128 - from.x as i128);
        cross == 0
            && point.x >= from.x.min(to.x)
            && point.x <= from.x.max(to.x)
            && point.y >= from.y.min(to.y)
            && point.y <= from.y.max(to.y)
    }

    fn crosses_ray(point: Point, from: Point, to: Point) -> bool {
        if (from.y > point.y) == (to.y > point.y) {
            return false;
        }
        let t = (point.y as f64 - from.y as f64) / (to.y as f64 - from.y as f64);
        let crossing_x = from.x as f64 + t * (to.x as f64 - from.x as f64);
        (point.x as f64) < crossing_x
    }
}

impl Region for Polygon {
    fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        for (from, to) in self.edges() {
            if Self::on_edge(point, from, to) {
                return true;
            }
            if Self::crosses_ray(point, from, to) {
                inside = !inside;
            }
        }
        inside
    }

    /// Scans the vertex bounding box row-major, keeping contained points.
    fn iter(&self) -> RegionIter<'_> {
        Box::new(self.bounds().points().filter(move |p| self.contains(*p)))
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };
        let (min, max) = self.vertices.iter().fold((*first, *first), |(min, max), v| {
            (
                Point::new(min.x.min(v.x), min.y.min(v.y)),
                Point::new(max.x.max(v.x), max.y.max(v.y)),
            )
        });
        Rect::from_corners(
            min,
            Point::new(max.x.saturating_add(1), max.y.saturating_add(1)),
        )
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices.iter().map(Point::to_string).collect();
        write!(f, "polygon({})", vertices.join(", "))
    }
}
