use super::{Rect, Region, RegionIter};
use crate::core_modules::point::{Coordinate, Point, to_coordinate};
use std::fmt;

/// Segment between two endpoints. Its points are its Bresenham rasterization,
/// both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub point1: Point,
    pub point2: Point,
}

impl Line {
    pub const fn new(point1: Point, point2: Point) -> Self {
        Self { point1, point2 }
    }

    /// Signed horizontal extent, widened so any two endpoints fit.
    pub fn dx(&self) -> i64 {
        self.point2.x as i64 - self.point1.x as i64
    }

    pub fn dy(&self) -> i64 {
        self.point2.y as i64 - self.point1.y as i64
    }

    /// Euclidean length between the endpoints.
    pub fn length(&self) -> f64 {
        self.point1.distance_to(self.point2)
    }

    /// Same segment walked the other way.
    pub fn reversed(&self) -> Line {
        Line::new(self.point2, self.point1)
    }

    pub fn translate(&self, offset: Point) -> Line {
        Line::new(self.point1 + offset, self.point2 + offset)
    }

    pub fn points(&self) -> LinePoints {
        LinePoints::new(self.point1, self.point2)
    }

    /// Crossing point of the two infinite lines through each segment, rounded
    /// to the pixel grid. `None` when they are parallel or either is a single point.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let (x1, y1) = (self.point1.x as f64, self.point1.y as f64);
        let (x2, y2) = (self.point2.x as f64, self.point2.y as f64);
        let (x3, y3) = (other.point1.x as f64, other.point1.y as f64);
        let (x4, y4) = (other.point2.x as f64, other.point2.y as f64);

        let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denominator == 0.0 {
            return None;
        }
        let a = x1 * y2 - y1 * x2;
        let b = x3 * y4 - y3 * x4;
        let x = (a * (x3 - x4) - (x1 - x2) * b) / denominator;
        let y = (a * (y3 - y4) - (y1 - y2) * b) / denominator;
        Some(Point::new(to_coordinate(x), to_coordinate(y)))
    }
}

impl Region for Line {
    fn contains(&self, point: Point) -> bool {
        let (p1, p2) = (self.point1, self.point2);
        (p1.x.min(p2.x)..=p1.x.max(p2.x)).contains(&point.x)
            && (p1.y.min(p2.y)..=p1.y.max(p2.y)).contains(&point.y)
            && self.points().any(|p| p == point)
    }

    fn iter(&self) -> RegionIter<'_> {
        Box::new(self.points())
    }

    fn bounds(&self) -> Rect {
        let (p1, p2) = (self.point1, self.point2);
        Rect::from_corners(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            Point::new(
                p1.x.max(p2.x).saturating_add(1),
                p1.y.max(p2.y).saturating_add(1),
            ),
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line(point1:{}, point2:{})", self.point1, self.point2)
    }
}

/// Integer Bresenham walk from one endpoint to the other.
#[derive(Debug, Clone)]
pub struct LinePoints {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    step_x: Coordinate,
    step_y: Coordinate,
    error: i64,
    done: bool,
}

impl LinePoints {
    fn new(start: Point, end: Point) -> Self {
        let dx = (end.x as i64 - start.x as i64).abs();
        let dy = -(end.y as i64 - start.y as i64).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            step_x: if start.x < end.x { 1 } else { -1 },
            step_y: if start.y < end.y { 1 } else { -1 },
            error: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }
        let doubled = 2 * self.error;
        if doubled >= self.dy {
            self.error += self.dy;
            self.current.x += self.step_x;
        }
        if doubled <= self.dx {
            self.error += self.dx;
            self.current.y += self.step_y;
        }
        Some(point)
    }
}
