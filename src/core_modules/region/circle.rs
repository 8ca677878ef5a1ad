use super::{Rect, Region, RegionIter};
use crate::core_modules::point::{Coordinate, Point};
use std::fmt;

/// Disc around `center`; points at exactly `radius` are inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn translate(&self, offset: Point) -> Circle {
        Circle::new(self.center + offset, self.radius)
    }

    /// Largest integer offset from the center that can still be inside.
    fn reach(&self) -> Option<Coordinate> {
        (self.radius >= 0.0).then(|| self.radius.floor() as Coordinate)
    }
}

impl Region for Circle {
    fn contains(&self, point: Point) -> bool {
        if self.radius < 0.0 {
            return false;
        }
        let dx = point.x as f64 - self.center.x as f64;
        let dy = point.y as f64 - self.center.y as f64;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Bounding square of the disc, row-major, filtered by `contains`.
    fn iter(&self) -> RegionIter<'_> {
        Box::new(self.bounds().points().filter(move |p| self.contains(*p)))
    }

    /// Saturates at the `Coordinate` range for discs reaching past it.
    fn bounds(&self) -> Rect {
        let Some(reach) = self.reach() else {
            return Rect::new(self.center.x, self.center.y, 0, 0);
        };
        let Point { x, y } = self.center;
        Rect::from_corners(
            Point::new(x.saturating_sub(reach), y.saturating_sub(reach)),
            Point::new(
                x.saturating_add(reach).saturating_add(1),
                y.saturating_add(reach).saturating_add(1),
            ),
        )
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(center:{}, radius:{})", self.center, self.radius)
    }
}
