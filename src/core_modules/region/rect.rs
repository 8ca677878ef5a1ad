use super::{Line, Region, RegionIter};
use crate::core_modules::point::{Coordinate, Point};
use std::fmt;

/// Axis-aligned rectangle covering `[x, x+width) × [y, y+height)`.
/// A non-positive width or height makes it empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: Coordinate,
    pub y: Coordinate,
    pub width: Coordinate,
    pub height: Coordinate,
}

impl Rect {
    pub const fn new(x: Coordinate, y: Coordinate, width: Coordinate, height: Coordinate) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `min` (inclusive) to `max` (exclusive). Extents
    /// beyond `i32::MAX` saturate.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::new(
            min.x,
            min.y,
            max.x.saturating_sub(min.x),
            max.y.saturating_sub(min.y),
        )
    }

    pub fn left(&self) -> Coordinate {
        self.x
    }

    pub fn top(&self) -> Coordinate {
        self.y
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn right(&self) -> Coordinate {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub fn bottom(&self) -> Coordinate {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of covered points.
    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Row-major points, borrowing nothing.
    pub fn points(&self) -> RectPoints {
        RectPoints::new(*self)
    }

    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Strictly inside `outer`: the right and bottom edges must not touch `outer`'s.
    pub fn is_inside(&self, outer: &Rect) -> bool {
        self.left() >= outer.left()
            && self.top() >= outer.top()
            && self.right() < outer.right()
            && self.bottom() < outer.bottom()
    }

    /// Overlap of two rectangles; empty when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(
            left,
            top,
            right.saturating_sub(left).max(0),
            bottom.saturating_sub(top).max(0),
        )
    }

    /// The four edges, clockwise from the top-left corner.
    pub fn outline(&self) -> [Line; 4] {
        let top_left = Point::new(self.left(), self.top());
        let top_right = Point::new(self.right(), self.top());
        let bottom_right = Point::new(self.right(), self.bottom());
        let bottom_left = Point::new(self.left(), self.bottom());
        [
            Line::new(top_left, top_right),
            Line::new(top_right, bottom_right),
            Line::new(bottom_right, bottom_left),
            Line::new(bottom_left, top_left),
        ]
    }
}

impl Region for Rect {
    fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    fn iter(&self) -> RegionIter<'_> {
        Box::new(self.points())
    }

    fn bounds(&self) -> Rect {
        *self
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rect(x:{}, y:{}, w:{}, h:{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Row-major iterator over a `Rect`: y outer, x inner, both ascending.
#[derive(Debug, Clone)]
pub struct RectPoints {
    rect: Rect,
    next: Option<Point>,
}

impl RectPoints {
    fn new(rect: Rect) -> Self {
        let next = (!rect.is_empty()).then(|| Point::new(rect.left(), rect.top()));
        Self { rect, next }
    }
}

impl Iterator for RectPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        let mut following = Point::new(current.x + 1, current.y);
        if following.x >= self.rect.right() {
            following = Point::new(self.rect.left(), current.y + 1);
        }
        self.next = (following.y < self.rect.bottom()).then_some(following);
        Some(current)
    }
}
