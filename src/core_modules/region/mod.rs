// THEORY:
// The region layer answers two questions about a piece of the plane: "is this
// pixel inside?" (`contains`) and "which pixels are inside?" (`iter`). Drawing
// code outside this crate pairs the two with a `Surface` to select pixels;
// nothing here touches pixel data.
//
// Key principles:
// 1.  **One contract, four shapes**: `Rect`, `Circle`, `Line` and `Polygon` all
//     implement `Region`, and `Shape` is the closed sum over them for callers
//     that want to store heterogeneous regions without boxing.
// 2.  **Enumeration agrees with membership**: for every shape, each point
//     yielded by `iter` satisfies `contains`, and every point of the shape's
//     bounds that satisfies `contains` is yielded. Circle and Polygon get this
//     for free by filtering their bounds; Line defines membership as its own
//     rasterization.
// 3.  **Restartable**: `iter` borrows the shape and builds a fresh iterator on
//     each call, so the same shape always yields the same sequence.
// 4.  **Row-major order**: area shapes yield points y-outer, x-inner, both
//     ascending, matching the pixel buffer layout.

pub mod circle;
pub mod line;
pub mod polygon;
pub mod rect;

pub use circle::Circle;
pub use line::{Line, LinePoints};
pub use polygon::Polygon;
pub use rect::{Rect, RectPoints};

use crate::core_modules::point::Point;

/// Boxed point sequence returned by `Region::iter`.
pub type RegionIter<'a> = Box<dyn Iterator<Item = Point> + 'a>;

/// A geometric area that can test and enumerate the points it covers.
pub trait Region {
    fn contains(&self, point: Point) -> bool;

    /// Every covered point, finite and in a deterministic order.
    fn iter(&self) -> RegionIter<'_>;

    /// The smallest half-open `Rect` holding every covered point.
    fn bounds(&self) -> Rect;
}

/// Closed sum over the built-in shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Polygon(Polygon),
}

impl Shape {
    /// Moves the shape by `offset`.
    pub fn translate(&self, offset: Point) -> Shape {
        match self {
            Shape::Rect(rect) => Shape::Rect(rect.translate(offset)),
            Shape::Circle(circle) => Shape::Circle(circle.translate(offset)),
            Shape::Line(line) => Shape::Line(line.translate(offset)),
            Shape::Polygon(polygon) => Shape::Polygon(polygon.translate(offset)),
        }
    }
}

impl Region for Shape {
    fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Rect(rect) => rect.contains(point),
            Shape::Circle(circle) => circle.contains(point),
            Shape::Line(line) => line.contains(point),
            Shape::Polygon(polygon) => polygon.contains(point),
        }
    }

    fn iter(&self) -> RegionIter<'_> {
        match self {
            Shape::Rect(rect) => rect.iter(),
            Shape::Circle(circle) => circle.iter(),
            Shape::Line(line) => line.iter(),
            Shape::Polygon(polygon) => polygon.iter(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(rect) => rect.bounds(),
            Shape::Circle(circle) => circle.bounds(),
            Shape::Line(line) => line.bounds(),
            Shape::Polygon(polygon) => polygon.bounds(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
