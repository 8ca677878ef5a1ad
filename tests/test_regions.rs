// tests/test_regions.rs: Integration tests for the Region shapes.
//
// Every shape is checked against the same contract: what `iter` yields is
// exactly the set of bounding-box points that `contains` accepts.

use raster_kit::{Circle, Line, Point, Polygon, Rect, Region, Shape};
use std::collections::HashSet;

fn check_contract(region: &impl Region) {
    let yielded: Vec<Point> = region.iter().collect();
    let unique: HashSet<Point> = yielded.iter().copied().collect();
    assert_eq!(unique.len(), yielded.len(), "duplicate points");
    for point in &yielded {
        assert!(region.contains(*point), "{point} yielded but not contained");
    }
    for point in region.bounds().points() {
        assert_eq!(region.contains(point), unique.contains(&point), "{point}");
    }
    let again: Vec<Point> = region.iter().collect();
    assert_eq!(yielded, again, "iteration is restartable");
}

// ===== Rect =====

#[test]
fn rect_iterates_row_major() {
    let rect = Rect::new(0, 0, 3, 2);
    let points: Vec<Point> = rect.iter().collect();
    assert_eq!(
        points,
        vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
        ]
    );
    assert!(points.iter().all(|p| rect.contains(*p)));
    assert!(!rect.contains(Point::new(3, 0)));
    assert!(!rect.contains(Point::new(0, 2)));
}

#[test]
fn rect_with_offset_and_empty_rect() {
    let rect = Rect::new(-2, 5, 2, 2);
    check_contract(&rect);
    assert_eq!(rect.iter().count(), 4);
    assert_eq!(rect.bounds(), rect);

    let empty = Rect::new(4, 4, 0, 3);
    assert!(empty.is_empty());
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn rect_intersection_and_nesting() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert_eq!(a.intersect(&b), Rect::new(5, 5, 5, 5));
    assert!(a.intersect(&Rect::new(20, 20, 2, 2)).is_empty());
    assert!(Rect::new(2, 2, 3, 3).is_inside(&a));
    assert!(!b.is_inside(&a));
}

// ===== Circle =====

#[test]
fn circle_boundary_is_inclusive() {
    let circle = Circle::new(Point::new(0, 0), 5.0);
    assert!(circle.contains(Point::new(5, 0)));
    assert!(!circle.contains(Point::new(4, 4)));
    check_contract(&circle);
}

#[test]
fn circle_translate_moves_every_point() {
    let circle = Circle::new(Point::new(1, 1), 2.5);
    let moved = circle.translate(Point::new(10, -3));
    let shifted: Vec<Point> = circle.iter().map(|p| p + Point::new(10, -3)).collect();
    assert_eq!(moved.iter().collect::<Vec<_>>(), shifted);
}

// ===== Line =====

#[test]
fn line_includes_both_endpoints() {
    let line = Line::new(Point::new(0, 0), Point::new(3, 1));
    let points: Vec<Point> = line.iter().collect();
    assert_eq!(points.len(), 4);
    assert_eq!(points.first(), Some(&Point::new(0, 0)));
    assert_eq!(points.last(), Some(&Point::new(3, 1)));
    check_contract(&line);
}

#[test]
fn lines_in_every_octant_honor_the_contract() {
    let center = Point::new(0, 0);
    for end in [
        Point::new(7, 2),
        Point::new(2, 7),
        Point::new(-2, 7),
        Point::new(-7, 2),
        Point::new(-7, -2),
        Point::new(-2, -7),
        Point::new(2, -7),
        Point::new(7, -2),
    ] {
        let line = Line::new(center, end);
        let steps = end.x.abs().max(end.y.abs()) as usize;
        assert_eq!(line.iter().count(), steps + 1, "{line}");
        check_contract(&line);
    }
}

// ===== Polygon =====

#[test]
fn polygon_even_odd_fill() {
    let star = Polygon::new(vec![
        Point::new(0, 0),
        Point::new(8, 0),
        Point::new(8, 8),
        Point::new(4, 2),
        Point::new(0, 8),
    ]);
    assert!(star.contains(Point::new(4, 1)));
    assert!(star.contains(Point::new(4, 2)));
    assert!(!star.contains(Point::new(4, 6)));
    check_contract(&star);
}

#[test]
fn polygon_bounds_cover_all_vertices() {
    let polygon = Polygon::new(vec![Point::new(-3, 1), Point::new(4, -2), Point::new(0, 5)]);
    let bounds = polygon.bounds();
    assert_eq!(bounds, Rect::new(-3, -2, 8, 8));
    for vertex in polygon.vertices() {
        assert!(polygon.contains(*vertex));
        assert!(bounds.contains(*vertex));
    }
    check_contract(&polygon);
}

// ===== Extreme coordinates =====

#[test]
fn shapes_at_the_coordinate_limits_keep_the_contract() {
    let shapes = [
        Shape::from(Rect::new(i32::MAX - 3, i32::MIN, 3, 2)),
        Shape::from(Circle::new(Point::new(i32::MIN + 1, i32::MAX - 1), 2.0)),
        Shape::from(Line::new(Point::new(i32::MAX, i32::MIN), Point::new(i32::MAX - 4, i32::MIN + 2))),
        Shape::from(Polygon::new(vec![
            Point::new(i32::MAX - 4, i32::MAX - 4),
            Point::new(i32::MAX - 1, i32::MAX - 4),
            Point::new(i32::MAX - 1, i32::MAX - 1),
        ])),
    ];
    for shape in &shapes {
        check_contract(shape);
        assert!(shape.iter().count() > 0);
    }
}

#[test]
fn far_away_points_are_outside() {
    let circle = Circle::new(Point::new(1, 0), 5.0);
    let polygon = Polygon::new(vec![
        Point::new(0, i32::MIN),
        Point::new(10, i32::MIN),
        Point::new(10, i32::MAX),
        Point::new(0, i32::MAX),
    ]);
    for far in [
        Point::new(i32::MIN, 0),
        Point::new(i32::MAX, i32::MIN),
        Point::new(i32::MIN, i32::MAX),
    ] {
        assert!(!circle.contains(far));
        assert!(!polygon.contains(far));
    }
    assert!(polygon.contains(Point::new(1, -5)));
    assert!(Circle::new(Point::new(0, 0), 2.0e9).bounds().width > 0);
}

// ===== Shape =====

#[test]
fn shape_delegates_to_its_variant() {
    let shapes = [
        Shape::from(Rect::new(1, 1, 3, 3)),
        Shape::from(Circle::new(Point::new(0, 0), 2.0)),
        Shape::from(Line::new(Point::new(-1, -1), Point::new(4, 1))),
        Shape::from(Polygon::new(vec![Point::new(0, 0), Point::new(5, 0), Point::new(0, 5)])),
    ];
    for shape in &shapes {
        check_contract(shape);
        let moved = shape.translate(Point::new(2, 3));
        assert_eq!(moved.iter().count(), shape.iter().count());
    }
}
