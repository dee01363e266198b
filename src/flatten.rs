//! Bézier flattening at fixed sampling density.

use kurbo::Point;

/// Line segments sampled per curve. Fixed rather than adaptive: point
/// counts stay predictable, and the simplifier strips the excess on
/// shallow curves anyway.
pub const SEGMENTS_PER_CURVE: usize = 30;

/// Flatten a quadratic Bézier: P(t) = (1−t)²P0 + 2(1−t)t·P1 + t²P2.
///
/// Returns `SEGMENTS_PER_CURVE + 1` points, including both endpoints.
/// Callers concatenating onto an existing path drop the first point.
pub fn flatten_quad(p0: Point, p1: Point, p2: Point) -> Vec<Point> {
    (0..=SEGMENTS_PER_CURVE)
        .map(|i| {
            let t = i as f64 / SEGMENTS_PER_CURVE as f64;
            let u = 1.0 - t;
            Point::new(
                u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
                u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
            )
        })
        .collect()
}

/// Flatten a cubic Bézier: P(t) = (1−t)³P0 + 3(1−t)²t·P1 + 3(1−t)t²·P2 + t³P3.
///
/// Same sampling contract as [`flatten_quad`].
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<Point> {
    (0..=SEGMENTS_PER_CURVE)
        .map(|i| {
            let t = i as f64 / SEGMENTS_PER_CURVE as f64;
            let u = 1.0 - t;
            let u2 = u * u;
            let u3 = u2 * u;
            let t2 = t * t;
            let t3 = t2 * t;
            Point::new(
                u3 * p0.x + 3.0 * u2 * t * p1.x + 3.0 * u * t2 * p2.x + t3 * p3.x,
                u3 * p0.y + 3.0 * u2 * t * p1.y + 3.0 * u * t2 * p2.y + t3 * p3.y,
            )
        })
        .collect()
}
