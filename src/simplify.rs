//! Ramer–Douglas–Peucker stroke simplification.
//!
//! Flattened outlines carry far more vertices than a finger needs. This
//! pass bounds the downstream touch-event count while keeping every
//! stroke within `epsilon` of its original shape.

use kurbo::Point;

use crate::stroke::Stroke;

/// Simplify every stroke to within `epsilon` of its original polyline.
///
/// Strokes with two points or fewer pass through unchanged. The first
/// and last point of each stroke are always retained, and the output
/// point count never exceeds the input's.
pub fn simplify(strokes: &[Stroke], epsilon: f64) -> Vec<Stroke> {
    strokes
        .iter()
        .map(|stroke| {
            if stroke.points.len() <= 2 {
                stroke.clone()
            } else {
                Stroke {
                    points: rdp(&stroke.points, epsilon),
                    character: stroke.character,
                }
            }
        })
        .collect()
}

/// Recursive Douglas–Peucker over one polyline.
fn rdp(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    // Farthest interior point from the first-last chord.
    let mut max_distance = 0.0;
    let mut max_index = 0;
    for (i, &point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let distance = perpendicular_distance(point, first, last);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    if max_distance > epsilon {
        // Split at the farthest point; it appears in both halves, so
        // drop the junction duplicate when joining.
        let mut left = rdp(&points[..=max_index], epsilon);
        let right = rdp(&points[max_index..], epsilon);
        left.extend_from_slice(&right[1..]);
        left
    } else {
        vec![first, last]
    }
}

/// Distance from `point` to the line through `start` and `end`, via the
/// 2D cross product. A zero-length chord falls back to plain point
/// distance.
fn perpendicular_distance(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let length_squared = dx * dx + dy * dy;
    if length_squared == 0.0 {
        return point.distance(start);
    }

    (dy * point.x - dx * point.y + end.x * start.y - end.y * start.x).abs()
        / length_squared.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_of(points: &[(f64, f64)]) -> Stroke {
        Stroke {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            character: None,
        }
    }

    #[test]
    fn collinear_run_collapses_to_endpoints() {
        let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let simplified = simplify(&[stroke], 0.1);
        assert_eq!(
            simplified[0].points,
            vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)]
        );
    }

    #[test]
    fn large_epsilon_collapses_everything_to_two_points() {
        let stroke = stroke_of(&[(0.0, 0.0), (5.0, 40.0), (10.0, -20.0), (15.0, 0.0)]);
        let simplified = simplify(&[stroke], 1000.0);
        assert_eq!(
            simplified[0].points,
            vec![Point::new(0.0, 0.0), Point::new(15.0, 0.0)]
        );
    }

    #[test]
    fn tiny_epsilon_keeps_significant_corners() {
        let zigzag = stroke_of(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (30.0, 10.0)]);
        let simplified = simplify(&[zigzag.clone()], 0.01);
        assert_eq!(simplified[0].points, zigzag.points);
    }

    #[test]
    fn never_grows_and_preserves_endpoints() {
        let stroke = stroke_of(&[
            (0.0, 0.0),
            (2.0, 0.4),
            (4.0, -0.2),
            (6.0, 0.1),
            (8.0, 7.0),
            (10.0, 0.0),
        ]);
        let before = stroke.points.len();
        let simplified = simplify(&[stroke.clone()], 1.0);

        assert!(simplified[0].points.len() <= before);
        assert_eq!(simplified[0].points[0], stroke.points[0]);
        assert_eq!(
            simplified[0].points[simplified[0].points.len() - 1],
            stroke.points[before - 1]
        );
    }

    #[test]
    fn short_strokes_pass_through() {
        let stroke = stroke_of(&[(3.0, 3.0), (4.0, 4.0)]);
        let simplified = simplify(&[stroke.clone()], 5.0);
        assert_eq!(simplified[0], stroke);
    }

    #[test]
    fn zero_length_chord_uses_point_distance() {
        // First and last point coincide; the farthest point is measured
        // point-to-point and still splits the run.
        let loop_stroke = stroke_of(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]);
        let simplified = simplify(&[loop_stroke], 1.0);
        assert_eq!(
            simplified[0].points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0)
            ]
        );
    }
}
