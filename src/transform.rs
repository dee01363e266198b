//! Aspect-preserving mapping of strokes into a target rectangle.

use kurbo::{Point, Rect};

use crate::error::DrawError;
use crate::stroke::Stroke;

/// Map `strokes` from `source` space into `target`.
///
/// Uses a single uniform scale on both axes (never distorts) and centers
/// the leftover slack inside the target. A source rect with zero width
/// or height has no defined scale and is rejected.
pub fn fit_to_rect(
    strokes: &[Stroke],
    source: Rect,
    target: Rect,
) -> Result<Vec<Stroke>, DrawError> {
    if source.width() == 0.0 || source.height() == 0.0 {
        return Err(DrawError::DegenerateBounds);
    }

    let scale = (target.width() / source.width()).min(target.height() / source.height());
    let offset_x = target.x0 + (target.width() - source.width() * scale) / 2.0;
    let offset_y = target.y0 + (target.height() - source.height() * scale) / 2.0;

    Ok(strokes
        .iter()
        .map(|stroke| Stroke {
            points: stroke
                .points
                .iter()
                .map(|p| {
                    Point::new(
                        (p.x - source.x0) * scale + offset_x,
                        (p.y - source.y0) * scale + offset_y,
                    )
                })
                .collect(),
            character: stroke.character,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::bounds_of;

    fn stroke_of(points: &[(f64, f64)]) -> Stroke {
        Stroke {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            character: None,
        }
    }

    #[test]
    fn wide_source_scales_by_width_and_centers_vertically() {
        let strokes = vec![stroke_of(&[(0.0, 0.0), (100.0, 50.0)])];
        let source = Rect::new(0.0, 0.0, 100.0, 50.0);
        let target = Rect::new(200.0, 300.0, 240.0, 340.0);

        let placed = fit_to_rect(&strokes, source, target).unwrap();
        // scale = min(40/100, 40/50) = 0.4; scaled size (40, 20);
        // offset (200, 310).
        assert_eq!(placed[0].points[0], Point::new(200.0, 310.0));
        assert_eq!(placed[0].points[1], Point::new(240.0, 330.0));
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let strokes = vec![stroke_of(&[(0.0, 0.0), (80.0, 20.0), (40.0, 10.0)])];
        let source = bounds_of(&strokes).unwrap();
        let target = Rect::new(0.0, 0.0, 500.0, 500.0);

        let placed = fit_to_rect(&strokes, source, target).unwrap();
        let placed_bounds = bounds_of(&placed).unwrap();

        let before = source.width() / source.height();
        let after = placed_bounds.width() / placed_bounds.height();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn result_stays_inside_the_target() {
        let strokes = vec![stroke_of(&[(-30.0, 12.0), (70.0, 90.0), (15.0, -44.0)])];
        let source = bounds_of(&strokes).unwrap();
        let target = Rect::new(50.0, 100.0, 350.0, 220.0);

        let placed = fit_to_rect(&strokes, source, target).unwrap();
        let placed_bounds = bounds_of(&placed).unwrap();

        assert!(placed_bounds.x0 >= target.x0 - 1e-9);
        assert!(placed_bounds.y0 >= target.y0 - 1e-9);
        assert!(placed_bounds.x1 <= target.x1 + 1e-9);
        assert!(placed_bounds.y1 <= target.y1 + 1e-9);
    }

    #[test]
    fn zero_area_source_is_rejected() {
        let strokes = vec![stroke_of(&[(5.0, 5.0)])];
        let source = Rect::new(5.0, 0.0, 5.0, 10.0);
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert!(matches!(
            fit_to_rect(&strokes, source, target),
            Err(DrawError::DegenerateBounds)
        ));
    }
}
