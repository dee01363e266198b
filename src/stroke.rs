//! Stroke data model.

use kurbo::{Point, Rect};

/// A single continuous stroke: finger down, move, finger up.
///
/// Strokes are independent of each other; no stroke implies pen
/// continuity with another. A one-point stroke means "tap here".
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Ordered points. The first is where the finger touches down, the
    /// last is where it lifts.
    pub points: Vec<Point>,
    /// Source character, if any. Per-character options (priming
    /// wiggles) key off this.
    pub character: Option<char>,
}

impl Stroke {
    /// An empty stroke tagged with `character`.
    pub fn new(character: Option<char>) -> Self {
        Self {
            points: Vec::new(),
            character,
        }
    }

    /// Axis-aligned bounds of the points. Empty strokes yield a zero
    /// rect.
    pub fn bounds(&self) -> Rect {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in points {
            rect = rect.union_pt(*p);
        }
        rect
    }
}

/// Union of the bounds of every stroke, or `None` if no stroke has any
/// points. Recomputed per use; bounds are never stored.
pub fn bounds_of(strokes: &[Stroke]) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for stroke in strokes {
        if stroke.points.is_empty() {
            continue;
        }
        let b = stroke.bounds();
        bounds = Some(match bounds {
            Some(acc) => acc.union(b),
            None => b,
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_points() {
        let stroke = Stroke {
            points: vec![
                Point::new(10.0, 20.0),
                Point::new(-5.0, 40.0),
                Point::new(30.0, 0.0),
            ],
            character: Some('a'),
        };
        assert_eq!(stroke.bounds(), Rect::new(-5.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn bounds_of_skips_empty_strokes() {
        let strokes = vec![
            Stroke::new(None),
            Stroke {
                points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
                character: None,
            },
        ];
        assert_eq!(bounds_of(&strokes), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(bounds_of(&[Stroke::new(None)]), None);
    }
}
