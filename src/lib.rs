//! txt2swipe: text → touchscreen swipe gestures.
//!
//! Converts text into simulated finger strokes and replays them on an
//! Android device through `adb shell input motionevent`. Glyph outlines
//! (from a font file, or the built-in single-stroke table) are flattened
//! to polylines, simplified, fitted into a target screen rectangle, and
//! synthesized into batched touch-event commands.
//!
//! # Example
//!
//! ```no_run
//! use txt2swipe::{dispatch, DryRun, ErrorPolicy, GestureConfig};
//! use txt2swipe::kurbo::Rect;
//!
//! let set = txt2swipe::simple_strokes("HI");
//! let target = Rect::new(100.0, 500.0, 900.0, 800.0);
//! let placed = txt2swipe::fit_to_rect(&set.strokes, set.bounds, target)?;
//! let commands = txt2swipe::synthesize(&placed, &GestureConfig::default());
//! dispatch(&commands, &mut DryRun::new(None), ErrorPolicy::Continue)?;
//! # Ok::<(), txt2swipe::DrawError>(())
//! ```

#![forbid(unsafe_code)]

mod flatten;
mod outline;
mod simplify;
mod stroke;
mod transform;

pub mod config;
pub mod dispatch;
pub mod error;
pub mod font;
pub mod gesture;
pub mod simplefont;

// Re-export kurbo so downstream users get the same Point/Rect types.
pub use kurbo;

pub use config::GestureConfig;
pub use dispatch::{dispatch, AdbShell, DryRun, ErrorPolicy, ShellExecutor, MAX_COMMANDS_PER_BATCH};
pub use error::DrawError;
pub use flatten::{flatten_cubic, flatten_quad, SEGMENTS_PER_CURVE};
pub use font::{FontFile, OutlineProvider};
pub use gesture::{synthesize, TouchCommand};
pub use outline::outline_to_strokes;
pub use simplify::simplify;
pub use stroke::{bounds_of, Stroke};
pub use transform::fit_to_rect;

use kurbo::Rect;

/// Strokes for one piece of text, plus the source-space bounds they
/// were produced in.
#[derive(Debug, Clone)]
pub struct StrokeSet {
    pub strokes: Vec<Stroke>,
    pub bounds: Rect,
}

/// Build simplified strokes for `text` from font outlines.
///
/// Processes one character at a time so every stroke stays tagged with
/// its source character, advancing the pen by the provider's advance
/// width. Fails before any device interaction if the text yields no
/// drawable strokes (empty, or all whitespace).
pub fn outline_strokes<P: OutlineProvider>(
    provider: &P,
    text: &str,
    epsilon: f64,
) -> Result<StrokeSet, DrawError> {
    let mut strokes = Vec::new();
    let mut x_offset = 0.0;

    for c in text.chars() {
        let path = provider.outline(c, x_offset)?;
        let char_strokes = outline::outline_to_strokes(&path, Some(c))?;
        strokes.extend(simplify::simplify(&char_strokes, epsilon));
        x_offset += provider.advance(c)?;
    }

    let bounds = stroke::bounds_of(&strokes).ok_or(DrawError::NoStrokes)?;
    Ok(StrokeSet { strokes, bounds })
}

/// Strokes for `text` from the built-in single-stroke glyph table.
pub fn simple_strokes(text: &str) -> StrokeSet {
    StrokeSet {
        strokes: simplefont::text_strokes(text),
        bounds: simplefont::text_bounds(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{BezPath, Point};

    /// A provider with two square glyphs, no font file needed.
    struct SquareFont;

    impl OutlineProvider for SquareFont {
        fn outline(&self, c: char, x_offset: f64) -> Result<BezPath, DrawError> {
            if c == ' ' {
                return Ok(BezPath::new());
            }
            let mut path = BezPath::new();
            path.move_to(Point::new(x_offset, 0.0));
            path.line_to(Point::new(x_offset + 40.0, 0.0));
            path.line_to(Point::new(x_offset + 40.0, 40.0));
            path.line_to(Point::new(x_offset, 40.0));
            path.close_path();
            Ok(path)
        }

        fn advance(&self, _c: char) -> Result<f64, DrawError> {
            Ok(50.0)
        }
    }

    #[test]
    fn outline_strokes_tags_and_lays_out_characters() {
        let set = outline_strokes(&SquareFont, "ab", 0.5).unwrap();

        assert_eq!(set.strokes.len(), 2);
        assert_eq!(set.strokes[0].character, Some('a'));
        assert_eq!(set.strokes[1].character, Some('b'));
        // Second glyph advanced by 50.
        assert_eq!(set.strokes[1].points[0], Point::new(50.0, 0.0));
        assert_eq!(set.bounds, Rect::new(0.0, 0.0, 90.0, 40.0));
    }

    #[test]
    fn whitespace_only_text_fails_before_dispatch() {
        assert!(matches!(
            outline_strokes(&SquareFont, "   ", 0.5),
            Err(DrawError::NoStrokes)
        ));
    }

    #[test]
    fn simple_font_end_to_end_produces_commands() {
        let set = simple_strokes("HI");
        let target = Rect::new(100.0, 500.0, 900.0, 800.0);
        let placed = fit_to_rect(&set.strokes, set.bounds, target).unwrap();
        let config = GestureConfig {
            thin_lines: true,
            ..GestureConfig::default()
        };
        let commands = synthesize(&placed, &config);

        assert!(!commands.is_empty());
        // Wake tap leads.
        assert!(matches!(commands[0], TouchCommand::Down(_)));
        // Everything lands inside the target rectangle, with room for
        // the offset-pass pixel and dot rings.
        for command in &commands {
            if let TouchCommand::Down(p) | TouchCommand::Move(p) | TouchCommand::Up(p) = command {
                assert!(p.x >= target.x0 - 6.0 && p.x <= target.x1 + 6.0);
                assert!(p.y >= target.y0 - 6.0 && p.y <= target.y1 + 6.0);
            }
        }
    }
}
