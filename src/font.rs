//! Glyph outline extraction from font files.
//!
//! skrifa reports glyph outlines through a pen; the pen here records
//! them as a `BezPath` in screen orientation at the layout pen position,
//! ready for the outline-to-strokes conversion.

use std::path::Path;

use kurbo::{BezPath, Point};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, MetadataProvider};

use crate::error::DrawError;

/// Pixel size glyphs are extracted at. Coarse enough to keep event
/// coordinates small, fine enough that flattening artifacts stay
/// subpixel after the final fit.
const FONT_SIZE: f32 = 200.0;

/// Source of glyph outlines and advance widths for one font.
///
/// The pipeline takes this as a seam so the geometry stages never touch
/// a font library directly.
pub trait OutlineProvider {
    /// Vector outline of `c`, translated to `x_offset` on the baseline,
    /// in screen orientation (Y down). Glyphs without an outline (such
    /// as space) yield an empty path.
    fn outline(&self, c: char, x_offset: f64) -> Result<BezPath, DrawError>;

    /// Horizontal advance of `c`.
    fn advance(&self, c: char) -> Result<f64, DrawError>;
}

/// An [`OutlineProvider`] backed by a TTF/OTF file.
pub struct FontFile {
    data: Vec<u8>,
}

impl FontFile {
    /// Load and validate a font from disk.
    pub fn load(path: &Path) -> Result<Self, DrawError> {
        let data = std::fs::read(path)
            .map_err(|e| DrawError::FontLoad(format!("{}: {e}", path.display())))?;
        // Parse once up front so callers learn about a bad file here,
        // not mid-pipeline.
        FontRef::new(&data).map_err(|e| DrawError::FontParse(e.to_string()))?;
        Ok(Self { data })
    }

    fn font(&self) -> Result<FontRef<'_>, DrawError> {
        FontRef::new(&self.data).map_err(|e| DrawError::FontParse(e.to_string()))
    }
}

impl OutlineProvider for FontFile {
    fn outline(&self, c: char, x_offset: f64) -> Result<BezPath, DrawError> {
        let font = self.font()?;
        let glyph_id = font.charmap().map(c).ok_or(DrawError::MissingGlyph(c))?;

        let mut pen = ScreenPen::new(x_offset);
        if let Some(glyph) = font.outline_glyphs().get(glyph_id) {
            let settings = DrawSettings::unhinted(Size::new(FONT_SIZE), LocationRef::default());
            glyph
                .draw(settings, &mut pen)
                .map_err(|e| DrawError::GlyphDraw(c, e.to_string()))?;
        }
        Ok(pen.path)
    }

    fn advance(&self, c: char) -> Result<f64, DrawError> {
        let font = self.font()?;
        let glyph_id = font.charmap().map(c).ok_or(DrawError::MissingGlyph(c))?;
        let advance = font
            .glyph_metrics(Size::new(FONT_SIZE), LocationRef::default())
            .advance_width(glyph_id)
            .unwrap_or(0.0);
        Ok(f64::from(advance))
    }
}

/// Records pen callbacks as a `BezPath` in screen orientation.
///
/// Font outlines are Y-up around the baseline; touch coordinates are
/// Y-down, so every Y is negated. The x offset places the glyph at its
/// pen position so per-character paths line up into a text line.
struct ScreenPen {
    path: BezPath,
    x_offset: f64,
}

impl ScreenPen {
    fn new(x_offset: f64) -> Self {
        Self {
            path: BezPath::new(),
            x_offset,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) + self.x_offset, -f64::from(y))
    }
}

impl OutlinePen for ScreenPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.point(cx0, cy0);
        let p = self.point(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c0 = self.point(cx0, cy0);
        let c1 = self.point(cx1, cy1);
        let p = self.point(x, y);
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn missing_font_file_is_a_load_error() {
        let result = FontFile::load(Path::new("/nonexistent/font.ttf"));
        assert!(matches!(result, Err(DrawError::FontLoad(_))));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let dir = std::env::temp_dir().join("txt2swipe-font-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bogus.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let result = FontFile::load(&path);
        assert!(matches!(result, Err(DrawError::FontParse(_))));
    }

    #[test]
    fn pen_flips_y_and_applies_the_offset() {
        let mut pen = ScreenPen::new(100.0);
        pen.move_to(10.0, 20.0);
        pen.line_to(30.0, -40.0);
        pen.close();

        assert_eq!(
            pen.path.elements(),
            &[
                PathEl::MoveTo(Point::new(110.0, -20.0)),
                PathEl::LineTo(Point::new(130.0, 40.0)),
                PathEl::ClosePath,
            ]
        );
    }
}
