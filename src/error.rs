use thiserror::Error;

/// Errors that can occur while planning or drawing text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DrawError {
    #[error("failed to read font file: {0}")]
    FontLoad(String),

    #[error("failed to parse font: {0}")]
    FontParse(String),

    #[error("font has no glyph for {0:?}")]
    MissingGlyph(char),

    #[error("failed to extract outline for {0:?}: {1}")]
    GlyphDraw(char, String),

    #[error("outline contains a drawing element before the first move")]
    ElementBeforeMove,

    #[error("text produced no drawable strokes")]
    NoStrokes,

    #[error("source bounds have zero width or height")]
    DegenerateBounds,

    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("device shell exited with failure: {0}")]
    ShellFailed(String),
}
