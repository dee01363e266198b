//! Built-in single-stroke monospace font.
//!
//! Angular/geometric glyphs on a fixed cell grid, designed for maximum
//! legibility when drawn as disconnected swipes. Pure data: a lookup
//! table of point sequences per character, one sequence per stroke.

use kurbo::{Point, Rect};

use crate::stroke::Stroke;

/// Glyph cell metrics.
pub const CHAR_WIDTH: f64 = 50.0;
pub const CHAR_HEIGHT: f64 = 80.0;
pub const CHAR_SPACING: f64 = 15.0;

// Grid positions (5-segment style, like an LCD display).
const L: f64 = 0.0; // left
const R: f64 = 50.0; // right
const C: f64 = 25.0; // center x
const T: f64 = 0.0; // top
const M: f64 = 40.0; // middle
const B: f64 = 80.0; // bottom
const U: f64 = 55.0; // upper-middle, for lowercase

/// Stroke point sequences for one glyph, in cell coordinates.
pub type Glyph = &'static [&'static [(f64, f64)]];

/// Look up the glyph for `c`. Space maps to an empty glyph; characters
/// outside the table map to `None`.
pub fn glyph(c: char) -> Option<Glyph> {
    let strokes: Glyph = match c {
        'A' => &[&[(L, B), (L, M), (C, T), (R, M), (R, B)], &[(L, M), (R, M)]],
        'B' => &[
            &[(L, B), (L, T), (R, T), (R, M), (L, M)],
            &[(L, M), (R, M), (R, B), (L, B)],
        ],
        'C' => &[&[(R, T), (L, T), (L, B), (R, B)]],
        'D' => &[&[(L, T), (R, T), (R, B), (L, B), (L, T)]],
        'E' => &[&[(R, T), (L, T), (L, B), (R, B)], &[(L, M), (R - 10.0, M)]],
        'F' => &[&[(R, T), (L, T), (L, B)], &[(L, M), (R - 10.0, M)]],
        'G' => &[&[(R, T), (L, T), (L, B), (R, B), (R, M), (C, M)]],
        'H' => &[&[(L, T), (L, B)], &[(R, T), (R, B)], &[(L, M), (R, M)]],
        'I' => &[
            &[(L + 10.0, T), (R - 10.0, T)],
            &[(C, T), (C, B)],
            &[(L + 10.0, B), (R - 10.0, B)],
        ],
        'J' => &[&[(L, T), (R, T)], &[(C, T), (C, B), (L, B), (L, M)]],
        'K' => &[&[(L, T), (L, B)], &[(R, T), (L, M), (R, B)]],
        'L' => &[&[(L, T), (L, B), (R, B)]],
        'M' => &[&[(L, B), (L, T), (C, M), (R, T), (R, B)]],
        'N' => &[&[(L, B), (L, T), (R, B), (R, T)]],
        'O' => &[&[(L, T), (R, T), (R, B), (L, B), (L, T)]],
        'P' => &[&[(L, B), (L, T), (R, T), (R, M), (L, M)]],
        'Q' => &[
            &[(L, T), (R, T), (R, B), (L, B), (L, T)],
            &[(C, M), (R + 5.0, B + 5.0)],
        ],
        'R' => &[&[(L, B), (L, T), (R, T), (R, M), (L, M)], &[(C, M), (R, B)]],
        'S' => &[&[(R, T), (L, T), (L, M), (R, M), (R, B), (L, B)]],
        'T' => &[&[(L, T), (R, T)], &[(C, T), (C, B)]],
        'U' => &[&[(L, T), (L, B), (R, B), (R, T)]],
        'V' => &[&[(L, T), (C, B), (R, T)]],
        'W' => &[&[(L, T), (L, B), (C, M), (R, B), (R, T)]],
        'X' => &[&[(L, T), (R, B)], &[(R, T), (L, B)]],
        'Y' => &[&[(L, T), (C, M), (R, T)], &[(C, M), (C, B)]],
        'Z' => &[&[(L, T), (R, T), (L, B), (R, B)]],

        'a' => &[&[(L, U), (R, U), (R, B), (L, B), (L, M), (R, M)]],
        'b' => &[&[(L, T), (L, B), (R, B), (R, U), (L, U)]],
        'c' => &[&[(R, U), (L, U), (L, B), (R, B)]],
        'd' => &[&[(R, T), (R, B), (L, B), (L, U), (R, U)]],
        'e' => &[&[(L, M), (R, M), (R, U), (L, U), (L, B), (R, B)]],
        'f' => &[
            &[(R, T + 10.0), (C, T), (C, B)],
            &[(L + 5.0, U), (R - 5.0, U)],
        ],
        'g' => &[&[(R, U), (L, U), (L, B), (R, B), (R, B + 20.0), (L, B + 20.0)]],
        'h' => &[&[(L, T), (L, B)], &[(L, U), (R, U), (R, B)]],
        'i' => &[
            &[(C, U), (C, B)],
            &[(C - 5.0, T + 10.0), (C + 5.0, T + 10.0)], // dot
        ],
        'j' => &[
            &[(C, U), (C, B + 15.0), (L, B + 15.0)],
            &[(C - 5.0, T + 10.0), (C + 5.0, T + 10.0)], // dot
        ],
        'k' => &[&[(L, T), (L, B)], &[(R, U), (L, M), (R, B)]],
        'l' => &[&[(C, T), (C, B)]],
        'm' => &[&[(L, B), (L, U), (C, U), (C, B)], &[(C, U), (R, U), (R, B)]],
        'n' => &[&[(L, B), (L, U), (R, U), (R, B)]],
        'o' => &[&[(L, U), (R, U), (R, B), (L, B), (L, U)]],
        'p' => &[&[(L, B + 20.0), (L, U), (R, U), (R, B), (L, B)]],
        'q' => &[&[(R, B + 20.0), (R, U), (L, U), (L, B), (R, B)]],
        'r' => &[&[(L, B), (L, U), (R, U)]],
        's' => &[&[(R, U), (L, U), (L, M), (R, M), (R, B), (L, B)]],
        't' => &[&[(C, T), (C, B), (R, B)], &[(L + 5.0, U), (R - 5.0, U)]],
        'u' => &[&[(L, U), (L, B), (R, B), (R, U)]],
        'v' => &[&[(L, U), (C, B), (R, U)]],
        'w' => &[&[(L, U), (L, B), (C, M), (R, B), (R, U)]],
        'x' => &[&[(L, U), (R, B)], &[(R, U), (L, B)]],
        'y' => &[&[(L, U), (C, M)], &[(R, U), (L, B + 20.0)]],
        'z' => &[&[(L, U), (R, U), (L, B), (R, B)]],

        '0' => &[&[(L, T), (R, T), (R, B), (L, B), (L, T)]],
        '1' => &[
            &[(L + 10.0, T + 15.0), (C, T), (C, B)],
            &[(L + 5.0, B), (R - 5.0, B)],
        ],
        '2' => &[&[(L, T), (R, T), (R, M), (L, M), (L, B), (R, B)]],
        '3' => &[&[(L, T), (R, T), (R, B), (L, B)], &[(C, M), (R, M)]],
        '4' => &[&[(L, T), (L, M), (R, M)], &[(R, T), (R, B)]],
        '5' => &[&[(R, T), (L, T), (L, M), (R, M), (R, B), (L, B)]],
        '6' => &[&[(R, T), (L, T), (L, B), (R, B), (R, M), (L, M)]],
        '7' => &[&[(L, T), (R, T), (C, B)]],
        '8' => &[&[(L, T), (R, T), (R, B), (L, B), (L, T)], &[(L, M), (R, M)]],
        '9' => &[&[(L, B), (R, B), (R, T), (L, T), (L, M), (R, M)]],

        '.' => &[&[(C - 3.0, B - 5.0), (C + 3.0, B - 5.0)]],
        ',' => &[&[(C, B - 5.0), (C - 8.0, B + 10.0)]],
        ';' => &[
            &[(C - 5.0, M), (C + 5.0, M)],
            &[(C, B - 5.0), (C - 8.0, B + 10.0)],
        ],
        ':' => &[
            &[(C - 5.0, U), (C + 5.0, U)],
            &[(C - 5.0, B - 5.0), (C + 5.0, B - 5.0)],
        ],
        '!' => &[
            &[(C, T), (C, M + 10.0)],
            &[(C - 3.0, B - 5.0), (C + 3.0, B - 5.0)],
        ],
        '?' => &[
            &[(L, T + 10.0), (L, T), (R, T), (R, M), (C, M), (C, M + 15.0)],
            &[(C - 3.0, B - 5.0), (C + 3.0, B - 5.0)],
        ],
        '(' => &[&[(R - 5.0, T), (L + 10.0, M), (R - 5.0, B)]],
        ')' => &[&[(L + 5.0, T), (R - 10.0, M), (L + 5.0, B)]],
        '[' => &[&[(R - 5.0, T), (L + 5.0, T), (L + 5.0, B), (R - 5.0, B)]],
        ']' => &[&[(L + 5.0, T), (R - 5.0, T), (R - 5.0, B), (L + 5.0, B)]],
        '{' => &[&[
            (R - 5.0, T),
            (C, T),
            (C, M - 5.0),
            (L + 5.0, M),
            (C, M + 5.0),
            (C, B),
            (R - 5.0, B),
        ]],
        '}' => &[&[
            (L + 5.0, T),
            (C, T),
            (C, M - 5.0),
            (R - 5.0, M),
            (C, M + 5.0),
            (C, B),
            (L + 5.0, B),
        ]],
        '"' => &[
            &[(C - 10.0, T), (C - 10.0, T + 15.0)],
            &[(C + 10.0, T), (C + 10.0, T + 15.0)],
        ],
        '\'' => &[&[(C, T), (C, T + 15.0)]],
        '-' => &[&[(L + 5.0, M), (R - 5.0, M)]],
        '_' => &[&[(L, B), (R, B)]],
        '+' => &[
            &[(L + 5.0, M), (R - 5.0, M)],
            &[(C, M - 20.0), (C, M + 20.0)],
        ],
        '=' => &[
            &[(L + 5.0, M - 10.0), (R - 5.0, M - 10.0)],
            &[(L + 5.0, M + 10.0), (R - 5.0, M + 10.0)],
        ],
        '<' => &[&[(R - 5.0, T + 10.0), (L + 5.0, M), (R - 5.0, B - 10.0)]],
        '>' => &[&[(L + 5.0, T + 10.0), (R - 5.0, M), (L + 5.0, B - 10.0)]],
        '/' => &[&[(R, T), (L, B)]],
        '\\' => &[&[(L, T), (R, B)]],
        '|' => &[&[(C, T), (C, B)]],
        '*' => &[
            &[(C, M - 15.0), (C, M + 15.0)],
            &[(L + 5.0, M - 10.0), (R - 5.0, M + 10.0)],
            &[(R - 5.0, M - 10.0), (L + 5.0, M + 10.0)],
        ],
        '&' => &[&[(R, B), (L, M), (C, T), (L, M), (R, M), (L, B)]],
        '@' => &[&[
            (R - 5.0, M),
            (C, M),
            (C, B - 10.0),
            (R - 5.0, B - 10.0),
            (R - 5.0, T + 5.0),
            (L + 5.0, T + 5.0),
            (L + 5.0, B - 5.0),
            (R, B - 5.0),
        ]],
        '#' => &[
            &[(L + 10.0, T), (L + 10.0, B)],
            &[(R - 10.0, T), (R - 10.0, B)],
            &[(L, M - 10.0), (R, M - 10.0)],
            &[(L, M + 10.0), (R, M + 10.0)],
        ],
        '$' => &[
            &[
                (R, T + 10.0),
                (L, T + 10.0),
                (L, M),
                (R, M),
                (R, B - 10.0),
                (L, B - 10.0),
            ],
            &[(C, T), (C, B)],
        ],
        '%' => &[
            &[(R, T), (L, B)],
            &[(L + 5.0, T + 5.0), (L + 15.0, T + 5.0)],
            &[(R - 15.0, B - 5.0), (R - 5.0, B - 5.0)],
        ],
        '^' => &[&[(L + 5.0, M - 10.0), (C, T + 5.0), (R - 5.0, M - 10.0)]],
        '~' => &[&[(L, M + 5.0), (L + 15.0, M - 5.0), (R - 15.0, M + 5.0), (R, M - 5.0)]],
        '`' => &[&[(L + 10.0, T), (C, T + 15.0)]],

        ' ' => &[],
        _ => return None,
    };
    Some(strokes)
}

/// Lay out `text` left to right as strokes in cell coordinates.
///
/// Characters without a glyph advance the pen but draw nothing, same as
/// space.
pub fn text_strokes(text: &str) -> Vec<Stroke> {
    let mut strokes = Vec::new();
    let mut x_offset = 0.0;

    for c in text.chars() {
        if let Some(glyph_strokes) = glyph(c) {
            for points in glyph_strokes {
                if points.is_empty() {
                    continue;
                }
                strokes.push(Stroke {
                    points: points
                        .iter()
                        .map(|&(x, y)| Point::new(x + x_offset, y))
                        .collect(),
                    character: Some(c),
                });
            }
        }
        x_offset += CHAR_WIDTH + CHAR_SPACING;
    }

    strokes
}

/// Analytic bounds of the laid-out text cells. Descenders and the dot
/// overshoot on `j`/`g` stay out on purpose: cells are what line up.
pub fn text_bounds(text: &str) -> Rect {
    let count = text.chars().count() as f64;
    let total_width = count * (CHAR_WIDTH + CHAR_SPACING) - CHAR_SPACING;
    Rect::new(0.0, 0.0, total_width.max(1.0), CHAR_HEIGHT)
}
