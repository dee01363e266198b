//! Touch-event synthesis: positioned strokes → timed primitive commands.
//!
//! Real digitizers have quirks this layer works around:
//!
//! * the touch subsystem may swallow the very first contact after idle,
//!   so a wake tap precedes the first stroke;
//! * very short swipes register unreliably, so small strokes render as
//!   held dots filled by concentric rings;
//! * some glyphs need small jitter right after touch-down before the
//!   start coordinate registers (priming wiggles, per-character opt-in);
//! * a single contact traces a hairline, so each path is interpolated
//!   twice, the second pass offset by a pixel, unless thin-line mode is
//!   on.

use kurbo::{Point, Rect};

use crate::config::GestureConfig;
use crate::stroke::Stroke;

/// One primitive touch or timing command. Dispatched strictly in order;
/// only one contact point is ever active.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchCommand {
    Down(Point),
    Move(Point),
    Up(Point),
    /// Pause, in seconds.
    Sleep(f64),
}

/// Synthesize the full command list for a stroke sequence.
///
/// Strokes render in order; empty strokes are skipped. A stroke with a
/// single point, or with bounds under the small-stroke threshold on both
/// axes, becomes a dot; everything else becomes a swipe.
pub fn synthesize(strokes: &[Stroke], config: &GestureConfig) -> Vec<TouchCommand> {
    let mut commands = Vec::new();

    push_wake_tap(&mut commands, strokes, config);

    for stroke in strokes {
        if stroke.points.is_empty() {
            continue;
        }

        let bounds = stroke.bounds();
        let small = bounds.width() < config.small_stroke_threshold
            && bounds.height() < config.small_stroke_threshold;

        if stroke.points.len() == 1 || small {
            push_dot(&mut commands, bounds, stroke.character, config);
        } else {
            push_path(&mut commands, stroke, config);
        }

        if config.stroke_delay > 0.0 {
            commands.push(TouchCommand::Sleep(config.stroke_delay));
        }
    }

    commands
}

/// A short tap at the first drawing position. Primes the display/touch
/// subsystem after idle; not a drawing motion.
fn push_wake_tap(commands: &mut Vec<TouchCommand>, strokes: &[Stroke], config: &GestureConfig) {
    let Some(&point) = strokes.first().and_then(|s| s.points.first()) else {
        return;
    };

    commands.push(TouchCommand::Down(point));
    commands.push(TouchCommand::Sleep(config.prime_delay));
    commands.push(TouchCommand::Up(point));
    commands.push(TouchCommand::Sleep(config.register_delay));
}

/// Render a stroke as a filled dot: hold at the bounds center and spiral
/// outward through concentric rings.
fn push_dot(
    commands: &mut Vec<TouchCommand>,
    bounds: Rect,
    character: Option<char>,
    config: &GestureConfig,
) {
    let center = bounds.center();

    commands.push(TouchCommand::Down(center));
    commands.push(TouchCommand::Sleep(config.move_delay));

    if needs_wiggles(character, config) {
        push_wiggles(commands, center, config);
    }

    let mut radius = 1;
    while radius <= config.dot_radius {
        for angle in (0..360).step_by(config.dot_angle_step) {
            let rad = f64::from(angle).to_radians();
            commands.push(TouchCommand::Move(Point::new(
                center.x + f64::from(radius) * rad.cos(),
                center.y + f64::from(radius) * rad.sin(),
            )));
            commands.push(TouchCommand::Sleep(config.move_delay));
        }
        radius += 2;
    }

    commands.push(TouchCommand::Up(center));
}

/// Render a stroke as a continuous swipe with interpolated motion.
fn push_path(commands: &mut Vec<TouchCommand>, stroke: &Stroke, config: &GestureConfig) {
    let first = stroke.points[0];

    commands.push(TouchCommand::Down(first));
    // Initial contact needs more settle time than subsequent moves.
    commands.push(TouchCommand::Sleep(config.register_delay));

    if needs_wiggles(stroke.character, config) {
        push_wiggles(commands, first, config);
    }

    push_interpolated(commands, &stroke.points, 0.0, 0.0, config);

    // Second pass fills the gap a point contact leaves along the line.
    if !config.thin_lines {
        push_interpolated(
            commands,
            &stroke.points,
            config.offset_pass_pixels,
            config.offset_pass_pixels,
            config,
        );
    }

    let last = stroke.points[stroke.points.len() - 1];
    commands.push(TouchCommand::Up(last));
}

/// Small jitter around the anchor, returning to it. Forces digitizers
/// that drop stationary touch-downs to latch the start coordinate.
fn push_wiggles(commands: &mut Vec<TouchCommand>, anchor: Point, config: &GestureConfig) {
    for dx in [0.0, 1.0, -1.0] {
        commands.push(TouchCommand::Move(Point::new(anchor.x + dx, anchor.y)));
        commands.push(TouchCommand::Sleep(config.move_delay));
    }
    for dy in [1.0, -1.0, 0.0] {
        commands.push(TouchCommand::Move(Point::new(anchor.x, anchor.y + dy)));
        commands.push(TouchCommand::Sleep(config.move_delay));
    }
}

/// Straight-line motion events between consecutive stroke points at the
/// configured pixel density, shifted by the given offset.
fn push_interpolated(
    commands: &mut Vec<TouchCommand>,
    points: &[Point],
    offset_x: f64,
    offset_y: f64,
    config: &GestureConfig,
) {
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let steps = ((distance / config.pixels_per_move) as usize).max(1);

        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            commands.push(TouchCommand::Move(Point::new(
                from.x + dx * t + offset_x,
                from.y + dy * t + offset_y,
            )));
            commands.push(TouchCommand::Sleep(config.move_delay));
        }
    }
}

fn needs_wiggles(character: Option<char>, config: &GestureConfig) -> bool {
    character.is_some_and(|c| config.wiggle_chars.contains(c))
}
