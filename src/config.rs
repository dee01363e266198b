/// All gesture-synthesis tunables in one struct.
///
/// The defaults are the timings and thresholds that proved reliable on
/// real digitizers. The delay ordering `register_delay >= prime_delay >=
/// move_delay` must hold or touch-downs stop registering.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    // -- Timing (seconds) --
    /// Delay after each interpolated move event.
    pub move_delay: f64,
    /// Hold time for a bare tap (the wake tap).
    pub prime_delay: f64,
    /// Delay after touch-down before any motion, so the digitizer
    /// registers the initial contact.
    pub register_delay: f64,
    /// Pause between strokes. Zero disables.
    pub stroke_delay: f64,

    // -- Stroke classification --
    /// Strokes whose bounds fit under this on both axes render as dots
    /// rather than swipes.
    pub small_stroke_threshold: f64,
    /// Maximum dot ring radius in pixels.
    pub dot_radius: i32,
    /// Angle step in degrees when tracing dot rings.
    pub dot_angle_step: usize,

    // -- Interpolation --
    /// Pixels of travel per move event along a path.
    pub pixels_per_move: f64,
    /// Offset of the second interpolation pass, in pixels.
    pub offset_pass_pixels: f64,
    /// Skip the offset pass entirely, for thinner rendered lines.
    pub thin_lines: bool,

    /// Characters whose strokes get priming wiggles at touch-down.
    pub wiggle_chars: String,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_delay: 0.02,
            prime_delay: 0.05,
            register_delay: 0.1,
            stroke_delay: 0.05,
            small_stroke_threshold: 15.0,
            dot_radius: 5,
            dot_angle_step: 30,
            pixels_per_move: 2.0,
            offset_pass_pixels: 1.0,
            thin_lines: false,
            wiggle_chars: String::new(),
        }
    }
}
