use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use txt2swipe::kurbo::Rect;
use txt2swipe::{
    dispatch, fit_to_rect, outline_strokes, simple_strokes, synthesize, AdbShell, DrawError,
    DryRun, ErrorPolicy, FontFile, GestureConfig, StrokeSet, MAX_COMMANDS_PER_BATCH,
};

#[derive(Parser)]
#[command(
    name = "txt2swipe",
    about = "Draw text on an Android touchscreen via adb touch gestures"
)]
struct Cli {
    /// The text to draw
    text: String,

    /// Target area X position (pixels from left)
    #[arg(long)]
    x: f64,

    /// Target area Y position (pixels from top)
    #[arg(long)]
    y: f64,

    /// Target area width to fit the text into
    #[arg(long)]
    width: f64,

    /// Target area height
    #[arg(long)]
    height: f64,

    /// Font file (TTF/OTF) to take glyph outlines from
    #[arg(long, required_unless_present = "simple")]
    font: Option<PathBuf>,

    /// Use the built-in geometric/LCD style single-stroke font
    #[arg(long)]
    simple: bool,

    /// Skip the offset pass for thinner lines
    #[arg(long)]
    thin: bool,

    /// Characters that need priming wiggles (e.g. ";()")
    #[arg(long, default_value = "")]
    wiggle: String,

    /// Delay between strokes in milliseconds
    #[arg(long, default_value = "50")]
    delay: u64,

    /// Stroke simplification tolerance in font pixels
    #[arg(long, default_value = "1.5")]
    epsilon: f64,

    /// adb executable to invoke
    #[arg(long, default_value = "adb")]
    adb: String,

    /// adb device serial (for multiple connected devices)
    #[arg(long)]
    device: Option<String>,

    /// Stop at the first failed batch instead of pressing on
    #[arg(long)]
    abort_on_error: bool,

    /// Print the adb commands without executing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DrawError> {
    // The built-in font is already single-stroke; the offset pass would
    // only smear it.
    let thin_lines = cli.thin || cli.simple;

    let config = GestureConfig {
        thin_lines,
        wiggle_chars: cli.wiggle.clone(),
        stroke_delay: cli.delay as f64 / 1000.0,
        ..GestureConfig::default()
    };

    // Header
    eprintln!();
    eprintln!("  txt2swipe \u{00b7} {:?}", cli.text);
    match (&cli.font, cli.simple) {
        (_, true) => eprintln!("  Font        built-in single-stroke"),
        (Some(path), false) => eprintln!("  Font        {}", path.display()),
        (None, false) => {}
    }
    eprintln!(
        "  Target      ({}, {}) {}x{}",
        cli.x, cli.y, cli.width, cli.height
    );

    let set = build_strokes(cli)?;
    if set.strokes.is_empty() {
        return Err(DrawError::NoStrokes);
    }
    let points: usize = set.strokes.iter().map(|s| s.points.len()).sum();
    eprintln!("  Strokes     {} ({} points)", set.strokes.len(), points);

    let target = Rect::new(cli.x, cli.y, cli.x + cli.width, cli.y + cli.height);
    let placed = fit_to_rect(&set.strokes, set.bounds, target)?;

    let commands = synthesize(&placed, &config);
    eprintln!(
        "  Gesture     {} commands ({} batches)",
        commands.len(),
        commands.len().div_ceil(MAX_COMMANDS_PER_BATCH)
    );

    let policy = if cli.abort_on_error {
        ErrorPolicy::Abort
    } else {
        ErrorPolicy::Continue
    };

    if cli.dry_run {
        eprintln!();
        println!("Dry run output:");
        dispatch(&commands, &mut DryRun::new(cli.device.clone()), policy)?;
    } else {
        let mut shell = AdbShell::new(cli.adb.clone(), cli.device.clone());
        dispatch(&commands, &mut shell, policy)?;
        eprintln!("  \u{2713} done");
    }

    eprintln!();
    Ok(())
}

fn build_strokes(cli: &Cli) -> Result<StrokeSet, DrawError> {
    if cli.simple {
        return Ok(simple_strokes(&cli.text));
    }
    // clap guarantees --font when --simple is absent.
    let Some(path) = &cli.font else {
        return Err(DrawError::FontLoad("no font file given".to_string()));
    };
    let font = FontFile::load(path)?;
    outline_strokes(&font, &cli.text, cli.epsilon)
}
