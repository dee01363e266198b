//! Batched dispatch of touch commands to the device shell.
//!
//! The execution channel takes a bounded number of commands per shell
//! invocation, so the command list is cut into fixed-size batches and
//! executed strictly in order: touch events are meaningless out of
//! order, and a batch must finish before the next one starts.

use std::process::Command;

use crate::error::DrawError;
use crate::gesture::TouchCommand;

/// Hard cap on commands per shell invocation. A limitation of the
/// execution channel, not a drawing parameter.
pub const MAX_COMMANDS_PER_BATCH: usize = 100;

/// What to do when a batch fails.
///
/// Continuing is the default: aborting mid-gesture can leave a virtual
/// finger down on the device, which is worse than finishing the
/// remaining motions after one bad batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the failure and keep dispatching.
    #[default]
    Continue,
    /// Stop at the first failed batch and surface its error.
    Abort,
}

/// The execution channel: runs one batched command string on the
/// device. Injected so the pipeline stays testable without a device.
pub trait ShellExecutor {
    fn execute(&mut self, batch: &str) -> Result<(), DrawError>;

    /// Whether dispatch should print live batch progress. Dry-run
    /// executors print the batches themselves.
    fn show_progress(&self) -> bool {
        true
    }
}

/// Send `commands` to `executor` in batches of at most
/// [`MAX_COMMANDS_PER_BATCH`], in order, waiting for each batch before
/// starting the next.
pub fn dispatch<E: ShellExecutor>(
    commands: &[TouchCommand],
    executor: &mut E,
    policy: ErrorPolicy,
) -> Result<(), DrawError> {
    let total = commands.len().div_ceil(MAX_COMMANDS_PER_BATCH);

    for (index, batch) in commands.chunks(MAX_COMMANDS_PER_BATCH).enumerate() {
        if executor.show_progress() {
            eprint!("\r  Draw        batch {}/{}", index + 1, total);
        }

        let joined = batch.iter().map(encode).collect::<Vec<_>>().join(" && ");
        if let Err(err) = executor.execute(&joined) {
            match policy {
                ErrorPolicy::Continue => {
                    eprintln!();
                    eprintln!("  batch {}/{} failed: {}", index + 1, total, err);
                }
                ErrorPolicy::Abort => {
                    if executor.show_progress() {
                        eprintln!();
                    }
                    return Err(err);
                }
            }
        }
    }

    if total > 0 && executor.show_progress() {
        eprintln!();
    }
    Ok(())
}

/// Encode one command in the device's line format. Coordinates truncate
/// toward zero; sleep durations always carry three decimals.
fn encode(command: &TouchCommand) -> String {
    match command {
        TouchCommand::Down(p) => {
            format!("input motionevent DOWN {} {}", p.x as i64, p.y as i64)
        }
        TouchCommand::Move(p) => {
            format!("input motionevent MOVE {} {}", p.x as i64, p.y as i64)
        }
        TouchCommand::Up(p) => format!("input motionevent UP {} {}", p.x as i64, p.y as i64),
        TouchCommand::Sleep(seconds) => format!("sleep {seconds:.3}"),
    }
}

// ── Executors ────────────────────────────────────────────

/// Executes batches on a device through `adb shell`.
pub struct AdbShell {
    adb: String,
    serial: Option<String>,
}

impl AdbShell {
    pub fn new(adb: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            adb: adb.into(),
            serial,
        }
    }
}

impl ShellExecutor for AdbShell {
    fn execute(&mut self, batch: &str) -> Result<(), DrawError> {
        let mut command = Command::new(&self.adb);
        if let Some(serial) = &self.serial {
            command.arg("-s").arg(serial);
        }
        command.arg("shell").arg(batch);

        let output = command.output().map_err(|source| DrawError::Spawn {
            command: self.adb.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DrawError::ShellFailed(stderr.trim().to_string()));
        }
        Ok(())
    }
}

/// Prints the `adb` invocations that would run, without executing.
pub struct DryRun {
    serial: Option<String>,
}

impl DryRun {
    pub fn new(serial: Option<String>) -> Self {
        Self { serial }
    }
}

impl ShellExecutor for DryRun {
    fn execute(&mut self, batch: &str) -> Result<(), DrawError> {
        match &self.serial {
            Some(serial) => println!("adb -s {serial} shell \"{batch}\""),
            None => println!("adb shell \"{batch}\""),
        }
        println!();
        Ok(())
    }

    fn show_progress(&self) -> bool {
        false
    }
}
