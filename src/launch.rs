use std::process::Command;

use anyhow::Context;

use crate::dist;
use crate::platform::Platform;

/// Straight-line launcher sequence: detect, resolve, spawn, wait. Returns
/// the exit code to pass on to the caller.
///
/// The child inherits the launcher's stdin/stdout/stderr for its whole
/// lifetime. A child terminated by a signal has no exit code; that case maps
/// to 0.
pub fn run() -> anyhow::Result<i32> {
    let platform = Platform::detect()?;
    let binary = dist::binary_path(platform)?;
    let status = Command::new(&binary)
        .status()
        .with_context(|| format!("failed to launch {}", binary.display()))?;
    Ok(status.code().unwrap_or(0))
}
