use std::path::{Path, PathBuf};

use crate::error::LauncherError;
use crate::platform::{Arch, Os, Platform};

/// Directory beside the launcher executable that the packaging step fills
/// with the prebuilt binaries.
pub const DIST_DIR: &str = "dist";

/// Filename of the prebuilt binary shipped for `platform`. Exhaustive over
/// the supported pairs, so every platform that survives detection resolves.
pub fn binary_name(platform: Platform) -> &'static str {
    match (platform.os, platform.arch) {
        (Os::Linux, Arch::X64) => "action-amd64",
        (Os::Linux, Arch::Arm64) => "action-arm64",
        (Os::Darwin, Arch::X64) => "action-darwin-amd64",
        (Os::Darwin, Arch::Arm64) => "action-darwin-arm64",
    }
}

pub fn binary_path_in(launcher_dir: &Path, platform: Platform) -> PathBuf {
    launcher_dir.join(DIST_DIR).join(binary_name(platform))
}

/// Path of the binary for `platform`, resolved against the directory
/// containing the launcher executable itself.
pub fn binary_path(platform: Platform) -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe().map_err(|_| LauncherError::LauncherLocation)?;
    let dir = exe.parent().ok_or(LauncherError::LauncherLocation)?;
    Ok(binary_path_in(dir, platform))
}
