use thiserror::Error;

/// Fatal pre-spawn failures. None of these are recoverable: the launcher
/// prints the message and exits nonzero without attempting a spawn.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("unsupported platform {os:?}: only linux and macOS are supported")]
    UnsupportedPlatform { os: String },

    #[error("unsupported architecture {arch:?}: only x64 and arm64 are supported")]
    UnsupportedArchitecture { arch: String },

    #[error("could not determine the directory containing the launcher executable")]
    LauncherLocation,
}
