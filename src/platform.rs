use std::fmt;

use crate::error::LauncherError;

/// Operating systems a prebuilt binary is shipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Darwin,
}

/// CPU architectures a prebuilt binary is shipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Os {
    /// Accepts both the host spelling reported by the runtime
    /// (`std::env::consts::OS` says "macos") and the normalized name used in
    /// binary filenames ("darwin").
    pub fn from_identifier(id: &str) -> Result<Self, LauncherError> {
        match id {
            "linux" => Ok(Os::Linux),
            "macos" | "darwin" => Ok(Os::Darwin),
            other => Err(LauncherError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
        }
    }
}

impl Arch {
    /// Accepts the host spellings ("x86_64", "aarch64") alongside the
    /// normalized names ("x64", "arm64", and "amd64" as seen in filenames).
    pub fn from_identifier(id: &str) -> Result<Self, LauncherError> {
        match id {
            "x86_64" | "x64" | "amd64" => Ok(Arch::X64),
            "aarch64" | "arm64" => Ok(Arch::Arm64),
            other => Err(LauncherError::UnsupportedArchitecture {
                arch: other.to_string(),
            }),
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// The (OS, architecture) pair the launcher is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Read the host facts once. The OS is validated before the
    /// architecture, so an unsupported OS wins when both are unsupported.
    pub fn detect() -> Result<Self, LauncherError> {
        Self::from_identifiers(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn from_identifiers(os: &str, arch: &str) -> Result<Self, LauncherError> {
        let os = Os::from_identifier(os)?;
        let arch = Arch::from_identifier(arch)?;
        Ok(Platform { os, arch })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
