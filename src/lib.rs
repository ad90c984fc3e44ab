pub mod dist;
pub mod error;
pub mod launch;
pub mod platform;

pub use error::LauncherError;
pub use platform::{Arch, Os, Platform};
