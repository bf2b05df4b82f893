//! Host platform detection.

/// Operating system families a check can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    ///
    /// Returns `None` on operating systems the doctor has no name for.
    pub fn current() -> Option<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name (`std::env::consts::OS` or `uname -s` style) to a platform.
    pub fn from_os_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "macos" | "darwin" => Some(Platform::MacOS),
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }
}

/// Whether a check restricted to `required` should run on `host`.
///
/// No restriction means everywhere. An undetectable host runs everything.
pub fn applies_on(required: Option<Platform>, host: Option<Platform>) -> bool {
    match (required, host) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(required), Some(host)) => required == host,
    }
}
