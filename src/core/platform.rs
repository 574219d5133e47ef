//! Platform table for client discovery.
//!
//! Each supported operating system maps to a fixed list of absolute paths
//! where the client is conventionally installed, and to the suffix its
//! executables carry.

use serde::Serialize;
use std::fmt;

/// Command name of the blockchain client
pub const CLIENT_BINARY: &str = "parity";

const LINUX_LOCATIONS: &[&str] = &["/bin/parity", "/usr/bin/parity", "/usr/local/bin/parity"];
const MACOS_LOCATIONS: &[&str] = &["/Applications/Parity Ethereum.app/Contents/MacOS/parity"];
const WINDOWS_LOCATIONS: &[&str] = &[r"C:\Program Files\Parity Technologies\Parity\parity.exe"];

/// Operating system family the locator searches for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux and any other Unix-like host
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Platform of the running process, fixed at compile time
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Absolute paths where the client is conventionally installed
    pub fn well_known_locations(self) -> &'static [&'static str] {
        match self {
            Self::Linux => LINUX_LOCATIONS,
            Self::MacOs => MACOS_LOCATIONS,
            Self::Windows => WINDOWS_LOCATIONS,
        }
    }

    pub fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::MacOs => "",
        }
    }

    /// File name of the client binary on this platform
    pub fn executable_name(self) -> String {
        format!("{}{}", CLIENT_BINARY, self.executable_suffix())
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        };
        f.write_str(name)
    }
}
