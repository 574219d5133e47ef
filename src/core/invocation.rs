use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// How to start the client: either a bare command name that the host
/// resolves through its search path, or an absolute path on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Invocation {
    Command(String),
    Path(PathBuf),
}

impl Invocation {
    /// Program to hand to the process spawner
    pub fn program(&self) -> &OsStr {
        match self {
            Self::Command(name) => OsStr::new(name),
            Self::Path(path) => path.as_os_str(),
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Command(_) => None,
            Self::Path(path) => Some(path),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(name) => f.write_str(name),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
