//! Discovery and process management for the local client binary.

pub mod command;
pub mod locator;
pub mod probe;
pub mod process;

pub use command::format_command;
pub use locator::{Locator, LocatorBuilder};
pub use probe::{Probe, SystemProbe};
pub use process::{ClientHandle, ClientLauncher};
