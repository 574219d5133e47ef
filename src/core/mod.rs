//! Core types shared by the locator, the launcher and the CLI.

pub mod error;
pub mod invocation;
pub mod platform;

pub use error::{Error, Result};
pub use invocation::Invocation;
pub use platform::{Platform, CLIENT_BINARY};
