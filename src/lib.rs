//! # node-locator
//!
//! Finds the local blockchain client binary that the desktop wallet talks to,
//! and launches it.
//!
//! Discovery runs three tiers in order: the host search path, the platform's
//! well-known install locations, and finally the application data directory.
//! The first hit is cached for the lifetime of the [`Locator`].
//!
//! ```rust,no_run
//! use node_locator::{ClientLauncher, Locator};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> node_locator::Result<()> {
//! let locator = Arc::new(Locator::new(node_locator::default_data_dir()));
//! println!("client: {}", locator.locate().await?);
//!
//! let launcher = ClientLauncher::new(locator);
//! let mut client = launcher.spawn(["--chain", "kovan"]).await?;
//! client.kill().await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod runtime;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::{Error, Invocation, Platform, Result, CLIENT_BINARY};
pub use crate::runtime::{format_command, ClientHandle, ClientLauncher, Locator, LocatorBuilder};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-user application data directory
///
/// This is where the wallet keeps its own copy of the client and where the
/// CLI stores its configuration.
pub fn default_data_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "node-locator")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            // Fallback to home directory if project dirs not available
            dirs::home_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(".node-locator")
        })
}
