//! Command-line front end for locating and launching the client.
//! ## Usage
//!
//! ```bash
//! # Show how the client would be invoked
//! node-locator locate
//!
//! # Launch the client with extra arguments
//! node-locator run -- --chain kovan
//!
//! # Inspect the configuration file
//! node-locator config show
//! ```

pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{InteractiveError, Result};

/// Initialize the data directory if it doesn't exist
pub fn ensure_data_dir() -> Result<std::path::PathBuf> {
    let data_dir = crate::default_data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}
