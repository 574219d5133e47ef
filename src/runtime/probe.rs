//! Existence checks used by the locator.
//!
//! Every probe answers with a plain `bool`: a failed lookup and a lookup that
//! errored out are the same thing to the caller.

use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Host queries performed during discovery
#[async_trait]
pub trait Probe: Send + Sync + fmt::Debug {
    /// Whether `name` resolves through the host's executable search path
    async fn command_exists(&self, name: &str) -> bool;

    /// Whether `path` exists as a filesystem entry
    async fn path_exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real `PATH` and filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

#[async_trait]
impl Probe for SystemProbe {
    async fn command_exists(&self, name: &str) -> bool {
        let name = name.to_owned();
        match tokio::task::spawn_blocking(move || which::which(name)).await {
            Ok(Ok(resolved)) => {
                trace!("search path resolves to {}", resolved.display());
                true
            }
            Ok(Err(e)) => {
                trace!("search path lookup failed: {}", e);
                false
            }
            Err(e) => {
                debug!("search path lookup task failed: {}", e);
                false
            }
        }
    }

    async fn path_exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}
