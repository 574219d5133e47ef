//! Client binary discovery.
//!
//! The locator tries three tiers in order and stops at the first hit:
//!
//! 1. the host search path, which yields the bare command name
//! 2. the platform's well-known install locations, probed concurrently
//! 3. the application data directory
//!
//! The first successful result is memoised for the lifetime of the locator.
//! Concurrent first callers share a single in-flight discovery.

use crate::core::{Error, Invocation, Platform, Result, CLIENT_BINARY};
use crate::runtime::probe::{Probe, SystemProbe};
use futures::future::select_ok;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Finds the client binary and remembers where it was found
///
/// A locator is meant to be built once at process start and shared by
/// reference (usually behind an [`Arc`]).
///
/// # Examples
///
/// ```rust,no_run
/// # use node_locator::runtime::Locator;
/// # #[tokio::main]
/// # async fn main() -> node_locator::core::Result<()> {
/// let locator = Locator::new("/home/alice/.local/share/node-locator");
/// let invocation = locator.locate().await?;
/// println!("client can be run with {}", invocation);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Locator {
    platform: Platform,
    data_dir: PathBuf,
    probe: Arc<dyn Probe>,
    resolved: OnceCell<Invocation>,
}

impl Locator {
    /// Create a locator for the current platform using the system probe
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::builder().data_dir(data_dir).build()
    }

    pub fn builder() -> LocatorBuilder {
        LocatorBuilder::new()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Where the client is expected inside the application data directory
    pub fn fallback_path(&self) -> PathBuf {
        self.data_dir.join(self.platform.executable_name())
    }

    /// The memoised result, if discovery has already succeeded
    pub fn cached(&self) -> Option<&Invocation> {
        self.resolved.get()
    }

    /// Resolve how to invoke the client
    ///
    /// Returns the cached result when one exists. Otherwise runs discovery;
    /// on success the result is cached for every later call, on failure the
    /// cache stays empty and the next call searches again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when every tier fails.
    pub async fn locate(&self) -> Result<Invocation> {
        self.resolved
            .get_or_try_init(|| self.discover())
            .await
            .cloned()
    }

    async fn discover(&self) -> Result<Invocation> {
        debug!(platform = %self.platform, "searching for client binary");

        let found = match self.in_search_path().await {
            Some(invocation) => Some(invocation),
            None => match self.in_well_known_locations().await {
                Some(invocation) => Some(invocation),
                None => self.in_data_dir().await,
            },
        };

        match found {
            Some(invocation) => {
                info!("Client found on machine, can be run with \"{}\".", invocation);
                Ok(invocation)
            }
            None => {
                warn!("Client not found on machine.");
                Err(Error::NotFound)
            }
        }
    }

    async fn in_search_path(&self) -> Option<Invocation> {
        if self.probe.command_exists(CLIENT_BINARY).await {
            Some(Invocation::Command(CLIENT_BINARY.to_string()))
        } else {
            None
        }
    }

    async fn in_well_known_locations(&self) -> Option<Invocation> {
        let probe = &self.probe;
        let probes = self
            .platform
            .well_known_locations()
            .iter()
            .map(|location| {
                let path = Path::new(location);
                Box::pin(async move {
                    if probe.path_exists(path).await {
                        Ok(path.to_path_buf())
                    } else {
                        Err(())
                    }
                })
            })
            .collect::<Vec<_>>();

        // select_ok panics on an empty set
        if probes.is_empty() {
            return None;
        }

        select_ok(probes)
            .await
            .ok()
            .map(|(path, _)| Invocation::Path(path))
    }

    async fn in_data_dir(&self) -> Option<Invocation> {
        let path = self.fallback_path();
        if self.probe.path_exists(&path).await {
            Some(Invocation::Path(path))
        } else {
            None
        }
    }
}

/// Builder for [`Locator`]
pub struct LocatorBuilder {
    platform: Platform,
    data_dir: Option<PathBuf>,
    probe: Arc<dyn Probe>,
}

impl Default for LocatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocatorBuilder {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            data_dir: None,
            probe: Arc::new(SystemProbe),
        }
    }

    /// Override the platform whose well-known locations are searched
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Application data directory holding the fallback copy of the client
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn probe(mut self, probe: Arc<dyn Probe>) -> Self {
        self.probe = probe;
        self
    }

    /// Build the locator
    ///
    /// Without an explicit data directory the per-user application data
    /// directory is used.
    pub fn build(self) -> Locator {
        Locator {
            platform: self.platform,
            data_dir: self.data_dir.unwrap_or_else(crate::default_data_dir),
            probe: self.probe,
            resolved: OnceCell::new(),
        }
    }
}
