use crate::cli::error::{InteractiveError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Configuration settings for the node-locator CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default verbosity level
    #[serde(default)]
    pub verbose: bool,

    /// Default quiet mode
    #[serde(default)]
    pub quiet: bool,

    /// Custom data directory (if not using system default)
    pub data_dir: Option<PathBuf>,

    /// Client launch settings
    #[serde(default)]
    pub client: ClientDefaults,

    /// Output formatting preferences
    #[serde(default)]
    pub output: OutputDefaults,
}

/// Defaults applied when launching the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDefaults {
    /// Arguments passed before any given on the command line
    #[serde(default)]
    pub args: Vec<String>,

    /// Kill the client after this many seconds (no limit when unset)
    pub timeout_secs: Option<u64>,
}

/// Output formatting defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDefaults {
    /// Enable colored output by default
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputDefaults {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from file, with fallback to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Create default config file
            let config = Self::default();
            config.save_to_file(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            InteractiveError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to file
    ///
    /// The file is written next to its destination and renamed into place so
    /// a crash never leaves a truncated config behind.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(self).map_err(|e| {
            InteractiveError::configuration(format!("Failed to serialize config: {}", e))
        })?;

        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(content.as_bytes())?;
        file.persist(path).map_err(|e| InteractiveError::Io(e.error))?;
        Ok(())
    }

    /// Config file path inside `data_dir`
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Merge with command-line arguments, giving priority to CLI args
    pub fn merge_with_cli_args(mut self, cli_args: &crate::cli::cli::Cli) -> Self {
        if cli_args.verbose {
            self.verbose = true;
        }
        if cli_args.quiet {
            self.quiet = true;
        }
        if let Some(timeout) = cli_args.timeout {
            self.client.timeout_secs = Some(timeout);
        }
        if let Some(ref data_dir) = cli_args.data_dir {
            self.data_dir = Some(data_dir.clone());
        }

        self
    }

    /// Default tracing filter for this configuration; quiet beats verbose
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn default_true() -> bool {
    true
}
