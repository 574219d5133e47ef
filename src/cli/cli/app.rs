use crate::cli::cli::commands::*;
use crate::cli::config::Config;
use crate::cli::error::{InteractiveError, Result};
use crate::runtime::Locator;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use std::sync::Arc;

/// Locate and launch the local blockchain client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Kill the client after this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Custom data directory path
    #[arg(long, global = true, env = "NODE_LOCATOR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how the client binary would be invoked
    Locate(LocateCommand),

    /// Launch the client binary
    Run(RunCommand),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration resolved from the data directory, the config file and the
/// command-line flags
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: Config,
    pub config_path: PathBuf,
    /// Directory the client fallback is searched in
    pub client_dir: PathBuf,
    /// Why the config file was ignored, if it was
    pub load_error: Option<InteractiveError>,
}

impl Cli {
    /// Resolve the data directory and load the merged configuration
    ///
    /// An unreadable config file falls back to defaults; the error is kept in
    /// [`ResolvedConfig::load_error`] so it can be logged once tracing is up.
    pub fn resolve_config(&self) -> Result<ResolvedConfig> {
        // Set up data directory (prefer CLI arg, then default)
        let data_dir: PathBuf = match self.data_dir.clone() {
            Some(dir) => {
                if !dir.exists() {
                    std::fs::create_dir_all(&dir)?;
                }
                dir
            }
            None => crate::cli::ensure_data_dir()?,
        };

        // Load configuration from file, then merge with CLI args
        let config_path = Config::path_in(&data_dir);
        let (config, load_error) = match Config::load_from_file(&config_path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        let config = config.merge_with_cli_args(self);

        // A data_dir set in the config file relocates the client fallback
        let client_dir = config.data_dir.clone().unwrap_or(data_dir);

        Ok(ResolvedConfig {
            config,
            config_path,
            client_dir,
            load_error,
        })
    }

    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let resolved = self.resolve_config()?;
        self.execute_with(resolved).await
    }

    /// Execute the CLI command with an already resolved configuration
    pub async fn execute_with(self, resolved: ResolvedConfig) -> Result<()> {
        if let Some(e) = &resolved.load_error {
            tracing::warn!("Ignoring configuration file: {}", e);
        }

        let context = CommandContext {
            locator: Arc::new(Locator::new(resolved.client_dir)),
            config: resolved.config,
            config_path: resolved.config_path,
        };

        match self.command {
            Commands::Locate(cmd) => cmd.execute(&context).await,
            Commands::Run(cmd) => cmd.execute(&context).await,
            Commands::Completion { shell } => {
                generate_completion(shell);
                Ok(())
            }
            Commands::Config { action } => action.execute(&context).await,
        }
    }
}

/// Generate shell completion script
fn generate_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
