//! Subcommand implementations

use crate::cli::config::Config;
use crate::cli::error::{InteractiveError, Result};
use crate::runtime::{ClientLauncher, Locator};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Shared state handed to every subcommand
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub locator: Arc<Locator>,
    pub config: Config,
    pub config_path: PathBuf,
}

impl CommandContext {
    fn color(&self) -> bool {
        self.config.output.color
    }

    fn client_error(&self, err: crate::core::Error) -> InteractiveError {
        InteractiveError::from_client(err, self.locator.fallback_path())
    }
}

#[derive(Args, Debug)]
pub struct LocateCommand {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl LocateCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let invocation = ctx
            .locator
            .locate()
            .await
            .map_err(|e| ctx.client_error(e))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&invocation)?);
        } else if ctx.config.quiet {
            println!("{}", invocation);
        } else {
            let label = if invocation.is_command() {
                "on PATH"
            } else {
                "at path"
            };
            let value = invocation.to_string();
            if ctx.color() {
                println!("Client found {}: {}", label, value.green().bold());
            } else {
                println!("Client found {}: {}", label, value);
            }
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RunCommand {
    /// Arguments passed to the client
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl RunCommand {
    /// Configured default arguments followed by the ones given here
    pub fn client_args(&self, config: &Config) -> Vec<String> {
        config
            .client
            .args
            .iter()
            .chain(self.args.iter())
            .cloned()
            .collect()
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut launcher = ClientLauncher::new(Arc::clone(&ctx.locator));
        if let Some(secs) = ctx.config.client.timeout_secs {
            launcher = launcher.timeout(Duration::from_secs(secs));
        }

        let status = launcher
            .run(self.client_args(&ctx.config))
            .await
            .map_err(|e| ctx.client_error(e))?;

        if !ctx.config.quiet {
            println!("Client exited with {}", status);
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Overwrite the configuration file with defaults
    Reset,
}

impl ConfigAction {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Show => {
                let content = toml::to_string_pretty(&ctx.config).map_err(|e| {
                    InteractiveError::configuration(format!("Failed to serialize config: {}", e))
                })?;
                print!("{}", content);
            }
            Self::Path => println!("{}", ctx.config_path.display()),
            Self::Reset => {
                Config::default().save_to_file(&ctx.config_path)?;
                if !ctx.config.quiet {
                    println!("Configuration reset: {}", ctx.config_path.display());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;
