use anyhow::Result;
use clap::Parser;
use node_locator::cli::cli::Cli;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments and load the config first so the merged
    // verbose / quiet settings pick the log level
    let cli = Cli::parse();
    let resolved = match cli.resolve_config() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    // Initialize tracing with environment-based filtering
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(resolved.config.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting node-locator {}", node_locator::VERSION);

    // Execute command with user-friendly error handling
    if let Err(e) = cli.execute_with(resolved).await {
        // Log the full error for debugging
        error!("Command execution failed: {:?}", e);

        // Display user-friendly error message
        eprintln!("Error: {}", e.user_message());

        // Exit with error code
        std::process::exit(1);
    }

    debug!("Command completed successfully");
    Ok(())
}
