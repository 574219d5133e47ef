use super::*;
use crate::cli::cli::{Cli, Commands};
use crate::core::{Invocation, Platform};
use crate::runtime::Probe;
use async_trait::async_trait;
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

/// Probe that finds nothing except files under the data directory
#[derive(Debug)]
struct DataDirOnlyProbe(PathBuf);

#[async_trait]
impl Probe for DataDirOnlyProbe {
    async fn command_exists(&self, _name: &str) -> bool {
        false
    }

    async fn path_exists(&self, path: &Path) -> bool {
        path.starts_with(&self.0) && path.exists()
    }
}

/// Test utility for a scratch data directory with a context pointing at it
struct MockEnvironment {
    temp_dir: TempDir,
    context: CommandContext,
}

impl MockEnvironment {
    fn new(config: Config) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let locator = Locator::builder()
            .platform(Platform::Linux)
            .data_dir(temp_dir.path())
            .probe(Arc::new(DataDirOnlyProbe(temp_dir.path().to_path_buf())))
            .build();
        let context = CommandContext {
            locator: Arc::new(locator),
            config,
            config_path: Config::path_in(temp_dir.path()),
        };
        Self { temp_dir, context }
    }

    fn install_fallback_client(&self) -> PathBuf {
        let path = self.context.locator.fallback_path();
        std::fs::write(&path, b"").unwrap();
        path
    }
}

/// Helper to validate command parsing succeeds
fn assert_parse_success(args: &[&str]) -> Cli {
    match Cli::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) => panic!("Failed to parse arguments: {}", e),
    }
}

#[test]
fn test_parse_locate() {
    let cli = assert_parse_success(&["node-locator", "locate", "--json"]);
    match cli.command {
        Commands::Locate(cmd) => assert!(cmd.json),
        other => panic!("Expected locate, got {:?}", other),
    }
}

#[test]
fn test_parse_run_keeps_hyphenated_args() {
    let cli = assert_parse_success(&["node-locator", "run", "--chain", "kovan", "--no-warp"]);
    match cli.command {
        Commands::Run(cmd) => assert_eq!(cmd.args, vec!["--chain", "kovan", "--no-warp"]),
        other => panic!("Expected run, got {:?}", other),
    }

    let cli = assert_parse_success(&["node-locator", "--timeout", "10", "run", "--", "--light"]);
    assert_eq!(cli.timeout, Some(10));
    match cli.command {
        Commands::Run(cmd) => assert_eq!(cmd.args, vec!["--light"]),
        other => panic!("Expected run, got {:?}", other),
    }
}

#[test]
fn test_parse_config_actions() {
    for (arg, expected) in [("show", "Show"), ("path", "Path"), ("reset", "Reset")] {
        let cli = assert_parse_success(&["node-locator", "config", arg]);
        match cli.command {
            Commands::Config { action } => assert_eq!(format!("{:?}", action), expected),
            other => panic!("Expected config, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["node-locator", "install"]).is_err());
    assert!(Cli::try_parse_from(["node-locator"]).is_err());
}

#[test]
fn test_run_args_follow_configured_defaults() {
    let mut config = Config::default();
    config.client.args = vec!["--chain".to_string(), "kovan".to_string()];
    let cmd = RunCommand {
        args: vec!["--light".to_string()],
    };

    assert_eq!(cmd.client_args(&config), vec!["--chain", "kovan", "--light"]);
}

#[tokio::test]
async fn test_locate_reports_fallback_when_missing() {
    let env = MockEnvironment::new(Config::default());

    let err = LocateCommand { json: false }
        .execute(&env.context)
        .await
        .unwrap_err();

    match err {
        InteractiveError::ClientNotFound(path) => {
            assert_eq!(path, env.temp_dir.path().join("parity"));
        }
        other => panic!("Expected ClientNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_locate_uses_fallback_client() {
    let env = MockEnvironment::new(Config::default());
    let installed = env.install_fallback_client();

    LocateCommand { json: true }
        .execute(&env.context)
        .await
        .unwrap();

    assert_eq!(
        env.context.locator.cached(),
        Some(&Invocation::Path(installed))
    );
}

#[tokio::test]
async fn test_run_without_client_fails() {
    let env = MockEnvironment::new(Config::default());
    let cmd = RunCommand { args: vec![] };

    let err = cmd.execute(&env.context).await.unwrap_err();
    assert!(matches!(err, InteractiveError::ClientNotFound(_)));
}

#[tokio::test]
async fn test_config_reset_writes_defaults() {
    let mut config = Config::default();
    config.quiet = true;
    let env = MockEnvironment::new(config);
    std::fs::write(&env.context.config_path, "verbose = true\n").unwrap();

    ConfigAction::Reset.execute(&env.context).await.unwrap();

    let reloaded = Config::load_from_file(&env.context.config_path).unwrap();
    assert_eq!(reloaded, Config::default());
}

#[tokio::test]
async fn test_config_show_and_path() {
    let env = MockEnvironment::new(Config::default());
    ConfigAction::Show.execute(&env.context).await.unwrap();
    ConfigAction::Path.execute(&env.context).await.unwrap();
}

#[test]
fn test_resolved_config_reads_verbosity_from_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(Config::path_in(temp_dir.path()), "verbose = true\n").unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    let cli = assert_parse_success(&["node-locator", "--data-dir", data_dir, "locate"]);
    let resolved = cli.resolve_config().unwrap();
    assert!(resolved.load_error.is_none());
    assert_eq!(resolved.config.log_level(), "debug");
    assert_eq!(resolved.client_dir, temp_dir.path());

    let cli = assert_parse_success(&["node-locator", "--data-dir", data_dir, "-q", "locate"]);
    assert_eq!(cli.resolve_config().unwrap().config.log_level(), "warn");
}

#[test]
fn test_resolved_config_keeps_load_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(Config::path_in(temp_dir.path()), "verbose = \"loud\"\n").unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    let cli = assert_parse_success(&["node-locator", "--data-dir", data_dir, "locate"]);
    let resolved = cli.resolve_config().unwrap();

    assert!(matches!(
        resolved.load_error,
        Some(InteractiveError::Configuration(_))
    ));
    assert_eq!(resolved.config.log_level(), "info");
}
