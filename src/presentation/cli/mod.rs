pub mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;
use tracing::debug;

use crate::domain::entities::bootstrap_config::BootstrapConfig;
use commands::GenerateCommand;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    " for ",
    env!("BUILD_TARGET"),
    ")"
);

/// bootstrap-manifest - print the commit every catalogued repository has on a branch
#[derive(Parser, Debug)]
#[command(name = "bootstrap-manifest")]
#[command(about = "Print `<repository> <commit> <branch>` for every catalogued git repository")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Branch whose head commit is recorded (repositories without it fall back to master)
    #[arg(value_name = "GIT_BRANCH")]
    pub branch: String,

    /// File listing repositories to leave out of the manifest
    #[arg(value_name = "EXCLUDED_GIT_REPOS_FILE")]
    pub exclusion_file: PathBuf,

    /// Extra arguments are accepted and ignored, hyphenated ones included
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Usage line printed when the positional arguments are missing
pub fn usage(program: &str) -> String {
    format!("FATAL: Usage: {program} <git-branch> <excluded git repos file>")
}

/// Parse arguments; `Ok(None)` means clap already printed help or version
pub fn parse_args<I, T>(args: I) -> Result<Option<Cli>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
    settings: BootstrapConfig,
}

impl CliApp {
    /// Parse the process arguments, exiting with status 1 on a usage error
    pub fn new() -> Self {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "bootstrap-manifest".to_string());

        match parse_args(std::env::args_os()) {
            Ok(Some(cli)) => Self::with_settings(cli, BootstrapConfig::default()),
            Ok(None) => exit(0),
            Err(e) => {
                debug!(error = %e, "argument parsing failed");
                eprintln!("{}", usage(&program));
                exit(1);
            }
        }
    }

    pub fn with_settings(cli: Cli, settings: BootstrapConfig) -> Self {
        Self { cli, settings }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let command = GenerateCommand::new(
            self.cli.branch.clone(),
            self.cli.exclusion_file.clone(),
            self.settings.clone(),
        );

        match command.execute().await {
            Ok(report) => {
                debug!(
                    resolved = report.resolved_count(),
                    failed = report.failure_count(),
                    "run complete"
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("FATAL: {e:#}");
                exit(1);
            }
        }
    }
}
