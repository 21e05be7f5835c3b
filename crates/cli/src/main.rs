use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use shellsub::cli::{Cli, Command};
use shellsub::config::{self, Config, defaults};
use shellsub::discovery;

mod cmd_env;
mod cmd_expand;
mod cmd_match;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Expand(args) => cmd_expand::run(&load_config(&cli)?, args),
        Command::Env(args) => cmd_env::run(&load_config(&cli)?, args),
        Command::Match(args) => cmd_match::run(&load_config(&cli)?, args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.target, &mut cmd, "shellsub", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log to stderr. `SHELLSUB_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "shellsub=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(defaults::LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

/// Load the explicit or discovered config file and apply CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => config::load(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match discovery::find_config(&cwd) {
                Some(path) => config::load(&path)?,
                None => Config::default(),
            }
        }
    };
    Ok(cli.apply_overrides(base))
}
