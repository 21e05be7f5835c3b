//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::matcher::Strategy;

/// Resolve $(...) command interpolation markers in config values and dotenv files
#[derive(Parser)]
#[command(name = "shellsub")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SHELLSUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Marker matching strategy
    #[arg(long, global = true, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Shell used to run commands
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub shell: Option<String>,

    /// Kill commands running longer than this many seconds
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interpolate each TEXT argument, or each stdin line
    Expand(ExpandArgs),
    /// Resolve a dotenv file
    Env(EnvArgs),
    /// Show the first marker found in TEXT
    Match(MatchArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ExpandArgs {
    /// Texts to interpolate (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,
}

#[derive(clap::Args)]
pub struct EnvArgs {
    /// Dotenv file to resolve
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Text to search
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Inner hole pattern (implies `--strategy widening` unless given)
    #[arg(long, value_name = "REGEX")]
    pub inner_hole: Option<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub target: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(shell) = &self.shell {
            config.exec.shell = shell.clone();
        }
        if let Some(timeout) = self.timeout {
            config.exec.timeout = Some(timeout);
        }
        if let Command::Match(args) = &self.command
            && let Some(hole) = &args.inner_hole
        {
            // Only the widening strategy reads a hole
            if self.strategy.is_none() {
                config.strategy = Strategy::Widening;
            }
            config.inner_hole = Some(hole.clone());
        }
        config
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
