//! CLI for webtext.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use webtext_core::config;
use webtext_core::fetch::FetchOptions;

use commands::{run_config, run_get, run_inspect};

/// Top-level CLI for webtext.
#[derive(Debug, Parser)]
#[command(name = "webtext")]
#[command(about = "webtext: fetch a page over HTTP/1.0 and print its text", long_about = None)]
pub struct Cli {
    /// Defaults to `get` with the configured URL.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page and print its visible text.
    Get {
        /// Plain http:// URL (defaults to `default_url` from the config file).
        url: Option<String>,
        /// Also print the response status line to stderr.
        #[arg(long)]
        status: bool,
        #[command(flatten)]
        timeouts: TimeoutArgs,
    },

    /// Fetch a page and print its status line and headers instead of the text.
    Inspect {
        /// Plain http:// URL (defaults to `default_url` from the config file).
        url: Option<String>,
        #[command(flatten)]
        timeouts: TimeoutArgs,
    },

    /// Show the config file location and effective settings.
    Config,
}

/// Timeout overrides; unset flags fall back to the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct TimeoutArgs {
    /// TCP connect timeout in seconds (at least 1).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout: Option<u64>,
    /// Socket read timeout in seconds (at least 1).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub read_timeout: Option<u64>,
}

impl TimeoutArgs {
    pub fn apply(&self, mut opts: FetchOptions) -> FetchOptions {
        if let Some(secs) = self.connect_timeout {
            opts.connect_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = self.read_timeout {
            opts.read_timeout = Some(Duration::from_secs(secs));
        }
        opts
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or(CliCommand::Get {
            url: None,
            status: false,
            timeouts: TimeoutArgs::default(),
        });

        match command {
            CliCommand::Get {
                url,
                status,
                timeouts,
            } => {
                let url = url.unwrap_or_else(|| cfg.default_url.clone());
                run_get(&url, &timeouts.apply(cfg.fetch_options()), status)?;
            }
            CliCommand::Inspect { url, timeouts } => {
                let url = url.unwrap_or_else(|| cfg.default_url.clone());
                run_inspect(&url, &timeouts.apply(cfg.fetch_options()))?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
