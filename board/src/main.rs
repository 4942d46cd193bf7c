//! Job board CLI
//!
//! Mounts the landing page against the job API and renders it to the
//! terminal.

mod commands;

use anyhow::Result;
use board::Config;
use clap::Parser;
use client::ApiConfig;
use client::config::{DEFAULT_BASE_URL, DEFAULT_CREATE_PATH, DEFAULT_LIST_PATH};
use commands::{Commands, handle_command};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Job board landing page in the terminal", long_about = None)]
struct Cli {
    /// Base URL of the job API
    #[arg(long, env = "JOBBOARD_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Path of the job listing endpoint
    #[arg(long, env = "JOBBOARD_LIST_PATH", default_value = DEFAULT_LIST_PATH)]
    list_path: String,

    /// Path of the job creation endpoint
    #[arg(long, env = "JOBBOARD_CREATE_PATH", default_value = DEFAULT_CREATE_PATH)]
    create_path: String,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, env = "JOBBOARD_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        api: ApiConfig::new(cli.api_url).with_paths(cli.list_path, cli.create_path),
        log_filter: cli.log,
    };
    board::logging::init(config.log_filter.as_deref())?;

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop_fps(fps: &str) -> Result<u32, clap::Error> {
        let cli = Cli::try_parse_from(["jobboard", "backdrop", "--fps", fps])?;
        match cli.command {
            Commands::Backdrop { fps, .. } => Ok(fps),
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_backdrop_fps_range() {
        assert_eq!(backdrop_fps("1").unwrap(), 1);
        assert_eq!(backdrop_fps("120").unwrap(), 120);
        assert!(backdrop_fps("0").is_err());
        assert!(backdrop_fps("121").is_err());
        assert!(backdrop_fps("2000000000").is_err());
    }

    #[test]
    fn test_backdrop_fps_default() {
        let cli = Cli::try_parse_from(["jobboard", "backdrop"]).unwrap();
        assert!(matches!(cli.command, Commands::Backdrop { fps: 15, .. }));
    }
}
