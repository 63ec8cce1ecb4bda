mod config;
mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "ring-queue-menu")]
#[command(about = "Interactive menu for an 8-slot circular queue")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not clear the screen before each menu
    #[arg(long)]
    no_clear: bool,

    /// Log queue operations to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_clear {
        config.clear_screen = false;
    }
    if cli.verbose {
        config.log_filter = "debug".to_string();
    }

    init_tracing(&config.log_filter);

    Session::new(io::stdin().lock(), io::stdout().lock(), config.clear_screen).run()
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so they never
/// mix with the menu.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
