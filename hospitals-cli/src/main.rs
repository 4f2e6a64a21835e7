use std::path::Path;

use clap::Parser;
use colored::Colorize;
use hospitals_lib::{Config, HttpClient, Screen};
use sysexits::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod hospital;

#[derive(Parser, Debug)]
#[command(name = "hospitals")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: hospital::Command,

    /// Override the configured API endpoint
    #[arg(short, long, global = true)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    human_panic::setup_panic!();

    // Logs go to stderr so stdout only carries the output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match Config::path().and_then(|path| build_client(&path, cli.endpoint)) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::Config;
        }
    };
    debug!("Using endpoint {}", client.endpoint());

    hospital::handle(Screen::new(client), &cli.command).await
}

/// Build the API client from the configuration at `path`. Unlike the GUI, a configuration that
/// can't be read is an error rather than a reason to fall back to the defaults.
fn build_client(path: &Path, endpoint: Option<String>) -> hospitals_lib::Result<HttpClient> {
    let mut cfg = Config::load_from(path)?;
    if let Some(endpoint) = endpoint {
        cfg.api.endpoint = endpoint;
    }

    HttpClient::new(&cfg.api)
}
