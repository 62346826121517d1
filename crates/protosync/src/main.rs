use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "protosync",
    version,
    about = "Copy upstream .proto files into ./proto, rewriting go_package"
)]
struct Cli {
    /// Upstream directory containing the .proto tree
    source: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", error::format_error(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(source = %cli.source.display(), "starting proto sync");
    let report = protosync_core::run(&cli.source)
        .with_context(|| format!("syncing protos from {}", cli.source.display()))?;
    for line in output::summary(&report) {
        println!("{line}");
    }
    Ok(())
}
