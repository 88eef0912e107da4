use clap::Parser;
use nf_fetch::{run_scheduled, NoopFetcher, RunnerConfig};
use std::process::ExitCode;
use std::sync::Arc;

/// Scheduled news fetch. Takes no options; the outcome is reported through
/// the exit status.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    run_scheduled(Arc::new(NoopFetcher::new()), RunnerConfig::default()).await
}
