mod binding;
mod cli;
mod display;
mod error;
mod filter;
mod models;
mod pipeline;
mod sources;
#[cfg(test)]
mod test_support;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    cli::run(cli).await;
}
