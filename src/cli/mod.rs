mod browse;
mod config_cmd;
mod list;
mod tags;

use std::path::Path;

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::display::{FileContainer, Renderer};
use crate::error::AppError;
use crate::models::config::{self, UserConfig};
use crate::pipeline::Pipeline;
use crate::sources::Upstreams;

pub use list::{ListArgs, OutputArgs};

#[derive(Parser)]
#[command(name = "cplist")]
#[command(about = "Browse Codeforces and UVa problems in one list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch, filter and print the merged problem list
    List(ListArgs),
    /// Print every Codeforces tag
    Tags,
    /// Filter the list interactively from stdin
    Browse {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<config_cmd::ConfigAction>,
    },
}

pub async fn run(cli: Cli) {
    let user_config = config::load_config();

    let result = match cli.command {
        None => list::list_problems(ListArgs::default(), &user_config).await,
        Some(Commands::List(args)) => list::list_problems(args, &user_config).await,
        Some(Commands::Tags) => tags::print_tags(&user_config).await,
        Some(Commands::Browse { output }) => browse::browse(output, &user_config).await,
        Some(Commands::Config { action }) => config_cmd::handle_config(action, user_config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn load_pipeline(user_config: &UserConfig) -> Result<Pipeline, AppError> {
    let upstreams = Upstreams::from_config(user_config)?;
    let raw = upstreams.fetch_all().await?;
    Pipeline::from_payloads(&raw)
}

/// Loads the pipeline. On failure the output file, if any, gets the error
/// page instead of keeping an earlier render.
async fn load_pipeline_or_report(
    user_config: &UserConfig,
    renderer: &Renderer,
    output: Option<&Path>,
) -> Result<Pipeline, AppError> {
    match load_pipeline(user_config).await {
        Ok(pipeline) => Ok(pipeline),
        Err(e) => {
            if let Some(path) = output {
                let mut container = FileContainer::new(path.to_path_buf());
                renderer.render_error_into(&mut container, &e)?;
            }
            Err(e)
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
