use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use super::{load_pipeline_or_report, timestamp};
use crate::binding::{Binding, ControlEvent, FilterControls};
use crate::display::{Container, FileContainer, Renderer, Terminal};
use crate::error::AppError;
use crate::models::config::UserConfig;
use crate::models::{OutputFormat, Source};
use crate::pipeline::Pipeline;

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the problem name
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, value_enum)]
    pub source: Option<Source>,
    /// Only problems carrying this tag
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Defaults to the configured format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn list_problems(args: ListArgs, user_config: &UserConfig) -> Result<(), AppError> {
    let renderer = Renderer::new(
        args.output.format.unwrap_or(user_config.default_format),
        timestamp(),
    );

    let pipeline =
        load_pipeline_or_report(user_config, &renderer, args.output.output.as_deref()).await?;

    let controls = preset_controls(&args.filter, &pipeline);

    match &args.output.output {
        Some(path) => {
            let container = FileContainer::new(path.clone());
            let matched = render_once(&pipeline, controls, renderer, container)?;
            println!("Wrote {} problem(s) to {}", matched, path.display());
        }
        None => {
            render_once(&pipeline, controls, renderer, Terminal::new(io::stdout().lock()))?;
        }
    }
    Ok(())
}

fn preset_controls(filter: &FilterArgs, pipeline: &Pipeline) -> FilterControls {
    let mut controls = FilterControls::new();
    controls.apply(ControlEvent::SearchInput(filter.search.clone()));
    controls.apply(ControlEvent::SourceChanged(filter.source));

    if let Some(tag) = &filter.tag {
        if !pipeline.tags.contains(tag) {
            warn!("No Codeforces problem is tagged '{}'", tag);
        }
        controls.apply(ControlEvent::TagChanged(Some(tag.clone())));
    }
    controls
}

fn render_once<C: Container>(
    pipeline: &Pipeline,
    controls: FilterControls,
    renderer: Renderer,
    container: C,
) -> Result<usize, AppError> {
    let binding = Binding::init(pipeline, controls, renderer, container)?;
    Ok(binding.matched())
}
