use std::io::{self, BufRead, Write};

use super::{load_pipeline_or_report, timestamp, OutputArgs};
use crate::binding::{Binding, ControlEvent, FilterControls};
use crate::display::{Container, FileContainer, Renderer, Terminal};
use crate::error::AppError;
use crate::models::config::UserConfig;

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Change(ControlEvent),
    Tags,
    Help,
    Quit,
    Nothing,
}

pub async fn browse(output: OutputArgs, user_config: &UserConfig) -> Result<(), AppError> {
    let renderer = Renderer::new(
        output.format.unwrap_or(user_config.default_format),
        timestamp(),
    );
    let pipeline =
        load_pipeline_or_report(user_config, &renderer, output.output.as_deref()).await?;

    match output.output {
        Some(path) => {
            println!("Rendering to {}", path.display());
            let container = FileContainer::new(path);
            let binding = Binding::init(&pipeline, FilterControls::new(), renderer, container)?;
            run_loop(binding, io::stdin().lock())?;
        }
        None => {
            let container = Terminal::new(io::stdout());
            let binding = Binding::init(&pipeline, FilterControls::new(), renderer, container)?;
            run_loop(binding, io::stdin().lock())?;
        }
    }
    Ok(())
}

fn run_loop<'a, C: Container, R: BufRead>(
    mut binding: Binding<'a, C>,
    input: R,
) -> Result<Binding<'a, C>, AppError> {
    print!("{}", help_text(binding.controls()));
    print_status(binding.matched());
    print!("> ");
    io::stdout().flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(binding.controls(), &line) {
            Ok(BrowseCommand::Change(event)) => {
                let matched = binding.on_change(event)?;
                print_status(matched);
            }
            Ok(BrowseCommand::Tags) => {
                for option in binding.controls().tag_options() {
                    println!("  {}", option.label);
                }
            }
            Ok(BrowseCommand::Help) => print!("{}", help_text(binding.controls())),
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Nothing) => {}
            Err(message) => println!("{}", message),
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(binding)
}

fn parse_command(controls: &FilterControls, line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    match word {
        "" => Ok(BrowseCommand::Nothing),
        "search" => Ok(BrowseCommand::Change(ControlEvent::SearchInput(rest.to_string()))),
        "source" => controls
            .select_source(rest)
            .map(BrowseCommand::Change)
            .ok_or_else(|| {
                format!("Unknown source '{}'. Choose codeforces, uva or all.", rest.trim())
            }),
        "tag" => controls
            .select_tag(rest)
            .map(BrowseCommand::Change)
            .ok_or_else(|| format!("Unknown tag '{}'. Run `tags` to list them.", rest.trim())),
        "tags" => Ok(BrowseCommand::Tags),
        "help" => Ok(BrowseCommand::Help),
        "quit" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command '{}'. Run `help` for usage.", other)),
    }
}

fn print_status(matched: usize) {
    println!("{} problem(s) match", matched);
}

/// One line per control in display order, then the other commands.
fn help_text(controls: &FilterControls) -> String {
    let mut text = String::from("Commands:\n");
    let usages = controls
        .layout()
        .into_iter()
        .map(|control| control.usage())
        .chain([("tags", "list tag options"), ("quit", "leave")]);
    for (command, description) in usages {
        text.push_str(&format!("  {:<30}{}\n", command, description));
    }
    text
}
