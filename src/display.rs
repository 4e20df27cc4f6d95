use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::{OutputFormat, ProblemDetails, ProblemRecord, Source};

const RULE_WIDTH: usize = 60;
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Display projection of one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub title: String,
    pub link: Option<String>,
    pub lines: Vec<String>,
}

impl Fragment {
    pub fn from_problem(problem: &ProblemRecord) -> Self {
        let mut lines = vec![format!("Source: {}", problem.source())];
        match &problem.details {
            ProblemDetails::Codeforces { rating, .. } => {
                lines.push(format!("Difficulty: {}", rating));
                lines.push(format!("Tags: {}", problem.tags.join(", ")));
            }
            ProblemDetails::Uva {
                distinct_accepted_users,
                best_runtime,
                best_memory,
            } => {
                lines.push(format!("DACU: {}", distinct_accepted_users));
                lines.push(format!("Best Runtime: {}", best_runtime));
                lines.push(format!("Best Memory: {}", best_memory));
            }
        }

        Self {
            title: problem.name.clone(),
            link: problem.url(),
            lines,
        }
    }
}

/// Output sink whose contents are replaced wholesale by each render.
pub trait Container {
    fn replace(&mut self, rendered: &str) -> io::Result<()>;
}

/// Writes renders one after another, separated by a rule.
pub struct Terminal<W: Write> {
    out: W,
    renders: usize,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out, renders: 0 }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Container for Terminal<W> {
    fn replace(&mut self, rendered: &str) -> io::Result<()> {
        if self.renders > 0 {
            writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        }
        self.renders += 1;
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()
    }
}

/// Overwrites a file on every render.
pub struct FileContainer {
    path: PathBuf,
}

impl FileContainer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Container for FileContainer {
    fn replace(&mut self, rendered: &str) -> io::Result<()> {
        fs::write(&self.path, rendered)
    }
}

pub struct Renderer {
    pub format: OutputFormat,
    pub generated_at: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, generated_at: impl Into<String>) -> Self {
        Self {
            format,
            generated_at: generated_at.into(),
        }
    }

    pub fn render(&self, problems: &[&ProblemRecord]) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Text => Ok(render_text(problems)),
            OutputFormat::Html => Ok(render_html(problems, &self.generated_at)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(problems)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    pub fn render_into(
        &self,
        container: &mut dyn Container,
        problems: &[&ProblemRecord],
    ) -> Result<(), AppError> {
        let rendered = self.render(problems)?;
        container.replace(&rendered)?;
        Ok(())
    }

    /// Replaces the container contents with the error state.
    pub fn render_error_into(
        &self,
        container: &mut dyn Container,
        error: &AppError,
    ) -> Result<(), AppError> {
        container.replace(&self.render_error(error))?;
        Ok(())
    }

    /// Visible error state for a pipeline that never produced data.
    pub fn render_error(&self, error: &AppError) -> String {
        match self.format {
            OutputFormat::Text => format!("Failed to load problems: {}\n", error),
            OutputFormat::Json => {
                format!("{}\n", serde_json::json!({ "error": error.to_string() }))
            }
            OutputFormat::Html => page(
                &format!(
                    "<div class=\"alert alert-danger\">Failed to load problems: {}</div>",
                    escape_html(&error.to_string())
                ),
                &self.generated_at,
            ),
        }
    }
}

fn render_text(problems: &[&ProblemRecord]) -> String {
    let mut out = String::new();
    for problem in problems {
        let fragment = Fragment::from_problem(problem);
        out.push_str(&fragment.title);
        out.push('\n');
        if let Some(link) = &fragment.link {
            out.push_str(&format!("  {}\n", link));
        }
        for line in &fragment.lines {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }
    out.push_str(&format!("{}\n", summary(problems)));
    out
}

fn summary(problems: &[&ProblemRecord]) -> String {
    let codeforces = problems
        .iter()
        .filter(|p| p.source() == Source::Codeforces)
        .count();
    format!(
        "{} problem(s): {} from Codeforces, {} from UVa",
        problems.len(),
        codeforces,
        problems.len() - codeforces
    )
}

fn render_html(problems: &[&ProblemRecord], generated_at: &str) -> String {
    let mut cards = String::from("<div class=\"row\" id=\"problemList\">\n");
    for problem in problems {
        cards.push_str(&card(&Fragment::from_problem(problem)));
    }
    cards.push_str("</div>\n");
    cards.push_str(&format!(
        "<p class=\"text-muted\">{}</p>\n",
        escape_html(&summary(problems))
    ));
    page(&cards, generated_at)
}

fn card(fragment: &Fragment) -> String {
    let title = escape_html(&fragment.title);
    let heading = match &fragment.link {
        Some(link) => format!("<a href=\"{}\">{}</a>", escape_html(link), title),
        None => title,
    };
    let mut body = format!("<h5 class=\"card-title\">{}</h5>\n", heading);
    for line in &fragment.lines {
        body.push_str(&format!("<p class=\"card-text\">{}</p>\n", escape_html(line)));
    }
    format!(
        "<div class=\"col-md-4 mb-3\">\n<div class=\"card\">\n\
         <div class=\"card-body\">\n{}</div>\n</div>\n</div>\n",
        body
    )
}

fn page(content: &str, generated_at: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Problem List</title>\n\
         <link rel=\"stylesheet\" href=\"{}\">\n\
         </head>\n<body>\n<div class=\"container mt-4\">\n<h1>Problem List</h1>\n{}\
         <footer class=\"text-muted small\">Generated {}</footer>\n</div>\n</body>\n</html>\n",
        BOOTSTRAP_CSS,
        content,
        escape_html(generated_at)
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
