//! Adapter for the Codeforces `problemset.problems` endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{ProblemRecord, Rating, Source};

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    result: Option<ProblemSet>,
}

#[derive(Debug, Deserialize)]
struct ProblemSet {
    problems: Vec<RawProblem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblem {
    contest_id: u64,
    index: String,
    name: String,
    tags: Vec<String>,
    #[serde(default)]
    rating: Option<u32>,
}

pub fn parse_problems(payload: &Value) -> Result<Vec<ProblemRecord>, AppError> {
    let envelope = Envelope::deserialize(payload)
        .map_err(|e| AppError::malformed(Source::Codeforces, e.to_string()))?;

    if envelope.status != "OK" {
        let comment = envelope.comment.unwrap_or_else(|| "no comment".to_string());
        return Err(AppError::network(
            Source::Codeforces,
            format!("status {}: {}", envelope.status, comment),
        ));
    }

    let problem_set = envelope
        .result
        .ok_or_else(|| AppError::malformed(Source::Codeforces, "missing field `result`"))?;

    problem_set
        .problems
        .into_iter()
        .enumerate()
        .map(|(position, raw)| to_record(position, raw))
        .collect()
}

fn to_record(position: usize, raw: RawProblem) -> Result<ProblemRecord, AppError> {
    if raw.name.trim().is_empty() {
        return Err(AppError::malformed(
            Source::Codeforces,
            format!("problem {} has an empty name", position),
        ));
    }
    if raw.index.is_empty() || raw.index.contains('_') {
        return Err(AppError::malformed(
            Source::Codeforces,
            format!("problem {} has an invalid index '{}'", position, raw.index),
        ));
    }

    let mut tags: Vec<String> = Vec::with_capacity(raw.tags.len());
    for tag in raw.tags {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let rating = raw.rating.map(Rating::Rated).unwrap_or(Rating::NotAvailable);
    Ok(ProblemRecord::codeforces(raw.contest_id, raw.index, raw.name, tags, rating))
}
