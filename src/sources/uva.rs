//! Adapter for the uHunt problem list. Each problem is a fixed-position
//! tuple: `[pid, number, title, dacu, best_runtime, best_memory, ...]`.

use serde_json::Value;

use crate::error::AppError;
use crate::models::{ProblemRecord, Source};

const POS_ID: usize = 0;
const POS_NAME: usize = 2;
const POS_DACU: usize = 3;
const POS_RUNTIME: usize = 4;
const POS_MEMORY: usize = 5;

pub fn parse_problems(payload: &Value) -> Result<Vec<ProblemRecord>, AppError> {
    let Value::Array(rows) = payload else {
        return Err(AppError::malformed(Source::Uva, "expected an array of problems"));
    };

    rows.iter()
        .enumerate()
        .map(|(row, tuple)| to_record(row, tuple))
        .collect()
}

fn to_record(row: usize, tuple: &Value) -> Result<ProblemRecord, AppError> {
    let fields = tuple.as_array().ok_or_else(|| {
        AppError::malformed(Source::Uva, format!("problem {} is not a tuple", row))
    })?;
    if fields.len() <= POS_MEMORY {
        return Err(AppError::malformed(
            Source::Uva,
            format!(
                "problem {} has {} fields, expected at least {}",
                row,
                fields.len(),
                POS_MEMORY + 1
            ),
        ));
    }

    let name = fields[POS_NAME]
        .as_str()
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            AppError::malformed(
                Source::Uva,
                format!("problem {} position {} is not a non-empty name", row, POS_NAME),
            )
        })?;

    Ok(ProblemRecord::uva(
        number_at(fields, row, POS_ID)?,
        name.to_string(),
        number_at(fields, row, POS_DACU)?,
        number_at(fields, row, POS_RUNTIME)?,
        number_at(fields, row, POS_MEMORY)?,
    ))
}

fn number_at(fields: &[Value], row: usize, position: usize) -> Result<u64, AppError> {
    fields[position].as_u64().ok_or_else(|| {
        AppError::malformed(
            Source::Uva,
            format!("problem {} position {} is not a non-negative integer", row, position),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProblemDetails;
    use serde_json::json;

    #[test]
    fn test_tuple_positions() {
        let records = parse_problems(&json!([
            [36, 100, "The 3n + 1 problem", 81234, 0, 1000000000, 0, 1000, 0, 0],
            [37, 101, "The Blocks Problem", 25000, 10, 2048, 0, 3000, 0, 0]
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "36");
        assert_eq!(records[0].name, "The 3n + 1 problem");
        assert_eq!(
            records[1].details,
            ProblemDetails::Uva {
                distinct_accepted_users: 25000,
                best_runtime: 10,
                best_memory: 2048,
            }
        );
    }

    #[test]
    fn test_source_is_uva_with_empty_tags() {
        let records =
            parse_problems(&json!([[1, 100, "A", 1, 2, 3], [2, 101, "B", 4, 5, 6]])).unwrap();
        assert!(records.iter().all(|r| r.source() == Source::Uva && r.tags.is_empty()));
    }

    #[test]
    fn test_short_tuple_is_malformed() {
        let err = parse_problems(&json!([[1, 100, "Short", 4]])).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { .. }));
        assert!(err.to_string().contains("4 fields"));
    }

    #[test]
    fn test_wrong_types_are_malformed() {
        assert!(parse_problems(&json!({ "problems": [] })).is_err());
        assert!(parse_problems(&json!([{ "id": 1 }])).is_err());
        assert!(parse_problems(&json!([["x", 100, "Bad id", 1, 2, 3]])).is_err());
        assert!(parse_problems(&json!([[1, 100, 42, 1, 2, 3]])).is_err());
        assert!(parse_problems(&json!([[1, 100, "Negative", -1, 2, 3]])).is_err());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(parse_problems(&json!([])).unwrap().is_empty());
    }
}
