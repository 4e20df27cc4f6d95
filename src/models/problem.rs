use std::fmt;

use serde::{Deserialize, Serialize};

use super::source::Source;

const CODEFORCES_PROBLEM_URL: &str = "https://codeforces.com/problemset/problem";

/// Codeforces difficulty. Unrated problems carry `NotAvailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Rated(u32),
    NotAvailable,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(value) => write!(f, "{}", value),
            Rating::NotAvailable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ProblemDetails {
    Codeforces {
        contest_id: u64,
        index: String,
        rating: Rating,
    },
    Uva {
        distinct_accepted_users: u64,
        best_runtime: u64,
        best_memory: u64,
    },
}

/// One problem, normalized across providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub details: ProblemDetails,
}

impl ProblemRecord {
    pub fn codeforces(
        contest_id: u64,
        index: String,
        name: String,
        tags: Vec<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id: format!("{}_{}", contest_id, index),
            name,
            tags,
            details: ProblemDetails::Codeforces {
                contest_id,
                index,
                rating,
            },
        }
    }

    pub fn uva(
        id: u64,
        name: String,
        distinct_accepted_users: u64,
        best_runtime: u64,
        best_memory: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name,
            tags: Vec::new(),
            details: ProblemDetails::Uva {
                distinct_accepted_users,
                best_runtime,
                best_memory,
            },
        }
    }

    pub fn source(&self) -> Source {
        match self.details {
            ProblemDetails::Codeforces { .. } => Source::Codeforces,
            ProblemDetails::Uva { .. } => Source::Uva,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Canonical problem page. UVa has no agreed URL scheme, so it gets none.
    pub fn url(&self) -> Option<String> {
        match &self.details {
            ProblemDetails::Codeforces {
                contest_id, index, ..
            } => Some(format!("{}/{}/{}", CODEFORCES_PROBLEM_URL, contest_id, index)),
            ProblemDetails::Uva { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeforces_id_and_url() {
        let record = ProblemRecord::codeforces(
            1,
            "A".to_string(),
            "Theatre Square".to_string(),
            vec!["math".to_string()],
            Rating::Rated(1000),
        );
        assert_eq!(record.id, "1_A");
        assert_eq!(record.source(), Source::Codeforces);
        assert_eq!(
            record.url().as_deref(),
            Some("https://codeforces.com/problemset/problem/1/A")
        );
    }

    #[test]
    fn test_uva_has_no_tags_or_url() {
        let record = ProblemRecord::uva(36, "The 3n + 1 problem".to_string(), 80000, 0, 0);
        assert_eq!(record.id, "36");
        assert_eq!(record.source(), Source::Uva);
        assert!(record.tags.is_empty());
        assert_eq!(record.url(), None);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Rated(1500).to_string(), "1500");
        assert_eq!(Rating::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_serializes_source_alongside_fields() {
        let record = ProblemRecord::uva(100, "Demo".to_string(), 1, 2, 3);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["source"], "uva");
        assert_eq!(value["best_memory"], 3);
        assert_eq!(value["id"], "100");
    }
}
