use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Upstream provider a problem was fetched from. Declaration order is the
/// aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Codeforces,
    Uva,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Codeforces, Source::Uva];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Codeforces => "codeforces",
            Source::Uva => "uva",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Codeforces => "Codeforces",
            Source::Uva => "UVa",
        }
    }

    pub fn parse(value: &str) -> Option<Source> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
