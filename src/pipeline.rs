use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{ProblemRecord, Source, TagUniverse};
use crate::sources::{codeforces, uva, RawPayloads};

/// The merged problem catalogue for one run. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub problems: Vec<ProblemRecord>,
    pub tags: TagUniverse,
}

impl Pipeline {
    pub fn from_payloads(raw: &RawPayloads) -> Result<Self, AppError> {
        let codeforces_problems = codeforces::parse_problems(&raw.codeforces)?;
        let uva_problems = uva::parse_problems(&raw.uva)?;
        let (problems, tags) = aggregate(vec![
            (Source::Codeforces, codeforces_problems),
            (Source::Uva, uva_problems),
        ]);

        let pipeline = Self { problems, tags };
        info!(
            "Aggregated {} problems ({} codeforces, {} uva) with {} distinct tags",
            pipeline.problems.len(),
            pipeline.count(Source::Codeforces),
            pipeline.count(Source::Uva),
            pipeline.tags.len()
        );
        Ok(pipeline)
    }

    pub fn count(&self, source: Source) -> usize {
        self.problems.iter().filter(|p| p.source() == source).count()
    }
}

/// Concatenates adapter outputs in declared source order, keeping each batch's
/// internal order, and collects codeforces tags.
pub fn aggregate(
    mut batches: Vec<(Source, Vec<ProblemRecord>)>,
) -> (Vec<ProblemRecord>, TagUniverse) {
    batches.sort_by_key(|(source, _)| Source::ALL.iter().position(|s| s == source));

    let mut problems = Vec::with_capacity(batches.iter().map(|(_, b)| b.len()).sum());
    let mut tags = TagUniverse::new();
    let mut ids = HashSet::new();

    for (source, batch) in batches {
        debug!("Merging {} {} problems", batch.len(), source.as_str());
        for problem in batch {
            if problem.source() == Source::Codeforces {
                for tag in &problem.tags {
                    tags.insert(tag);
                }
            }
            if !ids.insert(problem.id.clone()) {
                debug!("Duplicate problem id {}", problem.id);
            }
            problems.push(problem);
        }
    }

    (problems, tags)
}
