use crate::models::{ProblemRecord, Source};

/// Current values of the three filter controls. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub search: String,
    pub source: Option<Source>,
    pub tag: Option<String>,
}

impl FilterQuery {
    fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    fn passes(&self, problem: &ProblemRecord, needle: &str, tag: Option<&str>) -> bool {
        (needle.is_empty() || problem.name.to_lowercase().contains(needle))
            && self.source.map_or(true, |source| problem.source() == source)
            && tag.map_or(true, |tag| problem.has_tag(tag))
    }

    /// Returns the matching problems in input order.
    pub fn apply<'a, I>(&self, problems: I) -> Vec<&'a ProblemRecord>
    where
        I: IntoIterator<Item = &'a ProblemRecord>,
    {
        let needle = self.search.to_lowercase();
        let tag = self.tag_filter();
        problems
            .into_iter()
            .filter(|problem| self.passes(problem, &needle, tag))
            .collect()
    }
}
