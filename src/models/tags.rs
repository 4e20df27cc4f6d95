use std::collections::HashSet;

/// Distinct codeforces tags in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUniverse {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl TagUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) -> bool {
        if self.seen.contains(tag) {
            return false;
        }
        self.seen.insert(tag.to_string());
        self.ordered.push(tag.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
