use crate::dataset::Dataset;
use std::collections::HashSet;

/// Distinct director names, in the order they first appear in the crew table.
pub fn list_directors(dataset: &Dataset) -> Vec<&str> {
    let mut seen = HashSet::new();
    dataset
        .crew()
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}
