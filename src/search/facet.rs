//! Facet counts over content types.
//!
//! The article query reports how many matches each content type has, so a
//! results page can offer a type filter. When the author cross-reference
//! contributes items, their counts are merged into the same list: existing
//! types have their counts summed, new types are appended.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single facet bucket: value + count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

impl FacetCount {
    pub fn new<S: Into<String>>(value: S, count: u64) -> Self {
        FacetCount {
            value: value.into(),
            count,
        }
    }
}

/// Ordered facet buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facets {
    counts: Vec<FacetCount>,
}

impl Facets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally values, keeping the `limit` most frequent.
    ///
    /// Buckets are ordered by count descending, ties alphabetically.
    pub fn tally<'a, I>(values: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally: AHashMap<&str, u64> = AHashMap::new();
        for value in values {
            *tally.entry(value).or_insert(0) += 1;
        }

        let mut counts: Vec<FacetCount> = tally
            .into_iter()
            .map(|(value, count)| FacetCount::new(value, count))
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        counts.truncate(limit);
        Facets { counts }
    }

    /// Merge another facet list into this one.
    ///
    /// Values already present have their counts added in place; unseen
    /// values are appended in the other list's order. No limit is applied,
    /// so the result may hold more buckets than either input.
    pub fn merge(&mut self, other: Facets) {
        for bucket in other.counts {
            match self.counts.iter_mut().find(|c| c.value == bucket.value) {
                Some(existing) => existing.count += bucket.count,
                None => self.counts.push(bucket),
            }
        }
    }

    /// Count for a value, 0 when absent.
    pub fn count(&self, value: &str) -> u64 {
        self.counts
            .iter()
            .find(|c| c.value == value)
            .map_or(0, |c| c.count)
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacetCount> {
        self.counts.iter()
    }

    pub fn as_slice(&self) -> &[FacetCount] {
        &self.counts
    }
}

impl FromIterator<FacetCount> for Facets {
    fn from_iter<I: IntoIterator<Item = FacetCount>>(iter: I) -> Self {
        Facets {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Facets {
    type Item = &'a FacetCount;
    type IntoIter = std::slice::Iter<'a, FacetCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_orders_and_limits() {
        let values = ["News", "Article", "News", "Medicine", "Article", "News"];
        let facets = Facets::tally(values, 2);

        assert_eq!(
            facets.as_slice(),
            [FacetCount::new("News", 3), FacetCount::new("Article", 2)]
        );
        assert_eq!(facets.count("Medicine"), 0);
    }

    #[test]
    fn test_tally_ties_alphabetical() {
        let facets = Facets::tally(["b", "a", "c"], 50);
        let values: Vec<&str> = facets.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn test_merge_sums_and_appends() {
        let mut facets: Facets = vec![
            FacetCount::new("Article", 4),
            FacetCount::new("Editorial", 1),
        ]
        .into_iter()
        .collect();
        let authored: Facets = vec![
            FacetCount::new("Letter", 2),
            FacetCount::new("Article", 3),
        ]
        .into_iter()
        .collect();

        facets.merge(authored);

        assert_eq!(
            facets.as_slice(),
            [
                FacetCount::new("Article", 7),
                FacetCount::new("Editorial", 1),
                FacetCount::new("Letter", 2),
            ]
        );
        assert_eq!(facets.total(), 10);
    }

    #[test]
    fn test_merge_into_empty() {
        let mut facets = Facets::new();
        facets.merge(Facets::tally(["Article"], 50));
        assert_eq!(facets.len(), 1);
        assert_eq!(facets.count("Article"), 1);
    }

    #[test]
    fn test_merge_is_not_truncated() {
        let mut facets = Facets::tally(["Article", "Editorial"], 2);
        facets.merge(Facets::tally(["Letter"], 2));
        assert_eq!(facets.len(), 3);
        assert_eq!(facets.total(), 3);
    }
}
