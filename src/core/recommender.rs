use crate::core::scoring::score_catalog;
use crate::models::{RecommendationRecord, Resource, ScoredResource};

/// Default size of the "top recommendations" section
pub const DEFAULT_TOP_N: usize = 3;

/// Ranked catalog split into the top section and everything else
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub top: Vec<ScoredResource>,
    pub others: Vec<ScoredResource>,
    pub answered: usize,
}

impl Recommendations {
    /// The "other resources" section is only shown when it has entries
    pub fn has_others(&self) -> bool {
        !self.others.is_empty()
    }

    pub fn len(&self) -> usize {
        self.top.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All ranked resources, top section first
    pub fn ranked(&self) -> impl Iterator<Item = &ScoredResource> {
        self.top.iter().chain(self.others.iter())
    }

    pub fn top_records(&self) -> Vec<RecommendationRecord> {
        self.top.iter().map(RecommendationRecord::from).collect()
    }

    pub fn other_records(&self) -> Vec<RecommendationRecord> {
        self.others.iter().map(RecommendationRecord::from).collect()
    }

    pub fn records(&self) -> Vec<RecommendationRecord> {
        self.ranked().map(RecommendationRecord::from).collect()
    }
}

/// Ranks the catalog against a set of quiz answers
///
/// # Pipeline Stages
/// 1. Tag-match scoring per resource
/// 2. Percentage of answered questions
/// 3. Stable sort by score, descending
/// 4. Partition into top section and the rest
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    top_n: usize,
}

impl Recommender {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the catalog for the given answers
    ///
    /// Resources with equal scores keep their catalog order.
    pub fn recommend<S: AsRef<str>>(&self, catalog: &[Resource], answers: &[S]) -> Recommendations {
        let mut ranked = score_catalog(catalog, answers);

        // Vec::sort_by is stable, ties keep catalog order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let split = self.top_n.min(ranked.len());
        let others = ranked.split_off(split);

        tracing::debug!(
            "Ranked {} resources for {} answers (top: {}, others: {})",
            catalog.len(),
            answers.len(),
            ranked.len(),
            others.len()
        );

        Recommendations {
            top: ranked,
            others,
            answered: answers.len(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_catalog() -> Vec<Resource> {
        vec![
            Resource::new("A", "https://example.org/a", &["x", "y"], "Free"),
            Resource::new("B", "https://example.org/b", &["x"], "Free"),
            Resource::new("C", "https://example.org/c", &["z"], "Paid"),
        ]
    }

    fn names(scored: &[ScoredResource]) -> Vec<&str> {
        scored.iter().map(|s| s.resource.name.as_str()).collect()
    }

    #[test]
    fn test_ranks_by_score() {
        let recommender = Recommender::default();
        let result = recommender.recommend(&abc_catalog(), &["x", "y"]);

        assert_eq!(names(&result.top), vec!["A", "B", "C"]);
        let percentages: Vec<u8> = result.top.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![100, 50, 0]);
        assert!(!result.has_others());
    }

    #[test]
    fn test_no_answers_keeps_catalog_order() {
        let recommender = Recommender::default();
        let answers: [&str; 0] = [];
        let result = recommender.recommend(&abc_catalog(), &answers);

        assert_eq!(names(&result.top), vec!["A", "B", "C"]);
        assert!(result.ranked().all(|s| s.score == 0 && s.percentage == 0));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let recommender = Recommender::new(1);
        let result = recommender.recommend(&abc_catalog(), &["z", "x"]);

        // All three score 1
        assert_eq!(names(&result.top), vec!["A"]);
        assert_eq!(names(&result.others), vec!["B", "C"]);
    }

    #[test]
    fn test_partition_covers_catalog() {
        let catalog: Vec<Resource> = (0..7)
            .map(|i| Resource::new(&format!("r{}", i), "https://example.org", &["t"], "Free"))
            .collect();

        let result = Recommender::default().recommend(&catalog, &["t"]);

        assert_eq!(result.top.len(), 3);
        assert_eq!(result.others.len(), 4);
        assert_eq!(result.len(), catalog.len());
        assert!(result.has_others());
    }

    #[test]
    fn test_records_follow_ranking() {
        let result = Recommender::new(2).recommend(&abc_catalog(), &["z"]);
        let records = result.records();

        assert_eq!(records[0].name, "C");
        assert_eq!(records[0].percentage, 100);
        assert_eq!(records[0].cost, "Paid");
        assert_eq!(result.top_records().len(), 2);
        assert_eq!(result.other_records().len(), 1);
    }
}
