use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recommendable learning resource from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub tags: BTreeSet<String>,
    /// Display label only, never parsed
    pub cost: String,
}

impl Resource {
    pub fn new(name: &str, url: &str, tags: &[&str], cost: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cost: cost.to_string(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// A resource with its relevance for one set of answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResource {
    #[serde(flatten)]
    pub resource: Resource,
    pub score: usize,
    pub percentage: u8,
}

/// Plain record handed to whatever renders the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub name: String,
    pub url: String,
    pub cost: String,
    pub percentage: u8,
}

impl From<&ScoredResource> for RecommendationRecord {
    fn from(scored: &ScoredResource) -> Self {
        Self {
            name: scored.resource.name.clone(),
            url: scored.resource.url.clone(),
            cost: scored.resource.cost.clone(),
            percentage: scored.percentage,
        }
    }
}

/// One selectable answer of a quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: String,
    pub tag: String,
}

/// A single quiz step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(id: &str, prompt: &str, options: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options: options
                .iter()
                .map(|(label, tag)| QuizOption {
                    label: label.to_string(),
                    tag: tag.to_string(),
                })
                .collect(),
        }
    }

    pub fn offers(&self, tag: &str) -> bool {
        self.options.iter().any(|o| o.tag == tag)
    }
}

/// Answered vs total question count, shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}
