use crate::models::{Resource, ScoredResource};

/// Count how many of the answers appear in the resource's tag set
///
/// Every answer counts on its own, so a tag chosen for two questions
/// contributes twice if the resource carries it.
#[inline]
pub fn score_resource<S: AsRef<str>>(resource: &Resource, answers: &[S]) -> usize {
    answers
        .iter()
        .filter(|tag| resource.has_tag(tag.as_ref()))
        .count()
}

/// Convert a score into a rounded percentage of the answered questions
///
/// Halves round up. Zero answers yield 0 rather than dividing by zero.
#[inline]
pub fn percentage(score: usize, answered: usize) -> u8 {
    if answered == 0 {
        return 0;
    }

    // round(100 * score / answered) in integer arithmetic
    let rounded = (200 * score + answered) / (2 * answered);
    rounded.min(100) as u8
}

/// Score every resource, preserving catalog order
pub fn score_catalog<S: AsRef<str>>(catalog: &[Resource], answers: &[S]) -> Vec<ScoredResource> {
    catalog
        .iter()
        .map(|resource| {
            let score = score_resource(resource, answers);
            ScoredResource {
                resource: resource.clone(),
                score,
                percentage: percentage(score, answers.len()),
            }
        })
        .collect()
}
