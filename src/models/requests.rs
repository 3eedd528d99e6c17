use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest tag a client may send
pub const MAX_TAG_LEN: usize = 64;

/// Longest answer list accepted by stateless scoring
pub const MAX_ANSWERS: usize = 64;

/// Request to answer one quiz question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[serde(alias = "question_index", rename = "questionIndex")]
    pub question_index: usize,
    #[validate(length(min = 1, max = 64))]
    pub tag: String,
}

/// Stateless scoring request, for clients that keep answers themselves
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    #[validate(length(max = 64), custom(function = "validate_answer_tags"))]
    pub answers: Vec<String>,
}

/// Every answer must be a non-empty tag of at most `MAX_TAG_LEN` characters
fn validate_answer_tags(answers: &[String]) -> Result<(), ValidationError> {
    if answers
        .iter()
        .any(|tag| tag.is_empty() || tag.chars().count() > MAX_TAG_LEN)
    {
        let mut err = ValidationError::new("answer_tag_length");
        err.message = Some(format!("each answer must be 1 to {} characters", MAX_TAG_LEN).into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_accepts_normal_tags() {
        let req = RecommendRequest {
            answers: vec!["visual".to_string(), "career".to_string()],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_recommend_request_rejects_long_tag() {
        let req = RecommendRequest {
            answers: vec!["solar".to_string(), "x".repeat(MAX_TAG_LEN + 1)],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommend_request_rejects_empty_tag() {
        let req = RecommendRequest {
            answers: vec![String::new()],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommend_request_rejects_too_many_answers() {
        let req = RecommendRequest {
            answers: vec!["solar".to_string(); MAX_ANSWERS + 1],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_submit_answer_tag_length() {
        let ok = SubmitAnswerRequest { question_index: 0, tag: "x".repeat(MAX_TAG_LEN) };
        let long = SubmitAnswerRequest { question_index: 0, tag: "x".repeat(MAX_TAG_LEN + 1) };
        assert!(ok.validate().is_ok());
        assert!(long.validate().is_err());
    }
}
