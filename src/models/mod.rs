// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Progress, Question, QuizOption, RecommendationRecord, Resource, ScoredResource};
pub use requests::{RecommendRequest, SubmitAnswerRequest, MAX_ANSWERS, MAX_TAG_LEN};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse, SessionResponse};
