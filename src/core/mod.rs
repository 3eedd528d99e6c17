// Core algorithm exports
pub mod catalog;
pub mod quiz;
pub mod recommender;
pub mod scoring;

pub use catalog::{default_catalog, default_questions};
pub use quiz::{Quiz, QuizError, QuizSession, QuizState, StepOutcome};
pub use recommender::{Recommendations, Recommender, DEFAULT_TOP_N};
pub use scoring::{percentage, score_catalog, score_resource};
