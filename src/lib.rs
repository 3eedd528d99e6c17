//! Insight Quiz - resource recommendations for Renewable Power Insight
//!
//! This library provides the tag-scoring recommendation engine behind the
//! site's learning-resources quiz, the quiz flow state machine, and the HTTP
//! service that exposes both.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Quiz, QuizError, QuizSession, QuizState, Recommendations, Recommender, StepOutcome};
pub use models::{RecommendationRecord, Resource, ScoredResource};
