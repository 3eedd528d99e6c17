use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use crate::core::catalog::{default_catalog, default_questions};
use crate::core::recommender::{Recommendations, Recommender};
use crate::models::{Progress, Question, Resource};

/// Errors raised by quiz flow transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz has not been started")]
    NotStarted,

    #[error("Quiz has already been started")]
    AlreadyStarted,

    #[error("Quiz is already completed, reset to answer again")]
    AlreadyCompleted,

    #[error("Question {index} does not exist (quiz has {total} questions)")]
    UnknownQuestion { index: usize, total: usize },

    #[error("Question {requested} cannot be answered before question {current}")]
    QuestionOutOfOrder { requested: usize, current: usize },

    #[error("Tag '{tag}' is not an option of question '{question}'")]
    InvalidOption { question: String, tag: String },
}

/// Static quiz content plus the ranking configuration
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    catalog: Vec<Resource>,
    recommender: Recommender,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, catalog: Vec<Resource>, recommender: Recommender) -> Self {
        Self {
            questions,
            catalog,
            recommender,
        }
    }

    /// The built-in questions and catalog
    pub fn builtin(recommender: Recommender) -> Self {
        Self::new(default_questions(), default_catalog(), recommender)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn catalog(&self) -> &[Resource] {
        &self.catalog
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::builtin(Recommender::default())
    }
}

/// Position of a session in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum QuizState {
    NotStarted,
    InProgress { question: usize },
    Completed,
}

/// Result of answering a question
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// Moved on to the given question
    Next { question: usize },
    /// An earlier answer was overwritten, the current question is unchanged
    Revised { question: usize },
    /// The last question was answered
    Completed(Recommendations),
}

/// One user's pass through the quiz
///
/// Created when the quiz starts, cleared by `reset`. The session owns the
/// answers exclusively; the scorer only ever sees a borrowed view of them.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    state: QuizState,
    answers: BTreeMap<usize, String>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: QuizState::NotStarted,
            answers: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Answers keyed by question index
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    /// Answer tags in question order
    pub fn answer_tags(&self) -> Vec<&str> {
        self.answers.values().map(String::as_str).collect()
    }

    pub fn progress(&self, quiz: &Quiz) -> Progress {
        Progress {
            answered: self.answers.len(),
            total: quiz.len(),
        }
    }

    /// Begin the quiz at the first question
    pub fn start(&mut self, quiz: &Quiz) -> Result<QuizState, QuizError> {
        if self.state != QuizState::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }

        self.state = Self::first_state(quiz);
        Ok(self.state)
    }

    /// Record the selected tag for a question
    ///
    /// Answering the current question advances the session; answering the
    /// last one completes it and returns the recommendations. Answering an
    /// earlier question overwrites that answer in place.
    pub fn select(&mut self, quiz: &Quiz, question: usize, tag: &str) -> Result<StepOutcome, QuizError> {
        let current = match self.state {
            QuizState::NotStarted => return Err(QuizError::NotStarted),
            QuizState::Completed => return Err(QuizError::AlreadyCompleted),
            QuizState::InProgress { question } => question,
        };

        let asked = quiz.question(question).ok_or(QuizError::UnknownQuestion {
            index: question,
            total: quiz.len(),
        })?;

        if question > current {
            return Err(QuizError::QuestionOutOfOrder {
                requested: question,
                current,
            });
        }

        if !asked.offers(tag) {
            return Err(QuizError::InvalidOption {
                question: asked.id.clone(),
                tag: tag.to_string(),
            });
        }

        self.answers.insert(question, tag.to_string());

        if question < current {
            tracing::debug!("Session {} revised answer to question {}", self.id, question);
            return Ok(StepOutcome::Revised { question: current });
        }

        let next = current + 1;
        if next >= quiz.len() {
            self.state = QuizState::Completed;
            tracing::debug!("Session {} completed with {} answers", self.id, self.answers.len());
            Ok(StepOutcome::Completed(self.results(quiz)))
        } else {
            self.state = QuizState::InProgress { question: next };
            Ok(StepOutcome::Next { question: next })
        }
    }

    /// Clear all answers and return to the first question
    pub fn reset(&mut self, quiz: &Quiz) -> QuizState {
        self.answers.clear();
        self.state = Self::first_state(quiz);
        self.state
    }

    /// Rank the catalog against the answers given so far
    pub fn results(&self, quiz: &Quiz) -> Recommendations {
        quiz.recommender().recommend(quiz.catalog(), self.answer_tags().as_slice())
    }

    fn first_state(quiz: &Quiz) -> QuizState {
        if quiz.is_empty() {
            QuizState::Completed
        } else {
            QuizState::InProgress { question: 0 }
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
