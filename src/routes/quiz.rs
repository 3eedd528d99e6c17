use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::{Quiz, QuizError, QuizSession, QuizState, StepOutcome};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendRequest, RecommendationsResponse, SessionResponse,
    SubmitAnswerRequest,
};
use crate::services::{SessionError, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub quiz: Arc<Quiz>,
    pub sessions: SessionStore,
}

/// Configure all quiz routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/quiz/questions", web::get().to(list_questions))
        .route("/quiz/catalog", web::get().to(list_catalog))
        .route("/quiz/recommendations", web::post().to(recommend))
        .route("/quiz/sessions", web::post().to(start_session))
        .route("/quiz/sessions/{id}", web::get().to(get_session))
        .route("/quiz/sessions/{id}", web::delete().to(delete_session))
        .route("/quiz/sessions/{id}/answers", web::post().to(submit_answer))
        .route("/quiz/sessions/{id}/reset", web::post().to(reset_session))
        .route("/quiz/sessions/{id}/results", web::get().to(get_results));
}

fn validation_error(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", message))
}

fn session_error(err: SessionError) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        StatusCode::NOT_FOUND,
        "Session not found",
        err.to_string(),
    ))
}

fn quiz_error(err: QuizError) -> HttpResponse {
    HttpResponse::Conflict().json(ErrorResponse::new(
        StatusCode::CONFLICT,
        "Invalid quiz step",
        err.to_string(),
    ))
}

/// Build the snapshot returned by every session endpoint
fn snapshot(quiz: &Quiz, session: &QuizSession) -> SessionResponse {
    let question = match session.state() {
        QuizState::InProgress { question } => quiz.question(question).cloned(),
        _ => None,
    };
    let results = (session.state() == QuizState::Completed)
        .then(|| RecommendationsResponse::from(&session.results(quiz)));

    SessionResponse {
        session_id: session.id,
        state: session.state(),
        progress: session.progress(quiz),
        question,
        results,
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    state.sessions.run_pending_tasks().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: state.sessions.len(),
    })
}

/// GET /api/v1/quiz/questions
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.quiz.questions())
}

/// GET /api/v1/quiz/catalog
async fn list_catalog(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.quiz.catalog())
}

/// Stateless recommendations
///
/// POST /api/v1/quiz/recommendations
///
/// Request body:
/// ```json
/// { "answers": ["visual", "career", "solar", "paid"] }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }

    let results = state
        .quiz
        .recommender()
        .recommend(state.quiz.catalog(), req.answers.as_slice());

    tracing::info!(
        "Stateless recommendations for {} answers, top: {:?}",
        req.answers.len(),
        results.top.first().map(|s| s.resource.name.as_str())
    );

    HttpResponse::Ok().json(RecommendationsResponse::from(&results))
}

/// Start a new quiz session
///
/// POST /api/v1/quiz/sessions
async fn start_session(state: web::Data<AppState>) -> impl Responder {
    let mut session = QuizSession::new();
    if let Err(e) = session.start(&state.quiz) {
        return quiz_error(e);
    }

    let response = snapshot(&state.quiz, &session);
    tracing::info!("Started quiz session {}", session.id);
    state.sessions.insert(session).await;

    HttpResponse::Created().json(response)
}

/// GET /api/v1/quiz/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let handle = match state.sessions.get(&path).await {
        Ok(handle) => handle,
        Err(e) => return session_error(e),
    };

    let session = handle.lock().await;
    HttpResponse::Ok().json(snapshot(&state.quiz, &session))
}

/// DELETE /api/v1/quiz/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.remove(&path).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => session_error(e),
    }
}

/// Answer a question
///
/// POST /api/v1/quiz/sessions/{id}/answers
///
/// Request body:
/// ```json
/// { "questionIndex": 0, "tag": "visual" }
/// ```
async fn submit_answer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SubmitAnswerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }

    let handle = match state.sessions.get(&path).await {
        Ok(handle) => handle,
        Err(e) => return session_error(e),
    };

    let mut session = handle.lock().await;
    match session.select(&state.quiz, req.question_index, &req.tag) {
        Ok(StepOutcome::Completed(results)) => {
            tracing::info!(
                "Session {} completed, top: {:?}",
                session.id,
                results.top.first().map(|s| s.resource.name.as_str())
            );
        }
        Ok(StepOutcome::Next { question }) | Ok(StepOutcome::Revised { question }) => {
            tracing::debug!("Session {} now at question {}", session.id, question);
        }
        Err(e) => {
            tracing::info!("Rejected answer for session {}: {}", session.id, e);
            return quiz_error(e);
        }
    }

    HttpResponse::Ok().json(snapshot(&state.quiz, &session))
}

/// Restart the quiz from the first question
///
/// POST /api/v1/quiz/sessions/{id}/reset
async fn reset_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let handle = match state.sessions.get(&path).await {
        Ok(handle) => handle,
        Err(e) => return session_error(e),
    };

    let mut session = handle.lock().await;
    session.reset(&state.quiz);
    tracing::info!("Session {} reset", session.id);

    HttpResponse::Ok().json(snapshot(&state.quiz, &session))
}

/// Recommendations for the answers given so far
///
/// GET /api/v1/quiz/sessions/{id}/results
async fn get_results(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let handle = match state.sessions.get(&path).await {
        Ok(handle) => handle,
        Err(e) => return session_error(e),
    };

    let session = handle.lock().await;
    let results = session.results(&state.quiz);

    HttpResponse::Ok().json(RecommendationsResponse::from(&results))
}
