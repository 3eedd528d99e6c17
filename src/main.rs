use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use insight_quiz::config::{LoggingSettings, Settings};
use insight_quiz::core::{Quiz, Recommender};
use insight_quiz::routes::{self, quiz::AppState};
use insight_quiz::services::SessionStore;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Insight Quiz recommendation service...");

    let recommender = Recommender::new(settings.quiz.top_n);
    let quiz = Arc::new(Quiz::builtin(recommender));

    if quiz.is_empty() {
        warn!("Quiz has no questions, every session completes immediately");
    }

    info!(
        "Quiz loaded: {} questions, {} resources, top {}",
        quiz.len(),
        quiz.catalog().len(),
        recommender.top_n()
    );

    let sessions = SessionStore::new(settings.sessions.max_sessions, settings.sessions.ttl_secs);

    info!(
        "Session store initialized (max: {} sessions, idle TTL: {}s)",
        settings.sessions.max_sessions, settings.sessions.ttl_secs
    );

    // Build application state
    let app_state = AppState { quiz, sessions };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
