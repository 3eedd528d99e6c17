use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::QuizSession;

/// Errors that can occur with session store operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),
}

/// Shared handle to one session; requests on the same session serialize on it
pub type SessionHandle = Arc<Mutex<QuizSession>>;

/// In-memory quiz session store
///
/// Bounded by entry count and expiring idle sessions after the configured
/// TTL. Sessions are never persisted.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, SessionHandle>,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(max_sessions: u64, ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Store a session and return its handle
    pub async fn insert(&self, session: QuizSession) -> SessionHandle {
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(id, handle.clone()).await;
        tracing::trace!("Session stored: {}", id);
        handle
    }

    /// Look up a live session
    pub async fn get(&self, id: &Uuid) -> Result<SessionHandle, SessionError> {
        self.sessions
            .get(id)
            .await
            .ok_or(SessionError::NotFound(*id))
    }

    /// Discard a session
    pub async fn remove(&self, id: &Uuid) -> Result<(), SessionError> {
        match self.sessions.remove(id).await {
            Some(_) => {
                tracing::debug!("Session discarded: {}", id);
                Ok(())
            }
            None => Err(SessionError::NotFound(*id)),
        }
    }

    /// Apply pending evictions and expirations
    pub async fn run_pending_tasks(&self) {
        self.sessions.run_pending_tasks().await;
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
