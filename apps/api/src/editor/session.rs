//! In-memory editor sessions.
//!
//! One session owns exactly one `ResumeDocument` and one `StyleDescriptor`;
//! both live only for the session — no persistence. Mutations go through
//! the store so the owning lock is held for the duration of each change.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::editor::polish::PolishTarget;
use crate::models::document::ResumeDocument;
use crate::style::StyleDescriptor;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(Uuid),
}

#[derive(Debug)]
pub struct EditorSession {
    pub id: Uuid,
    pub document: ResumeDocument,
    pub style: StyleDescriptor,
    /// Fields with an outstanding rewrite call. At most one in-flight
    /// rewrite per field; different fields are independent.
    polish_in_flight: HashSet<PolishTarget>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EditorSession {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            document: ResumeDocument::seeded(),
            style: StyleDescriptor::default(),
            polish_in_flight: HashSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reserves a field for polishing. Returns false when a rewrite for the
    /// same field is already outstanding.
    pub fn try_begin_polish(&mut self, target: PolishTarget) -> bool {
        self.polish_in_flight.insert(target)
    }

    /// Releases a polish reservation, whether the call succeeded or not.
    pub fn finish_polish(&mut self, target: &PolishTarget) {
        self.polish_in_flight.remove(target);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            document: self.document.clone(),
            style: self.style.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Serializable view of a session handed back to the boundary layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub document: ResumeDocument,
    pub style: StyleDescriptor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shared in-memory session map. Cheap to clone into handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, EditorSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionSnapshot {
        let session = EditorSession::new();
        let snapshot = session.snapshot();
        self.inner.write().await.insert(session.id, session);
        snapshot
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, SessionError> {
        let sessions = self.inner.read().await;
        sessions
            .get(&id)
            .map(EditorSession::snapshot)
            .ok_or(SessionError::NotFound(id))
    }

    /// Runs a closure against the session under the write lock and bumps
    /// `updated_at`. The closure's return value is passed through.
    pub async fn mutate<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut EditorSession) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        let result = f(session);
        session.updated_at = Utc::now();
        Ok(result)
    }
}
