// src/services/session_manager.rs - room registry, one lock per room

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::services::game_manager::GameSession;

pub const SESSION_CODE_LENGTH: usize = 6;
const SESSION_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A session behind its own lock: mutations on one room never wait on another.
pub type SharedSession = Arc<Mutex<GameSession>>;

// ============================================================================
// STORE INTERFACE
// ============================================================================

pub trait SessionStore: Send + Sync + 'static {
    fn get(&self, room_code: &str) -> impl Future<Output = Option<SharedSession>> + Send;

    /// Registers a fresh session under a new, unused room code.
    fn create(&self) -> impl Future<Output = (String, SharedSession)> + Send;

    /// Registers a prepared session under its own room code, replacing any
    /// session already stored there.
    fn insert(&self, session: GameSession) -> impl Future<Output = SharedSession> + Send;

    fn delete(&self, room_code: &str) -> impl Future<Output = bool> + Send;

    fn room_count(&self) -> impl Future<Output = usize> + Send;
}

// ============================================================================
// IN-MEMORY IMPLEMENTATION
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SharedSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get(&self, room_code: &str) -> Option<SharedSession> {
        let sessions = self.sessions.read().await;
        sessions.get(&normalize_code(room_code)).cloned()
    }

    async fn create(&self) -> (String, SharedSession) {
        let mut sessions = self.sessions.write().await;
        let code = loop {
            let candidate = generate_session_code();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        let session = Arc::new(Mutex::new(GameSession::new(code.clone())));
        sessions.insert(code.clone(), Arc::clone(&session));
        log::info!("Room {} created ({} rooms open)", code, sessions.len());
        (code, session)
    }

    async fn insert(&self, session: GameSession) -> SharedSession {
        let code = normalize_code(session.room_code());
        let shared = Arc::new(Mutex::new(session));
        self.sessions
            .write()
            .await
            .insert(code, Arc::clone(&shared));
        shared
    }

    async fn delete(&self, room_code: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .await
            .remove(&normalize_code(room_code))
            .is_some();
        if removed {
            log::info!("Room {} closed", room_code);
        }
        removed
    }

    async fn room_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

// ============================================================================
// ROOM CODES
// ============================================================================

pub fn generate_session_code() -> String {
    use rand::Rng;
    let mut rng = rand::rng();

    (0..SESSION_CODE_LENGTH)
        .map(|_| SESSION_CODE_ALPHABET[rng.random_range(0..SESSION_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Codes are typed by humans: ignore case and surrounding whitespace.
pub fn normalize_code(room_code: &str) -> String {
    room_code.trim().to_ascii_uppercase()
}
