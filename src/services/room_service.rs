// src/services/room_service.rs - player intents against the session store

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OwnedMutexGuard;

use crate::dictionary::Dictionary;
use crate::game::moves::ProposedMove;
use crate::game::player::{ConnectionRef, PlayerId};
use crate::game::tile::Tile;
use crate::services::game_manager::{
    GameError, GameSession, GameSnapshot, MoveOutcome, PassOutcome,
};
use crate::services::session_manager::{SessionStore, SharedSession};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Only the host can start the game")]
    NotHost,
    #[error(transparent)]
    Game(#[from] GameError),
}

impl RoomError {
    pub fn code(&self) -> &'static str {
        match self {
            RoomError::RoomNotFound => "ROOM_NOT_FOUND",
            RoomError::NotHost => "NOT_HOST",
            RoomError::Game(error) => error.code(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoomServiceConfig {
    /// How long freshly placed tiles stay highlighted. `None` disables the
    /// timer: markers are then never cleared and accumulate across moves.
    pub highlight_duration: Option<Duration>,
}

impl Default for RoomServiceConfig {
    fn default() -> Self {
        Self {
            highlight_duration: Some(Duration::from_secs(5)),
        }
    }
}

/// A rack, addressed to its owner only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateRack {
    pub player_id: PlayerId,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRoom {
    pub room_code: String,
    pub player_id: PlayerId,
    pub snapshot: GameSnapshot,
    pub rack: PrivateRack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStarted {
    pub snapshot: GameSnapshot,
    pub racks: Vec<PrivateRack>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveAccepted {
    pub outcome: MoveOutcome,
    pub snapshot: GameSnapshot,
    pub rack: PrivateRack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnPassed {
    pub outcome: PassOutcome,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLeft {
    pub player_id: PlayerId,
    pub player_name: String,
    /// `None` once the last player is gone and the room has been closed.
    pub snapshot: Option<GameSnapshot>,
}

// ============================================================================
// SERVICE
// ============================================================================

/// Applies one intent at a time per room. Each intent takes a `publish`
/// callback that runs before the room lock is released, so a room's events
/// reach it in the order its mutations happened. The callback must not block.
pub struct RoomService<S, D> {
    store: Arc<S>,
    dictionary: Arc<D>,
    config: RoomServiceConfig,
}

impl<S, D> Clone for RoomService<S, D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            dictionary: Arc::clone(&self.dictionary),
            config: self.config.clone(),
        }
    }
}

impl<S: SessionStore, D: Dictionary + 'static> RoomService<S, D> {
    pub fn new(store: Arc<S>, dictionary: Arc<D>, config: RoomServiceConfig) -> Self {
        Self {
            store,
            dictionary,
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Opens a room and seats its creator as host.
    pub async fn create_room<F>(
        &self,
        player_name: String,
        connection: Option<ConnectionRef>,
        publish: F,
    ) -> Result<JoinedRoom, RoomError>
    where
        F: FnOnce(&JoinedRoom),
    {
        let (room_code, shared) = self.store.create().await;
        let mut session = shared.lock().await;
        let player_id = session.add_player(player_name, connection)?;
        log::info!("Room {} created by {}", room_code, player_id);
        let created = joined(&session, room_code, player_id);
        publish(&created);
        Ok(created)
    }

    pub async fn join_room<F>(
        &self,
        room_code: &str,
        player_name: String,
        connection: Option<ConnectionRef>,
        publish: F,
    ) -> Result<JoinedRoom, RoomError>
    where
        F: FnOnce(&JoinedRoom),
    {
        let (_, mut session) = self.open_session(room_code).await?;
        let player_id = session.add_player(player_name, connection)?;
        let room_code = session.room_code().to_string();
        let joined = joined(&session, room_code, player_id);
        publish(&joined);
        Ok(joined)
    }

    /// Host only. Needs at least two seated players.
    pub async fn start_game<F>(
        &self,
        room_code: &str,
        player_id: &PlayerId,
        publish: F,
    ) -> Result<GameStarted, RoomError>
    where
        F: FnOnce(&GameStarted),
    {
        let (_, mut session) = self.open_session(room_code).await?;

        let is_host = session.player(player_id).is_some_and(|p| p.is_host);
        if !is_host {
            return Err(RoomError::NotHost);
        }
        session.start()?;

        let racks = session
            .players()
            .iter()
            .map(|p| PrivateRack {
                player_id: p.id.clone(),
                tiles: p.rack.tiles().to_vec(),
            })
            .collect();
        let started = GameStarted {
            snapshot: session.snapshot(),
            racks,
        };
        publish(&started);
        Ok(started)
    }

    /// Every accepted move schedules a highlight clear, the final one included.
    pub async fn submit_move<F>(
        &self,
        room_code: &str,
        player_id: &PlayerId,
        proposed: &ProposedMove,
        publish: F,
    ) -> Result<MoveAccepted, RoomError>
    where
        F: FnOnce(&MoveAccepted),
    {
        let (shared, mut session) = self.open_session(room_code).await?;

        let outcome = session
            .apply_move(player_id, proposed, self.dictionary.as_ref())
            .inspect_err(|e| {
                log::warn!("Move by {} rejected in room {}: {}", player_id, room_code, e)
            })?;

        self.schedule_highlight_clear(&shared);

        let accepted = MoveAccepted {
            rack: private_rack(&session, player_id),
            snapshot: session.snapshot(),
            outcome,
        };
        publish(&accepted);
        Ok(accepted)
    }

    pub async fn pass_turn<F>(
        &self,
        room_code: &str,
        player_id: &PlayerId,
        publish: F,
    ) -> Result<TurnPassed, RoomError>
    where
        F: FnOnce(&TurnPassed),
    {
        let (_, mut session) = self.open_session(room_code).await?;
        let outcome = session.pass_turn(player_id)?;
        let passed = TurnPassed {
            outcome,
            snapshot: session.snapshot(),
        };
        publish(&passed);
        Ok(passed)
    }

    /// Removes a player; the room is closed when nobody is left.
    pub async fn leave_room<F>(
        &self,
        room_code: &str,
        player_id: &PlayerId,
        publish: F,
    ) -> Result<PlayerLeft, RoomError>
    where
        F: FnOnce(&PlayerLeft),
    {
        let (_, mut session) = self.open_session(room_code).await?;
        let left = session.remove_player(player_id)?;

        let snapshot = if session.players().is_empty() {
            session.close();
            self.store.delete(room_code).await;
            log::info!("Room {} closed", session.room_code());
            None
        } else {
            Some(session.snapshot())
        };

        let left = PlayerLeft {
            player_id: left.player.id,
            player_name: left.player.name,
            snapshot,
        };
        publish(&left);
        Ok(left)
    }

    pub async fn snapshot(&self, room_code: &str) -> Result<GameSnapshot, RoomError> {
        let (_, session) = self.open_session(room_code).await?;
        Ok(session.snapshot())
    }

    /// Looks the room up and locks it. A room closed while the caller waited
    /// for the lock counts as not found.
    async fn open_session(
        &self,
        room_code: &str,
    ) -> Result<(SharedSession, OwnedMutexGuard<GameSession>), RoomError> {
        let shared = self
            .store
            .get(room_code)
            .await
            .ok_or(RoomError::RoomNotFound)?;
        let session = Arc::clone(&shared).lock_owned().await;
        if session.is_closed() {
            return Err(RoomError::RoomNotFound);
        }
        Ok((shared, session))
    }

    /// Detached timer. A room that is gone by then is skipped.
    fn schedule_highlight_clear(&self, shared: &SharedSession) {
        let Some(delay) = self.config.highlight_duration else {
            return;
        };
        let session = Arc::downgrade(shared);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(session) = session.upgrade() {
                session.lock().await.clear_placed_markers();
            }
        });
    }
}

fn private_rack(session: &GameSession, player_id: &PlayerId) -> PrivateRack {
    PrivateRack {
        player_id: player_id.clone(),
        tiles: session.rack_of(player_id).unwrap_or_default().to_vec(),
    }
}

fn joined(session: &GameSession, room_code: String, player_id: PlayerId) -> JoinedRoom {
    JoinedRoom {
        rack: private_rack(session, &player_id),
        snapshot: session.snapshot(),
        room_code,
        player_id,
    }
}
