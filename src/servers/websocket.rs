// src/servers/websocket.rs - WebSocket transport: connections, room fan-out

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

use crate::dictionary::Dictionary;
use crate::game::moves::ProposedMove;
use crate::game::player::{ConnectionRef, PlayerId};
use crate::servers::messages::{ClientMessage, ProtocolError, ServerMessage};
use crate::services::game_manager::GameSnapshot;
use crate::services::room_service::{JoinedRoom, PrivateRack, RoomError, RoomService};
use crate::services::session_manager::SessionStore;
use crate::WordGameError;

/// Frames queued for one client; a dedicated task writes them to the socket.
pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

#[derive(Debug, Clone)]
pub struct WebSocketConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// ============================================================================
// CONNECTION STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Seat {
    room_code: String,
    player_id: PlayerId,
}

/// One client. Seated in at most one room at a time.
pub struct Connection {
    id: ConnectionRef,
    outbox: Outbox,
    seat: Option<Seat>,
}

impl Connection {
    pub fn new(outbox: Outbox) -> Self {
        Self {
            id: ConnectionRef(Uuid::new_v4().to_string()),
            outbox,
            seat: None,
        }
    }

    pub fn id(&self) -> &ConnectionRef {
        &self.id
    }

    pub fn room_code(&self) -> Option<&str> {
        self.seat.as_ref().map(|s| s.room_code.as_str())
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        self.seat.as_ref().map(|s| &s.player_id)
    }

    fn seat(&self) -> Result<Seat, IntentError> {
        self.seat
            .clone()
            .ok_or(IntentError::Protocol(ProtocolError::NotInRoom))
    }

    fn ensure_unseated(&self) -> Result<(), IntentError> {
        match &self.seat {
            Some(seat) => Err(IntentError::Protocol(ProtocolError::AlreadyInRoom(
                seat.room_code.clone(),
            ))),
            None => Ok(()),
        }
    }

    fn send(&self, message: ServerMessage) {
        // A closed outbox means the socket is already going away.
        let _ = self.outbox.send(message);
    }
}

enum IntentError {
    Room(RoomError),
    Protocol(ProtocolError),
}

impl From<RoomError> for IntentError {
    fn from(error: RoomError) -> Self {
        IntentError::Room(error)
    }
}

impl From<&IntentError> for ServerMessage {
    fn from(error: &IntentError) -> Self {
        match error {
            IntentError::Room(error) => ServerMessage::from(error),
            IntentError::Protocol(error) => ServerMessage::from(error),
        }
    }
}

// ============================================================================
// LOBBY (intent dispatch + fan-out)
// ============================================================================

/// Turns client frames into room service calls and routes the results:
/// events to everyone seated in the room, racks to their owner, errors to the
/// submitter only. Fan-out happens inside the room service's publish
/// callbacks, while the room is still locked.
pub struct Lobby<S, D> {
    rooms: RoomService<S, D>,
    outboxes: Arc<RwLock<HashMap<PlayerId, Outbox>>>,
}

impl<S, D> Clone for Lobby<S, D> {
    fn clone(&self) -> Self {
        Self {
            rooms: self.rooms.clone(),
            outboxes: Arc::clone(&self.outboxes),
        }
    }
}

impl<S: SessionStore, D: Dictionary + 'static> Lobby<S, D> {
    pub fn new(rooms: RoomService<S, D>) -> Self {
        Self {
            rooms,
            outboxes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn rooms(&self) -> &RoomService<S, D> {
        &self.rooms
    }

    pub async fn handle_text(&self, connection: &mut Connection, text: &str) {
        match ClientMessage::parse(text) {
            Ok(message) => self.handle(connection, message).await,
            Err(error) => {
                log::warn!("Bad frame from {}: {}", connection.id.0, error);
                connection.send(ServerMessage::from(&error));
            }
        }
    }

    pub async fn handle(&self, connection: &mut Connection, message: ClientMessage) {
        let result = match message {
            ClientMessage::CreateRoom { player_name } => {
                self.create_room(connection, player_name).await
            }
            ClientMessage::JoinRoom {
                room_code,
                player_name,
            } => self.join_room(connection, &room_code, player_name).await,
            ClientMessage::StartGame => self.start_game(connection).await,
            ClientMessage::MakeMove { proposed } => self.make_move(connection, &proposed).await,
            ClientMessage::PassTurn => self.pass_turn(connection).await,
            ClientMessage::LeaveRoom => {
                self.leave(connection).await;
                Ok(())
            }
        };

        if let Err(error) = result {
            connection.send(ServerMessage::from(&error));
        }
    }

    /// Disconnect: the player leaves whatever room they were seated in.
    pub async fn leave(&self, connection: &mut Connection) {
        let Some(seat) = connection.seat.take() else {
            return;
        };
        self.outboxes_mut().remove(&seat.player_id);

        let result = self
            .rooms
            .leave_room(&seat.room_code, &seat.player_id, |left| {
                if let Some(game) = &left.snapshot {
                    self.broadcast(
                        game,
                        ServerMessage::PlayerLeft {
                            player_id: left.player_id.clone(),
                            player_name: left.player_name.clone(),
                            game: game.clone(),
                        },
                    );
                }
            })
            .await;
        if let Err(error) = result {
            log::warn!(
                "Leaving room {} failed for {}: {}",
                seat.room_code,
                seat.player_id,
                error
            );
        }
    }

    async fn create_room(
        &self,
        connection: &mut Connection,
        player_name: String,
    ) -> Result<(), IntentError> {
        connection.ensure_unseated()?;
        let reply = connection.outbox.clone();
        let created = self
            .rooms
            .create_room(player_name, Some(connection.id.clone()), |created| {
                self.register(&created.player_id, &reply);
                let _ = reply.send(ServerMessage::RoomCreated {
                    room_code: created.room_code.clone(),
                    player_id: created.player_id.clone(),
                    game: created.snapshot.clone(),
                });
                let _ = reply.send(ServerMessage::Rack {
                    tiles: created.rack.tiles.clone(),
                });
            })
            .await?;

        take_seat(connection, &created);
        Ok(())
    }

    async fn join_room(
        &self,
        connection: &mut Connection,
        room_code: &str,
        player_name: String,
    ) -> Result<(), IntentError> {
        connection.ensure_unseated()?;
        let reply = connection.outbox.clone();
        let joined = self
            .rooms
            .join_room(room_code, player_name, Some(connection.id.clone()), |joined| {
                self.register(&joined.player_id, &reply);
                let _ = reply.send(ServerMessage::JoinedRoom {
                    room_code: joined.room_code.clone(),
                    player_id: joined.player_id.clone(),
                    game: joined.snapshot.clone(),
                });
                let _ = reply.send(ServerMessage::Rack {
                    tiles: joined.rack.tiles.clone(),
                });

                if let Some(player) = joined
                    .snapshot
                    .players
                    .iter()
                    .find(|p| p.id == joined.player_id)
                {
                    self.broadcast(
                        &joined.snapshot,
                        ServerMessage::PlayerJoined {
                            player: player.clone(),
                            total_players: joined.snapshot.players.len(),
                        },
                    );
                }
            })
            .await?;

        take_seat(connection, &joined);
        Ok(())
    }

    async fn start_game(&self, connection: &mut Connection) -> Result<(), IntentError> {
        let seat = connection.seat()?;
        self.rooms
            .start_game(&seat.room_code, &seat.player_id, |started| {
                for rack in &started.racks {
                    self.send_rack(rack);
                }
                self.broadcast(
                    &started.snapshot,
                    ServerMessage::GameStarted {
                        game: started.snapshot.clone(),
                    },
                );
            })
            .await?;
        Ok(())
    }

    async fn make_move(
        &self,
        connection: &mut Connection,
        proposed: &ProposedMove,
    ) -> Result<(), IntentError> {
        let seat = connection.seat()?;
        self.rooms
            .submit_move(&seat.room_code, &seat.player_id, proposed, |accepted| {
                self.send_rack(&accepted.rack);
                self.broadcast(
                    &accepted.snapshot,
                    ServerMessage::MoveAccepted {
                        played: accepted.outcome.clone(),
                        game: accepted.snapshot.clone(),
                    },
                );
            })
            .await?;
        Ok(())
    }

    async fn pass_turn(&self, connection: &mut Connection) -> Result<(), IntentError> {
        let seat = connection.seat()?;
        self.rooms
            .pass_turn(&seat.room_code, &seat.player_id, |passed| {
                self.broadcast(
                    &passed.snapshot,
                    ServerMessage::TurnPassed {
                        pass: passed.outcome.clone(),
                        game: passed.snapshot.clone(),
                    },
                );
            })
            .await?;
        Ok(())
    }

    fn register(&self, player_id: &PlayerId, outbox: &Outbox) {
        self.outboxes_mut()
            .insert(player_id.clone(), outbox.clone());
    }

    /// Sends `message` to every player listed in the snapshot.
    fn broadcast(&self, snapshot: &GameSnapshot, message: ServerMessage) {
        let outboxes = self.outboxes();
        for player in &snapshot.players {
            if let Some(outbox) = outboxes.get(&player.id) {
                let _ = outbox.send(message.clone());
            }
        }
    }

    fn send_rack(&self, rack: &PrivateRack) {
        if let Some(outbox) = self.outboxes().get(&rack.player_id) {
            let _ = outbox.send(ServerMessage::Rack {
                tiles: rack.tiles.clone(),
            });
        }
    }

    // The registry holds plain senders, so a panicked writer leaves it usable.
    fn outboxes(&self) -> RwLockReadGuard<'_, HashMap<PlayerId, Outbox>> {
        self.outboxes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn outboxes_mut(&self) -> RwLockWriteGuard<'_, HashMap<PlayerId, Outbox>> {
        self.outboxes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn take_seat(connection: &mut Connection, joined: &JoinedRoom) {
    connection.seat = Some(Seat {
        room_code: joined.room_code.clone(),
        player_id: joined.player_id.clone(),
    });
}

// ============================================================================
// SERVER
// ============================================================================

pub struct WebSocketServer<S, D> {
    config: WebSocketConfig,
    lobby: Lobby<S, D>,
}

impl<S: SessionStore, D: Dictionary + 'static> WebSocketServer<S, D> {
    pub fn new(config: WebSocketConfig, rooms: RoomService<S, D>) -> Self {
        Self {
            config,
            lobby: Lobby::new(rooms),
        }
    }

    pub async fn start(&self) -> crate::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        log::info!("WebSocket server listening on ws://{}", addr);

        loop {
            let (stream, peer) = listener.accept().await?;
            let lobby = self.lobby.clone();
            tokio::spawn(async move {
                if let Err(e) = serve_connection(lobby, stream, peer).await {
                    log::error!("Connection {} failed: {}", peer, e);
                }
            });
        }
    }
}

async fn serve_connection<S: SessionStore, D: Dictionary + 'static>(
    lobby: Lobby<S, D>,
    stream: TcpStream,
    peer: SocketAddr,
) -> crate::Result<()> {
    let ws_stream = accept_async(stream)
        .await
        .map_err(|e| WordGameError::Server(e.to_string()))?;
    let (mut write, mut read) = ws_stream.split();
    let (outbox, mut inbox) = mpsc::unbounded_channel::<ServerMessage>();

    let writer = tokio::spawn(async move {
        while let Some(message) = inbox.recv().await {
            let text = match message.to_json() {
                Ok(text) => text,
                Err(e) => {
                    log::error!("Failed to encode frame: {}", e);
                    continue;
                }
            };
            if let Err(e) = write.send(Message::text(text)).await {
                log::error!("WebSocket send error: {}", e);
                break;
            }
        }
    });

    let mut connection = Connection::new(outbox);
    log::info!("New client connected: {} ({})", connection.id.0, peer);

    while let Some(frame) = read.next().await {
        match frame {
            Ok(Message::Text(text)) => lobby.handle_text(&mut connection, text.as_str()).await,
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("WebSocket receive error from {}: {}", peer, e);
                break;
            }
        }
    }

    lobby.leave(&mut connection).await;
    log::info!("Client disconnected: {}", connection.id.0);
    drop(connection);
    let _ = writer.await;
    Ok(())
}
