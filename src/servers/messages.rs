// src/servers/messages.rs - JSON frames exchanged with clients

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::moves::ProposedMove;
use crate::game::player::PlayerId;
use crate::game::tile::Tile;
use crate::services::game_manager::{GameSnapshot, MoveOutcome, PassOutcome, PlayerSummary};
use crate::services::room_service::RoomError;

/// Intents sent by a client. The room and player are implied by the connection
/// once it has created or joined a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    CreateRoom {
        player_name: String,
    },
    JoinRoom {
        room_code: String,
        player_name: String,
    },
    StartGame,
    MakeMove {
        #[serde(rename = "move")]
        proposed: ProposedMove,
    },
    PassTurn,
    LeaveRoom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoomCreated {
        room_code: String,
        player_id: PlayerId,
        game: GameSnapshot,
    },
    JoinedRoom {
        room_code: String,
        player_id: PlayerId,
        game: GameSnapshot,
    },
    PlayerJoined {
        player: PlayerSummary,
        total_players: usize,
    },
    GameStarted {
        game: GameSnapshot,
    },
    MoveAccepted {
        #[serde(rename = "move")]
        played: MoveOutcome,
        game: GameSnapshot,
    },
    TurnPassed {
        pass: PassOutcome,
        game: GameSnapshot,
    },
    PlayerLeft {
        player_id: PlayerId,
        player_name: String,
        game: GameSnapshot,
    },
    /// Sent to the rack owner only.
    Rack {
        tiles: Vec<Tile>,
    },
    Error {
        code: String,
        message: String,
    },
}

/// Transport-level failures, reported with the same `error` frame as rule
/// violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Malformed(String),
    #[error("Create or join a room first")]
    NotInRoom,
    #[error("Already seated in room {0}")]
    AlreadyInRoom(String),
}

impl ProtocolError {
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolError::Malformed(_) => "BAD_REQUEST",
            ProtocolError::NotInRoom => "NOT_IN_ROOM",
            ProtocolError::AlreadyInRoom(_) => "ALREADY_IN_ROOM",
        }
    }
}

impl From<&RoomError> for ServerMessage {
    fn from(error: &RoomError) -> Self {
        ServerMessage::Error {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&ProtocolError> for ServerMessage {
    fn from(error: &ProtocolError) -> Self {
        ServerMessage::Error {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

impl ClientMessage {
    pub fn parse(text: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(text).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }
}

impl ServerMessage {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::moves::PlacedTile;
    use crate::services::game_manager::GameError;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_parse_client_messages() {
        assert_eq!(
            ClientMessage::parse(r#"{"type":"create_room","player_name":"Alice"}"#).unwrap(),
            ClientMessage::CreateRoom {
                player_name: "Alice".to_string()
            }
        );
        assert_eq!(
            ClientMessage::parse(r#"{"type":"start_game"}"#).unwrap(),
            ClientMessage::StartGame
        );

        let text = json!({
            "type": "make_move",
            "move": {
                "word": "AT",
                "tiles": [
                    {"row": 7, "col": 7, "letter": "A"},
                    {"row": 7, "col": 8, "letter": "T"}
                ]
            }
        })
        .to_string();
        assert_eq!(
            ClientMessage::parse(&text).unwrap(),
            ClientMessage::MakeMove {
                proposed: ProposedMove {
                    word: "AT".to_string(),
                    tiles: vec![PlacedTile::new(7, 7, "A"), PlacedTile::new(7, 8, "T")],
                }
            }
        );
    }

    #[test]
    fn test_malformed_client_message() {
        assert_matches!(
            ClientMessage::parse(r#"{"type":"fly_away"}"#),
            Err(ProtocolError::Malformed(_))
        );
        assert_matches!(ClientMessage::parse("not json"), Err(ProtocolError::Malformed(_)));
    }

    #[test]
    fn test_error_frame_carries_code() {
        let error = RoomError::Game(GameError::RoomFull);
        let frame = ServerMessage::from(&error).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "SESSION_FULL");
        assert_eq!(value["message"], "Room is full (max 15 players)");
    }

    #[test]
    fn test_rack_frame() {
        let frame = ServerMessage::Rack {
            tiles: vec![Tile::blank()],
        };
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["type"], "rack");
        assert_eq!(value["tiles"][0]["letter"], "_");
        assert_eq!(value["tiles"][0]["points"], 0);
    }
}
