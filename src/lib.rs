//! # Scrabble Party
//!
//! Authoritative rules engine for a multiplayer Scrabble-style word game
//! (2 to 15 players per room), with a thin WebSocket room server.
//!
//! ## Features
//!
//! - **Game Engine**: 15x15 premium board, 100-tile bag, racks, move validation
//! - **Scoring**: letter and word multipliers, blanks, bingo bonus
//! - **Sessions**: room lifecycle, turn order, passes, departures, winner
//! - **Server Components**: JSON-over-WebSocket room server
//!
//! ## Usage
//!
//! ```rust
//! use scrabble_party::{
//!     dictionary::WordList,
//!     game::ProposedMove,
//!     services::game_manager::GameSession,
//! };
//!
//! let mut session = GameSession::new("ABC123");
//! let alice = session.add_player("Alice", None).unwrap();
//! session.add_player("Bob", None).unwrap();
//! session.start().unwrap();
//!
//! let words = WordList::embedded();
//! let opening = ProposedMove::line("CAT", 7, 6, true);
//! // Rejected unless Alice is seated and holds C, A and T.
//! let _ = session.apply_move(&alice, &opening, &words);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Tiles, bag, board, racks and move validation
pub mod game;

/// Word legality
pub mod dictionary;

/// Move scoring
pub mod scoring;

/// Sessions, room store and player intents
pub mod services;

/// WebSocket transport
pub mod servers;

/// Logger setup for the binary
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use dictionary::{Dictionary, WordList};

pub use game::*;

pub use scoring::{score_move, ScoreBreakdown, BINGO_BONUS};

pub use services::game_manager::{GameError, GameSession, GameSnapshot, GameStatus};
pub use services::room_service::{RoomError, RoomService, RoomServiceConfig};
pub use services::session_manager::{InMemorySessionStore, SessionStore};

pub use servers::{WebSocketConfig, WebSocketServer};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Process-level errors: I/O, logger, transport and encoding failures.
///
/// Rule violations are not errors at this level; they are `GameError` /
/// `RoomError` values reported back to the submitting player.
#[derive(Debug, thiserror::Error)]
pub enum WordGameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
