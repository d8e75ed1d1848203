// Transport components: wire messages and the WebSocket server
pub mod messages;
pub mod websocket;

// Re-export public APIs
pub use messages::{ClientMessage, ProtocolError, ServerMessage};
pub use websocket::{Connection, Lobby, WebSocketConfig, WebSocketServer};
