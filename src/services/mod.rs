pub mod game_manager;
pub mod room_service;
pub mod session_manager;
