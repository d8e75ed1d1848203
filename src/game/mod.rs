pub mod board;
pub mod moves;
pub mod player;
pub mod tile;
pub mod tile_bag;
pub mod validator;

pub use board::{Board, BoardError, Cell, Premium, BOARD_SIZE, CENTER};
pub use moves::{PlacedTile, Placement, ProposedMove, ValidatedMove};
pub use player::{ConnectionRef, Player, PlayerId, Rack, RACK_CAPACITY};
pub use tile::{Tile, BLANK, TOTAL_TILES};
pub use tile_bag::TileBag;
pub use validator::{validate_move, MoveRejection};
