// src/services/game_manager.rs - session lifecycle and turn management

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::game::board::Board;
use crate::game::moves::{Placement, ProposedMove};
use crate::game::player::{ConnectionRef, Player, PlayerId};
use crate::game::tile::Tile;
use crate::game::tile_bag::TileBag;
use crate::game::validator::{validate_move, MoveRejection};
use crate::scoring::{score_move, ScoreBreakdown};

pub const MAX_PLAYERS: usize = 15;
pub const MIN_PLAYERS: usize = 2;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game not active")]
    GameNotActive,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Game already in progress")]
    GameAlreadyStarted,
    #[error("Room is full (max 15 players)")]
    RoomFull,
    #[error("Need at least 2 players to start")]
    NotEnoughPlayers,
    #[error("Player not found")]
    PlayerNotFound,
    #[error(transparent)]
    Move(#[from] MoveRejection),
}

impl GameError {
    pub fn code(&self) -> &'static str {
        match self {
            GameError::GameNotActive => "GAME_NOT_ACTIVE",
            GameError::NotYourTurn => "NOT_YOUR_TURN",
            GameError::GameAlreadyStarted => "GAME_IN_PROGRESS",
            GameError::RoomFull => "SESSION_FULL",
            GameError::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            GameError::PlayerNotFound => "PLAYER_NOT_FOUND",
            GameError::Move(rejection) => rejection.code(),
        }
    }
}

/// Public view of a player: never the rack letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub tile_count: usize,
    pub is_host: bool,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        PlayerSummary {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player.score,
            tile_count: player.rack.len(),
            is_host: player.is_host,
        }
    }
}

/// Redacted session state, safe to broadcast to every player in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room_code: String,
    pub status: GameStatus,
    pub players: Vec<PlayerSummary>,
    pub current_player_index: usize,
    pub board: Board,
    pub tiles_remaining: usize,
    pub turn_count: u32,
    pub winner: Option<PlayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player_id: PlayerId,
    pub player_name: String,
    pub word: String,
    pub placements: Vec<Placement>,
    pub score: ScoreBreakdown,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassOutcome {
    pub player_id: PlayerId,
    pub consecutive_passes: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveOutcome {
    pub player: Player,
    pub returned_tiles: usize,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    room_code: String,
    status: GameStatus,
    players: Vec<Player>,
    current_player_index: usize,
    board: Board,
    bag: TileBag,
    turn_count: u32,
    consecutive_passes: u32,
    winner: Option<PlayerSummary>,
    #[serde(default)]
    closed: bool,
}

// ============================================================================
// LIFECYCLE
// ============================================================================

impl GameSession {
    /// Fresh board and full shuffled bag, waiting for players.
    pub fn new(room_code: impl Into<String>) -> GameSession {
        GameSession::with_bag(room_code, TileBag::new_shuffled())
    }

    /// Same as `new` with a caller-provided bag.
    pub fn with_bag(room_code: impl Into<String>, bag: TileBag) -> GameSession {
        GameSession {
            room_code: room_code.into(),
            status: GameStatus::Waiting,
            players: Vec::new(),
            current_player_index: 0,
            board: Board::new(),
            bag,
            turn_count: 0,
            consecutive_passes: 0,
            winner: None,
            closed: false,
        }
    }

    /// Seats a new player and deals up to a full rack. The first player is host.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        connection: Option<ConnectionRef>,
    ) -> Result<PlayerId, GameError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::RoomFull);
        }
        if self.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }

        let mut player = Player::new(name.into(), self.players.is_empty(), connection);
        let dealt = self.bag.draw(player.rack.missing());
        player.rack.add(dealt);

        let player_id = player.id.clone();
        log::info!(
            "{} joined room {} ({} players)",
            player.name,
            self.room_code,
            self.players.len() + 1
        );
        self.players.push(player);
        Ok(player_id)
    }

    /// Removes a player and returns their rack to the bag.
    ///
    /// The host role is not handed over. A game in progress ends as soon as
    /// fewer than two players remain; the last one standing wins.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<LeaveOutcome, GameError> {
        let seat = self
            .players
            .iter()
            .position(|p| &p.id == player_id)
            .ok_or(GameError::PlayerNotFound)?;

        let mut player = self.players.remove(seat);
        let rack = player.rack.take_all();
        let returned_tiles = rack.len();
        self.bag.return_tiles(rack);

        if seat <= self.current_player_index && !self.players.is_empty() {
            self.current_player_index %= self.players.len();
        }

        let mut game_over = false;
        if self.status == GameStatus::Playing && self.players.len() <= 1 {
            self.status = GameStatus::Finished;
            self.winner = self.players.first().map(PlayerSummary::from);
            game_over = true;
            log::info!("Room {} finished by attrition", self.room_code);
        }

        log::info!("{} left room {}", player.name, self.room_code);
        Ok(LeaveOutcome {
            player,
            returned_tiles,
            game_over,
        })
    }

    /// Waiting -> Playing. Tops every rack up and picks a random first player.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        self.status = GameStatus::Playing;
        for player in &mut self.players {
            let dealt = self.bag.draw(player.rack.missing());
            player.rack.add(dealt);
        }
        self.current_player_index = rand::rng().random_range(0..self.players.len());

        log::info!(
            "Game started in room {}, {} opens",
            self.room_code,
            self.players[self.current_player_index].name
        );
        Ok(())
    }

    /// Validates, scores and applies a move for the seated player.
    ///
    /// On any error the session is left exactly as it was.
    pub fn apply_move<D: Dictionary + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        proposed: &ProposedMove,
        dictionary: &D,
    ) -> Result<MoveOutcome, GameError> {
        let seat = self.seat_of_current(player_id)?;

        let validated = validate_move(
            &self.board,
            &self.players[seat].rack,
            self.turn_count,
            proposed,
            dictionary,
        )?;
        let score = score_move(&self.board, &validated.placements);

        self.board.place_validated(&validated.placements);
        let player = &mut self.players[seat];
        player.rack.remove_indices(&validated.rack_indices());
        player.score += score.total;
        let refill = self.bag.draw(player.rack.missing());
        player.rack.add(refill);
        self.consecutive_passes = 0;

        let player_id = player.id.clone();
        let player_name = player.name.clone();
        let rack_out = player.rack.is_empty() && self.bag.is_empty();

        log::debug!(
            "{} played {} for {} points in room {}",
            player_name,
            validated.word,
            score.total,
            self.room_code
        );

        if rack_out {
            self.end_game();
        } else {
            self.advance_turn();
        }

        Ok(MoveOutcome {
            player_id,
            player_name,
            word: validated.word,
            placements: validated.placements,
            score,
            game_over: rack_out,
        })
    }

    /// Skips the seated player's turn. Two full rounds of passes end the game.
    pub fn pass_turn(&mut self, player_id: &PlayerId) -> Result<PassOutcome, GameError> {
        let seat = self.seat_of_current(player_id)?;
        let player_id = self.players[seat].id.clone();

        self.consecutive_passes += 1;
        let threshold = 2 * self.players.len() as u32;
        let game_over = self.consecutive_passes >= threshold;

        log::debug!(
            "{} passed in room {} ({}/{})",
            self.players[seat].name,
            self.room_code,
            self.consecutive_passes,
            threshold
        );

        if game_over {
            self.end_game();
        } else {
            self.advance_turn();
        }

        Ok(PassOutcome {
            player_id,
            consecutive_passes: self.consecutive_passes,
            game_over,
        })
    }

    /// Finishes the game. Highest score wins; ties go to the earlier seat.
    pub fn end_game(&mut self) {
        self.status = GameStatus::Finished;

        let mut best: Option<&Player> = None;
        for player in &self.players {
            if best.map_or(true, |b| player.score > b.score) {
                best = Some(player);
            }
        }
        self.winner = best.map(PlayerSummary::from);

        log::info!(
            "Game over in room {}, winner: {}",
            self.room_code,
            self.winner.as_ref().map_or("nobody", |w| w.name.as_str())
        );
    }

    pub fn clear_placed_markers(&mut self) {
        self.board.clear_placed_markers();
    }

    /// Marks the room as gone. Set under the room lock just before the store
    /// drops it, so a caller that fetched the session earlier can tell.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn seat_of_current(&self, player_id: &PlayerId) -> Result<usize, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::GameNotActive);
        }
        match self.players.get(self.current_player_index) {
            Some(current) if &current.id == player_id => Ok(self.current_player_index),
            _ => Err(GameError::NotYourTurn),
        }
    }

    fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.turn_count += 1;
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl GameSession {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            room_code: self.room_code.clone(),
            status: self.status,
            players: self.players.iter().map(PlayerSummary::from).collect(),
            current_player_index: self.current_player_index,
            board: self.board.clone(),
            tiles_remaining: self.bag.len(),
            turn_count: self.turn_count,
            winner: self.winner.clone(),
        }
    }

    pub fn room_code(&self) -> &str {
        &self.room_code
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// The private rack of one player, for that player only.
    pub fn rack_of(&self, player_id: &PlayerId) -> Option<&[Tile]> {
        self.player(player_id).map(|p| p.rack.tiles())
    }

    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Playing => self.players.get(self.current_player_index),
            _ => None,
        }
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles_remaining(&self) -> usize {
        self.bag.len()
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn winner(&self) -> Option<&PlayerSummary> {
        self.winner.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bag + racks + board. Constant for the life of a session.
    pub fn tile_count(&self) -> usize {
        self.bag.len()
            + self.players.iter().map(|p| p.rack.len()).sum::<usize>()
            + self.board.occupied_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::game::player::Rack;
    use crate::game::tile::TOTAL_TILES;
    use crate::game::PlacedTile;
    use assert_matches::assert_matches;

    fn rack(letters: &str) -> Rack {
        let mut rack = Rack::default();
        rack.add(letters.chars().filter_map(Tile::new));
        rack
    }

    /// Started game with known racks and the first player to move.
    fn playing_session(names: &[&str]) -> (GameSession, Vec<PlayerId>) {
        let mut session = GameSession::new("ROOM01");
        let ids: Vec<PlayerId> = names
            .iter()
            .map(|name| session.add_player(*name, None).unwrap())
            .collect();
        session.start().unwrap();
        session.current_player_index = 0;
        (session, ids)
    }

    /// Hands `letters` to the player in `seat`, pulling the tiles out of the
    /// bag (or another rack) so the tile total stays at 100.
    fn give_rack(session: &mut GameSession, seat: usize, letters: &str) {
        let old = session.players[seat].rack.take_all();
        session.bag.return_tiles(old);
        let wanted = rack(letters);
        for tile in wanted.tiles() {
            if let Some(at) = session.bag.tiles.iter().position(|t| t == tile) {
                session.bag.tiles.remove(at);
                continue;
            }
            let (other, at) = session
                .players
                .iter()
                .enumerate()
                .find_map(|(i, p)| p.rack.tiles().iter().position(|t| t == tile).map(|at| (i, at)))
                .expect("tile somewhere in play");
            session.players[other].rack.remove_indices(&[at]);
            let replacement = session.bag.draw(1);
            session.players[other].rack.add(replacement);
        }
        session.players[seat].rack = wanted;
    }

    #[test]
    fn test_new_session_is_waiting() {
        let session = GameSession::new("ABC123");
        assert_eq!(session.status(), GameStatus::Waiting);
        assert_eq!(session.tiles_remaining(), TOTAL_TILES);
        assert_eq!(session.turn_count(), 0);
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_first_joiner_is_host_and_gets_seven_tiles() {
        let mut session = GameSession::new("ABC123");
        let alice = session.add_player("Alice", None).unwrap();
        let bob = session.add_player("Bob", None).unwrap();

        assert!(session.player(&alice).unwrap().is_host);
        assert!(!session.player(&bob).unwrap().is_host);
        assert_eq!(session.rack_of(&alice).unwrap().len(), 7);
        assert_eq!(session.tiles_remaining(), TOTAL_TILES - 14);
    }

    #[test]
    fn test_join_deals_what_is_left() {
        let bag = TileBag::from_tiles("ABC".chars().filter_map(Tile::new).collect());
        let mut session = GameSession::with_bag("ABC123", bag);
        let alice = session.add_player("Alice", None).unwrap();
        assert_eq!(session.rack_of(&alice).unwrap().len(), 3);
    }

    #[test]
    fn test_room_full_at_fifteen() {
        let mut session = GameSession::new("ABC123");
        for i in 0..MAX_PLAYERS {
            session.add_player(format!("P{i}"), None).unwrap();
        }
        assert_eq!(session.add_player("Late", None), Err(GameError::RoomFull));
        assert_eq!(session.tile_count(), TOTAL_TILES);
    }

    #[test]
    fn test_cannot_join_running_game() {
        let (mut session, _) = playing_session(&["Alice", "Bob"]);
        assert_eq!(
            session.add_player("Carol", None),
            Err(GameError::GameAlreadyStarted)
        );
    }

    #[test]
    fn test_start_requires_waiting_and_two_players() {
        let mut session = GameSession::new("ABC123");
        session.add_player("Alice", None).unwrap();
        assert_eq!(session.start(), Err(GameError::NotEnoughPlayers));

        session.add_player("Bob", None).unwrap();
        session.start().unwrap();
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.current_player_index() < 2);
        assert_eq!(session.start(), Err(GameError::GameAlreadyStarted));
    }

    #[test]
    fn test_move_before_start_is_rejected() {
        let mut session = GameSession::new("ABC123");
        let alice = session.add_player("Alice", None).unwrap();
        let mv = ProposedMove::line("CAT", 7, 6, true);
        assert_eq!(
            session.apply_move(&alice, &mv, &WordList::embedded()),
            Err(GameError::GameNotActive)
        );
    }

    #[test]
    fn test_accepted_move_updates_everything() {
        let (mut session, ids) = playing_session(&["Alice", "Bob", "Carol"]);
        give_rack(&mut session, 0, "CATSDOG");

        let mv = ProposedMove::line("CAT", 7, 6, true);
        let outcome = session
            .apply_move(&ids[0], &mv, &WordList::embedded())
            .unwrap();

        // C(3) + A(1) + T(1), doubled by the center star.
        assert_eq!(outcome.score.total, 10);
        assert!(!outcome.game_over);
        assert_eq!(session.player(&ids[0]).unwrap().score, 10);
        assert_eq!(session.rack_of(&ids[0]).unwrap().len(), 7);
        assert_eq!(session.board().letter_at(7, 7), Some('A'));
        assert_eq!(session.current_player_index(), 1);
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.tile_count(), TOTAL_TILES);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        give_rack(&mut session, 0, "CATSDOG");
        let before = session.clone();

        let off_center = ProposedMove::line("CAT", 0, 0, true);
        assert_eq!(
            session.apply_move(&ids[0], &off_center, &WordList::embedded()),
            Err(GameError::Move(MoveRejection::MustCoverCenter))
        );
        assert_eq!(session, before);

        assert_eq!(
            session.apply_move(&ids[1], &off_center, &WordList::embedded()),
            Err(GameError::NotYourTurn)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_blank_is_consumed_and_scores_zero() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        give_rack(&mut session, 0, "TO_");

        let mv = ProposedMove {
            word: "TOO".to_string(),
            tiles: vec![
                PlacedTile::new(7, 7, "T"),
                PlacedTile::new(7, 8, "O"),
                PlacedTile::new(7, 9, "O"),
            ],
        };
        let outcome = session
            .apply_move(&ids[0], &mv, &WordList::embedded())
            .unwrap();
        // T(1) + O(1) + blank(0), center star doubles.
        assert_eq!(outcome.score.total, 4);
        assert_eq!(session.board().letter_at(7, 9), Some('O'));
        assert_eq!(session.tile_count(), TOTAL_TILES);
    }

    #[test]
    fn test_rack_out_with_empty_bag_ends_game() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        give_rack(&mut session, 0, "CAT");
        session.bag.tiles.clear();

        let mv = ProposedMove::line("CAT", 7, 6, true);
        let outcome = session
            .apply_move(&ids[0], &mv, &WordList::embedded())
            .unwrap();

        assert!(outcome.game_over);
        assert_eq!(session.status(), GameStatus::Finished);
        assert_eq!(session.winner().unwrap().id, ids[0]);
        assert_eq!(session.turn_count(), 0, "No turn advance once the game is over");
    }

    #[test]
    fn test_empty_bag_alone_does_not_end_game() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        give_rack(&mut session, 0, "CATS");
        session.bag.tiles.clear();

        let mv = ProposedMove::line("CAT", 7, 6, true);
        let outcome = session
            .apply_move(&ids[0], &mv, &WordList::embedded())
            .unwrap();
        assert!(!outcome.game_over);
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_pass_threshold_two_players() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);

        for turn in 0..3 {
            let outcome = session.pass_turn(&ids[turn % 2]).unwrap();
            assert!(!outcome.game_over);
        }
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.consecutive_passes(), 3);

        let outcome = session.pass_turn(&ids[1]).unwrap();
        assert!(outcome.game_over);
        assert_eq!(session.status(), GameStatus::Finished);
    }

    #[test]
    fn test_accepted_move_resets_passes() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        session.pass_turn(&ids[0]).unwrap();
        give_rack(&mut session, 1, "CATSDOG");

        let mv = ProposedMove::line("CAT", 7, 6, true);
        session
            .apply_move(&ids[1], &mv, &WordList::embedded())
            .unwrap();
        assert_eq!(session.consecutive_passes(), 0);
    }

    #[test]
    fn test_pass_out_of_turn() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        assert_eq!(session.pass_turn(&ids[1]), Err(GameError::NotYourTurn));
        assert_eq!(
            session.pass_turn(&PlayerId::from("ghost")),
            Err(GameError::NotYourTurn)
        );
    }

    #[test]
    fn test_end_game_tie_goes_to_first_seat() {
        let (mut session, ids) = playing_session(&["Alice", "Bob", "Carol"]);
        session.players[1].score = 12;
        session.players[2].score = 12;
        session.end_game();
        assert_eq!(session.winner().unwrap().id, ids[1]);
    }

    #[test]
    fn test_leave_mid_game_two_players() {
        let (mut session, ids) = playing_session(&["Alice", "Bob"]);
        let bag_before = session.tiles_remaining();
        let rack_size = session.rack_of(&ids[0]).unwrap().len();

        let outcome = session.remove_player(&ids[0]).unwrap();

        assert!(outcome.game_over);
        assert_eq!(outcome.returned_tiles, rack_size);
        assert_eq!(session.tiles_remaining(), bag_before + rack_size);
        assert_eq!(session.status(), GameStatus::Finished);
        assert_eq!(session.winner().unwrap().id, ids[1]);
        assert_eq!(session.tile_count(), TOTAL_TILES);
    }

    #[test]
    fn test_leave_renormalizes_turn_pointer() {
        let (mut session, ids) = playing_session(&["Alice", "Bob", "Carol"]);
        session.current_player_index = 2;

        session.remove_player(&ids[2]).unwrap();
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.status(), GameStatus::Playing);

        // Departure after the pointer leaves it alone.
        let mut session = playing_session(&["A", "B", "C"]).0;
        let last = session.players[2].id.clone();
        session.remove_player(&last).unwrap();
        assert_eq!(session.current_player_index(), 0);
    }

    #[test]
    fn test_host_leaving_is_not_replaced() {
        let mut session = GameSession::new("ABC123");
        let alice = session.add_player("Alice", None).unwrap();
        session.add_player("Bob", None).unwrap();

        session.remove_player(&alice).unwrap();
        assert!(session.players().iter().all(|p| !p.is_host));
        assert_eq!(session.status(), GameStatus::Waiting);
    }

    #[test]
    fn test_remove_unknown_player() {
        let mut session = GameSession::new("ABC123");
        assert_matches!(
            session.remove_player(&PlayerId::from("nobody")),
            Err(GameError::PlayerNotFound)
        );
    }

    #[test]
    fn test_snapshot_hides_rack_letters() {
        let (session, ids) = playing_session(&["Alice", "Bob"]);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.room_code, "ROOM01");
        assert_eq!(snapshot.players[0].id, ids[0]);
        assert_eq!(snapshot.players[0].tile_count, 7);
        assert_eq!(snapshot.tiles_remaining, TOTAL_TILES - 14);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["players"][0].get("rack").is_none());
        assert_eq!(json["status"], "playing");
    }
}
