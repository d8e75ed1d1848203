//! Whole-game scenarios through the public session API

use assert_matches::assert_matches;
use scrabble_party::game::tile::full_tile_set;
use scrabble_party::{
    GameError, GameSession, GameStatus, MoveRejection, PlayerId, ProposedMove, Tile, TileBag,
    WordList, TOTAL_TILES,
};

/// Full 100-tile bag arranged so the n-th player to join is dealt `racks[n]`.
fn stacked_bag(racks: &[&str]) -> TileBag {
    let mut rest = full_tile_set();
    let mut dealt: Vec<Vec<Tile>> = Vec::new();
    for letters in racks {
        let rack = letters
            .chars()
            .map(|c| {
                let at = rest
                    .iter()
                    .position(|t| t.letter == c)
                    .expect("letter left in the set");
                rest.remove(at)
            })
            .collect();
        dealt.push(rack);
    }
    // The bag deals from the back.
    for rack in dealt.into_iter().rev() {
        rest.extend(rack);
    }
    TileBag::from_tiles(rest)
}

fn started(racks: &[&str]) -> (GameSession, Vec<PlayerId>) {
    let mut session = GameSession::with_bag("FLOW01", stacked_bag(racks));
    let ids = (0..racks.len())
        .map(|i| session.add_player(format!("P{i}"), None).unwrap())
        .collect();
    session.start().unwrap();
    (session, ids)
}

fn seated(session: &GameSession) -> PlayerId {
    session.current_player().unwrap().id.clone()
}

#[test]
fn test_opening_then_connected_follow_up() {
    let words = WordList::embedded();
    let (mut session, _) = started(&["CATSDOG", "CATSDOG"]);
    assert_eq!(session.tile_count(), TOTAL_TILES);

    let first = seated(&session);
    let opener_index = session.current_player_index();

    // Off-center opening: rejected, nothing moves.
    let before = session.snapshot();
    let rack_before = session.rack_of(&first).unwrap().to_vec();
    assert_eq!(
        session.apply_move(&first, &ProposedMove::line("CAT", 0, 0, true), &words),
        Err(GameError::Move(MoveRejection::MustCoverCenter))
    );
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.rack_of(&first).unwrap(), rack_before.as_slice());

    let opening = session
        .apply_move(&first, &ProposedMove::line("CAT", 7, 6, true), &words)
        .unwrap();
    assert_eq!(opening.score.total, 10);
    assert_eq!(session.current_player_index(), (opener_index + 1) % 2);
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.tile_count(), TOTAL_TILES);

    let second = seated(&session);
    assert_ne!(first, second);

    // The opener cannot play twice in a row.
    assert_eq!(
        session.apply_move(&first, &ProposedMove::line("DOG", 8, 6, true), &words),
        Err(GameError::NotYourTurn)
    );

    // "TO" down from the T at (7, 8); only the O is placed, on a double letter.
    let mv = ProposedMove {
        word: "TO".to_string(),
        tiles: vec![scrabble_party::PlacedTile::new(8, 8, "O")],
    };
    let follow_up = session.apply_move(&second, &mv, &words).unwrap();
    assert_eq!(follow_up.score.total, 2);
    assert_eq!(session.turn_count(), 2);
    assert_eq!(seated(&session), first);

    // A move far from everything is not connected.
    assert_eq!(
        session.apply_move(&first, &ProposedMove::line("DOG", 0, 0, true), &words),
        Err(GameError::Move(MoveRejection::NotConnected))
    );
    assert_eq!(session.tile_count(), TOTAL_TILES);
}

#[test]
fn test_invalid_word_is_rejected_last() {
    let words = WordList::embedded();
    let (mut session, _) = started(&["CATSDOG", "CATSDOG"]);
    let first = seated(&session);

    assert_eq!(
        session.apply_move(&first, &ProposedMove::line("TAC", 7, 6, true), &words),
        Err(GameError::Move(MoveRejection::InvalidWord))
    );
    assert_eq!(
        session.apply_move(&first, &ProposedMove::line("QAT", 7, 6, true), &words),
        Err(GameError::Move(MoveRejection::MissingTiles))
    );
    assert_eq!(session.turn_count(), 0);
}

#[test]
fn test_three_players_need_six_passes() {
    let (mut session, _) = started(&["AAAAAAA", "EEEEEEE", "IIIIIII"]);

    for pass in 1..6 {
        let outcome = session.pass_turn(&seated(&session)).unwrap();
        assert_eq!(outcome.consecutive_passes, pass);
        assert!(!outcome.game_over);
    }
    let outcome = session.pass_turn(&seated(&session)).unwrap();
    assert!(outcome.game_over);
    assert_eq!(session.status(), GameStatus::Finished);
    assert_matches!(
        session.pass_turn(&PlayerId::from("anyone")),
        Err(GameError::GameNotActive)
    );
    assert_eq!(session.tile_count(), TOTAL_TILES);
}

#[test]
fn test_departure_in_two_player_game() {
    let (mut session, ids) = started(&["CATSDOG", "EEEEEEE"]);
    let bag_before = session.tiles_remaining();

    let left = session.remove_player(&ids[0]).unwrap();
    assert_eq!(left.returned_tiles, 7);
    assert!(left.game_over);
    assert_eq!(session.tiles_remaining(), bag_before + 7);
    assert_eq!(session.status(), GameStatus::Finished);
    assert_eq!(session.winner().unwrap().id, ids[1]);
    assert_eq!(session.tile_count(), TOTAL_TILES);
}

#[test]
fn test_playing_out_the_last_tiles_ends_the_game() {
    let words = WordList::embedded();
    // Only three tiles exist: the first player gets all of them.
    let bag = TileBag::from_tiles("TAC".chars().filter_map(Tile::new).collect());
    let mut session = GameSession::with_bag("LAST01", bag);
    let alice = session.add_player("Alice", None).unwrap();
    let bob = session.add_player("Bob", None).unwrap();
    session.start().unwrap();
    assert_eq!(session.rack_of(&bob).unwrap().len(), 0);

    if seated(&session) == bob {
        session.pass_turn(&bob).unwrap();
    }
    let outcome = session
        .apply_move(&alice, &ProposedMove::line("CAT", 7, 6, true), &words)
        .unwrap();

    assert!(outcome.game_over);
    assert_eq!(session.status(), GameStatus::Finished);
    let winner = session.winner().unwrap();
    assert_eq!(winner.id, alice);
    assert_eq!(winner.score, 10);
}

#[test]
fn test_snapshot_never_exposes_racks() {
    let (session, ids) = started(&["CATSDOG", "EEEEEEE"]);
    let json = serde_json::to_string(&session.snapshot()).unwrap();

    assert!(!json.contains("\"rack\""));
    assert!(json.contains(ids[0].as_str()));
    assert!(json.contains("\"tile_count\":7"));
}
