//! Move legality.
//!
//! Rules run in a fixed order and the first one that fails is reported:
//! format, rack coverage, bounds and occupancy, straight line, gaps,
//! connectivity, and finally the dictionary. Nothing here mutates state.

use crate::dictionary::Dictionary;
use crate::game::board::{Board, CENTER};
use crate::game::moves::{Placement, ProposedMove, ValidatedMove};
use crate::game::player::Rack;
use crate::game::tile::Tile;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("Invalid move format: {0}")]
    InvalidFormat(String),
    #[error("Player does not have required tiles")]
    MissingTiles,
    #[error("Tile placement out of bounds")]
    OutOfBounds,
    #[error("Square already occupied")]
    SquareOccupied,
    #[error("Tiles must be placed in a straight line")]
    NotAStraightLine,
    #[error("Gap in tile placement")]
    GapInPlacement,
    #[error("First move must cover the center star")]
    MustCoverCenter,
    #[error("Move must connect to existing tiles")]
    NotConnected,
    #[error("Invalid word")]
    InvalidWord,
}

impl MoveRejection {
    pub fn code(&self) -> &'static str {
        match self {
            MoveRejection::InvalidFormat(_) => "INVALID_MOVE_FORMAT",
            MoveRejection::MissingTiles => "MISSING_TILES",
            MoveRejection::OutOfBounds => "OUT_OF_BOUNDS",
            MoveRejection::SquareOccupied => "SQUARE_OCCUPIED",
            MoveRejection::NotAStraightLine => "NOT_A_STRAIGHT_LINE",
            MoveRejection::GapInPlacement => "GAP_IN_PLACEMENT",
            MoveRejection::MustCoverCenter => "MUST_COVER_CENTER",
            MoveRejection::NotConnected => "NOT_CONNECTED",
            MoveRejection::InvalidWord => "INVALID_WORD",
        }
    }
}

/// Checks `proposed` for the player holding `rack`.
///
/// The opening move (turn 0, nothing on the board yet) must cover the
/// center; any later move must touch a letter already on the board.
pub fn validate_move<D: Dictionary + ?Sized>(
    board: &Board,
    rack: &Rack,
    turn_count: u32,
    proposed: &ProposedMove,
    dictionary: &D,
) -> Result<ValidatedMove, MoveRejection> {
    let letters = check_format(proposed)?;
    let covering = check_rack_coverage(rack, &letters)?;
    let placements = check_bounds_and_occupancy(board, &letters, &covering)?;
    check_straight_line_without_gaps(board, &placements)?;
    check_connectivity(board, turn_count, &placements)?;

    if !dictionary.validate(&proposed.word) {
        return Err(MoveRejection::InvalidWord);
    }

    Ok(ValidatedMove {
        word: proposed.word.trim().to_uppercase(),
        placements,
    })
}

fn check_format(proposed: &ProposedMove) -> Result<Vec<(i32, i32, char)>, MoveRejection> {
    if proposed.word.trim().is_empty() {
        return Err(MoveRejection::InvalidFormat("word is empty".to_string()));
    }
    if proposed.tiles.is_empty() {
        return Err(MoveRejection::InvalidFormat("no tiles placed".to_string()));
    }

    proposed
        .tiles
        .iter()
        .map(|tile| {
            let mut chars = tile.letter.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    Ok((tile.row, tile.col, c.to_ascii_uppercase()))
                }
                _ => Err(MoveRejection::InvalidFormat(format!(
                    "'{}' is not a single letter",
                    tile.letter
                ))),
            }
        })
        .collect()
}

/// For each placement, the rack index of the tile that pays for it.
/// Greedy first match: the first unused tile that shows the letter or is a
/// blank, in rack order.
fn check_rack_coverage(
    rack: &Rack,
    letters: &[(i32, i32, char)],
) -> Result<Vec<(usize, Tile)>, MoveRejection> {
    let mut used = vec![false; rack.len()];
    let tiles = rack.tiles();

    letters
        .iter()
        .map(|&(_, _, letter)| {
            let index = (0..tiles.len())
                .find(|&i| !used[i] && (tiles[i].letter == letter || tiles[i].is_blank()))
                .ok_or(MoveRejection::MissingTiles)?;
            used[index] = true;
            Ok((index, tiles[index]))
        })
        .collect()
}

fn check_bounds_and_occupancy(
    board: &Board,
    letters: &[(i32, i32, char)],
    covering: &[(usize, Tile)],
) -> Result<Vec<Placement>, MoveRejection> {
    let mut placements: Vec<Placement> = Vec::with_capacity(letters.len());

    for (&(row, col, letter), &(rack_index, tile)) in letters.iter().zip(covering) {
        if !Board::in_bounds(row, col) {
            return Err(MoveRejection::OutOfBounds);
        }
        let (row, col) = (row as usize, col as usize);
        let doubled = placements.iter().any(|p| p.row == row && p.col == col);
        if board.is_occupied(row, col) || doubled {
            return Err(MoveRejection::SquareOccupied);
        }
        placements.push(Placement {
            row,
            col,
            letter,
            tile,
            rack_index,
        });
    }

    Ok(placements)
}

fn check_straight_line_without_gaps(
    board: &Board,
    placements: &[Placement],
) -> Result<(), MoveRejection> {
    if placements.len() < 2 {
        return Ok(());
    }

    let first = placements[0];
    let horizontal = placements.iter().all(|p| p.row == first.row);
    let vertical = placements.iter().all(|p| p.col == first.col);
    if !horizontal && !vertical {
        return Err(MoveRejection::NotAStraightLine);
    }

    let mut along: Vec<usize> = placements
        .iter()
        .map(|p| if horizontal { p.col } else { p.row })
        .collect();
    along.sort_unstable();

    for pair in along.windows(2) {
        for between in pair[0] + 1..pair[1] {
            let (row, col) = if horizontal {
                (first.row, between)
            } else {
                (between, first.col)
            };
            if !board.is_occupied(row, col) {
                return Err(MoveRejection::GapInPlacement);
            }
        }
    }

    Ok(())
}

fn check_connectivity(
    board: &Board,
    turn_count: u32,
    placements: &[Placement],
) -> Result<(), MoveRejection> {
    // Deliberate deviation from an opening rule keyed on turn_count alone: a
    // later turn on a still-empty board (everyone passed before the first
    // word) must also cover the center, since that board has nothing to
    // connect to.
    if turn_count == 0 || board.is_empty() {
        let covers_center = placements.iter().any(|p| (p.row, p.col) == CENTER);
        return if covers_center {
            Ok(())
        } else {
            Err(MoveRejection::MustCoverCenter)
        };
    }

    if placements
        .iter()
        .any(|p| board.has_occupied_neighbor(p.row, p.col))
    {
        Ok(())
    } else {
        Err(MoveRejection::NotConnected)
    }
}
