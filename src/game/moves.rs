use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// One tile of a move proposal, as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub row: i32,
    pub col: i32,
    pub letter: String,
}

impl PlacedTile {
    pub fn new(row: i32, col: i32, letter: &str) -> PlacedTile {
        PlacedTile {
            row,
            col,
            letter: letter.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedMove {
    pub word: String,
    pub tiles: Vec<PlacedTile>,
}

impl ProposedMove {
    /// Lays `word` out from (row, col), one tile per letter.
    pub fn line(word: &str, row: i32, col: i32, horizontal: bool) -> ProposedMove {
        let tiles = word
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                let offset = i as i32;
                let (r, c) = if horizontal {
                    (row, col + offset)
                } else {
                    (row + offset, col)
                };
                PlacedTile::new(r, c, &letter.to_string())
            })
            .collect();
        ProposedMove {
            word: word.to_string(),
            tiles,
        }
    }
}

/// A checked tile placement: on the board, on a free cell, backed by a rack tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    /// Letter shown on the board. For a blank, the letter it stands for.
    pub letter: char,
    /// Rack tile consumed by this placement.
    pub tile: Tile,
    #[serde(skip)]
    pub(crate) rack_index: usize,
}

/// A move that passed every rule and may be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMove {
    pub word: String,
    pub placements: Vec<Placement>,
}

impl ValidatedMove {
    pub(crate) fn rack_indices(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.rack_index).collect()
    }
}
