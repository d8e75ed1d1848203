use crate::game::moves::Placement;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BOARD_SIZE: usize = 15;

/// Mandatory cell of the opening move.
pub const CENTER: (usize, usize) = (7, 7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Premium {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The center cell. It is listed as a double-word square as well and
    /// scores as one.
    CenterStar,
}

impl Premium {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord | Premium::CenterStar => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

// (7, 7) is also a double-word square; it is laid out as the center star.
const DOUBLE_WORD: [(usize, usize); 8] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (10, 10),
    (11, 11),
    (12, 12),
    (13, 13),
];

const TRIPLE_LETTER: [(usize, usize); 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER: [(usize, usize); 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub premium: Option<Premium>,
    /// Highlight for the most recent placement. Display only.
    pub just_placed: bool,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        self.letter.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("tile placement out of bounds at ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },
    #[error("square ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Empty board with the fixed premium layout.
    pub fn new() -> Board {
        let mut cells = [[Cell::default(); BOARD_SIZE]; BOARD_SIZE];

        let layout: [(&[(usize, usize)], Premium); 4] = [
            (&TRIPLE_WORD, Premium::TripleWord),
            (&DOUBLE_WORD, Premium::DoubleWord),
            (&TRIPLE_LETTER, Premium::TripleLetter),
            (&DOUBLE_LETTER, Premium::DoubleLetter),
        ];
        for (coordinates, premium) in layout {
            for &(row, col) in coordinates {
                cells[row][col].premium = Some(premium);
            }
        }
        cells[CENTER.0][CENTER.1].premium = Some(Premium::CenterStar);

        Board { cells }
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.cell(row, col).and_then(|c| c.letter)
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    pub fn premium_at(&self, row: usize, col: usize) -> Option<Premium> {
        self.cell(row, col).and_then(|c| c.premium)
    }

    /// Sets a letter and flags the cell as just placed.
    pub fn place(&mut self, row: i32, col: i32, letter: char) -> Result<(), BoardError> {
        if !Board::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let (row, col) = (row as usize, col as usize);
        let cell = &mut self.cells[row][col];
        if cell.is_occupied() {
            return Err(BoardError::Occupied { row, col });
        }
        cell.letter = Some(letter);
        cell.just_placed = true;
        Ok(())
    }

    /// Writes placements that already passed validation: every cell is on
    /// the board and free.
    pub(crate) fn place_validated(&mut self, placements: &[Placement]) {
        for placement in placements {
            let cell = &mut self.cells[placement.row][placement.col];
            cell.letter = Some(placement.letter);
            cell.just_placed = true;
        }
    }

    pub fn clear_placed_markers(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.just_placed = false;
        }
    }

    /// True when any 4-neighbour of (row, col) holds a letter.
    pub fn has_occupied_neighbor(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as i32, col as i32);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| Board::in_bounds(r, c))
            .any(|(r, c)| self.is_occupied(r as usize, c as usize))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_occupied())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
