use crate::game::board::Board;
use crate::game::moves::Placement;
use crate::game::player::RACK_CAPACITY;
use serde::{Deserialize, Serialize};

/// Flat bonus for playing a full rack in one move.
pub const BINGO_BONUS: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub letter_total: u32,
    pub word_multiplier: u32,
    pub bingo_bonus: u32,
    pub total: u32,
}

/// Scores the newly placed tiles only.
///
/// Letters already on the board are not counted and perpendicular words
/// formed by the placement are not scored. `board` must be the board before
/// the tiles are put down; premiums are read from the destination cells.
pub fn score_move(board: &Board, placements: &[Placement]) -> ScoreBreakdown {
    let mut letter_total = 0;
    let mut word_multiplier = 1;

    for placement in placements {
        let premium = board.premium_at(placement.row, placement.col);
        // Blanks carry 0 points whatever letter they stand for.
        let base = placement.tile.points;
        letter_total += base * premium.map_or(1, |p| p.letter_multiplier());
        word_multiplier *= premium.map_or(1, |p| p.word_multiplier());
    }

    let bingo_bonus = if placements.len() == RACK_CAPACITY {
        BINGO_BONUS
    } else {
        0
    };

    ScoreBreakdown {
        letter_total,
        word_multiplier,
        bingo_bonus,
        total: letter_total * word_multiplier + bingo_bonus,
    }
}
