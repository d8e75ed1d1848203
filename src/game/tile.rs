use serde::{Deserialize, Serialize};

/// Marker stored in `Tile::letter` for a blank tile.
pub const BLANK: char = '_';

/// Number of tiles in the canonical distribution, blanks included.
pub const TOTAL_TILES: usize = 100;

/// (letter, count, points) for every tile kind in the bag.
pub const LETTER_DISTRIBUTION: [(char, usize, u32); 27] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK, 2, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub points: u32,
}

impl Tile {
    /// Builds the tile for `letter` with its canonical point value.
    /// Returns `None` for characters that are not in the distribution.
    pub fn new(letter: char) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        letter_points(letter).map(|points| Tile { letter, points })
    }

    pub fn blank() -> Tile {
        Tile {
            letter: BLANK,
            points: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }
}

/// Point value of a letter (or of the blank marker).
pub fn letter_points(letter: char) -> Option<u32> {
    LETTER_DISTRIBUTION
        .iter()
        .find(|(l, _, _)| *l == letter)
        .map(|(_, _, points)| *points)
}

/// Every tile of the canonical distribution, in table order.
pub fn full_tile_set() -> Vec<Tile> {
    LETTER_DISTRIBUTION
        .iter()
        .flat_map(|&(letter, count, points)| {
            std::iter::repeat(Tile { letter, points }).take(count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_totals_one_hundred_tiles() {
        let tiles = full_tile_set();
        assert_eq!(tiles.len(), TOTAL_TILES);
        assert_eq!(tiles.iter().filter(|t| t.is_blank()).count(), 2);
        assert_eq!(tiles.iter().filter(|t| t.letter == 'E').count(), 12);
    }

    #[test]
    fn test_letter_points() {
        assert_eq!(letter_points('Q'), Some(10));
        assert_eq!(letter_points('E'), Some(1));
        assert_eq!(letter_points(BLANK), Some(0));
        assert_eq!(letter_points('?'), None);
    }

    #[test]
    fn test_new_tile_uppercases_letter() {
        let tile = Tile::new('k').unwrap();
        assert_eq!(tile, Tile { letter: 'K', points: 5 });
        assert!(Tile::new('1').is_none());
        assert!(Tile::blank().is_blank());
    }
}
