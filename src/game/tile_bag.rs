use crate::game::tile::{full_tile_set, Tile};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// The pool of undrawn tiles.
///
/// Kept shuffled at all times, so drawing is just popping from the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileBag {
    pub(crate) tiles: Vec<Tile>,
}

impl TileBag {
    /// Full canonical distribution in a uniformly random order.
    pub fn new_shuffled() -> TileBag {
        let mut bag = TileBag {
            tiles: full_tile_set(),
        };
        bag.shuffle();
        bag
    }

    /// Bag holding exactly `tiles`, unshuffled. The last tile is drawn first.
    pub fn from_tiles(tiles: Vec<Tile>) -> TileBag {
        TileBag { tiles }
    }

    /// Removes up to `n` tiles. Returns fewer when the bag runs short.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let take = n.min(self.tiles.len());
        let split_at = self.tiles.len() - take;
        let mut drawn = self.tiles.split_off(split_at);
        drawn.reverse();
        drawn
    }

    /// Puts tiles back and reshuffles the whole bag.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
        self.shuffle();
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn shuffle(&mut self) {
        self.tiles.shuffle(&mut rand::rng());
    }
}
