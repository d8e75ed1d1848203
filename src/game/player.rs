use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const RACK_CAPACITY: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> PlayerId {
        PlayerId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle the transport uses to find a player's connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionRef(pub String);

/// A player's hand. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Free slots left before the rack is full.
    pub fn missing(&self) -> usize {
        RACK_CAPACITY.saturating_sub(self.tiles.len())
    }

    pub fn add(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Removes the tiles at `indices` (positions in the current rack).
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<Tile> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        // Highest index first so earlier positions stay valid.
        let mut removed = Vec::with_capacity(sorted.len());
        for i in sorted {
            if i < self.tiles.len() {
                removed.push(self.tiles.remove(i));
            }
        }
        removed
    }

    pub fn take_all(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rack: Rack,
    pub score: u32,
    pub is_host: bool,
    pub connection: Option<ConnectionRef>,
}

impl Player {
    pub fn new(name: String, is_host: bool, connection: Option<ConnectionRef>) -> Player {
        Player {
            id: PlayerId::generate(),
            name,
            rack: Rack::default(),
            score: 0,
            is_host,
            connection,
        }
    }
}
