use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a cell knows about mines: either it holds one, or how many of its neighbors do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjacency {
    Mine,
    Count(u8),
}

impl Adjacency {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Only empty cells spread a reveal to their neighbors.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for Adjacency {
    fn default() -> Self {
        Self::Count(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    pub(crate) adjacency: Adjacency,
    pub(crate) visible: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            adjacency: Adjacency::Count(0),
            visible: false,
            flagged: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub const fn is_mine(&self) -> bool {
        self.adjacency.is_mine()
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }
}
