use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible classification of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayCategory {
    Bomb,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Flag,
    NotVisible,
    Undefined,
}

impl DisplayCategory {
    /// Flags win over everything, then hidden cells, then whatever the cell holds.
    pub const fn of(cell: &Cell) -> Self {
        if cell.is_flagged() {
            return Self::Flag;
        }
        if !cell.is_visible() {
            return Self::NotVisible;
        }
        match cell.adjacency() {
            Adjacency::Mine => Self::Bomb,
            Adjacency::Count(count) => Self::from_count(count),
        }
    }

    pub const fn from_count(count: u8) -> Self {
        use DisplayCategory::*;
        match count {
            0 => Zero,
            1 => One,
            2 => Two,
            3 => Three,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            _ => Undefined,
        }
    }

    /// Adjacent mine count for revealed number cells
    pub const fn count(self) -> Option<u8> {
        use DisplayCategory::*;
        match self {
            Zero => Some(0),
            One => Some(1),
            Two => Some(2),
            Three => Some(3),
            Four => Some(4),
            Five => Some(5),
            Six => Some(6),
            Seven => Some(7),
            Eight => Some(8),
            Bomb | Flag | NotVisible | Undefined => None,
        }
    }

    pub const fn symbol(self) -> char {
        use DisplayCategory::*;
        match self {
            Bomb => '*',
            Zero => '.',
            One => '1',
            Two => '2',
            Three => '3',
            Four => '4',
            Five => '5',
            Six => '6',
            Seven => '7',
            Eight => '8',
            Flag => 'F',
            NotVisible => '#',
            Undefined => '?',
        }
    }
}

/// Read-only snapshot of the board as a player would see it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    categories: Array2<DisplayCategory>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        Self {
            categories: Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
                DisplayCategory::of(&board[(x as Coord, y as Coord)])
            }),
        }
    }

    pub fn width(&self) -> Coord {
        self.categories.dim().0 as Coord
    }

    pub fn height(&self) -> Coord {
        self.categories.dim().1 as Coord
    }

    pub fn get(&self, x: Coord, y: Coord) -> Option<DisplayCategory> {
        self.categories.get((x as usize, y as usize)).copied()
    }

    /// Rows from top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = DisplayCategory> + '_> + '_ {
        self.categories
            .columns()
            .into_iter()
            .map(|row| row.into_iter().copied())
    }

    pub fn count(&self, category: DisplayCategory) -> usize {
        self.categories.iter().filter(|&&c| c == category).count()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, category) in row.enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", category.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
