use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a single cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Number of cells that became visible, flood-filled ones included
    Revealed(CellCount),
    HitMine,
}

/// Grid of cells with the mines fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    flag_count: CellCount,
}

impl Board {
    /// Allocates the grid, applies the mines of `layout` and computes adjacency for every cell.
    pub fn new(layout: &MineLayout) -> Self {
        let size = layout.size();
        let mut board = Self {
            cells: Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
                Cell::new((x as Coord, y as Coord))
            }),
            mine_count: 0,
            flag_count: 0,
        };

        for coords in layout.iter_mines() {
            board.cells[coords.to_nd_index()].adjacency = Adjacency::Mine;
            board.mine_count += 1;
        }

        let (x_end, y_end) = size;
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                if !board[coords].is_mine() {
                    let count = board.adjacent_mine_count(coords);
                    board.cells[coords.to_nd_index()].adjacency = Adjacency::Count(count);
                }
            }
        }

        board
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.cells.dim();
        (size_x as Coord, size_y as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange {
                x: coords.0,
                y: coords.1,
            })
        }
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Neighbors of `coords`, detached from the board so cells can be updated while iterating.
    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Counts mines among the in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Reveals `coords` and, when it is empty, every cell reachable through empty cells.
    ///
    /// A cell is marked visible before it is pushed on the worklist, so each cell is visited at
    /// most once and no recursion is involved.
    pub(crate) fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self[coords].visible {
            return RevealOutcome::NoChange;
        }

        self.cells[coords.to_nd_index()].visible = true;
        if self[coords].is_mine() {
            return RevealOutcome::HitMine;
        }

        let mut revealed: CellCount = 1;
        let mut pending = Vec::from([coords]);
        while let Some(visit_coords) = pending.pop() {
            if !self[visit_coords].adjacency.is_empty() {
                continue;
            }

            for pos in self.iter_neighbors(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if !cell.visible {
                    cell.visible = true;
                    revealed += 1;
                    pending.push(pos);
                }
            }
        }

        if revealed > 1 {
            log::trace!("Flood revealed {} cells from {:?}", revealed, coords);
        }
        RevealOutcome::Revealed(revealed)
    }

    /// Flips the flag on `coords`, returning whether it is now flagged.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        cell.flagged
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| !cell.visible).count() as CellCount
    }

    /// Holds once hidden cells plus placed flags no longer exceed the number of mines.
    ///
    /// Flags count against the budget even when they sit on mines, so a fully flagged board with
    /// hidden mines is not cleared.
    pub fn is_cleared(&self) -> bool {
        let mut unrevealed: CellCount = 0;
        for cell in self.cells.iter() {
            if !cell.visible {
                unrevealed += 1;
            }
            if unrevealed + self.flag_count > self.mine_count {
                return false;
            }
        }
        true
    }

    pub fn project_view(&self) -> BoardView {
        BoardView::from_board(self)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(&MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn visible_count(board: &Board) -> usize {
        board.iter_cells().filter(|cell| cell.is_visible()).count()
    }

    #[test]
    fn cells_store_their_grid_position() {
        let board = board((4, 3), &[(1, 1)]);

        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(board[(x, y)].coords(), (x, y));
            }
        }
    }

    #[test]
    fn new_board_starts_hidden_and_unflagged() {
        let board = board((3, 3), &[(0, 0)]);

        assert!(board.iter_cells().all(|cell| !cell.is_visible() && !cell.is_flagged()));
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.unrevealed_count(), 9);
    }

    #[test]
    fn adjacency_counts_every_neighbor_mine() {
        // . * .
        // * . *
        // . * .
        let board = board((3, 3), &[(1, 0), (0, 1), (2, 1), (1, 2)]);

        assert_eq!(board.mine_count(), 4);
        assert_eq!(board[(1, 1)].adjacency(), Adjacency::Count(4));
        assert_eq!(board[(0, 0)].adjacency(), Adjacency::Count(2));
        assert_eq!(board[(2, 2)].adjacency(), Adjacency::Count(2));
        assert_eq!(board[(1, 0)].adjacency(), Adjacency::Mine);
    }

    #[test]
    fn adjacency_maxes_out_at_eight() {
        let mines: alloc::vec::Vec<Coord2> = neighbors((1, 1), (3, 3)).collect();
        let board = board((3, 3), &mines);

        assert_eq!(board[(1, 1)].adjacency(), Adjacency::Count(8));
    }

    #[test]
    fn corner_adjacency_only_sees_three_cells() {
        let board = board((8, 8), &[(1, 0), (0, 1), (1, 1), (7, 7), (2, 2)]);

        assert_eq!(board.adjacent_mine_count((0, 0)), 3);
        assert_eq!(board[(0, 0)].adjacency(), Adjacency::Count(3));
    }

    #[test]
    fn reveal_numbered_cell_does_not_spread() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(board.reveal((1, 1)), RevealOutcome::Revealed(1));
        assert_eq!(visible_count(&board), 1);
    }

    #[test]
    fn reveal_twice_is_noop() {
        let mut board = board((3, 3), &[(0, 0)]);

        board.reveal((1, 1));
        let before = board.clone();

        assert_eq!(board.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn reveal_mine_reports_hit_without_spreading() {
        let mut board = board((3, 3), &[(1, 1)]);

        assert_eq!(board.reveal((1, 1)), RevealOutcome::HitMine);
        assert!(board[(1, 1)].is_visible());
        assert_eq!(visible_count(&board), 1);
    }

    #[test]
    fn flood_fill_stops_at_numbered_border() {
        // 0 0 1 .
        // 0 0 1 *
        // 1 1 2 .
        // . * . .
        let mut board = board((4, 4), &[(3, 1), (1, 3)]);

        assert_eq!(board.reveal((0, 0)), RevealOutcome::Revealed(9));

        for coords in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(board[coords].is_visible(), "{coords:?} should be open");
        }
        for coords in [(2, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert!(board[coords].is_visible(), "{coords:?} border should be open");
        }
        for coords in [(3, 0), (3, 1), (3, 2), (0, 3), (1, 3), (3, 3)] {
            assert!(!board[coords].is_visible(), "{coords:?} should stay hidden");
        }
    }

    #[test]
    fn flood_fill_opens_flagged_cells_in_region() {
        let mut board = board((3, 3), &[(2, 2)]);
        board.toggle_flag((0, 2));

        board.reveal((0, 0));

        assert!(board[(0, 2)].is_visible());
        assert!(board[(0, 2)].is_flagged());
        assert!(!board[(2, 2)].is_visible());
    }

    #[test]
    fn flood_fill_handles_large_empty_board() {
        let mut board = board((1000, 1000), &[]);

        assert_eq!(board.reveal((500, 500)), RevealOutcome::Revealed(1_000_000));
        assert_eq!(board.unrevealed_count(), 0);
    }

    #[test]
    fn double_flag_restores_state() {
        let mut board = board((2, 2), &[(0, 0)]);

        assert!(board.toggle_flag((1, 1)));
        assert_eq!(board.flag_count(), 1);
        assert!(!board.toggle_flag((1, 1)));
        assert_eq!(board.flag_count(), 0);
        assert!(!board[(1, 1)].is_flagged());
    }

    #[test]
    fn cleared_when_only_mines_remain_hidden() {
        let mut board = board((3, 1), &[(0, 0)]);

        board.reveal((1, 0));
        assert!(!board.is_cleared());

        board.reveal((2, 0));
        assert!(board.is_cleared());
    }

    #[test]
    fn flags_count_against_clear_condition() {
        let mut board = board((3, 1), &[(0, 0)]);
        board.reveal((1, 0));
        board.reveal((2, 0));

        board.toggle_flag((0, 0));

        assert!(!board.is_cleared());
    }

    #[test]
    fn cleared_when_safe_cell_left_hidden_but_mine_revealed() {
        let mut board = board((3, 1), &[(0, 0)]);
        board.reveal((0, 0));
        board.reveal((1, 0));

        assert_eq!(board.unrevealed_count(), 1);
        assert!(board.is_cleared());
    }

    #[test]
    fn out_of_range_coords_are_rejected() {
        let board = board((3, 2), &[]);

        assert_eq!(board.validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(
            board.validate_coords((3, 0)),
            Err(GameError::OutOfRange { x: 3, y: 0 })
        );
        assert_eq!(
            board.validate_coords((0, 2)),
            Err(GameError::OutOfRange { x: 0, y: 2 })
        );
    }
}
