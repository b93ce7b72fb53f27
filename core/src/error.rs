use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfRange { x: Coord, y: Coord },
    #[error("Board needs a non-zero size and at least one safe cell")]
    InvalidConfiguration,
    #[error("Mine coordinates do not fit the declared board size")]
    LayoutMismatch,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
