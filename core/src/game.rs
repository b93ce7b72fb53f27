use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn has_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn has_lost(self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Running
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    difficulty: Difficulty,
    board: Board,
    status: GameStatus,
    view: BoardView,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(difficulty: Difficulty, generator: impl MineGenerator) -> Result<Self> {
        let config = difficulty.config()?;
        let layout = generator.generate(config);
        if layout.size() != config.size() || layout.mine_count() != config.mines() {
            log::warn!(
                "Generated layout {:?}/{} does not match {:?}",
                layout.size(),
                layout.mine_count(),
                config
            );
            return Err(GameError::LayoutMismatch);
        }
        Self::build(difficulty, &layout)
    }

    /// Starts a game on a fixed layout, reported as a custom difficulty.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.game_config()?;
        let difficulty = Difficulty::Custom {
            width: config.width(),
            height: config.height(),
            mines: config.mines(),
        };
        Self::build(difficulty, &layout)
    }

    fn build(difficulty: Difficulty, layout: &MineLayout) -> Result<Self> {
        layout.game_config()?;
        let board = Board::new(layout);
        let view = board.project_view();
        log::debug!(
            "New {:?} game, {:?} with {} mines",
            difficulty,
            board.size(),
            board.mine_count()
        );
        Ok(Self {
            difficulty,
            board,
            status: GameStatus::Running,
            view,
            triggered_mine: None,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        !self.status.is_running()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn width(&self) -> Coord {
        self.board.size().0
    }

    pub fn height(&self) -> Coord {
        self.board.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.mine_count()) - i64::from(self.board.flag_count())
    }

    /// The mine that ended the game, if it was lost
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, x: Coord, y: Coord) -> Result<&Cell> {
        let coords = self.board.validate_coords((x, y))?;
        Ok(&self.board[coords])
    }

    /// Applies one move, then settles win/loss and refreshes the view.
    ///
    /// Fails without touching the game when the coordinates are off the board or the game has
    /// already ended.
    pub fn make_move(&mut self, x: Coord, y: Coord, kind: MoveKind) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        let coords = self.board.validate_coords((x, y))?;
        self.check_running()?;
        log::debug!("{:?} at {:?}", kind, coords);

        let mut outcome = match kind {
            MoveKind::Reveal => match self.board.reveal(coords) {
                RevealOutcome::NoChange => NoChange,
                RevealOutcome::Revealed(_) => Changed,
                RevealOutcome::HitMine => {
                    self.triggered_mine = Some(coords);
                    self.end_game(false);
                    HitMine
                }
            },
            MoveKind::Flag => {
                self.board.toggle_flag(coords);
                Changed
            }
        };

        // loss takes precedence over a simultaneous clear
        if !self.status.has_lost() && self.board.is_cleared() {
            self.end_game(true);
            outcome = Won;
        }

        self.view = self.board.project_view();
        Ok(outcome)
    }

    fn check_running(&self) -> Result<()> {
        if self.status.is_running() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }

    fn end_game(&mut self, won: bool) {
        if !self.status.is_running() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        log::info!(
            "Game {} with {} cells hidden and {} flags",
            if won { "won" } else { "lost" },
            self.board.unrevealed_count(),
            self.board.flag_count()
        );
    }
}
