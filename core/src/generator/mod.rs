use crate::*;
pub use random::*;

mod random;

/// Source of mine positions for a new game.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// A prepared layout is its own generator. `Game::new` rejects it unless it matches the config.
impl MineGenerator for MineLayout {
    fn generate(self, _config: GameConfig) -> MineLayout {
        self
    }
}
