use ndarray::Array2;

use super::*;

/// Purely random placement: draws coordinates with replacement and redraws on collision until the
/// requested number of distinct cells hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (size_x, size_y) = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut collisions: u64 = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        // `GameConfig` keeps at least one safe cell, so this terminates
        while mines_placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..size_x), rng.random_range(0..size_y));
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                collisions += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} with seed {}, {} redraws",
            mines_placed,
            size_x,
            size_y,
            self.seed,
            collisions
        );

        MineLayout::from_mine_mask(mine_mask)
    }
}
