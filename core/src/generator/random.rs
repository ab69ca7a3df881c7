use super::*;

/// Places mines uniformly at random among all cells, without replacement.
///
/// The same seed and config always produce the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;
        use rand::seq::index;

        let total_cells = config.total_cells();

        // at least one cell has to stay safe
        let mines = if config.mines >= total_cells {
            let capped = total_cells.saturating_sub(1);
            log::warn!(
                "Requested {} mines but only {} cells, capped to {}",
                config.mines,
                total_cells,
                capped
            );
            capped
        } else {
            config.mines
        };

        let width = usize::from(config.size.0);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let picked = index::sample(&mut rng, total_cells.into(), mines.into());

        let layout = MineLayout::from_generated(
            config.size,
            picked
                .into_iter()
                .map(|i| ((i % width) as Coord, (i / width) as Coord)),
        );
        log::debug!(
            "Generated {}x{} minefield with {} mines (seed {})",
            config.rows(),
            config.cols(),
            layout.mine_count(),
            self.seed
        );
        layout
    }
}
