use crate::Grid;

/// Advances a [`Grid`] by whole generations under the B3/S23 rule.
///
/// Every generation is computed into a scratch buffer from the frozen
/// current one and then swapped in, so no cell ever sees a neighbor's new
/// state. The scratch buffer is kept between steps.
#[derive(Default)]
pub struct Simulator {
    next: Vec<u8>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a cell in the next generation given its current state and
    /// the number of live neighbors.
    pub fn next_state(is_live: bool, neighbors: u8) -> bool {
        if is_live {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        }
    }

    fn update_row(grid: &Grid, y: usize, dst: &mut [u8]) {
        for (i, byte) in dst.iter_mut().enumerate() {
            let mut packed = 0u8;
            for bit in 0..Grid::CELLS_IN_BYTE {
                let x = i * Grid::CELLS_IN_BYTE + bit;
                if Self::next_state(grid.is_live(x, y), grid.count_live_neighbors(x, y)) {
                    packed |= 0x80 >> bit;
                }
            }
            *byte = packed;
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_next(&mut self, grid: &Grid) {
        for (y, dst) in self.next.chunks_exact_mut(grid.bytes_per_row()).enumerate() {
            Self::update_row(grid, y, dst);
        }
    }

    #[cfg(feature = "parallel")]
    fn fill_next(&mut self, grid: &Grid) {
        use rayon::prelude::*;

        // rows are disjoint slices of `next`; `grid` is only read
        self.next
            .par_chunks_exact_mut(grid.bytes_per_row())
            .enumerate()
            .for_each(|(y, dst)| Self::update_row(grid, y, dst));
    }

    /// Replaces the grid's generation with the next one.
    pub fn step(&mut self, grid: &mut Grid) {
        self.next.clear();
        self.next.resize(grid.as_bytes().len(), 0);
        self.fill_next(grid);
        grid.swap_cells(&mut self.next);
        tracing::trace!(population = grid.population(), "generation committed");
    }

    /// Performs `n` steps.
    pub fn update(&mut self, grid: &mut Grid, n: usize) {
        for _ in 0..n {
            self.step(grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(rows: &[&str]) -> Grid {
        Grid::from_plaintext(&rows.join("\n")).unwrap()
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(Simulator::next_state(true, n), n == 2 || n == 3, "n={n}");
            assert_eq!(Simulator::next_state(false, n), n == 3, "n={n}");
        }
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::blank(8, 8).unwrap();
        grid.set_cell(4, 4);
        Simulator::new().step(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = pattern(&[
            "........", "........", "........", "..OOO...", "........", "........", "........",
            "........",
        ]);
        let vertical = pattern(&[
            "........", "........", "...O....", "...O....", "...O....", "........", "........",
            "........",
        ]);
        let mut sim = Simulator::new();
        let mut grid = horizontal.clone();
        for _ in 0..5 {
            sim.step(&mut grid);
            assert_eq!(grid, vertical);
            sim.step(&mut grid);
            assert_eq!(grid, horizontal);
        }
    }

    #[test]
    fn test_block_is_still() {
        // straddles both seams of the torus
        let block = pattern(&[
            "O......O", "........", "........", "........", "........", "........", "........",
            "O......O",
        ]);
        let mut grid = block.clone();
        let mut sim = Simulator::new();
        for _ in 0..10 {
            sim.step(&mut grid);
            assert_eq!(grid, block);
        }
    }

    #[test]
    fn test_glider_wraps_around() {
        // a glider moves one cell diagonally every 4 generations
        let glider = pattern(&[
            ".O......", "..O.....", "OOO.....", "........", "........", "........", "........",
            "........",
        ]);
        let mut grid = glider.clone();
        let mut sim = Simulator::new();
        sim.update(&mut grid, 4);
        assert_ne!(grid, glider);
        assert_eq!(grid.population(), 5);
        assert!(grid.is_live(2, 1) && grid.is_live(3, 2) && grid.is_live(1, 3));
        sim.update(&mut grid, 28);
        assert_eq!(grid, glider);
    }

    #[test]
    fn test_full_grid_dies() {
        let mut grid = Grid::new(16, 8, 1.).unwrap();
        Simulator::new().step(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}
