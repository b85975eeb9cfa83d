use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} must be positive multiples of 8")]
    InvalidDimension { width: usize, height: usize },

    #[error("density {0} must lie within [0, 1]")]
    InvalidDensity(f64),

    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("malformed plaintext pattern: {0}")]
    InvalidPattern(String),
}

/// Toroidal Game of Life field with one bit per cell.
///
/// Cells are packed row-major, 8 horizontally adjacent cells per byte,
/// most significant bit first: column `x` of a row lives in byte `x / 8`
/// under the mask `0x80 >> (x % 8)`.
///
/// Coordinates passed to [`Grid::set_cell`], [`Grid::clear_cell`],
/// [`Grid::is_live`] and [`Grid::count_live_neighbors`] must lie inside the
/// grid. They are never wrapped; out-of-range coordinates panic with
/// [`GridError::OutOfBounds`].
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl Grid {
    pub const CELLS_IN_BYTE: usize = 8;

    /// Creates an all-dead grid.
    pub fn blank(width: usize, height: usize) -> Result<Self, GridError> {
        let is_valid = |side: usize| side != 0 && side % Self::CELLS_IN_BYTE == 0;
        if !is_valid(width) || !is_valid(height) {
            return Err(GridError::InvalidDimension { width, height });
        }
        let bytes_per_row = width / Self::CELLS_IN_BYTE;
        Ok(Self {
            cells: vec![0; bytes_per_row * height],
            width,
            height,
            bytes_per_row,
        })
    }

    /// Creates a grid where every cell is live with probability `density`,
    /// seeded from system entropy.
    pub fn new(width: usize, height: usize, density: f64) -> Result<Self, GridError> {
        Self::random(width, height, density, None)
    }

    /// Same as [`Grid::new`], but reproducible when `seed` is given.
    ///
    /// Densities `0` and `1` produce all-dead and all-live grids respectively.
    pub fn random(
        width: usize,
        height: usize,
        density: f64,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::blank(width, height)?;
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for y in 0..height {
            for x in 0..width {
                if rng.gen_bool(density) {
                    grid.set_cell(x, y);
                }
            }
        }

        tracing::info!(
            width,
            height,
            density,
            seed,
            population = grid.population(),
            "grid initialized"
        );
        Ok(grid)
    }

    /// Parses a plaintext picture: one line per row, `.` for dead cells and
    /// `O` (or `*`) for live ones. Blank lines and lines starting with `!`
    /// are skipped.
    pub fn from_plaintext(text: &str) -> Result<Self, GridError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.chars().count());

        let mut grid = Self::blank(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::InvalidPattern(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '.' => {}
                    'O' | '*' => grid.set_cell(x, y),
                    _ => {
                        return Err(GridError::InvalidPattern(format!(
                            "unexpected character {c:?} at ({x}, {y})"
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed cells, `width / 8` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Commits a freshly computed generation; the previous one is left in
    /// `next` so its allocation can be reused.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<u8>) {
        assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }

    fn checked_locate(&self, x: usize, y: usize) -> Result<(usize, u8), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = y * self.bytes_per_row + x / Self::CELLS_IN_BYTE;
        let mask = 0x80 >> (x % Self::CELLS_IN_BYTE);
        Ok((idx, mask))
    }

    fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        self.checked_locate(x, y).unwrap_or_else(|err| panic!("{err}"))
    }

    // bounds are the caller's business
    fn read(&self, x: usize, y: usize) -> bool {
        let idx = y * self.bytes_per_row + x / Self::CELLS_IN_BYTE;
        self.cells[idx] & (0x80 >> (x % Self::CELLS_IN_BYTE)) != 0
    }

    pub fn set_cell(&mut self, x: usize, y: usize) {
        let (idx, mask) = self.locate(x, y);
        self.cells[idx] |= mask;
    }

    pub fn clear_cell(&mut self, x: usize, y: usize) {
        let (idx, mask) = self.locate(x, y);
        self.cells[idx] &= !mask;
    }

    pub fn is_live(&self, x: usize, y: usize) -> bool {
        let (idx, mask) = self.locate(x, y);
        self.cells[idx] & mask != 0
    }

    /// Flips a cell and returns its new state. Unlike the other accessors
    /// this one reports out-of-range coordinates as an error.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let (idx, mask) = self.checked_locate(x, y)?;
        self.cells[idx] ^= mask;
        Ok(self.cells[idx] & mask != 0)
    }

    /// Number of live cells among the 8 Moore neighbors of `(x, y)`, with
    /// both axes wrapped around.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.locate(x, y);
        let x1 = if x == 0 { self.width - 1 } else { x - 1 };
        let x2 = if x == self.width - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { self.height - 1 } else { y - 1 };
        let y2 = if y == self.height - 1 { 0 } else { y + 1 };
        self.read(x1, y1) as u8
            + self.read(x, y1) as u8
            + self.read(x2, y1) as u8
            + self.read(x1, y) as u8
            + self.read(x2, y) as u8
            + self.read(x1, y2) as u8
            + self.read(x, y2) as u8
            + self.read(x2, y2) as u8
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|byte| byte.count_ones() as usize).sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.read(x, y) { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}
