// grid.rs - Grid type for Conway's Game of Life
//
// A grid is built once per generation and never mutated afterwards; every
// "change" (stepping, toggling, seeding) produces a new grid.

use std::fmt;

use rand::Rng;
use tracing::trace;

use crate::error::{LifeError, Result};
use crate::rule;

pub type TRow = Vec<bool>;

/// Moore neighborhood, relative to the centre cell.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Characters used when rendering a grid as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const SQUARES: Glyphs = Glyphs { alive: '■', dead: '□' };
    pub const SPARSE: Glyphs = Glyphs { alive: '■', dead: ' ' };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::SQUARES
    }
}

/// Bounded `height x width` lattice of cells indexed `[row][col]`.
///
/// Equality is element-wise and includes the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<TRow>,
}

impl Grid {
    /// All-dead grid. Zero in either dimension is rejected.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![vec![false; width]; height],
        })
    }

    /// Builds a grid by asking `alive` for every `(row, col)`.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut alive: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self> {
        let mut grid = Self::new(height, width)?;
        for (row, cells) in grid.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = alive(row, col);
            }
        }
        Ok(grid)
    }

    /// Builds a grid from explicit rows; every row must have the same length.
    pub fn from_rows(rows: Vec<TRow>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions { height, width });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LifeError::Ragged { row, expected: width, found });
        }
        Ok(Self { height, width, cells: rows })
    }

    /// Parses a text picture, one line per row. `alive` marks live cells;
    /// any other character is dead. Blank lines are skipped.
    pub fn parse(text: &str, alive: char) -> Result<Self> {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().map(|c| c == alive).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Each cell independently becomes live with probability `survival_rate`.
    ///
    /// The rate is compared against a uniform draw in `[0, 1)`, so rates at or
    /// below zero give an all-dead grid and rates at or above one an all-live
    /// grid. The caller owns the generator and seeds it once.
    pub fn randomized<R: Rng>(mut self, survival_rate: f64, rng: &mut R) -> Self {
        for cell in self.cells.iter_mut().flatten() {
            *cell = rng.random::<f64>() < survival_rate;
        }
        trace!(population = self.population(), survival_rate, "randomized grid");
        self
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Out-of-range positions read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Live cells among the 8 Moore neighbors of `(row, col)`.
    ///
    /// Positions outside the grid count as dead: the edges are walls, not a
    /// torus, so corners see at most 3 neighbors and edges at most 5.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_alive(nr, nc) {
                count += 1;
            }
        }
        count
    }

    /// Next generation. Every cell is computed from `self` only, so the
    /// update is simultaneous.
    pub fn step(&self) -> Grid {
        let cells = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        rule::next_state(self.cells[row][col], self.count_live_neighbors(row, col))
                    })
                    .collect()
            })
            .collect();
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Copy of this grid with the cell at `(row, col)` flipped.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Grid> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let mut next = self.clone();
        next.cells[row][col] = !next.cells[row][col];
        Ok(next)
    }

    /// One line per row, one glyph per cell, rows separated by `\n`.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 3 + 1));
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&alive| if alive { glyphs.alive } else { glyphs.dead }));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}
