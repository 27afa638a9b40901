// patterns.rs - Named seed patterns
//
// Cells are (row, col) offsets from the pattern's top-left corner.

use crate::error::{LifeError, Result};
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beehive",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Looks a pattern up by name, ignoring case, spaces and hyphens
    /// ("r-pentomino", "GosperGliderGun").
    pub fn find(name: &str) -> Result<&'static Pattern> {
        let wanted = normalize(name);
        PATTERNS
            .iter()
            .find(|p| normalize(p.name) == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    /// `(rows, cols)` of the pattern's bounding box.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// A `height x width` grid holding only this pattern, centred.
    pub fn centered(&self, height: usize, width: usize) -> Result<Grid> {
        let (rows, cols) = self.bounds();
        if rows > height || cols > width {
            return Err(LifeError::PatternTooLarge { name: self.name, height, width });
        }
        self.placed(height, width, (height - rows) / 2, (width - cols) / 2)
    }

    /// A `height x width` grid holding only this pattern, its top-left corner at
    /// `(top, left)`. Cells that would land outside the grid are an error.
    pub fn placed(&self, height: usize, width: usize, top: usize, left: usize) -> Result<Grid> {
        let mut rows = vec![vec![false; width]; height];
        for &(r, c) in self.cells {
            let (Some(row), Some(col)) = (top.checked_add(r), left.checked_add(c)) else {
                return Err(LifeError::PatternTooLarge { name: self.name, height, width });
            };
            if row >= height || col >= width {
                return Err(LifeError::PatternTooLarge { name: self.name, height, width });
            }
            rows[row][col] = true;
        }
        Grid::from_rows(rows)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
