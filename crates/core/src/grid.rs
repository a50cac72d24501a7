//! Grid module - the fixed-size playing-field cell matrix.
//!
//! Each cell is either empty or holds the color a piece locked with.
//! Storage is a flat row-major `Vec` sized once at construction.
//! Coordinates are `(row, col)` with row 0 at the top; signed coordinates
//! let callers probe positions outside the field, which `get` reports as a
//! distinct out-of-range result rather than folding it into "occupied".

use gridfall_types::Color;
use thiserror::Error;

/// One grid cell: `None` is empty, `Some` holds a locked color.
pub type Cell = Option<Color>;

/// Returned by low-level writes with invalid coordinates. Never surfaces to
/// users; the engine folds it into its collision predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
pub struct OutOfBounds {
    pub row: i32,
    pub col: i32,
    pub rows: usize,
    pub cols: usize,
}

/// The playing field. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat cell storage, row-major (row * cols + col).
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    /// Cell at `(row, col)`.
    ///
    /// `None` means out of range; `Some(None)` an empty in-range cell;
    /// `Some(Some(color))` a locked cell.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a locked color at `(row, col)`.
    pub fn set(&mut self, row: i32, col: i32, color: Color) -> Result<(), OutOfBounds> {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                Ok(())
            }
            None => Err(OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// True only for an in-range cell holding no locked color.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// True if every cell of row `row` holds a locked color.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned top to bottom in index order. For each full row,
    /// every row above it shifts down one position (relative order
    /// preserved) and a fresh empty row enters at index 0.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.rows {
            if !self.is_row_full(row) {
                continue;
            }
            cleared += 1;
            for r in (1..=row).rev() {
                let src = (r - 1) * self.cols;
                let dst = r * self.cols;
                self.cells.copy_within(src..src + self.cols, dst);
            }
            for cell in &mut self.cells[..self.cols] {
                *cell = None;
            }
        }
        cleared
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
