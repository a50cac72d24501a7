//! Read-only snapshots of the engine for presentation layers.
//!
//! The view never touches `GameState` directly; the runner fills a snapshot
//! after each mutation and hands it to the renderer. `snapshot_into` reuses
//! the cell buffer so the render path stays allocation-free after warmup.

use gridfall_types::{Color, ShapeKind};

use crate::grid::Cell;
use crate::piece::{Piece, SPAWN_COL, SPAWN_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub row: i32,
    pub col: i32,
    pub color: Color,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
            color: value.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Flat row-major copy of the grid cells.
    pub cells: Vec<Cell>,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked color at `(row, col)`, or `None` when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let placeholder = PieceSnapshot {
            kind: ShapeKind::I,
            rotation: 0,
            row: SPAWN_ROW,
            col: SPAWN_COL,
            color: ShapeKind::I.color(),
        };
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            current: placeholder,
            next: placeholder,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
