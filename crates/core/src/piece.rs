//! Piece module - the falling tetromino as a plain value holder.
//!
//! A piece is an immutable shape (kind + rotation index into the static
//! tables) plus a mutable bounding-box position. It performs no legality
//! checks of its own; the engine validates every move against its collision
//! predicate before committing.

use gridfall_types::{Color, ShapeKind, SHAPE_SIZE};

use crate::shapes::{rotation_count, shape_at, ShapeGrid};

/// Bounding-box origin of a freshly spawned piece.
pub const SPAWN_ROW: i32 = 0;
pub const SPAWN_COL: i32 = 4;

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: usize,
    /// Row of the bounding box origin within the grid.
    pub row: i32,
    /// Column of the bounding box origin within the grid.
    pub col: i32,
    pub color: Color,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position, rotation 0.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: SPAWN_ROW,
            col: SPAWN_COL,
            color: kind.color(),
        }
    }

    /// Occupancy matrix for the current rotation.
    pub fn shape(&self) -> &'static ShapeGrid {
        shape_at(self.kind, self.rotation)
    }

    /// Advance the rotation index one step, wrapping at the kind's state
    /// count. The shape tables themselves are never touched.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % rotation_count(self.kind);
    }

    /// Shift the bounding box by `(d_row, d_col)`.
    pub fn translate(&mut self, d_row: i32, d_col: i32) {
        self.row += d_row;
        self.col += d_col;
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let shape = self.shape();
        let (row, col) = (self.row, self.col);
        (0..SHAPE_SIZE).flat_map(move |r| {
            (0..SHAPE_SIZE).filter_map(move |c| {
                (shape[r][c] == 1).then_some((row + r as i32, col + c as i32))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_spawns_at_origin() {
        let piece = Piece::new(ShapeKind::T);
        assert_eq!(piece.kind, ShapeKind::T);
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.row, SPAWN_ROW);
        assert_eq!(piece.col, SPAWN_COL);
        assert_eq!(piece.color, ShapeKind::T.color());
    }

    #[test]
    fn rotate_wraps_at_state_count() {
        let mut piece = Piece::new(ShapeKind::S);
        piece.rotate();
        assert_eq!(piece.rotation, 1);
        piece.rotate();
        assert_eq!(piece.rotation, 0);

        let mut square = Piece::new(ShapeKind::O);
        square.rotate();
        assert_eq!(square.rotation, 0);
    }

    #[test]
    fn rotate_never_changes_position() {
        let mut piece = Piece::new(ShapeKind::J);
        piece.translate(5, -2);
        let (row, col) = (piece.row, piece.col);
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!((piece.row, piece.col), (row, col));
    }

    #[test]
    fn translate_is_additive() {
        let mut piece = Piece::new(ShapeKind::I);
        piece.translate(1, 0);
        piece.translate(0, -3);
        piece.translate(2, 1);
        assert_eq!(piece.row, SPAWN_ROW + 3);
        assert_eq!(piece.col, SPAWN_COL - 2);
    }

    #[test]
    fn cells_follow_the_bounding_box() {
        let piece = Piece::new(ShapeKind::O);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(
            cells,
            vec![
                (SPAWN_ROW, SPAWN_COL),
                (SPAWN_ROW, SPAWN_COL + 1),
                (SPAWN_ROW + 1, SPAWN_COL),
                (SPAWN_ROW + 1, SPAWN_COL + 1),
            ]
        );
    }

    #[test]
    fn cells_always_yield_four_coordinates() {
        for kind in ShapeKind::ALL {
            let mut piece = Piece::new(kind);
            for _ in 0..4 {
                assert_eq!(piece.cells().count(), 4, "{}", kind.as_str());
                piece.rotate();
            }
        }
    }
}
