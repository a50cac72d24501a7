//! Static shape tables: occupancy matrices per kind and rotation state.
//!
//! A shape is a 4x4 0/1 matrix anchored at the piece's bounding-box origin.
//! The matrix for a given (kind, rotation) never changes at runtime; rotating
//! a piece only moves an index into these tables. Spawn-state occupancy sits
//! in the top rows of the box so a fresh piece enters the grid at row 0.

use gridfall_types::{ShapeKind, SHAPE_SIZE};

/// 4x4 occupancy matrix, row-major, 1 = occupied.
pub type ShapeGrid = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

const I_SHAPES: [ShapeGrid; 2] = [
    [
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 0, 0, 0],
        [1, 0, 0, 0],
        [1, 0, 0, 0],
        [1, 0, 0, 0],
    ],
];

const O_SHAPES: [ShapeGrid; 1] = [[
    [1, 1, 0, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]];

const T_SHAPES: [ShapeGrid; 4] = [
    [
        [1, 1, 1, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 1, 0, 0],
        [1, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 1, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 0, 0, 0],
        [1, 1, 0, 0],
        [1, 0, 0, 0],
        [0, 0, 0, 0],
    ],
];

const S_SHAPES: [ShapeGrid; 2] = [
    [
        [0, 1, 1, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 0, 0, 0],
        [1, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
    ],
];

const Z_SHAPES: [ShapeGrid; 2] = [
    [
        [1, 1, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 1, 0, 0],
        [1, 1, 0, 0],
        [1, 0, 0, 0],
        [0, 0, 0, 0],
    ],
];

const J_SHAPES: [ShapeGrid; 4] = [
    [
        [1, 0, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 1, 0, 0],
        [1, 0, 0, 0],
        [1, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 1, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 1, 0, 0],
        [0, 1, 0, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
    ],
];

const L_SHAPES: [ShapeGrid; 4] = [
    [
        [0, 0, 1, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 0, 0, 0],
        [1, 0, 0, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 1, 1, 0],
        [1, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [1, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
    ],
];

/// All rotation states for a kind, in rotation order.
pub fn shape_table(kind: ShapeKind) -> &'static [ShapeGrid] {
    match kind {
        ShapeKind::I => &I_SHAPES,
        ShapeKind::O => &O_SHAPES,
        ShapeKind::T => &T_SHAPES,
        ShapeKind::S => &S_SHAPES,
        ShapeKind::Z => &Z_SHAPES,
        ShapeKind::J => &J_SHAPES,
        ShapeKind::L => &L_SHAPES,
    }
}

/// Number of distinct rotation states for a kind.
pub fn rotation_count(kind: ShapeKind) -> usize {
    shape_table(kind).len()
}

/// Occupancy matrix for (kind, rotation). The rotation index wraps.
pub fn shape_at(kind: ShapeKind, rotation: usize) -> &'static ShapeGrid {
    let table = shape_table(kind);
    &table[rotation % table.len()]
}
