//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Default playing-field dimensions (rows x columns).
pub const GRID_ROWS: usize = 20;
pub const GRID_COLS: usize = 10;

/// Side length of a piece's square bounding box.
pub const SHAPE_SIZE: usize = 4;

/// Input-poll cadence of the runner (milliseconds).
pub const TICK_MS: u64 = 16;

/// One gravity step per this interval (milliseconds).
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// 24-bit RGB color. This is the opaque value a locked cell stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tetromino shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// The fixed shape set, in draw order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Canonical color a piece of this kind locks into the grid with.
    pub const fn color(self) -> Color {
        match self {
            ShapeKind::I => Color::new(80, 220, 220),
            ShapeKind::O => Color::new(240, 220, 80),
            ShapeKind::T => Color::new(200, 120, 220),
            ShapeKind::S => Color::new(100, 220, 120),
            ShapeKind::Z => Color::new(220, 80, 80),
            ShapeKind::J => Color::new(80, 120, 220),
            ShapeKind::L => Color::new(255, 165, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Discrete commands the input layer issues to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Reset,
}
