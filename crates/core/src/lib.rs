//! Core game engine - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It has zero
//! dependencies on UI or I/O:
//!
//! - [`grid`]: the fixed-size playing field with row clearing
//! - [`shapes`]: static occupancy tables per kind and rotation state
//! - [`piece`]: the falling piece as a plain value holder
//! - [`game`]: the state machine (collision, movement, locking, scoring)
//! - [`rng`]: seeded LCG piece selection for reproducible games
//! - [`snapshot`]: read-only views for presentation layers
//!
//! # Example
//!
//! ```
//! use gridfall_core::GameState;
//! use gridfall_types::{GameCommand, GRID_COLS, GRID_ROWS};
//!
//! let mut game = GameState::new(GRID_ROWS, GRID_COLS, 12345);
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.gravity_tick();
//! assert!(game.is_active());
//! ```

pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use gridfall_types as types;

pub use game::GameState;
pub use grid::{Cell, Grid, OutOfBounds};
pub use piece::Piece;
pub use rng::{ShapeRng, SimpleRng};
pub use shapes::{rotation_count, shape_at, shape_table, ShapeGrid};
pub use snapshot::{GameSnapshot, PieceSnapshot};
