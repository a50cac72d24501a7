//! Game state module - the core state machine.
//!
//! `GameState` owns the grid, the falling piece and the queued next piece.
//! Every movement operation is tentative-mutate, collision-check, rollback:
//! a piece is never observable in a colliding position. The one exception
//! is the downward step, whose rejected move doubles as the lock trigger -
//! the piece rests exactly where its last legal position was.

use gridfall_types::GameCommand;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::ShapeRng;
use crate::snapshot::GameSnapshot;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    current: Piece,
    next: Piece,
    rng: ShapeRng,
    /// False is terminal: only a reset clears it.
    active: bool,
    score: u32,
    lines: u32,
}

impl GameState {
    /// Create a new game on an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize, seed: u32) -> Self {
        Self::with_grid(Grid::new(rows, cols), seed)
    }

    /// Create a new game over a pre-populated grid.
    ///
    /// If the first piece has no legal spawn position the game starts in
    /// the game-over state.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let mut rng = ShapeRng::new(seed);
        let current = Piece::new(rng.next_kind());
        let next = Piece::new(rng.next_kind());
        let mut state = Self {
            grid,
            current,
            next,
            rng,
            active: true,
            score: 0,
            lines: 0,
        };
        if state.collision(&state.current) {
            state.active = false;
        }
        state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The single source of truth for legality: true iff any occupied cell
    /// of the piece maps outside the grid or onto a locked cell.
    pub fn collision(&self, piece: &Piece) -> bool {
        piece.cells().any(|(row, col)| match self.grid.get(row, col) {
            None => true,
            Some(Some(_)) => true,
            Some(None) => false,
        })
    }

    /// Shift the falling piece laterally by `delta` columns, or do nothing
    /// if the shifted position collides.
    pub fn move_lateral(&mut self, delta: i32) {
        if !self.active {
            return;
        }
        self.current.translate(0, delta);
        if self.collision(&self.current) {
            self.current.translate(0, -delta);
        }
    }

    /// Advance the falling piece's rotation one step, or do nothing if the
    /// rotated shape collides. No wall kicks: rotate-or-reject.
    pub fn rotate(&mut self) {
        if !self.active {
            return;
        }
        let prior = self.current.rotation;
        self.current.rotate();
        if self.collision(&self.current) {
            self.current.rotation = prior;
        }
    }

    /// One downward step (gravity or soft drop).
    ///
    /// A rejected descent is not a no-op: the piece has landed, so it locks
    /// at the position the step was attempted from.
    pub fn tick_down(&mut self) {
        if !self.active {
            return;
        }
        self.current.translate(1, 0);
        if self.collision(&self.current) {
            self.current.translate(-1, 0);
            self.lock();
        }
    }

    /// Gravity entry point for the external frame driver. Semantically one
    /// soft-drop step.
    pub fn gravity_tick(&mut self) {
        self.tick_down();
    }

    /// Apply a discrete input command. Everything except `Reset` is ignored
    /// once the game is over.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MoveLeft => self.move_lateral(-1),
            GameCommand::MoveRight => self.move_lateral(1),
            GameCommand::Rotate => self.rotate(),
            GameCommand::SoftDrop => self.tick_down(),
            GameCommand::Reset => self.reset(),
        }
    }

    /// Discard the whole game and start over on an empty grid of the same
    /// dimensions, reseeding from the current RNG state so the next game
    /// gets a fresh piece sequence.
    pub fn reset(&mut self) {
        *self = Self::new(self.grid.rows(), self.grid.cols(), self.rng.state());
    }

    /// Write the landed piece into the grid, clear rows, score, and promote
    /// the next piece. Called only from the rejected-descent path, so the
    /// resting position is known to be legal.
    fn lock(&mut self) {
        let piece = self.current;
        for (row, col) in piece.cells() {
            let _ = self.grid.set(row, col, piece.color);
        }

        let cleared = self.grid.clear_full_rows();
        // Quadratic reward: one tetris outscores four singles.
        self.score += (cleared * cleared) as u32;
        self.lines += cleared as u32;

        self.current = self.next;
        self.next = Piece::new(self.rng.next_kind());
        if self.collision(&self.current) {
            self.active = false;
        }
    }

    /// Fill `out` with a read-only view of the game, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.current = self.current.into();
        out.next = self.next.into();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = !self.active;
    }

    /// Allocate a fresh snapshot of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(
            gridfall_types::GRID_ROWS,
            gridfall_types::GRID_COLS,
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{SPAWN_COL, SPAWN_ROW};
    use gridfall_types::{ShapeKind, GRID_COLS, GRID_ROWS};

    fn new_game(seed: u32) -> GameState {
        GameState::new(GRID_ROWS, GRID_COLS, seed)
    }

    fn filler() -> gridfall_types::Color {
        ShapeKind::I.color()
    }

    /// Tick until the current piece locks (the grid gains cells).
    fn drop_until_lock(state: &mut GameState) {
        let before = state.grid().cells().iter().filter(|c| c.is_some()).count();
        let mut ticks = 0;
        loop {
            state.tick_down();
            ticks += 1;
            let now = state.grid().cells().iter().filter(|c| c.is_some()).count();
            if now != before || !state.is_active() {
                return;
            }
            assert!(ticks <= GRID_ROWS + 1, "piece never locked");
        }
    }

    #[test]
    fn new_game_starts_active_with_zero_score() {
        let state = new_game(12345);
        assert!(state.is_active());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.current().row, SPAWN_ROW);
        assert_eq!(state.current().col, SPAWN_COL);
        assert_eq!(state.next().rotation, 0);
    }

    #[test]
    fn collision_false_on_empty_grid_at_spawn() {
        let state = new_game(1);
        assert!(!state.collision(state.current()));
    }

    #[test]
    fn collision_true_beyond_lateral_bounds() {
        let state = new_game(1);
        let mut left = *state.current();
        left.col = -1;
        assert!(state.collision(&left));

        let mut right = *state.current();
        right.col = GRID_COLS as i32;
        assert!(state.collision(&right));
    }

    #[test]
    fn collision_true_below_bottom() {
        let state = new_game(1);
        let mut piece = *state.current();
        piece.row = GRID_ROWS as i32;
        assert!(state.collision(&piece));
    }

    #[test]
    fn collision_true_on_locked_cell() {
        let mut state = new_game(1);
        let piece = *state.current();
        let (row, col) = piece.cells().next().unwrap();
        state.grid_mut().set(row, col, filler()).unwrap();
        assert!(state.collision(&piece));
    }

    #[test]
    fn move_lateral_commits_when_legal() {
        let mut state = new_game(1);
        let col = state.current().col;
        state.move_lateral(1);
        assert_eq!(state.current().col, col + 1);
        state.move_lateral(-1);
        assert_eq!(state.current().col, col);
    }

    #[test]
    fn move_lateral_rolls_back_atomically_at_the_wall() {
        let mut state = new_game(1);
        for _ in 0..GRID_COLS {
            state.move_lateral(-1);
        }
        let before = *state.current();
        state.move_lateral(-1);
        assert_eq!(*state.current(), before);
    }

    #[test]
    fn rotate_rolls_back_when_blocked() {
        let mut state = new_game(1);
        // Lock every cell except the ones the piece occupies: any rotation
        // that moves a cell must collide and be rejected whole.
        let occupied: Vec<(i32, i32)> = state.current().cells().collect();
        for row in 0..GRID_ROWS as i32 {
            for col in 0..GRID_COLS as i32 {
                if !occupied.contains(&(row, col)) {
                    state.grid_mut().set(row, col, filler()).unwrap();
                }
            }
        }
        let before = *state.current();
        state.rotate();
        assert_eq!(*state.current(), before);
    }

    #[test]
    fn rotate_changes_only_the_rotation_index() {
        let mut state = new_game(1);
        let before = *state.current();
        state.rotate();
        let after = *state.current();
        assert_eq!(after.row, before.row);
        assert_eq!(after.col, before.col);
        assert_eq!(after.kind, before.kind);
        assert_eq!(after.color, before.color);
    }

    #[test]
    fn tick_down_descends_one_row() {
        let mut state = new_game(1);
        let row = state.current().row;
        state.tick_down();
        assert_eq!(state.current().row, row + 1);
    }

    #[test]
    fn piece_locks_at_the_bottom_and_promotes_next() {
        let mut state = new_game(1);
        let queued = *state.next();
        drop_until_lock(&mut state);
        let locked = state.grid().cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(locked, 4);
        assert_eq!(state.current().kind, queued.kind);
        assert_eq!(state.current().color, queued.color);
        assert_eq!(state.current().row, SPAWN_ROW);
        assert_eq!(state.current().col, SPAWN_COL);
        assert_eq!(state.next().rotation, 0);
    }

    #[test]
    fn lock_with_no_full_rows_scores_zero() {
        let mut state = new_game(1);
        drop_until_lock(&mut state);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
    }

    #[test]
    fn clearing_one_row_scores_one() {
        let mut state = new_game(1);
        // Fill the bottom row except for the columns the current piece's
        // bottom cells will land on, then drop it straight down.
        let bottom = (GRID_ROWS - 1) as i32;
        let piece = *state.current();
        let landing: Vec<i32> = {
            let mut cols: Vec<i32> = piece.cells().map(|(_, c)| c).collect();
            cols.sort_unstable();
            cols.dedup();
            cols
        };
        for col in 0..GRID_COLS as i32 {
            if !landing.contains(&col) {
                state.grid_mut().set(bottom, col, filler()).unwrap();
            }
        }
        // Not a guaranteed clear for every shape, but the score law holds
        // either way: k full rows add exactly k*k.
        drop_until_lock(&mut state);
        let k = state.lines();
        assert_eq!(state.score(), k * k);
    }

    #[test]
    fn quadratic_scoring_for_multi_row_clears() {
        // Seed 6 spawns an O piece: two full box rows over columns 4-5.
        let mut state = new_game(6);
        assert_eq!(state.current().kind, ShapeKind::O);

        let rows = GRID_ROWS as i32;
        for row in [rows - 2, rows - 1] {
            for col in 0..GRID_COLS as i32 {
                if col != 4 && col != 5 {
                    state.grid_mut().set(row, col, filler()).unwrap();
                }
            }
        }
        drop_until_lock(&mut state);

        // One lock cleared two rows at once: 4 points, not 2.
        assert_eq!(state.lines(), 2);
        assert_eq!(state.score(), 4);
        assert!(state.grid().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn spawn_collision_after_lock_ends_the_game() {
        // Fill everything below row 2 except one column so no row is ever
        // full; the first piece locks at the top and the following spawn
        // has nowhere to go.
        let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
        for row in 2..GRID_ROWS as i32 {
            for col in 1..GRID_COLS as i32 {
                grid.set(row, col, filler()).unwrap();
            }
        }
        let mut state = GameState::with_grid(grid, 1);
        assert!(state.is_active());

        for _ in 0..8 {
            state.gravity_tick();
            if !state.is_active() {
                break;
            }
        }
        assert!(!state.is_active());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn blocked_spawn_at_construction_is_game_over() {
        let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
        for row in 0..GRID_ROWS as i32 {
            for col in 1..GRID_COLS as i32 {
                grid.set(row, col, filler()).unwrap();
            }
        }
        let state = GameState::with_grid(grid, 1);
        assert!(!state.is_active());
    }

    #[test]
    fn game_over_is_terminal_for_every_command_except_reset() {
        let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
        for row in 0..GRID_ROWS as i32 {
            for col in 1..GRID_COLS as i32 {
                grid.set(row, col, filler()).unwrap();
            }
        }
        let mut state = GameState::with_grid(grid, 1);
        assert!(!state.is_active());

        let before = state.snapshot();
        for _ in 0..50 {
            state.apply(GameCommand::MoveLeft);
            state.apply(GameCommand::MoveRight);
            state.apply(GameCommand::Rotate);
            state.apply(GameCommand::SoftDrop);
            state.gravity_tick();
        }
        assert_eq!(state.snapshot(), before);

        state.apply(GameCommand::Reset);
        assert!(state.is_active());
        assert_eq!(state.score(), 0);
        assert!(state.grid().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn reset_keeps_dimensions_and_reseeds() {
        let mut state = GameState::new(12, 8, 42);
        state.tick_down();
        state.apply(GameCommand::Reset);
        assert_eq!(state.grid().rows(), 12);
        assert_eq!(state.grid().cols(), 8);
        assert!(state.is_active());
        assert_eq!(state.current().row, SPAWN_ROW);
    }

    #[test]
    fn same_seed_produces_the_same_piece_sequence() {
        let a = new_game(777);
        let b = new_game(777);
        assert_eq!(a.current().kind, b.current().kind);
        assert_eq!(a.next().kind, b.next().kind);
    }

    #[test]
    fn snapshot_reflects_engine_state() {
        let mut state = new_game(9);
        state.move_lateral(1);
        let snap = state.snapshot();
        assert_eq!(snap.rows, GRID_ROWS);
        assert_eq!(snap.cols, GRID_COLS);
        assert_eq!(snap.cells.len(), GRID_ROWS * GRID_COLS);
        assert_eq!(snap.current.col, state.current().col);
        assert_eq!(snap.next.kind, state.next().kind);
        assert!(!snap.game_over);
    }
}
