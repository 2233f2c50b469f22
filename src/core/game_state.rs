//! Game state module - the rules layer tying grid, shapes, and
//! randomization together.
//!
//! All state transitions happen synchronously inside command calls; the
//! host owns scheduling and delivers gravity as [`GameState::tick`].
//! Movement commands are no-ops outside the playing state; pause
//! toggling works while playing or paused, and restart only from game
//! over.

use crate::core::grid::Grid;
use crate::core::rng::PieceSource;
use crate::core::shapes::{shape_cells, spawn_position, try_rotate, ShapeCells};
use crate::core::snapshot::GameSnapshot;
use crate::types::{GameAction, GameEvent, ShapeId, ROW_CLEAR_SCORE};

/// The currently falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: ShapeId,
    /// Current cell offsets; rotation is the only mutation.
    pub cells: ShapeCells,
    /// Anchor position added to every offset.
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a piece of the given shape at the spawn anchor.
    pub fn new(shape: ShapeId) -> Self {
        let (row, col) = spawn_position();
        Self {
            shape,
            cells: shape_cells(shape),
            row,
            col,
        }
    }

    /// Absolute grid cells: anchor plus each offset.
    pub fn absolute_cells(&self) -> [(i8, i8); 4] {
        self.cells.map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Check that every cell rests on an open grid position.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&(dr, dc)| grid.is_open(self.row + dr, self.col + dc))
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    source: PieceSource,
    score: u32,
    paused: bool,
    game_over: bool,
    /// Last lifecycle transition, consumed by the host via `take_event`.
    last_event: Option<GameEvent>,
}

impl GameState {
    /// Create a game with an empty grid and a freshly spawned piece.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            active: None,
            source: PieceSource::new(seed),
            score: 0,
            paused: false,
            game_over: false,
            last_event: None,
        };
        state.spawn();
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Absolute cells of the active piece, for rendering.
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.absolute_cells())
    }

    /// Fill a snapshot in place so callers can reuse the buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.active_cells();
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Take and clear the last lifecycle event.
    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Gravity step: one automatic downward move.
    ///
    /// Returns true iff the piece descended; a blocked descent locks it
    /// (see [`GameState::try_move`]). No-op while paused or game over.
    pub fn tick(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Translate the active piece by the given deltas.
    ///
    /// A blocked strictly-downward move is the piece's end of life: it
    /// locks into the grid, full rows clear and score, and the next
    /// piece spawns (possibly ending the game). A blocked sideways move
    /// changes nothing. Returns true iff the piece moved.
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let fits = active.cells.iter().all(|&(dr, dc)| {
            self.grid
                .is_open(active.row + dr + d_row, active.col + dc + d_col)
        });

        if fits {
            self.active = Some(ActivePiece {
                row: active.row + d_row,
                col: active.col + d_col,
                ..active
            });
            return true;
        }

        if d_row == 1 && d_col == 0 {
            self.lock_active();
        }
        false
    }

    /// Drop the piece straight down and lock it.
    ///
    /// Locks even when the piece cannot descend at all. No-op while
    /// paused or game over.
    pub fn hard_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };

        while active
            .cells
            .iter()
            .all(|&(dr, dc)| self.grid.is_open(active.row + dr + 1, active.col + dc))
        {
            active.row += 1;
        }

        self.active = Some(active);
        self.lock_active();
        true
    }

    /// Rotate the active piece clockwise about its fixed center.
    ///
    /// The square is rotationally symmetric and stays as-is. A rotation
    /// whose cells would collide or leave the grid is rejected; it
    /// never locks the piece. Returns true iff the piece rotated.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = try_rotate(active.shape, &active.cells, active.row, active.col, |r, c| {
            self.grid.is_open(r, c)
        });
        match rotated {
            Some(cells) => {
                self.active = Some(ActivePiece { cells, ..active });
                true
            }
            None => false,
        }
    }

    /// Toggle between playing and paused. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Begin a new game. Only accepted from the game-over state.
    pub fn restart(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        self.grid.reset();
        self.score = 0;
        self.game_over = false;
        self.paused = false;
        self.last_event = Some(GameEvent::Restarted);
        self.spawn();
        true
    }

    /// Apply a discrete player command.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::SoftDrop => self.try_move(1, 0),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Place a specific shape at the spawn anchor, replacing any
    /// current piece. Useful for scripted games and tests.
    ///
    /// A blocked spawn is the game-over transition, not an error: the
    /// engine raises [`GameEvent::GameOver`] and accepts no further
    /// movement until restarted.
    pub fn spawn_shape(&mut self, shape: ShapeId) -> bool {
        let piece = ActivePiece::new(shape);
        if piece.fits(&self.grid) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            self.game_over = true;
            self.last_event = Some(GameEvent::GameOver { score: self.score });
            false
        }
    }

    /// Draw a random shape and place it at the spawn anchor.
    fn spawn(&mut self) -> bool {
        let shape = self.source.draw();
        self.spawn_shape(shape)
    }

    /// Merge the active piece into the grid, clear rows, spawn the next.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.grid.lock(&active.absolute_cells());
        let cleared = self.grid.clear_full_rows();
        self.score += ROW_CLEAR_SCORE * cleared;
        self.spawn();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
