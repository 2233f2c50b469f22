//! Core game logic - pure, deterministic, and testable.
//!
//! This module contains all the game rules and state management. It has
//! zero dependencies on UI or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 occupancy grid with collision checks and row clearing
//! - [`shapes`]: the five piece geometries and fixed-center rotation
//! - [`rng`]: seedable uniform piece randomization
//! - [`game_state`]: the tick/command state machine gluing it together
//! - [`snapshot`]: read-only state copies for presentation layers
//!
//! # Game Rules
//!
//! - Gravity is an external `tick()`; the engine owns no timer.
//! - Only a blocked descent locks a piece; blocked sideways moves and
//!   rejected rotations are non-events.
//! - Each cleared row is worth a flat 100 points.
//! - A blocked spawn ends the game; restart is the only way back.

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use game_state::{ActivePiece, GameState};
pub use grid::Grid;
pub use rng::{PieceSource, SimpleRng};
pub use shapes::{shape_cells, spawn_position, try_rotate};
pub use snapshot::GameSnapshot;
