//! quadris - a terminal falling-block puzzle game.
//!
//! The [`core`] module is the pure rules engine: it decides what
//! positions are legal, how pieces move, rotate and lock, when rows
//! clear, and when the game ends. Everything else is a thin shell:
//! [`term`] draws snapshots, [`input`] maps keys to commands,
//! [`scores`] persists the leaderboard, and the binary owns timing.

pub mod core;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;
