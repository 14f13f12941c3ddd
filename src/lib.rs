//! Icepush - an ice-sliding block puzzle core
//!
//! The player token slides across a frozen grid until stopped by a wall,
//! plain ground, another object, or the board edge, pushing movable blocks
//! ahead of it. This crate owns the board model, the puzzle generator, and
//! the slide resolver; rendering and input mapping are left to the host.
//!
//! Core modules:
//! - `sim`: Deterministic puzzle core (board model, generation, slide resolution)
//! - `config`: Puzzle configuration with validation and JSON loading

pub mod config;
pub mod sim;

pub use config::{ConfigError, PuzzleConfig};
pub use sim::{
    Board, BoardError, CellType, GameObject, ObjectId, ObjectKind, create_puzzle, move_player,
    slide,
};
