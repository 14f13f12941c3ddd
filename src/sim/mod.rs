//! Deterministic puzzle core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable object order (players, then blocks, by spawn)
//! - No rendering or platform dependencies

pub mod board;
pub mod generate;
pub mod slide;

pub use board::{Board, BoardError, CellType, GameObject, Grid, ObjectId, ObjectKind};
pub use generate::create_puzzle;
pub use slide::{move_player, slide};
