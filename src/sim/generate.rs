//! Seeded puzzle generation
//!
//! Fills a grid with ice, carves walls/empties/goal out of one shuffled
//! coordinate list, then places objects from a second, independent shuffle.
//! Same seed, same puzzle.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::board::{Board, CellType, Grid, ObjectKind};
use crate::config::{ConfigError, PuzzleConfig};

/// Every coordinate pair of a `width x height` grid, row-major.
fn all_coords(width: i32, height: i32) -> Vec<(i32, i32)> {
    let mut coords = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            coords.push((x, y));
        }
    }
    coords
}

/// Build a fresh puzzle from `config`, deterministically from `seed`.
///
/// Terrain assignment consumes one shuffled coordinate list without
/// replacement, in fixed priority order: walls, then empties, then exactly
/// one goal; untouched cells stay ice. Object placement (one player, then
/// blocks) draws from a second shuffle, so no two objects share a cell but an
/// object may sit on wall or goal terrain. Placement never inspects terrain;
/// terrain solidity is a physics rule, not a placement rule.
pub fn create_puzzle(config: &PuzzleConfig, seed: u64) -> Result<Board, ConfigError> {
    config.validate()?;
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut grid = Grid::filled(config.width, config.height, CellType::Ice);

    let mut cells = all_coords(config.width, config.height);
    cells.shuffle(&mut rng);
    let mut draw = cells.into_iter();
    for (x, y) in draw.by_ref().take(config.num_walls) {
        grid.set(x, y, CellType::Wall);
    }
    for (x, y) in draw.by_ref().take(config.num_empties) {
        grid.set(x, y, CellType::Empty);
    }
    // validate() guarantees a cell is left for the goal
    if let Some((x, y)) = draw.next() {
        grid.set(x, y, CellType::Goal);
    }

    let mut board = Board::new(grid, seed);

    let mut spots = all_coords(config.width, config.height);
    spots.shuffle(&mut rng);
    let mut draw = spots.into_iter();
    if let Some((x, y)) = draw.next() {
        board.spawn(ObjectKind::Player, x, y);
    }
    for (x, y) in draw.take(config.num_blocks) {
        board.spawn(ObjectKind::Block, x, y);
    }

    log::info!(
        "generated {}x{} puzzle (seed {}): {} walls, {} empties, {} blocks",
        config.width,
        config.height,
        seed,
        config.num_walls,
        config.num_empties,
        config.num_blocks
    );
    Ok(board)
}
