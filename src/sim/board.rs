//! Board model: terrain grid plus the objects standing on it
//!
//! All spatial state lives here. The grid is fixed after generation; object
//! positions are the only thing that changes during play, and only the slide
//! resolver changes them.

use serde::{Deserialize, Serialize};

/// Terrain kinds, one per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    /// Plain ground: a sliding object stops on it
    Empty,
    /// Slippery ground: a sliding object keeps going
    Ice,
    /// Cannot be entered; slides stop before it
    Wall,
    /// Behaves like `Empty`; the host checks the player against it
    Goal,
}

impl CellType {
    /// Occupying this cell is forbidden; slides stop before entering it.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, CellType::Wall)
    }

    /// An object entering this cell mid-slide keeps sliding.
    #[inline]
    pub fn is_slippery(self) -> bool {
        matches!(self, CellType::Ice)
    }

    /// Display color (RGB), for renderer collaborators only.
    pub fn color(self) -> [u8; 3] {
        match self {
            CellType::Empty => [120, 100, 70],
            CellType::Ice => [160, 216, 239],
            CellType::Wall => [90, 90, 100],
            CellType::Goal => [80, 200, 120],
        }
    }

    /// Single-character glyph for text rendering.
    pub fn glyph(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Ice => '~',
            CellType::Wall => '#',
            CellType::Goal => 'O',
        }
    }
}

/// Object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Block,
    Player,
}

impl ObjectKind {
    /// Display color (RGB), for renderer collaborators only.
    pub fn color(self) -> [u8; 3] {
        match self {
            ObjectKind::Block => [210, 160, 60],
            ObjectKind::Player => [230, 60, 60],
        }
    }

    /// Single-character glyph for text rendering.
    pub fn glyph(self) -> char {
        match self {
            ObjectKind::Block => 'X',
            ObjectKind::Player => 'P',
        }
    }
}

/// Stable object handle, allocated by [`Board::spawn`]
pub type ObjectId = u32;

/// A movable token occupying exactly one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub x: i32,
    pub y: i32,
}

/// Board access errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Rectangular terrain grid, immutable once generation finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a `width x height` grid with every cell set to `fill`.
    pub fn filled(width: i32, height: i32, fill: CellType) -> Self {
        let count = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            cells: vec![fill; count],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// True iff `(x, y)` lies within `[0, width) x [0, height)`. The sole
    /// boundary check used everywhere else; degenerate 0-sized grids simply
    /// report false for every coordinate.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellType, BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.idx(x, y)])
    }

    /// Overwrite a cell. Generation-time only; the grid never changes after
    /// the puzzle is handed to the resolver.
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: CellType) {
        debug_assert!(self.in_bounds(x, y));
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }
}

/// One puzzle instance: the grid plus every object on it.
///
/// Objects are kept per kind in spawn order and addressed by stable id.
/// Nothing here enforces the one-object-per-cell invariant; the generator
/// establishes it and the resolver preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    /// Seed the puzzle was generated from, kept for reproducibility
    seed: u64,
    players: Vec<GameObject>,
    blocks: Vec<GameObject>,
    next_id: ObjectId,
}

impl Board {
    pub fn new(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            seed,
            players: Vec::new(),
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Terrain at `(x, y)`, or `OutOfBounds`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<CellType, BoardError> {
        self.grid.get(x, y)
    }

    /// See [`Grid::in_bounds`].
    #[inline]
    pub fn is_on_board(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// Position of the goal cell, if the grid has one.
    pub fn goal(&self) -> Option<(i32, i32)> {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if self.grid.get(x, y) == Ok(CellType::Goal) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// All objects, players first then blocks, each kind in spawn order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.players.iter().chain(self.blocks.iter())
    }

    /// Objects of one kind, in spawn order.
    pub fn objects_of(&self, kind: ObjectKind) -> &[GameObject] {
        match kind {
            ObjectKind::Player => &self.players,
            ObjectKind::Block => &self.blocks,
        }
    }

    /// Look up an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects().find(|o| o.id == id)
    }

    /// First object found at `(x, y)`, scanning players then blocks. The
    /// tie-break is unobservable while the one-object-per-cell invariant
    /// holds.
    pub fn object_at(&self, x: i32, y: i32) -> Option<&GameObject> {
        self.objects().find(|o| o.x == x && o.y == y)
    }

    /// Add an object and return its id. No occupancy or terrain check; the
    /// generator draws placements that cannot collide.
    pub fn spawn(&mut self, kind: ObjectKind, x: i32, y: i32) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        let obj = GameObject { id, kind, x, y };
        match kind {
            ObjectKind::Player => self.players.push(obj),
            ObjectKind::Block => self.blocks.push(obj),
        }
        id
    }

    /// Raw position setter: writes the coordinates if they differ and reports
    /// whether anything changed. No bounds or collision checks; all movement
    /// policy lives in the slide resolver.
    pub fn move_object(&mut self, id: ObjectId, x: i32, y: i32) -> bool {
        let Some(obj) = self.object_mut(id) else {
            return false;
        };
        if obj.x == x && obj.y == y {
            return false;
        }
        obj.x = x;
        obj.y = y;
        true
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.players
            .iter_mut()
            .chain(self.blocks.iter_mut())
            .find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn empty_board(width: i32, height: i32) -> Board {
        Board::new(Grid::filled(width, height, CellType::Empty), 0)
    }

    #[test]
    fn test_in_bounds_edges() {
        let board = empty_board(4, 3);
        assert!(board.is_on_board(0, 0));
        assert!(board.is_on_board(3, 2));
        assert!(!board.is_on_board(4, 2));
        assert!(!board.is_on_board(3, 3));
        assert!(!board.is_on_board(-1, 0));
        assert!(!board.is_on_board(0, -1));
    }

    #[test]
    fn test_zero_sized_grid_has_no_cells() {
        let board = empty_board(0, 0);
        assert!(!board.is_on_board(0, 0));
        let board = empty_board(5, 0);
        assert!(!board.is_on_board(2, 0));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = empty_board(2, 2);
        assert_eq!(
            board.cell_at(2, 0),
            Err(BoardError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert_eq!(board.cell_at(1, 1), Ok(CellType::Empty));
    }

    #[test]
    fn test_spawn_and_object_at() {
        let mut board = empty_board(3, 3);
        let player = board.spawn(ObjectKind::Player, 1, 1);
        let block = board.spawn(ObjectKind::Block, 2, 0);
        assert_ne!(player, block);

        assert_eq!(board.object_at(1, 1).map(|o| o.id), Some(player));
        assert_eq!(board.object_at(2, 0).map(|o| o.kind), Some(ObjectKind::Block));
        assert!(board.object_at(0, 0).is_none());
        assert_eq!(board.objects().count(), 2);
    }

    #[test]
    fn test_move_object_reports_change() {
        let mut board = empty_board(3, 3);
        let id = board.spawn(ObjectKind::Block, 0, 0);

        assert!(board.move_object(id, 2, 1));
        assert_eq!(board.object(id).map(|o| (o.x, o.y)), Some((2, 1)));

        // Same coordinates: no change
        assert!(!board.move_object(id, 2, 1));

        // Unknown id: no-op
        assert!(!board.move_object(999, 0, 0));
    }

    #[test]
    fn test_goal_lookup() {
        let mut grid = Grid::filled(3, 3, CellType::Ice);
        grid.set(2, 1, CellType::Goal);
        let board = Board::new(grid, 0);
        assert_eq!(board.goal(), Some((2, 1)));

        assert_eq!(empty_board(3, 3).goal(), None);
    }

    proptest! {
        // cell_at succeeds exactly where is_on_board says it should
        #[test]
        fn prop_cell_at_matches_bounds(
            w in 0i32..12,
            h in 0i32..12,
            x in -4i32..16,
            y in -4i32..16,
        ) {
            let board = empty_board(w, h);
            prop_assert_eq!(board.cell_at(x, y).is_ok(), board.is_on_board(x, y));
        }
    }
}
