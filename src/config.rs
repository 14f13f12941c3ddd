//! Puzzle configuration
//!
//! Validated up front so generation never has to silently under-fill a grid.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Requested terrain/object counts do not fit the grid
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Knobs for one generated puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Board width in cells
    pub width: i32,
    /// Board height in cells
    pub height: i32,
    /// Cells turned from ice into walls
    pub num_walls: usize,
    /// Movable blocks placed on the board
    pub num_blocks: usize,
    /// Cells turned from ice into plain ground
    pub num_empties: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            num_walls: 10,
            num_blocks: 5,
            num_empties: 6,
        }
    }
}

impl PuzzleConfig {
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Reject configurations the generator cannot satisfy. Terrain cells
    /// (walls + empties + the goal) and objects (player + blocks) are drawn
    /// from separate shuffles, so each total is checked against the grid on
    /// its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "board dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let cells = self.cell_count();
        let terrain = self.num_walls + self.num_empties + 1;
        if terrain > cells {
            return Err(ConfigError::InvalidConfiguration(format!(
                "{} walls + {} empties + 1 goal exceed {} cells",
                self.num_walls, self.num_empties, cells
            )));
        }
        let objects = self.num_blocks + 1;
        if objects > cells {
            return Err(ConfigError::InvalidConfiguration(format!(
                "{} blocks + 1 player exceed {} cells",
                self.num_blocks, cells
            )));
        }
        Ok(())
    }

    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fits() {
        assert!(PuzzleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = PuzzleConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_overfull_terrain() {
        let config = PuzzleConfig {
            width: 3,
            height: 3,
            num_walls: 7,
            num_blocks: 0,
            num_empties: 2,
        };
        // 7 + 2 + goal = 10 > 9 cells
        assert!(config.validate().is_err());

        let config = PuzzleConfig {
            num_walls: 6,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_overfull_objects() {
        let config = PuzzleConfig {
            width: 2,
            height: 2,
            num_walls: 0,
            num_blocks: 4,
            num_empties: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PuzzleConfig = serde_json::from_str(r#"{"width": 6, "height": 4}"#).unwrap();
        assert_eq!(config.width, 6);
        assert_eq!(config.height, 4);
        assert_eq!(config.num_blocks, PuzzleConfig::default().num_blocks);
    }
}
