//! Game configuration read from environment variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CUBE_TETRIS_WIDTH` | 11 |
//! | `CUBE_TETRIS_HEIGHT` | 20 |
//! | `CUBE_TETRIS_SPAWN_X` | 4 |
//! | `CUBE_TETRIS_SPAWN_Y` | 16 |
//! | `CUBE_TETRIS_TICK_MS` | 300 |
//! | `CUBE_TETRIS_SEED` | derived from the clock |

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MASK_SIZE, SPAWN_X, SPAWN_Y, TICK_MS};

pub const ENV_WIDTH: &str = "CUBE_TETRIS_WIDTH";
pub const ENV_HEIGHT: &str = "CUBE_TETRIS_HEIGHT";
pub const ENV_SPAWN_X: &str = "CUBE_TETRIS_SPAWN_X";
pub const ENV_SPAWN_Y: &str = "CUBE_TETRIS_SPAWN_Y";
pub const ENV_TICK_MS: &str = "CUBE_TETRIS_TICK_MS";
pub const ENV_SEED: &str = "CUBE_TETRIS_SEED";

/// Largest accepted board width, margin column included
pub const MAX_BOARD_WIDTH: u16 = 256;
/// Largest accepted board height
pub const MAX_BOARD_HEIGHT: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("spawn window at ({x}, {y}) does not fit a {width}x{height} board")]
    SpawnOutsideBoard { x: i32, y: i32, width: u16, height: u16 },
    #[error("board {width}x{height} exceeds the {max_width}x{max_height} limit")]
    BoardTooLarge {
        width: u16,
        height: u16,
        max_width: u16,
        max_height: u16,
    },
    #[error("tick interval must be positive")]
    ZeroTick,
}

/// Board layout, spawn point, gravity interval and generator seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub tick_ms: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            tick_ms: TICK_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            width: parse_var(&lookup, ENV_WIDTH)?.unwrap_or(defaults.width),
            height: parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(defaults.height),
            spawn_x: parse_var(&lookup, ENV_SPAWN_X)?.unwrap_or(defaults.spawn_x),
            spawn_y: parse_var(&lookup, ENV_SPAWN_Y)?.unwrap_or(defaults.spawn_y),
            tick_ms: parse_var(&lookup, ENV_TICK_MS)?.unwrap_or(defaults.tick_ms),
            seed: parse_var(&lookup, ENV_SEED)?.unwrap_or_else(clock_seed),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the board is within the size limits and the 4x4 spawn
    /// window lies inside the playable columns and the grid rows
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        if self.width > MAX_BOARD_WIDTH || self.height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max_width: MAX_BOARD_WIDTH,
                max_height: MAX_BOARD_HEIGHT,
            });
        }

        let window = MASK_SIZE as i32;
        let playable = self.width as i32 - 1;
        let fits = self.spawn_x >= 0
            && self.spawn_y >= 0
            && self.spawn_x + window <= playable
            && self.spawn_y + window <= self.height as i32;
        if !fits {
            return Err(ConfigError::SpawnOutsideBoard {
                x: self.spawn_x,
                y: self.spawn_y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { var, value }),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
