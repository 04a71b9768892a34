//! Game module - the driver session around a board and its falling piece
//!
//! The board and piece primitives only answer "blocked or not". This module
//! owns the loop that turns those answers into a game: gravity ticks, locking
//! a landed piece, clearing rows, spawning the next random piece and spotting
//! a blocked spawn.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Category, Command, Direction};

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece fell one row
    Moved,
    /// The piece landed and was locked; a new piece has spawned
    Locked { rows_cleared: u32 },
    /// The session is over (a spawn was blocked, now or earlier)
    GameOver,
}

/// A running game: board, active piece and piece generator
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    piece: Piece,
    generator: PieceGenerator,
    game_over: bool,
    pieces_spawned: u32,
}

impl Game {
    /// Start a session with the first piece already on the board
    pub fn new(config: GameConfig) -> Self {
        let mut generator = PieceGenerator::new(config.seed);
        let category = generator.next_category();
        Self::with_first_piece(config, generator, category)
    }

    /// Start a session whose first piece has a fixed category
    pub fn with_first(config: GameConfig, category: Category) -> Self {
        Self::with_first_piece(config, PieceGenerator::new(config.seed), category)
    }

    fn with_first_piece(config: GameConfig, generator: PieceGenerator, category: Category) -> Self {
        let mut game = Self {
            config,
            board: Board::new(config.width, config.height),
            piece: Piece::new(category, config.spawn_x, config.spawn_y),
            generator,
            game_over: false,
            pieces_spawned: 0,
        };
        game.spawn(category);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for drivers that seed a position
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Pieces spawned since the session (or last restart) began
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Advance gravity by one row, locking and respawning on landing
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }

        if !self.board.move_piece(&mut self.piece, Direction::Down) {
            return TickOutcome::Moved;
        }

        // Landed: commit the footprint, compact, bring in the next piece.
        self.board.stamp_piece(&self.piece);
        let rows_cleared = self.board.clear_full_rows();
        debug!(
            category = self.piece.category().as_str(),
            x = self.piece.x(),
            y = self.piece.y(),
            rows_cleared,
            score = self.board.score(),
            "piece locked"
        );

        let next = self.generator.next_category();
        if !self.spawn(next) {
            return TickOutcome::GameOver;
        }
        TickOutcome::Locked { rows_cleared }
    }

    /// Tick until the game ends or `max_ticks` have run. Returns the number
    /// of ticks that ran.
    pub fn run_ticks(&mut self, max_ticks: u32) -> u32 {
        let mut ran = 0;
        while ran < max_ticks && !self.game_over {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Forward a player command. Returns true if the piece moved or rotated.
    ///
    /// A blocked downward command does not lock the piece; only
    /// [`Game::tick`] locks.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        match command.direction() {
            Some(direction) => !self.board.move_piece(&mut self.piece, direction),
            None => self.board.rotate_piece(&mut self.piece),
        }
    }

    /// Clear the board and score and spawn a fresh piece
    ///
    /// The generator keeps its position, so a restart does not replay the
    /// previous piece sequence.
    pub fn restart(&mut self) {
        info!(score = self.board.score(), "restarting game");
        self.board.reset();
        self.game_over = false;
        self.pieces_spawned = 0;
        let category = self.generator.next_category();
        self.spawn(category);
    }

    /// Place a new piece at the spawn point. Returns false (and ends the
    /// game) if its footprint is already occupied.
    fn spawn(&mut self, category: Category) -> bool {
        self.piece = Piece::new(category, self.config.spawn_x, self.config.spawn_y);

        if self.board.overlaps(&self.piece) {
            self.game_over = true;
            info!(
                score = self.board.score(),
                pieces = self.pieces_spawned,
                "spawn blocked, game over"
            );
            return false;
        }

        self.board.stamp_piece(&self.piece);
        self.pieces_spawned += 1;
        debug!(category = category.as_str(), "spawned piece");
        true
    }

    /// Read-only view for renderers and observers
    pub fn snapshot(&self) -> GameSnapshot {
        let rows = (0..self.board.height() as i32)
            .map(|row| {
                (0..self.board.width() as i32)
                    .map(|col| {
                        let color = self.board.get_block(row, col);
                        (!color.is_transparent()).then_some(color)
                    })
                    .collect()
            })
            .collect();

        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            score: self.board.score(),
            game_over: self.game_over,
            pieces_spawned: self.pieces_spawned,
            rows,
            active: (!self.game_over).then(|| ActiveSnapshot::from(&self.piece)),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
