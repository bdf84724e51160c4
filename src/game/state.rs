use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The full game position plus turn bookkeeping.
///
/// The win check runs on the landing cell of each move before the turn is
/// advanced, and reads the marker actually placed, so the outcome is always
/// attributed to the player who made the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Create an initial state with the given player to move first.
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
            last_move: None,
        }
    }

    /// Initial state with the human (Red) to move, for tests and defaults.
    pub fn initial() -> Self {
        Self::new(Player::HUMAN)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The (row, col) of the most recently placed disc.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..super::board::COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place for the current player.
    ///
    /// Drops the disc, checks for a win through the landing cell, detects a
    /// draw when the board fills without a winner, then advances the turn.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        self.last_move = Some((row, column));

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            // Without this the opponent would be asked for a move on a board
            // with no legal column.
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }

    /// Reset to an empty board with the given player to move first.
    pub fn reset(&mut self, first: Player) {
        self.board.reset();
        self.current_player = first;
        self.outcome = None;
        self.last_move = None;
    }
}
