use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Cell, Player, COLS, ROWS};

/// The scripted computer opponent.
///
/// Move selection is a fixed priority list; within each rule columns are
/// tried left to right and the first match is played, so only the final
/// fallback rule involves randomness:
///
/// 1. play a column that wins immediately
/// 2. play a column where the human would win next move
/// 3. play on top of three stacked human discs
/// 4. play next to a horizontal pair of human discs (right side first)
/// 5. play the center column
/// 6. play a random non-full column
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    pub fn new() -> Self {
        HeuristicOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic opponent for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        HeuristicOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select a column for the computer's move.
    ///
    /// The board must have at least one non-full column; the game flow
    /// detects a draw before the opponent is ever consulted.
    pub fn select_column(&mut self, board: &Board) -> usize {
        winning_column(board, Player::COMPUTER.to_cell())
            .or_else(|| winning_column(board, Player::HUMAN.to_cell()))
            .or_else(|| vertical_threat(board, Player::HUMAN.to_cell()))
            .or_else(|| horizontal_threat(board, Player::HUMAN.to_cell()))
            .or_else(|| center_column(board))
            .unwrap_or_else(|| self.random_column(board))
    }

    fn random_column(&mut self, board: &Board) -> usize {
        let open: Vec<usize> = (0..COLS).filter(|&c| !board.is_column_full(c)).collect();
        assert!(!open.is_empty(), "no non-full column to play");
        open[self.rng.random_range(0..open.len())]
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

/// First column where dropping `cell` completes four-in-a-row.
/// Probes on a scratch copy of the board, so the caller's board is untouched.
fn winning_column(board: &Board, cell: Cell) -> Option<usize> {
    (0..COLS).find(|&col| {
        let mut probe = *board;
        match probe.drop_row(col) {
            Some(row) => {
                probe.place(row, col, cell);
                probe.check_win(row, col)
            }
            None => false,
        }
    })
}

/// First column with three stacked `cell` discs and an empty cell directly
/// above them.
fn vertical_threat(board: &Board, cell: Cell) -> Option<usize> {
    (0..COLS).find(|&col| {
        (3..ROWS).any(|row| {
            board.get(row, col) == cell
                && board.get(row - 1, col) == cell
                && board.get(row - 2, col) == cell
                && board.get(row - 3, col) == Cell::Empty
        })
    })
}

/// Scan rows bottom-up for two adjacent `cell` discs with a playable empty
/// cell beside the pair: two to the right of the left disc's partner, then
/// one to the left. "Playable" means a drop in that column lands exactly in
/// that row.
fn horizontal_threat(board: &Board, cell: Cell) -> Option<usize> {
    for row in (0..ROWS).rev() {
        for col in 0..COLS - 1 {
            if board.get(row, col) != cell || board.get(row, col + 1) != cell {
                continue;
            }

            if col + 2 < COLS
                && board.get(row, col + 2) == Cell::Empty
                && board.drop_row(col + 2) == Some(row)
            {
                return Some(col + 2);
            }
            if col >= 1
                && board.get(row, col - 1) == Cell::Empty
                && board.drop_row(col - 1) == Some(row)
            {
                return Some(col - 1);
            }
        }
    }
    None
}

fn center_column(board: &Board) -> Option<usize> {
    let middle = COLS / 2;
    (!board.is_column_full(middle)).then_some(middle)
}
