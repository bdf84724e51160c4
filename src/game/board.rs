pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The four axes a winning line can lie on, as (row, col) steps.
/// The opposite direction of each is checked by negating the step.
const AXES: [(i32, i32); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Where a disc dropped into `col` would land: the lowest empty row,
    /// or `None` if the column is full. Pure, does not mutate the board.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Write a marker into a cell. The caller has already resolved the
    /// destination via [`Board::drop_row`].
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = cell;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.drop_row(col).ok_or(MoveError::ColumnFull)?;
        self.place(row, col, cell);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// For each axis, counts consecutive matching cells extending from the
    /// placed cell in both directions (up to 3 steps each way) plus the cell
    /// itself; 4 or more on any axis is a win. Reads the marker at the placed
    /// cell, so the result does not depend on whose turn it currently is.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            let run = 1 + self.count_run(row, col, dr, dc, cell)
                + self.count_run(row, col, -dr, -dc, cell);
            run >= 4
        })
    }

    /// Count consecutive `cell` markers from (row, col) exclusive, stepping
    /// by (dr, dc), stopping at the first mismatch or board edge.
    fn count_run(&self, row: usize, col: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        for step in 1..4 {
            let r = row as i32 + dr * step;
            let c = col as i32 + dc * step;
            if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_row_is_pure() {
        let board = Board::new();
        assert_eq!(board.drop_row(3), Some(5));
        // Asking again without placing gives the same answer
        assert_eq!(board.drop_row(3), Some(5));
        assert_eq!(board.get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Lands at the bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Lands on top of the first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_row(0), None);
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        // Detected through any cell of the line, not just the endpoint
        assert!(board.check_win(5, 2));
        assert!(board.check_win(5, 0));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.check_win(2, 3)); // The 4th piece, on top
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase rising to the right, red on top of each step
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase rising to the left
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_win(5, 1));
    }

    #[test]
    fn test_run_of_four_interrupted_by_opponent() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();
        assert!(!board.check_win(5, 1));
        assert!(!board.check_win(5, 3));
    }

    #[test]
    fn test_check_win_on_empty_cell_is_false() {
        let board = Board::new();
        assert!(!board.check_win(5, 3));
    }

    #[test]
    fn test_win_independent_of_turn_order() {
        // The detector reads the placed marker, so it reports a win for
        // whichever color owns the line regardless of who moves next.
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(board.check_win(5, 4));
    }
}
