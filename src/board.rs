use std::{
    fmt::Display,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub const NUM_CELLS: u8 = 9;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// Whose turn it is after `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

// row:
// 0: 0 1 2
// 1: 3 4 5
// 2: 6 7 8
//    a b c : col
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell index out of range: {0}")]
pub struct InvalidCell(pub u8);

impl Cell {
    pub const fn new(val: u8) -> Option<Self> {
        if val >= NUM_CELLS {
            None
        } else {
            Some(Self(val))
        }
    }

    pub const fn xy(col: u8, row: u8) -> Option<Self> {
        if col >= 3 || row >= 3 {
            None
        } else {
            Some(Self(row * 3 + col))
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_CELLS).map(Cell)
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Cell::new(value).ok_or(InvalidCell(value))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.col(), self.row())
    }
}

/// Accepts a bare index (`"4"`) or a column letter plus 1-based row (`"b2"`).
impl FromStr for Cell {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Cell::new(index).ok_or(());
        }

        let mut chars = s.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(());
        };
        let col = match col.to_ascii_lowercase() {
            'a' => 0,
            'b' => 1,
            'c' => 2,
            _ => return Err(()),
        };
        let row = match row {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            _ => return Err(()),
        };
        Cell::xy(col, row).ok_or(())
    }
}

/// The eight lines that win the game, in the order they are checked.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // rows
    [Cell(0), Cell(1), Cell(2)],
    [Cell(3), Cell(4), Cell(5)],
    [Cell(6), Cell(7), Cell(8)],
    // columns
    [Cell(0), Cell(3), Cell(6)],
    [Cell(1), Cell(4), Cell(7)],
    [Cell(2), Cell(5), Cell(8)],
    // diagonals
    [Cell(0), Cell(4), Cell(8)],
    [Cell(2), Cell(4), Cell(6)],
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct WinResult {
    pub line: [Cell; 3],
    pub player: Player,
}

impl WinResult {
    pub fn contains(&self, cell: Cell) -> bool {
        self.line.contains(&cell)
    }
}

/// Returns the first line in [`WINNING_LINES`] held entirely by one player.
pub fn calculate_winner(board: &Board) -> Option<WinResult> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let player = board[a]?;
        (board[b] == Some(player) && board[c] == Some(player)).then_some(WinResult {
            line: [a, b, c],
            player,
        })
    })
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    pub fn mark(&mut self, cell: Cell, player: Player) {
        self[cell] = Some(player);
    }

    pub fn mark_count(&self) -> u8 {
        self.cells.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl From<[Option<Player>; 9]> for Board {
    fn from(cells: [Option<Player>; 9]) -> Self {
        Self { cells }
    }
}

impl Index<Cell> for Board {
    type Output = Option<Player>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[cell.index()]
    }
}

impl IndexMut<Cell> for Board {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.cells[cell.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(marks: &str) -> Board {
        let mut board = Board::default();
        for (i, c) in marks.chars().enumerate() {
            let cell = Cell::new(i as u8).unwrap();
            match c {
                'X' => board.mark(cell, Player::X),
                'O' => board.mark(cell, Player::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(calculate_winner(&Board::default()), None);
    }

    #[test]
    fn detects_every_line() {
        for line in WINNING_LINES {
            let mut b = Board::default();
            for cell in line {
                b.mark(cell, Player::O);
            }
            assert_eq!(
                calculate_winner(&b),
                Some(WinResult {
                    line,
                    player: Player::O
                })
            );
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        assert_eq!(calculate_winner(&board("XXO------")), None);
        assert_eq!(calculate_winner(&board("XOXOXOOXO")), None);
    }

    #[test]
    fn first_line_in_order_wins_ties() {
        // top row and left column both belong to X
        let b = board("XXXX--X--");
        let win = calculate_winner(&b).unwrap();
        assert_eq!(win.line, [Cell(0), Cell(1), Cell(2)]);

        // X holds the middle row, O the bottom row
        let b = board("---XXXOOO");
        assert_eq!(calculate_winner(&b).unwrap().player, Player::X);
    }

    #[test]
    fn anti_diagonal() {
        let win = calculate_winner(&board("--X-X-X--")).unwrap();
        assert_eq!(win.line, [Cell(2), Cell(4), Cell(6)]);
        assert!(win.contains(Cell(4)));
        assert!(!win.contains(Cell(0)));
    }

    #[test]
    fn cell_coordinates() {
        let cell = Cell::new(5).unwrap();
        assert_eq!((cell.col(), cell.row()), (2, 1));
        assert_eq!(Cell::xy(2, 1), Some(cell));
        assert_eq!(Cell::new(9), None);
        assert_eq!(Cell::xy(3, 0), None);
        assert_eq!(cell.to_string(), "2, 1");
    }

    #[test]
    fn cell_from_str() {
        assert_eq!("4".parse::<Cell>(), Ok(Cell(4)));
        assert_eq!("a1".parse::<Cell>(), Ok(Cell(0)));
        assert_eq!("C3".parse::<Cell>(), Ok(Cell(8)));
        assert_eq!("b3".parse::<Cell>(), Ok(Cell(7)));
        assert!("9".parse::<Cell>().is_err());
        assert!("d1".parse::<Cell>().is_err());
        assert!("a4".parse::<Cell>().is_err());
        assert!("a12".parse::<Cell>().is_err());
    }

    #[test]
    fn fullness_and_counts() {
        assert!(!Board::default().is_full());
        assert_eq!(board("XO-------").mark_count(), 2);
        assert!(board("XOXOXOOXO").is_full());
    }

    #[test]
    fn player_turns() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(3), Player::O);
    }

    #[test]
    fn cells_deserialize_only_in_range() {
        assert_eq!(ron::from_str::<Cell>("8").unwrap(), Cell(8));
        assert!(ron::from_str::<Cell>("9").is_err());
        assert!(ron::from_str::<Cell>("200").is_err());
        assert_eq!(Cell::try_from(200), Err(InvalidCell(200)));
        assert_eq!(ron::to_string(&Cell(5)).unwrap(), "5");
    }
}
