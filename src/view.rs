//! Stateless rendering: maps a [`GameSession`] to a description of what the
//! host should display.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Player};
use crate::game::{GameSession, Status};

pub const TITLE: &str = "Tic-Tac-Toe";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct View {
    pub title: String,
    pub cells: Vec<CellView>,
    pub status: String,
    pub sort_label: String,
    pub moves: Vec<MoveView>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct CellView {
    pub cell: Cell,
    pub mark: Option<Player>,
    pub latest: bool,
    pub winning: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MoveView {
    pub step: usize,
    pub description: String,
    pub current: bool,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "Draw!"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

pub fn describe_move(step: usize, last_move: Option<Cell>) -> String {
    match last_move {
        Some(cell) if step > 0 => format!("Go to move #{step}: {cell}"),
        _ => "Go to game start".to_string(),
    }
}

pub fn render(session: &GameSession) -> View {
    let current = session.current();
    let winner = session.winner();

    let cells = Cell::all()
        .map(|cell| CellView {
            cell,
            mark: current.board[cell],
            latest: current.last_move == Some(cell),
            winning: winner.is_some_and(|win| win.contains(cell)),
        })
        .collect();

    let mut moves: Vec<MoveView> = session
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveView {
            step,
            description: describe_move(step, entry.last_move),
            current: step == session.step(),
        })
        .collect();
    if session.is_reversed() {
        moves.reverse();
    }

    let sort_label = if session.is_reversed() {
        "Sort Ascending"
    } else {
        "Sort Descending"
    };

    View {
        title: TITLE.to_string(),
        cells,
        status: session.derive_status().to_string(),
        sort_label: sort_label.to_string(),
        moves,
    }
}

// Latest move in brackets, winning line in asterisks.
impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for row in self.cells.chunks(3) {
            let mut line = String::from(" ");
            for cell in row {
                let mark = match cell.mark {
                    Some(player) => player.to_string(),
                    None => "-".to_string(),
                };
                match (cell.winning, cell.latest) {
                    (true, _) => line.push_str(&format!("*{mark}*")),
                    (false, true) => line.push_str(&format!("[{mark}]")),
                    (false, false) => line.push_str(&format!(" {mark} ")),
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f, "({})", self.sort_label)?;
        for mv in &self.moves {
            let marker = if mv.current { '>' } else { ' ' };
            writeln!(f, "{marker} {}. {}", mv.step, mv.description)?;
        }
        Ok(())
    }
}
