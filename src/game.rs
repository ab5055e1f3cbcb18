use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{calculate_winner, Board, Cell, Player, WinResult};

/// A board snapshot and the move that produced it.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board: Board,
    pub last_move: Option<Cell>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl Status {
    pub fn is_concluded(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One game: every snapshot played so far plus which one is on display.
///
/// The turn, the status and the highlighted cells are always derived from
/// `history` and `step`; nothing about them is stored. Transitions consume
/// the session and hand back its successor, so a caller simply replaces
/// the value it holds.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "SavedSession")]
pub struct GameSession {
    history: Vec<HistoryEntry>,
    step: usize,
    reversed: bool,
}

#[derive(Deserialize)]
struct SavedSession {
    history: Vec<HistoryEntry>,
    step: usize,
    reversed: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSession {
    #[error("history must start with an empty board")]
    MissingStart,
    #[error("step {step} is past the end of a {len} entry history")]
    StepOutOfRange { step: usize, len: usize },
}

impl TryFrom<SavedSession> for GameSession {
    type Error = InvalidSession;

    fn try_from(saved: SavedSession) -> Result<Self, Self::Error> {
        if saved.history.first() != Some(&HistoryEntry::default()) {
            return Err(InvalidSession::MissingStart);
        }
        if saved.step >= saved.history.len() {
            return Err(InvalidSession::StepOutOfRange {
                step: saved.step,
                len: saved.history.len(),
            });
        }
        Ok(Self {
            history: saved.history,
            step: saved.step,
            reversed: saved.reversed,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::default()],
            step: 0,
            reversed: false,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    pub fn whos_turn(&self) -> Player {
        Player::for_step(self.step)
    }

    pub fn x_is_next(&self) -> bool {
        self.whos_turn() == Player::X
    }

    pub fn winner(&self) -> Option<WinResult> {
        calculate_winner(self.board())
    }

    /// Marks `cell` for the player to move, branching off the displayed step.
    ///
    /// Occupied cells and boards that already have a winner leave the
    /// session untouched.
    pub fn apply_move(mut self, cell: Cell) -> Self {
        let player = self.whos_turn();
        if self.board()[cell].is_some() {
            debug!(%cell, step = self.step, "cell already marked");
            return self;
        }
        if let Some(win) = self.winner() {
            debug!(%cell, winner = %win.player, "game already won");
            return self;
        }

        self.history.truncate(self.step + 1);
        let mut board = self.board().clone();
        board.mark(cell, player);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });
        self.step = self.history.len() - 1;
        debug!(%cell, %player, step = self.step, "move applied");
        self
    }

    /// Displays an earlier (or later) snapshot without touching history.
    ///
    /// Steps past the end of history are ignored.
    pub fn jump_to(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "jump target out of range");
            return self;
        }
        self.step = step;
        debug!(step, "jumped");
        self
    }

    pub fn toggle_order(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    pub fn derive_status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player)
        } else if self.board().is_full() {
            Status::Draw
        } else {
            Status::NextPlayer(self.whos_turn())
        }
    }
}
