use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::game::GameSession;
use crate::view::View;

/// Everything the player can click.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Action {
    Cell(u8),
    Jump(usize),
    Toggle,
    Restart,
    Quit,
}

impl Action {
    /// Applies this action to `session`. `Quit` leaves it as is; the host
    /// decides what quitting means.
    pub fn apply(self, session: GameSession) -> GameSession {
        match self {
            Action::Cell(index) => match Cell::new(index) {
                Some(cell) => session.apply_move(cell),
                None => session,
            },
            Action::Jump(step) => session.jump_to(step),
            Action::Toggle => session.toggle_order(),
            Action::Restart => GameSession::new(),
            Action::Quit => session,
        }
    }
}

/// Short commands first (`b2`, `4`, `jump 3`, `t`, `q`), then RON (`Cell(4)`).
impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(cell) = Cell::from_str(s) {
            return Ok(Action::Cell(cell.index() as u8));
        }

        let lower = s.to_ascii_lowercase();
        let mut words = lower.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("toggle" | "t" | "sort"), None, None) => return Ok(Action::Toggle),
            (Some("restart" | "new"), None, None) => return Ok(Action::Restart),
            (Some("quit" | "q" | "exit"), None, None) => return Ok(Action::Quit),
            (Some("jump" | "j"), Some(step), None) => {
                return step
                    .parse()
                    .map(Action::Jump)
                    .map_err(|_| Error::InvalidMessage(format!("invalid step: {step}")));
            }
            _ => {}
        }

        ron::from_str(s).map_err(|e| Error::InvalidMessage(e.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Message {
    View(View),
    Error(Error),
}

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum Error {
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

impl From<View> for Message {
    fn from(value: View) -> Self {
        Message::View(value)
    }
}

impl From<Error> for Message {
    fn from(value: Error) -> Self {
        Message::Error(value)
    }
}
