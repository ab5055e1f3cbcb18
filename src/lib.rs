//! Tic-tac-toe with a full move history.
//!
//! The game is a value: [`GameSession`] transitions consume the session and
//! return the next one, and everything shown to the player (turn, status,
//! highlights, move list) is derived from it by [`view::render`].

pub mod board;
pub mod config;
pub mod connection;
pub mod game;
pub mod message;
pub mod term;
pub mod view;

pub use board::{calculate_winner, Board, Cell, Player, WinResult};
pub use game::{GameSession, HistoryEntry, Status};
pub use message::Action;
pub use view::{render, View};
