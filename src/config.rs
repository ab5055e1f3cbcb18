use clap::Parser;

use crate::connection::Format;

/// Tic-tac-toe with move history and time travel.
///
/// Reads one action per line from stdin: a cell (`4` or `b2`), `jump N`,
/// `toggle`, `restart` or `quit`, or the same actions in RON (`Cell(4)`).
/// Writes the board, status and move list after every action.
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
