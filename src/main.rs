use clap::Parser;
use tic_tac_toe::{config::Cli, connection::Connection, term};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut conn = Connection::new(stdin, tokio::io::stdout(), cli.format);
    term::play(&mut conn).await?;
    Ok(())
}
