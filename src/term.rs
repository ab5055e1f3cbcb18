use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

use crate::connection::Connection;
use crate::game::GameSession;
use crate::message::Action;
use crate::view::render;

/// Runs one game over `conn` until the player quits or input runs out.
///
/// Each action is handled to completion and the resulting view written
/// before the next one is read. Returns the final session.
pub async fn play<R, W>(conn: &mut Connection<R, W>) -> anyhow::Result<GameSession>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut game = GameSession::new();
    conn.send(render(&game)).await?;

    while let Some(action) = conn.recv().await? {
        if action == Action::Quit {
            info!("player quit");
            break;
        }
        debug!(?action, "handling action");
        game = action.apply(game);
        conn.send(render(&game)).await?;
    }

    let status = game.derive_status();
    info!(
        marks = game.board().mark_count(),
        concluded = status.is_concluded(),
        %status,
        "session ended"
    );
    Ok(game)
}
