use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{trace, warn};

use crate::message::{Action, Error, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Plain text for people
    #[default]
    Text,
    /// One RON value per line for other programs
    Ron,
}

/// Reads newline-framed actions from `R` and writes messages to `W`.
#[derive(Debug)]
pub struct Connection<R, W> {
    reader: R,
    writer: W,
    buffer: BytesMut,
    format: Format,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, format: Format) -> Self {
        Self {
            reader,
            writer,
            buffer: BytesMut::with_capacity(256),
            format,
        }
    }

    /// Returns the next decodable action, or `None` at end of input.
    ///
    /// Blank lines are skipped. Lines that fail to decode are answered with
    /// an [`Error`] message and reading continues.
    pub async fn recv(&mut self) -> anyhow::Result<Option<Action>> {
        loop {
            while let Some(line) = self.next_line() {
                match decode(&line) {
                    Ok(Some(action)) => return Ok(Some(action)),
                    Ok(None) => {}
                    Err(e) => {
                        warn!(input = %line.trim(), "{e}");
                        self.send(e).await?;
                    }
                }
            }

            if 0 == self.reader.read_buf(&mut self.buffer).await? {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                // last line without a terminator
                let rest = self.buffer.split();
                let line = String::from_utf8_lossy(&rest).into_owned();
                return match decode(&line) {
                    Ok(action) => Ok(action),
                    Err(e) => {
                        warn!(input = %line.trim(), "{e}");
                        self.send(e).await?;
                        Ok(None)
                    }
                };
            }
        }
    }

    pub async fn send(&mut self, mes: impl Into<Message>) -> anyhow::Result<()> {
        let mes = mes.into();
        let out = match self.format {
            Format::Ron => format!("{}\n", ron::ser::to_string(&mes)?),
            Format::Text => match &mes {
                Message::View(view) => format!("{view}\n"),
                Message::Error(e) => format!("{e}\n"),
            },
        };
        self.writer.write_all(out.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_line(&mut self) -> Option<String> {
        let end = self.buffer.iter().position(|&b| b == b'\n')?;
        let line = self.buffer.split_to(end);
        self.buffer.advance(1);
        trace!(len = line.len(), "framed line");
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}

fn decode(line: &str) -> Result<Option<Action>, Error> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    line.parse().map(Some)
}
