use std::io::{self, IsTerminal, Read};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::error::{Error, Result};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// How long to wait for the first chunk of piped input before giving up.
pub const STDIN_FIRST_CHUNK_TIMEOUT: Duration = Duration::from_millis(100);

pub struct InputReader;

impl InputReader {
    /// Returns the text to translate.
    ///
    /// Positional text is used as given; an empty string counts as none.
    /// Otherwise stdin is read, unless it is a terminal, in which case
    /// nothing will ever arrive.
    pub async fn acquire(positional: Option<String>) -> Result<String> {
        let text = match positional.filter(|text| !text.is_empty()) {
            Some(text) => {
                tracing::debug!(len = text.len(), "using text from arguments");
                text
            }
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(Error::NoText);
                }
                let text = Self::read_with_timeout(stdin, STDIN_FIRST_CHUNK_TIMEOUT).await?;
                tracing::debug!(len = text.len(), "read text from stdin");
                text
            }
        };

        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        Ok(text)
    }

    /// Reads `reader` to the end, provided its first chunk shows up within
    /// `first_chunk_timeout`. The result is trimmed.
    ///
    /// If the timeout wins, the reader thread is left behind; it dies with
    /// the process.
    pub async fn read_with_timeout<R>(reader: R, first_chunk_timeout: Duration) -> Result<String>
    where
        R: Read + Send + 'static,
    {
        let mut chunks = spawn_chunk_reader(reader);

        let mut next = tokio::select! {
            chunk = chunks.recv() => chunk,
            () = tokio::time::sleep(first_chunk_timeout) => {
                tracing::debug!(?first_chunk_timeout, "no input arrived on stdin");
                return Err(Error::NoText);
            }
        };

        let mut buffer = Vec::new();
        while let Some(chunk) = next {
            buffer.extend_from_slice(&chunk.map_err(Error::Stdin)?);

            if buffer.len() > MAX_INPUT_SIZE {
                return Err(Error::InputTooLarge(buffer.len()));
            }

            next = chunks.recv().await;
        }

        let text = String::from_utf8(buffer).map_err(|_| Error::InvalidUtf8)?;
        Ok(text.trim().to_string())
    }
}

/// Reads on a plain thread so a blocking `read` never holds up the runtime.
fn spawn_chunk_reader<R>(mut reader: R) -> mpsc::Receiver<io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        let mut chunk = [0u8; 8192];
        loop {
            let message = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => Ok(chunk[..n].to_vec()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
            let failed = message.is_err();
            if tx.blocking_send(message).is_err() || failed {
                break;
            }
        }
    });

    rx
}
