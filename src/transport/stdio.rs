//! Line-delimited JSON serving over async byte streams

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use super::{encode_response, PageSession};
use crate::dom::Document;
use crate::error::TransportError;

/// Serve requests read line by line from `reader`, writing one response
/// line per request to `writer`.
///
/// Blank lines are ignored. Returns the number of requests served once the
/// reader reaches end of input.
pub async fn serve_io<D, R, W>(
    session: &mut PageSession<D>,
    reader: R,
    mut writer: W,
) -> Result<usize, TransportError>
where
    D: Document,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut served = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = session.handle_line(&line);
        let mut encoded = encode_response(&response)?;
        encoded.push('\n');

        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        served += 1;
        debug!(served, success = response.success, "Response sent");
    }

    info!("Transport closed after {} requests", served);
    Ok(served)
}

/// Serve requests on the process's stdin/stdout
pub async fn serve<D: Document>(session: &mut PageSession<D>) -> Result<usize, TransportError> {
    serve_io(session, tokio::io::stdin(), tokio::io::stdout()).await
}
