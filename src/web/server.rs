//! Websocket server hosting one shared session.

use super::protocol::{handle_text, Session};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

const PEEK_LIMIT: usize = 4096;
const PEEK_RETRY: Duration = Duration::from_millis(5);
const HEAD_TIMEOUT: Duration = Duration::from_secs(2);

/// Start the web server on the given port. Runs until the listener fails.
pub async fn start_web_server(port: u16, session: Arc<Mutex<Session>>) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(port, "web server listening on ws://localhost:{}", port);

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let session = Arc::clone(&session);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, addr, session).await {
                        warn!(%addr, error = %e, "connection error");
                    }
                });
            }
            Err(e) => {
                warn!(error = %e, "accept error");
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    session: Arc<Mutex<Session>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Plain HTTP state polls are answered directly
    let head = peek_request_head(&stream).await?;
    if is_state_poll(&head) {
        let body = {
            let mut session = session.lock().await;
            serde_json::to_string(&session.state.get_state())?
        };
        serve_json(stream, &body).await?;
        return Ok(());
    }

    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    info!(%addr, "websocket connected");

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = {
                    let mut session = session.lock().await;
                    serde_json::to_string(&handle_text(&mut session, &text))?
                };
                if ws_sender.send(Message::Text(reply)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Err(_) => break,
            _ => {}
        }
    }

    info!(%addr, "websocket disconnected");
    Ok(())
}

/// Peeks until the request head is complete, the buffer fills, or the client stalls.
/// Nothing is consumed, so the websocket handshake still sees the whole request.
async fn peek_request_head(stream: &TcpStream) -> std::io::Result<String> {
    let mut buf = vec![0u8; PEEK_LIMIT];
    let mut seen = 0;
    let read_head = async {
        loop {
            let n = stream.peek(&mut buf).await?;
            seen = n;
            if n == 0 || n == buf.len() || head_complete(&buf[..n]) {
                return Ok::<_, std::io::Error>(());
            }
            tokio::time::sleep(PEEK_RETRY).await;
        }
    };
    let outcome = tokio::time::timeout(HEAD_TIMEOUT, read_head).await;
    match outcome {
        Ok(result) => result?,
        Err(_) => warn!(seen, "request head incomplete after timeout"),
    }
    Ok(String::from_utf8_lossy(&buf[..seen]).into_owned())
}

fn head_complete(bytes: &[u8]) -> bool {
    bytes.windows(4).any(|w| w == b"\r\n\r\n")
}

/// A `GET /state` that does not ask for a websocket upgrade.
fn is_state_poll(head: &str) -> bool {
    let mut lines = head.split("\r\n");
    let is_get_state = lines.next().is_some_and(|line| {
        let mut parts = line.split_whitespace();
        parts.next() == Some("GET") && parts.next() == Some("/state")
    });
    let wants_upgrade = lines.any(|line| {
        line.split_once(':').is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case("upgrade")
                && value.to_ascii_lowercase().contains("websocket")
        })
    });
    is_get_state && !wants_upgrade
}

async fn serve_json(mut stream: TcpStream, body: &str) -> std::io::Result<()> {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    Ok(())
}
