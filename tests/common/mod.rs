//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Request lines seen by a mock backend, e.g. `GET /api/photos HTTP/1.1`.
pub type Seen = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` decides the status and body of every response.
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Seen)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::default();
    let f = Arc::new(f);
    let log = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        if let Some(line) = read_request_line(&mut socket).await {
                            log.lock().unwrap().push(line);
                        }
                        let (status, body) = f().await;
                        let response_str = format!(
                            "HTTP/1.1 {} Mock\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

/// Start a backend that always answers with a fixed status.
pub async fn start_mock_backend(status: u16) -> (SocketAddr, Seen) {
    start_programmable_backend(move || async move { (status, "ok".to_string()) }).await
}

/// Start a backend that accepts connections but never answers.
///
/// The counter tracks accepted connections.
pub async fn start_silent_backend() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(60)).await;
                drop(socket);
            });
        }
    });

    (addr, accepted)
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn read_request_line(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    head.lines().next().map(str::to_string)
}
