#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use mocknode_core::node::HEALTH_BODY;
use mocknode_server::{app_state::AppState, lifecycle, obs::NullAccessLog, router::build_router};

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_over_tcp_then_returns_ok_on_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(AppState::with_access_log(Arc::new(NullAccessLog)).unwrap());

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(lifecycle::serve_until(listener, app, async {
        let _ = stop_rx.await;
    }));

    let resp = raw_get(addr, "/health").await;
    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"), "{resp}");
    assert!(resp.ends_with(HEALTH_BODY), "{resp}");

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server must stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}

#[test]
fn shutdown_line_is_stable() {
    assert_eq!(lifecycle::SHUTDOWN_LINE, "Shutting down mock node...");
}
