use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::assets::{ContentAssets, ICON_FILE, INDEX_FILE};

use super::ServerManager;

fn fixture_assets(index_body: Option<&str>) -> (tempfile::TempDir, Arc<ContentAssets>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    if let Some(body) = index_body {
        std::fs::write(dir.path().join(INDEX_FILE), body).expect("write index");
    }
    std::fs::write(dir.path().join(ICON_FILE), [0u8, 0, 1, 0]).expect("write icon");
    let assets = Arc::new(ContentAssets::load(dir.path().to_path_buf()).expect("load assets"));
    (dir, assets)
}

fn http_get(port: u16, path: &str) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    write!(
        stream,
        "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
    )
    .expect("send request");
    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read response");
    response
}

#[test]
fn start_reports_the_bound_port_and_serves_the_root_document() {
    let (_dir, assets) = fixture_assets(Some("<html>hello</html>"));
    let mut manager = ServerManager::default();

    let status = manager.start(assets, 0).expect("start server");
    assert!(status.running);
    let port = status.port.expect("bound port");
    assert_eq!(
        status.base_url.as_deref(),
        Some(format!("http://localhost:{port}").as_str())
    );

    let response = http_get(port, "/");
    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.contains("text/html"));
    assert!(response.contains("<html>hello</html>"));

    let (shutdown, task) = manager.take_running().expect("running server");
    let _ = shutdown.send(());
    let joined = tauri::async_runtime::block_on(async {
        tokio::time::timeout(Duration::from_secs(10), task).await
    });
    assert!(joined.is_ok(), "serve task stops within the deadline");
    assert!(!manager.status().running);
}

#[test]
fn favicon_serves_the_preloaded_icon_bytes() {
    let (_dir, assets) = fixture_assets(None);
    let mut manager = ServerManager::default();

    let status = manager.start(assets, 0).expect("start server");
    let port = status.port.expect("bound port");

    let response = http_get(port, "/favicon.ico");
    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.contains("image/x-icon"));

    let (shutdown, _task) = manager.take_running().expect("running server");
    let _ = shutdown.send(());
}

#[test]
fn missing_root_document_is_reported_as_not_found() {
    let (_dir, assets) = fixture_assets(None);
    let mut manager = ServerManager::default();

    let status = manager.start(assets, 0).expect("start server");
    let port = status.port.expect("bound port");

    let response = http_get(port, "/");
    assert!(response.starts_with("HTTP/1.1 404"), "got: {response}");

    let (shutdown, _task) = manager.take_running().expect("running server");
    let _ = shutdown.send(());
}

#[test]
fn starting_on_a_taken_port_fails() {
    let holder = std::net::TcpListener::bind(("127.0.0.1", 0)).expect("bind holder");
    let port = holder.local_addr().expect("holder addr").port();

    let (_dir, assets) = fixture_assets(None);
    let mut manager = ServerManager::default();

    let err = manager.start(assets, port).expect_err("bind conflict");
    assert!(err.contains("failed to bind"), "got: {err}");
    assert!(!manager.status().running);
}

#[test]
fn start_is_idempotent_while_running() {
    let (_dir, assets) = fixture_assets(None);
    let mut manager = ServerManager::default();

    let first = manager.start(assets.clone(), 0).expect("start server");
    let second = manager.start(assets, 0).expect("second start");
    assert_eq!(first.port, second.port);

    let (shutdown, _task) = manager.take_running().expect("running server");
    let _ = shutdown.send(());
    assert!(manager.take_running().is_none());
}
