//! End-to-end tests: the workspace façade over the real reqwest transport
//! and the file-backed snapshot store.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use nexus_application::Workspace;
use nexus_domain::{HttpMethod, Payload, RequestPatch, WorkbenchSettings, WorkspaceSnapshot};
use nexus_infrastructure::{FileSnapshotStore, ReqwestTransport, SystemClock};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers every connection with the same JSON body until the test ends.
async fn json_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buffer = [0_u8; 4096];
                let _ = socket.read(&mut buffer).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn workspace() -> Workspace {
    let transport = ReqwestTransport::new(&WorkbenchSettings::default()).unwrap();
    Workspace::new(Arc::new(transport), Arc::new(SystemClock::new()))
}

#[tokio::test]
async fn test_send_save_and_reload() {
    let body = r#"{"id": 7, "name": "Ada"}"#;
    let base = json_server(body).await;
    let dir = tempdir().expect("Failed to create temp directory");
    let store = FileSnapshotStore::new(dir.path().join("workspace.json"));

    let ws = workspace();
    ws.update_variable("local", "base_url", &base);
    ws.create_collection("Users");
    let tab = ws.add_tab(Some(RequestPatch {
        name: Some("Get user".to_string()),
        url: Some("{{base_url}}/users/7".to_string()),
        ..RequestPatch::default()
    }));

    let response = ws.send(&tab).await.expect("tab exists");

    assert_eq!(response.status, 200);
    assert_eq!(response.size, body.len());
    assert!(matches!(response.data, Payload::Structured(_)));
    assert!(!ws.tab(&tab).unwrap().is_loading);

    ws.save_tab(&tab, "").expect("tab exists");
    ws.save_to(&store).await.unwrap();

    let reloaded = workspace();
    assert!(reloaded.load_from(&store).await.unwrap());

    assert!(reloaded.tabs().is_empty());
    assert_eq!(reloaded.active_collection(), "Users");
    let grouped = reloaded.grouped_collections();
    assert_eq!(grouped["Users"].len(), 1);
    assert_eq!(grouped["Users"][0].url, "{{base_url}}/users/7");

    let history = reloaded.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].request.url, "{{base_url}}/users/7");
    assert_eq!(
        reloaded
            .active_environment()
            .and_then(|e| e.get_variable("base_url").map(str::to_string)),
        Some(base)
    );
}

#[tokio::test]
async fn test_unreachable_host_through_workspace() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ws = workspace();
    let tab = ws.add_tab(Some(RequestPatch {
        method: Some(HttpMethod::Post),
        url: Some(format!("http://{addr}/items")),
        body: Some(r#"{"a": 1}"#.to_string()),
        ..RequestPatch::default()
    }));

    let response = ws.send(&tab).await.expect("tab exists");

    assert_eq!(response.status, 0);
    assert_eq!(response.status_text, "Network Error");
    let stored = ws.tab(&tab).unwrap();
    assert!(!stored.is_loading);
    assert_eq!(stored.response, Some(response));
    assert_eq!(ws.history().len(), 1);
}

#[tokio::test]
async fn test_empty_url_degrades_to_network_error() {
    let ws = workspace();
    let tab = ws.add_tab(None);

    let response = ws.send(&tab).await.expect("tab exists");

    assert!(response.is_network_error());
    assert!(response.error_message().unwrap().starts_with("Invalid URL"));
}

#[tokio::test]
async fn test_concurrent_sends_on_separate_tabs() {
    let base = json_server(r#"{"ok": true}"#).await;
    let ws = workspace();
    ws.update_variable("local", "base_url", &base);

    let tabs: Vec<String> = (0..5)
        .map(|i| ws.add_tab(Some(RequestPatch::url(format!("{{{{base_url}}}}/item/{i}")))))
        .collect();

    let handles: Vec<_> = tabs
        .iter()
        .map(|tab| {
            let ws = ws.clone();
            let tab = tab.clone();
            tokio::spawn(async move { ws.send(&tab).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().status, 200);
    }

    assert_eq!(ws.history().len(), 5);
    assert!(ws.tabs().iter().all(|t| !t.is_loading && t.response.is_some()));
}

#[tokio::test]
async fn test_missing_snapshot_keeps_fresh_workspace() {
    let dir = tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("absent.json"));
    let ws = workspace();

    assert!(!ws.load_from(&store).await.unwrap());
    assert_eq!(ws.snapshot(), WorkspaceSnapshot::default());
}
