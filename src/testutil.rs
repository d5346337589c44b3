//! Shared plumbing for tests that need a stand-in contents API.

use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::github::ContentsClient;

/// Binds `router` on an ephemeral port and returns its base URL. The server
/// task runs until the test process exits.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn stub_client(api_base: &str) -> ContentsClient {
    ContentsClient::new(api_base.to_string(), Some("test-token".to_string())).unwrap()
}

/// A `file` record shaped like the real contents API, extra fields included.
pub fn file_entry(name: &str, path: &str, download_url: &str) -> Value {
    json!({
        "type": "file",
        "name": name,
        "path": path,
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "size": 1024,
        "download_url": download_url
    })
}

/// A `dir` record; the API sends no download_url for directories.
pub fn dir_entry(name: &str, path: &str) -> Value {
    json!({
        "type": "dir",
        "name": name,
        "path": path,
        "sha": "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3",
        "size": 0,
        "download_url": null
    })
}
