#![allow(dead_code)]

use reelscout::library::{MediaItem, MediaKind};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temporary directory for testing purposes.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Install a tracing subscriber reading `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A movie work item.
pub fn movie(id: &str, name: &str) -> MediaItem {
    MediaItem::new(id, name, MediaKind::Movie)
}

/// A series work item.
pub fn series(id: &str, name: &str) -> MediaItem {
    MediaItem::new(id, name, MediaKind::Series)
}

/// A progress callback recording every reported percentage.
pub fn recording_progress() -> (impl Fn(f64) + Send + Sync + 'static, Arc<Mutex<Vec<f64>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (
        move |percent: f64| sink.lock().unwrap().push(percent),
        seen,
    )
}

/// A TMDb search payload with the given title ids.
pub fn search_payload(ids: &[i64]) -> Value {
    json!({ "results": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>() })
}

/// A TMDb videos payload from `(key, official)` pairs, all YouTube trailers.
pub fn trailers_payload(entries: &[(&str, bool)]) -> Value {
    json!({
        "results": entries
            .iter()
            .map(|(key, official)| {
                json!({"site": "YouTube", "type": "Trailer", "key": key, "official": official})
            })
            .collect::<Vec<_>>()
    })
}

/// Mount a search mock answering a specific query with the given body.
pub async fn mount_search(server: &MockServer, query: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a videos mock for a title id.
pub async fn mount_videos(server: &MockServer, id: i64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/movie/{}/videos", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Write a fake yt-dlp shell script and make it executable.
#[cfg(unix)]
pub fn fake_ytdlp(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let exe = dir.join("yt-dlp");
    std::fs::write(&exe, format!("#!/bin/sh\n{}\n", script)).expect("Failed to write script");
    let mut perms = std::fs::metadata(&exe).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&exe, perms).unwrap();
    exe
}
