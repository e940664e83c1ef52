#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use anghami2spotify::{
    config::SpotifySettings,
    report::Reporter,
    spotify::{MusicService, RemoteError},
    types::{Session, Track},
};
use async_trait::async_trait;

/// In-memory stand-in for Spotify.
///
/// Queries listed in `catalog` resolve to a track, queries in `failing` make
/// the search fail, everything else finds nothing.
#[derive(Default)]
pub struct FakeService {
    pub catalog: HashMap<String, String>,
    pub failing: Vec<String>,
    pub reject_auth: bool,
    pub reject_create: bool,
    pub fail_add_for: Vec<String>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(String, String, String)>>,
    pub added: Mutex<Vec<(String, String)>>,
}

impl FakeService {
    pub fn with_catalog(entries: &[(&str, &str)]) -> Self {
        Self {
            catalog: entries
                .iter()
                .map(|(q, uri)| (q.to_string(), uri.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added_uris(&self) -> Vec<String> {
        self.added
            .lock()
            .unwrap()
            .iter()
            .map(|(_, uri)| uri.clone())
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn rejected(message: &str) -> RemoteError {
    RemoteError::Status {
        status: 400,
        message: message.to_string(),
    }
}

#[async_trait]
impl MusicService for FakeService {
    async fn authenticate(&self, credentials: &SpotifySettings) -> Result<Session, RemoteError> {
        self.record(format!("authenticate {}", credentials.client_id));
        if self.reject_auth {
            return Err(RemoteError::Denied("access_denied".to_string()));
        }
        Ok(Session::from_access_token("fake-token"))
    }

    async fn create_playlist(
        &self,
        session: &Session,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, RemoteError> {
        assert_eq!(session.access_token(), "fake-token");
        self.record(format!("create_playlist {}", name));
        if self.reject_create {
            return Err(rejected("Invalid user"));
        }
        self.created.lock().unwrap().push((
            user_id.to_string(),
            name.to_string(),
            description.to_string(),
        ));
        Ok("playlist-1".to_string())
    }

    async fn search_track(
        &self,
        _session: &Session,
        query: &str,
    ) -> Result<Option<Track>, RemoteError> {
        self.record(format!("search {}", query));
        if self.failing.iter().any(|q| q == query) {
            return Err(rejected("search failed"));
        }
        Ok(self.catalog.get(query).map(|uri| Track {
            id: Some(uri.trim_start_matches("spotify:track:").to_string()),
            name: query.to_string(),
            uri: uri.clone(),
        }))
    }

    async fn add_track(
        &self,
        _session: &Session,
        playlist_id: &str,
        track_uri: &str,
    ) -> Result<(), RemoteError> {
        self.record(format!("add {}", track_uri));
        if self.fail_add_for.iter().any(|u| u == track_uri) {
            return Err(rejected("add failed"));
        }
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), track_uri.to_string()));
        Ok(())
    }
}

/// Reporter that keeps every line, tagged with its channel.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Mutex<Vec<(&'static str, String)>>,
    pub progress: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn channel(&self, channel: &str) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn progress(&self) -> Vec<String> {
        self.progress.lock().unwrap().clone()
    }

    fn push(&self, channel: &'static str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((channel, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn success(&self, message: &str) {
        self.push("success", message);
    }

    fn warning(&self, message: &str) {
        self.push("warning", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn start_progress(&self, total: u64, _message: &str) {
        self.progress.lock().unwrap().push(format!("start {}", total));
    }

    fn advance(&self, label: &str) {
        self.progress.lock().unwrap().push(label.to_string());
    }

    fn finish_progress(&self) {
        self.progress.lock().unwrap().push("finish".to_string());
    }
}

/// Minimal export page with the given rows.
pub fn export_html(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (title, artist) in rows {
        body.push_str(&format!(
            r#"<div class="row"><div class="cell cell-title"><span>{}</span></div><div class="cell cell-artist">{}</div></div>"#,
            title, artist
        ));
    }
    format!("<html><body><div class=\"table\">{}</div></body></html>", body)
}

pub fn settings_toml(html_path: &str, save_to_text: bool, txt_path: &str, separator: &str) -> String {
    format!(
        r#"[anghami]
html_file_path = "{html}"

[spotify]
client_id = "client-id"
client_secret = "client-secret"
redirect_url = "http://localhost:8888/callback"
username = "someone"
playlist_name = "From Anghami"

[general]
save_to_text = {save}
txt_save_path = "{txt}"
txt_song_artist_separator = "{sep}"
"#,
        html = html_path,
        save = save_to_text,
        txt = txt_path,
        sep = separator,
    )
}
