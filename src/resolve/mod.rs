//! Track-to-URL resolution against a playlist listing.
//!
//! Matching is deliberately plain: the lowercased track name must appear as
//! a substring of the lowercased entry title, and the first such entry wins.
use serde::Serialize;

mod playlist;

pub use playlist::{resolve_ytdlp_command, PlaylistInfo, PlaylistOracle, YtDlp};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Result printed by `mfill resolve`: `{"url": ...}` plus `error` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Resolution {
    pub fn found(url: String) -> Self {
        Self {
            url: Some(url),
            error: None,
        }
    }

    pub fn absent() -> Self {
        Self {
            url: None,
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            url: None,
            error: Some(reason.into()),
        }
    }
}

/// Canonical watch URL for a video id.
pub fn watch_url(id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{id}")
}

fn title_matches(title: Option<&str>, needle: &str) -> bool {
    title.unwrap_or_default().to_lowercase().contains(needle)
}

/// Find the first title containing `track_name`, ignoring case.
///
/// A non-empty `entries` list is searched in order; otherwise the item is
/// matched against its own title. Only the first match counts: if it has no
/// id there is no URL to report.
pub fn find_track_url(info: &PlaylistInfo, track_name: &str) -> Option<String> {
    let needle = track_name.to_lowercase();
    let (title, id) = match info.entries.as_deref() {
        Some(entries) if !entries.is_empty() => {
            let entry = entries
                .iter()
                .find(|entry| title_matches(entry.title.as_deref(), &needle))?;
            (entry.title.as_deref(), entry.id.as_deref())
        }
        _ if title_matches(info.title.as_deref(), &needle) => {
            (info.title.as_deref(), info.id.as_deref())
        }
        _ => return None,
    };

    if id.is_none() {
        tracing::warn!(title = title.unwrap_or_default(), "matching entry has no id");
    }
    id.map(watch_url)
}

/// List `reference` through `oracle` and look up `track_name` in it.
///
/// Listing failures are reported inside the [`Resolution`], never returned.
pub fn resolve_track_url(
    oracle: &dyn PlaylistOracle,
    reference: &str,
    track_name: &str,
) -> Resolution {
    let info = match oracle.list(reference) {
        Ok(info) => info,
        Err(err) => {
            tracing::warn!(reference, error = %err, "playlist listing failed");
            return Resolution::failed(format!("{err:#}"));
        }
    };

    match find_track_url(&info, track_name) {
        Some(url) => {
            tracing::info!(track_name, %url, "track resolved");
            Resolution::found(url)
        }
        None => {
            tracing::info!(
                track_name,
                entries = info.entries.as_ref().map_or(0, Vec::len),
                "no matching track"
            );
            Resolution::absent()
        }
    }
}
