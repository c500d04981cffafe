//! Folds the legacy `tracklist` into `Tracks`.
use super::{CatalogRecord, TRACKLIST_KEY, TRACKS_KEY};
use serde_json::Value;
use std::collections::HashSet;

/// Merge `tracklist` into `Tracks`, deduplicating by `url`.
///
/// Existing `Tracks` order is kept as a prefix. Entries without a string
/// `url` have no identity and are always appended. Returns how many entries
/// were appended. `tracklist` never survives this call; a value that is not
/// a list holds no entries and is simply dropped.
pub fn normalize(record: &mut CatalogRecord) -> usize {
    record.extra.shift_remove(TRACKLIST_KEY);
    let Some(legacy) = record.tracklist.take() else {
        return 0;
    };

    let Some(tracks) = record.tracks.as_mut() else {
        if let Some(other) = record.extra.get(TRACKS_KEY).filter(|v| !v.is_null()) {
            tracing::warn!(
                kind = json_kind(other),
                dropped = legacy.len(),
                "Tracks is not a list; legacy tracklist dropped"
            );
            return 0;
        }
        let appended = legacy.len();
        record.tracks = Some(legacy);
        return appended;
    };

    let mut seen: HashSet<String> = tracks
        .iter()
        .filter_map(|t| t.url().map(str::to_string))
        .collect();
    let before = tracks.len();
    for track in legacy {
        if let Some(url) = track.url() {
            if !seen.insert(url.to_string()) {
                continue;
            }
        }
        tracks.push(track);
    }
    tracks.len() - before
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
