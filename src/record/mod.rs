//! Album catalog record types.
//!
//! A record is a loosely shaped JSON document. Only the keys the pipelines
//! touch get named fields; everything else rides along in `extra` so it is
//! written back untouched. The key order of the source document is kept:
//! known keys are written back where they were read, new ones are appended.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod normalize;
mod storage;

pub use normalize::normalize;
pub use storage::{read_record, render_record, write_record};

pub const TRACKS_KEY: &str = "Tracks";
pub const TRACKLIST_KEY: &str = "tracklist";
const LEGACY_GENRE_KEY: &str = "Genre";

/// One album record as stored on disk.
///
/// `Tracks` and `tracklist` are only lifted into named fields when they hold
/// a JSON array; any other value (including `null`) stays in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct CatalogRecord {
    pub tracks: Option<Vec<TrackEntry>>,
    /// Legacy track list; folded into `tracks` by [`normalize`].
    pub tracklist: Option<Vec<TrackEntry>>,

    pub contributing_artist: Option<Value>,
    pub genre: Option<Value>,
    pub rating: Option<Value>,
    pub comments: Option<Value>,
    pub publisher: Option<Value>,
    pub encoded_by: Option<Value>,
    pub parental_rating_reason: Option<Value>,
    pub composers: Option<Value>,
    pub conductors: Option<Value>,
    pub group_description: Option<Value>,
    pub mood: Option<Value>,
    pub part_of_set: Option<Value>,
    pub protected: Option<Value>,

    /// Keys with no dedicated field.
    pub extra: Map<String, Value>,

    /// Key order of the document this record was read from.
    key_order: Vec<String>,
}

/// A single track inside a record, kept exactly as read.
///
/// Only `url` carries meaning: a string `url` is the track's identity. Any
/// other shape (missing, non-string, or an entry that is not an object) has
/// no identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry(Value);

impl TrackEntry {
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }
}

impl From<Value> for TrackEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<TrackEntry> for Value {
    fn from(entry: TrackEntry) -> Self {
        entry.0
    }
}

impl CatalogRecord {
    /// Value of the capitalised `Genre` key some scrapers write.
    pub fn legacy_genre(&self) -> Option<&Value> {
        self.extra
            .get(LEGACY_GENRE_KEY)
            .filter(|value| !value.is_null())
    }

    pub fn track_count(&self) -> usize {
        self.tracks.as_ref().map_or(0, Vec::len)
    }

    fn value_slots(&mut self) -> [(&'static str, &mut Option<Value>); 13] {
        [
            ("contributing_artist", &mut self.contributing_artist),
            ("genre", &mut self.genre),
            ("rating", &mut self.rating),
            ("comments", &mut self.comments),
            ("publisher", &mut self.publisher),
            ("encoded_by", &mut self.encoded_by),
            ("parental_rating_reason", &mut self.parental_rating_reason),
            ("composers", &mut self.composers),
            ("conductors", &mut self.conductors),
            ("group_description", &mut self.group_description),
            ("mood", &mut self.mood),
            ("part_of_set", &mut self.part_of_set),
            ("protected", &mut self.protected),
        ]
    }
}

fn take_track_list(map: &mut Map<String, Value>, key: &str) -> Option<Vec<TrackEntry>> {
    if !matches!(map.get(key), Some(Value::Array(_))) {
        return None;
    }
    match map.shift_remove(key) {
        Some(Value::Array(items)) => Some(items.into_iter().map(TrackEntry::from).collect()),
        _ => None,
    }
}

fn track_list_value(entries: Vec<TrackEntry>) -> Value {
    Value::Array(entries.into_iter().map(Value::from).collect())
}

impl From<Map<String, Value>> for CatalogRecord {
    fn from(mut map: Map<String, Value>) -> Self {
        let mut record = CatalogRecord {
            key_order: map.keys().cloned().collect(),
            ..CatalogRecord::default()
        };
        record.tracks = take_track_list(&mut map, TRACKS_KEY);
        record.tracklist = take_track_list(&mut map, TRACKLIST_KEY);
        for (key, slot) in record.value_slots() {
            *slot = map.shift_remove(key);
        }
        record.extra = map;
        record
    }
}

impl From<CatalogRecord> for Map<String, Value> {
    fn from(mut record: CatalogRecord) -> Self {
        let mut named: Vec<(&'static str, Value)> = Vec::new();
        if let Some(tracks) = record.tracks.take() {
            named.push((TRACKS_KEY, track_list_value(tracks)));
        }
        if let Some(tracklist) = record.tracklist.take() {
            named.push((TRACKLIST_KEY, track_list_value(tracklist)));
        }
        for (key, slot) in record.value_slots() {
            if let Some(value) = slot.take() {
                named.push((key, value));
            }
        }

        let mut extra = std::mem::take(&mut record.extra);
        let mut out = Map::new();
        for key in &record.key_order {
            if let Some(pos) = named.iter().position(|(name, _)| name == key) {
                let (name, value) = named.remove(pos);
                extra.shift_remove(name);
                out.insert(name.to_string(), value);
            } else if let Some(value) = extra.shift_remove(key) {
                out.insert(key.clone(), value);
            }
        }
        for (name, value) in named {
            extra.shift_remove(name);
            out.insert(name.to_string(), value);
        }
        out.extend(extra);
        out
    }
}
