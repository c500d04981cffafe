//! The thirteen album attributes filled in by the LM and their fallbacks.
use crate::record::CatalogRecord;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentField {
    ContributingArtist,
    Genre,
    Rating,
    Comments,
    Publisher,
    EncodedBy,
    ParentalRatingReason,
    Composers,
    Conductors,
    GroupDescription,
    Mood,
    PartOfSet,
    Protected,
}

impl EnrichmentField {
    /// Every field, in the order the prompt lists them.
    pub const ALL: [EnrichmentField; 13] = [
        Self::ContributingArtist,
        Self::Genre,
        Self::Rating,
        Self::Comments,
        Self::Publisher,
        Self::EncodedBy,
        Self::ParentalRatingReason,
        Self::Composers,
        Self::Conductors,
        Self::GroupDescription,
        Self::Mood,
        Self::PartOfSet,
        Self::Protected,
    ];

    /// JSON key in both the record and the LM payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::ContributingArtist => "contributing_artist",
            Self::Genre => "genre",
            Self::Rating => "rating",
            Self::Comments => "comments",
            Self::Publisher => "publisher",
            Self::EncodedBy => "encoded_by",
            Self::ParentalRatingReason => "parental_rating_reason",
            Self::Composers => "composers",
            Self::Conductors => "conductors",
            Self::GroupDescription => "group_description",
            Self::Mood => "mood",
            Self::PartOfSet => "part_of_set",
            Self::Protected => "protected",
        }
    }

    /// Fields the LM must answer with a JSON array.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::ContributingArtist | Self::Composers | Self::Conductors
        )
    }

    /// Value used when the payload has nothing for this field.
    pub fn fallback(self, record: &CatalogRecord) -> Value {
        match self {
            Self::ContributingArtist | Self::Composers | Self::Conductors => json!([]),
            Self::Genre => record.legacy_genre().cloned().unwrap_or_else(|| json!("")),
            Self::Rating | Self::PartOfSet => json!(0),
            Self::Protected => json!(false),
            Self::Comments
            | Self::Publisher
            | Self::EncodedBy
            | Self::ParentalRatingReason
            | Self::GroupDescription
            | Self::Mood => json!(""),
        }
    }

    fn slot(self, record: &mut CatalogRecord) -> &mut Option<Value> {
        match self {
            Self::ContributingArtist => &mut record.contributing_artist,
            Self::Genre => &mut record.genre,
            Self::Rating => &mut record.rating,
            Self::Comments => &mut record.comments,
            Self::Publisher => &mut record.publisher,
            Self::EncodedBy => &mut record.encoded_by,
            Self::ParentalRatingReason => &mut record.parental_rating_reason,
            Self::Composers => &mut record.composers,
            Self::Conductors => &mut record.conductors,
            Self::GroupDescription => &mut record.group_description,
            Self::Mood => &mut record.mood,
            Self::PartOfSet => &mut record.part_of_set,
            Self::Protected => &mut record.protected,
        }
    }
}

/// Write every enrichment field into `record`.
///
/// Payload values win when present and non-null; value types are not
/// checked. Returns the fields that came from the payload.
pub fn apply_payload(
    record: &mut CatalogRecord,
    payload: &Map<String, Value>,
) -> Vec<EnrichmentField> {
    let mut supplied = Vec::new();
    for field in EnrichmentField::ALL {
        let value = match payload.get(field.key()).filter(|v| !v.is_null()) {
            Some(value) => {
                supplied.push(field);
                value.clone()
            }
            None => field.fallback(record),
        };
        *field.slot(record) = Some(value);
    }
    supplied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn enrichment_view(record: &CatalogRecord) -> Value {
        let value = serde_json::to_value(record).expect("serialize");
        let mut view = Map::new();
        for field in EnrichmentField::ALL {
            view.insert(field.key().to_string(), value[field.key()].clone());
        }
        Value::Object(view)
    }

    #[test]
    fn empty_payload_sets_every_fallback() {
        let mut record = CatalogRecord::default();
        let supplied = apply_payload(&mut record, &Map::new());

        assert!(supplied.is_empty());
        assert_eq!(
            enrichment_view(&record),
            json!({
                "contributing_artist": [],
                "genre": "",
                "rating": 0,
                "comments": "",
                "publisher": "",
                "encoded_by": "",
                "parental_rating_reason": "",
                "composers": [],
                "conductors": [],
                "group_description": "",
                "mood": "",
                "part_of_set": 0,
                "protected": false
            })
        );
    }

    #[test]
    fn partial_payload_overrides_named_fields_only() {
        let mut record = CatalogRecord::default();
        let supplied = apply_payload(&mut record, &payload(json!({"genre": "Jazz", "rating": 5})));

        assert_eq!(supplied, vec![EnrichmentField::Genre, EnrichmentField::Rating]);
        assert_eq!(record.genre, Some(json!("Jazz")));
        assert_eq!(record.rating, Some(json!(5)));
        assert_eq!(record.mood, Some(json!("")));
        assert_eq!(record.composers, Some(json!([])));
        assert_eq!(record.protected, Some(json!(false)));
    }

    #[test]
    fn genre_falls_back_to_legacy_key() {
        let mut record: CatalogRecord =
            serde_json::from_value(json!({"Genre": "Hip-Hop"})).expect("parse");
        apply_payload(&mut record, &Map::new());

        assert_eq!(record.genre, Some(json!("Hip-Hop")));
        assert_eq!(record.extra.get("Genre"), Some(&json!("Hip-Hop")));
    }

    #[test]
    fn null_payload_values_use_fallback() {
        let mut record = CatalogRecord::default();
        let supplied = apply_payload(
            &mut record,
            &payload(json!({"publisher": null, "conductors": null})),
        );

        assert!(supplied.is_empty());
        assert_eq!(record.publisher, Some(json!("")));
        assert_eq!(record.conductors, Some(json!([])));
    }

    #[test]
    fn mismatched_types_pass_through() {
        let mut record = CatalogRecord::default();
        apply_payload(
            &mut record,
            &payload(json!({"composers": "will.i.am", "rating": "five", "extra_key": 1})),
        );

        assert_eq!(record.composers, Some(json!("will.i.am")));
        assert_eq!(record.rating, Some(json!("five")));
        assert!(!record.extra.contains_key("extra_key"));
    }

    #[test]
    fn existing_values_are_replaced() {
        let mut record: CatalogRecord =
            serde_json::from_value(json!({"mood": "mellow", "Album_Title": "x"})).expect("parse");
        apply_payload(&mut record, &Map::new());

        assert_eq!(record.mood, Some(json!("")));
        assert_eq!(record.extra.get("Album_Title"), Some(&json!("x")));
    }

    #[test]
    fn list_fields_are_the_three_arrays() {
        let lists: Vec<&str> = EnrichmentField::ALL
            .iter()
            .filter(|f| f.is_list())
            .map(|f| f.key())
            .collect();
        assert_eq!(lists, vec!["contributing_artist", "composers", "conductors"]);
    }

    #[test]
    fn record_keys_map_to_field_slots() {
        for field in EnrichmentField::ALL {
            let mut record: CatalogRecord =
                serde_json::from_value(json!({ (field.key()): "seen" })).expect("parse");
            assert_eq!(*field.slot(&mut record), Some(json!("seen")), "{}", field.key());
            assert!(record.extra.is_empty(), "{} left in extra", field.key());
        }
    }
}
