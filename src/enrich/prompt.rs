//! Prompt assembly for album enrichment.
use super::fields::EnrichmentField;
use crate::record::CatalogRecord;

/// System role sent alongside every enrichment prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful metadata assistant.";

const ENRICH_ALBUM: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/enrich_album.md"
));

/// Build the user prompt: fixed instructions followed by the record as JSON.
pub fn build_enrich_prompt(record: &CatalogRecord) -> serde_json::Result<String> {
    let record_json = serde_json::to_string(record)?;

    let field_list = EnrichmentField::ALL
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ");

    let list_fields = EnrichmentField::ALL
        .iter()
        .filter(|field| field.is_list())
        .map(|field| field.key())
        .collect::<Vec<_>>();
    let list_fields = match list_fields.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    };

    Ok(ENRICH_ALBUM
        .replace("{field_list}", &field_list)
        .replace("{list_fields}", &list_fields)
        .replace("{record_json}", &record_json))
}
