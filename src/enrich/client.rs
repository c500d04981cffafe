//! One-shot album enrichment: prompt, ask, extract, merge.
use super::config::EnrichmentConfig;
use super::fields::{apply_payload, EnrichmentField};
use super::lm_client::{ChatClient, CompletionOracle, EnrichmentError};
use super::payload::extract_first_json_object;
use super::prompt::{build_enrich_prompt, SYSTEM_PROMPT};
use crate::record::CatalogRecord;
use serde_json::{Map, Value};

/// What an [`EnrichmentClient::enrich`] call did to the record.
#[derive(Debug)]
pub struct EnrichOutcome {
    /// Fields whose value came from the LM; the rest hold fallbacks.
    pub supplied: Vec<EnrichmentField>,
    /// Why the LM payload was discarded, if it was.
    pub degraded: Option<EnrichmentError>,
}

impl EnrichOutcome {
    pub fn fallback_count(&self) -> usize {
        EnrichmentField::ALL.len() - self.supplied.len()
    }
}

pub struct EnrichmentClient<O> {
    oracle: O,
}

impl EnrichmentClient<ChatClient> {
    pub fn from_config(config: EnrichmentConfig) -> Self {
        Self::new(ChatClient::new(config))
    }
}

impl<O: CompletionOracle> EnrichmentClient<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Ask the LM about `record` and return the JSON object in its reply.
    pub fn fetch_payload(
        &self,
        record: &CatalogRecord,
    ) -> Result<Map<String, Value>, EnrichmentError> {
        let prompt = build_enrich_prompt(record).map_err(EnrichmentError::Prompt)?;
        let reply = self.oracle.complete(SYSTEM_PROMPT, &prompt)?;
        Ok(extract_first_json_object(&reply)?)
    }

    /// Fill all enrichment fields on `record`.
    ///
    /// Never fails: any error getting a payload is logged and recorded in the
    /// outcome, and every field falls back to its default.
    pub fn enrich(&self, record: &mut CatalogRecord) -> EnrichOutcome {
        let (payload, degraded) = match self.fetch_payload(record) {
            Ok(payload) => (payload, None),
            Err(err) => {
                tracing::warn!(error = %err, "album enrichment fell back to defaults");
                (Map::new(), Some(err))
            }
        };
        let supplied = apply_payload(record, &payload);
        EnrichOutcome { supplied, degraded }
    }
}
