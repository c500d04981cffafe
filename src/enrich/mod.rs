//! LM-backed album metadata enrichment.
//!
//! The record is serialized into a fixed instruction prompt, the LM's reply
//! is scanned for a JSON object, and thirteen known fields are merged back
//! with per-field fallbacks. LM or parse failures never abort the pipeline;
//! only missing configuration does, and that happens before any LM call.
mod client;
mod config;
mod fields;
mod lm_client;
mod payload;
mod prompt;

pub use client::EnrichmentClient;
pub use config::{load_config, resolve_config_path};
