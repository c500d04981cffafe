//! `mfill enrich <record>`: normalize tracks, ask the LM, write the record back.
use crate::cli::EnrichArgs;
use crate::enrich::{load_config, resolve_config_path, EnrichmentClient};
use crate::record::{normalize, read_record, render_record, write_record};
use anyhow::{anyhow, Result};

/// Run the enrichment pipeline for one record file.
///
/// Missing inputs (record file, config file, API key) fail before the LM is
/// contacted. LM problems only downgrade the result to fallback values.
pub fn run_enrich(args: &EnrichArgs) -> Result<()> {
    if !args.record.is_file() {
        return Err(anyhow!("record file not found: {}", args.record.display()));
    }

    let config_path = resolve_config_path(args.config.as_deref())?;
    let mut config = load_config(&config_path)?;
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    tracing::info!(config = %config_path.display(), model = %config.model, "config loaded");

    let mut record = read_record(&args.record)?;
    let appended = normalize(&mut record);
    tracing::info!(appended, tracks = record.track_count(), "tracks normalized");

    let client = EnrichmentClient::from_config(config);
    let outcome = client.enrich(&mut record);
    tracing::info!(
        from_lm = outcome.supplied.len(),
        fallbacks = outcome.fallback_count(),
        degraded = outcome.degraded.is_some(),
        "album enriched"
    );

    if args.dry_run {
        print!("{}", render_record(&record)?);
        return Ok(());
    }

    write_record(&args.record, &record)?;
    println!(
        "Album metadata updated and saved to {}",
        args.record.display()
    );
    Ok(())
}
