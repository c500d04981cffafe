//! Reading and durably rewriting the on-disk record document.
use super::CatalogRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Load a record from a UTF-8 JSON file.
pub fn read_record(path: &Path) -> Result<CatalogRecord> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read record {}", path.display()))?;
    let record = serde_json::from_str(&content)
        .with_context(|| format!("parse record JSON {}", path.display()))?;
    Ok(record)
}

/// Pretty-print a record with four-space indentation. Non-ASCII text is
/// written as-is, never `\u` escaped.
pub fn render_record(record: &CatalogRecord) -> Result<String> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    record
        .serialize(&mut serializer)
        .context("serialize record")?;
    let mut text = String::from_utf8(bytes).context("record JSON is not UTF-8")?;
    text.push('\n');
    Ok(text)
}

/// Overwrite `path` with `record`.
///
/// The document is staged in a sibling temp file and renamed over the
/// target, so readers see either the old or the new record.
pub fn write_record(path: &Path, record: &CatalogRecord) -> Result<()> {
    let text = render_record(record)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    staged
        .write_all(text.as_bytes())
        .context("write staged record")?;
    staged.as_file().sync_all().context("sync staged record")?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(staged.path(), meta.permissions())
            .context("copy record permissions")?;
    }
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
