//! Flat playlist listings from `yt-dlp`.
//!
//! `yt-dlp --flat-playlist --dump-single-json <ref>` prints one JSON document
//! describing either a playlist (with `entries`) or a single video. Nothing
//! is downloaded.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::util::truncate_string;

/// Environment override for the yt-dlp command line.
pub const YTDLP_COMMAND_ENV: &str = "METADATA_FILLER_YTDLP";
pub const DEFAULT_YTDLP_COMMAND: &str = "yt-dlp";

const STDERR_LIMIT_BYTES: usize = 500;

/// One item of a flat playlist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaylistEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Top-level listing: a playlist when `entries` is set, otherwise one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaylistInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub entries: Option<Vec<PlaylistEntry>>,
}

/// Anything that can list a playlist (or single item) by reference.
pub trait PlaylistOracle {
    fn list(&self, reference: &str) -> Result<PlaylistInfo>;
}

/// [`PlaylistOracle`] backed by a `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    /// Command line, split with shell-words (e.g. `python -m yt_dlp`).
    pub command: String,
}

impl YtDlp {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Resolve the yt-dlp command: explicit arg > env var > `yt-dlp`.
pub fn resolve_ytdlp_command(explicit: Option<&str>) -> String {
    explicit
        .map(|s| s.to_string())
        .or_else(|| env::var(YTDLP_COMMAND_ENV).ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_YTDLP_COMMAND.to_string())
}

impl PlaylistOracle for YtDlp {
    fn list(&self, reference: &str) -> Result<PlaylistInfo> {
        let args = shell_words::split(&self.command)
            .with_context(|| format!("parse yt-dlp command: {}", self.command))?;
        let (program, base_args) = args
            .split_first()
            .ok_or_else(|| anyhow!("yt-dlp command is empty"))?;

        let start = Instant::now();
        let output = Command::new(program)
            .args(base_args)
            .args(["--flat-playlist", "--dump-single-json", "--no-warnings"])
            .arg(reference)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("spawn yt-dlp command: {program}"))?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis(),
            response_bytes = output.stdout.len(),
            "playlist listing complete"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "yt-dlp failed with status {}: {}",
                output.status,
                truncate_string(stderr.trim(), STDERR_LIMIT_BYTES)
            ));
        }

        parse_listing(&output.stdout)
    }
}

/// Parse the JSON document printed by `--dump-single-json`.
pub fn parse_listing(bytes: &[u8]) -> Result<PlaylistInfo> {
    serde_json::from_slice(bytes).context("parse yt-dlp JSON output")
}
