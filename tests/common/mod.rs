//! Shared helpers for driving the `mfill` binary in integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn mfill() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mfill"));
    command
        .env_remove("METADATA_FILLER_CONFIG")
        .env_remove("METADATA_FILLER_YTDLP")
        .env_remove("RUST_LOG");
    command
}

pub fn run(command: &mut Command) -> Output {
    command.output().expect("run mfill")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents.as_bytes()).expect("write file");
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read json file");
    serde_json::from_str(&text).expect("parse json file")
}

/// Config whose LM endpoint is a closed local port, so every call fails fast.
pub fn write_unreachable_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    write_file(
        &path,
        r#"{"openai_credentials": {"api_key": "sk-test", "base_url": "http://127.0.0.1:1/v1"}}"#,
    );
    path
}

/// A stand-in `yt-dlp` that prints `listing` when called in flat mode.
#[cfg(unix)]
pub fn write_fake_ytdlp(dir: &Path, listing: &str) -> String {
    let listing_path = dir.join("listing.json");
    write_file(&listing_path, listing);
    let script_path = dir.join("fake-yt-dlp.sh");
    write_file(
        &script_path,
        &format!(
            "#!/bin/sh\nflat=\nfor arg in \"$@\"; do\n  [ \"$arg\" = \"--flat-playlist\" ] && flat=1\ndone\n[ -n \"$flat\" ] || {{ echo 'missing --flat-playlist' >&2; exit 2; }}\ncat {}\n",
            shell_words::quote(&listing_path.to_string_lossy())
        ),
    );
    format!("sh {}", shell_words::quote(&script_path.to_string_lossy()))
}
