//! `mfill resolve [playlist] [track]`: print `{"url": ...}` for the first match.
use crate::cli::ResolveArgs;
use crate::resolve::{resolve_track_url, resolve_ytdlp_command, YtDlp};
use anyhow::Result;

/// Resolve one track and print the JSON result on stdout.
///
/// "No match" and listing failures both exit successfully; callers read the
/// `url` and `error` fields instead of the exit status.
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let oracle = YtDlp::new(resolve_ytdlp_command(args.ytdlp.as_deref()));
    let resolution = resolve_track_url(&oracle, &args.playlist, &args.track);
    println!("{}", serde_json::to_string(&resolution)?);
    Ok(())
}
