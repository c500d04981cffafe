//! CLI argument parsing for the enrichment and resolution commands.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Playlist searched when `resolve` is run without arguments.
pub const DEFAULT_PLAYLIST: &str =
    "https://www.youtube.com/playlist?list=OLAK5uy_mp-BuWDQHAM9Up7syTjX3T_SQgC6PjgVA";
/// Track name searched when `resolve` is run without a second argument.
pub const DEFAULT_TRACK: &str = "I Gotta Feeling";

#[derive(Parser, Debug)]
#[command(
    name = "mfill",
    version,
    about = "Album metadata enrichment and playlist track resolution",
    after_help = "Examples:\n  mfill enrich ~/Music/the-end/album.json\n  mfill enrich album.json --dry-run\n  mfill resolve 'https://www.youtube.com/playlist?list=...' 'Meet Me Halfway'",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Enrich(EnrichArgs),
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
#[command(about = "Fill missing album metadata in a record file using an LM")]
pub struct EnrichArgs {
    /// Album record JSON file; overwritten in place
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Config file holding the API credential (defaults to the app data dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Chat model to use instead of the configured one
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Print the updated record instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
#[command(about = "Find a track's watch URL in a playlist; prints {\"url\": ...}")]
pub struct ResolveArgs {
    /// Playlist or video URL/identifier
    #[arg(value_name = "PLAYLIST", default_value = DEFAULT_PLAYLIST)]
    pub playlist: String,

    /// Track name to look for (case-insensitive substring)
    #[arg(value_name = "TRACK", default_value = DEFAULT_TRACK)]
    pub track: String,

    /// yt-dlp command line (defaults to $METADATA_FILLER_YTDLP, then `yt-dlp`)
    #[arg(long = "yt-dlp", value_name = "CMD")]
    pub ytdlp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        RootArgs::command().debug_assert();
    }

    #[test]
    fn resolve_defaults_apply() {
        let args = RootArgs::try_parse_from(["mfill", "resolve"]).expect("parse");
        let Command::Resolve(resolve) = args.command else {
            panic!("expected resolve");
        };
        assert_eq!(resolve.playlist, DEFAULT_PLAYLIST);
        assert_eq!(resolve.track, DEFAULT_TRACK);
        assert_eq!(resolve.ytdlp, None);
    }

    #[test]
    fn enrich_requires_record() {
        assert!(RootArgs::try_parse_from(["mfill", "enrich"]).is_err());

        let args = RootArgs::try_parse_from(["mfill", "--verbose", "enrich", "a.json", "--dry-run"])
            .expect("parse");
        assert!(args.verbose);
        let Command::Enrich(enrich) = args.command else {
            panic!("expected enrich");
        };
        assert_eq!(enrich.record, PathBuf::from("a.json"));
        assert!(enrich.dry_run);
    }
}
