//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Default crawl root when `--base-url` is not given.
pub const DEFAULT_BASE_URL: &str = "https://wiki.red-fans.com/images/";

/// Mirror files from Apache-style directory listings.
///
/// Dirmirror recursively crawls an auto-index page, mirrors the directory
/// tree beneath it into a local destination, and downloads every file with
/// the target extension that is missing or out of date locally.
#[derive(Parser, Debug)]
#[command(name = "dirmirror")]
#[command(author, version, about)]
pub struct Args {
    /// Root URL to crawl
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Local directory where downloaded files are saved (created if absent)
    #[arg(long)]
    pub dest: PathBuf,

    /// Target file extension to mirror
    #[arg(long, default_value = "pdf")]
    pub ext: String,

    /// List the files that would be downloaded without saving them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_with_required_dest() {
        let args = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out"]).unwrap();
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert_eq!(args.dest, PathBuf::from("/tmp/out"));
        assert_eq!(args.ext, "pdf");
        assert!(!args.dry_run);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_missing_dest_rejected() {
        let result = Args::try_parse_from(["dirmirror"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_cli_base_url_flag() {
        let args = Args::try_parse_from([
            "dirmirror",
            "--dest",
            "/tmp/out",
            "--base-url",
            "https://mirror.example.com/pub/",
        ])
        .unwrap();
        assert_eq!(args.base_url, "https://mirror.example.com/pub/");
    }

    #[test]
    fn test_cli_ext_flag() {
        let args =
            Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "--ext", "iso"]).unwrap();
        assert_eq!(args.ext, "iso");
    }

    #[test]
    fn test_cli_dry_run_flag() {
        let args = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "--dry-run"]).unwrap();
        assert!(args.dry_run);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["dirmirror", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["dirmirror", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["dirmirror", "--dest", "/tmp/out", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
