//! Command-line interface definitions for both tools.
//!
//! Options of `fetch_adobe_list` can also be set through environment
//! variables; `parse_bulletins` takes exactly two positional paths.

use crate::scrapers::adobe::{
    DEFAULT_MARKER, DEFAULT_PAGE_URL, DEFAULT_PATH_SEGMENT, FetchConfig, LinkFilter,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch an Adobe product security page and list its bulletin links.
///
/// # Examples
///
/// ```sh
/// # Default: Adobe Commerce (Magento) bulletins
/// fetch_adobe_list
///
/// # Another product page
/// fetch_adobe_list --url https://helpx.adobe.com/security/products/acrobat.html \
///     --path-filter /security/products/acrobat/
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct FetchCli {
    /// Product security page to scrape
    #[arg(long, env = "ADOBE_LIST_URL", default_value = DEFAULT_PAGE_URL)]
    pub url: String,

    /// Substring a link's href must contain
    #[arg(long, env = "ADOBE_LIST_PATH_FILTER", default_value = DEFAULT_PATH_SEGMENT)]
    pub path_filter: String,

    /// Substring a link's text must contain
    #[arg(long, env = "ADOBE_LIST_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "ADOBE_LIST_TIMEOUT_SECS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

impl FetchCli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_url: self.url.clone(),
            filter: LinkFilter {
                path_segment: self.path_filter.clone(),
                marker: self.marker.clone(),
            },
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Parse copy-pasted Adobe security bulletin lines into importer JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct ParseCli {
    /// Text file with one bulletin per line (`-` for stdin)
    pub input_file: PathBuf,

    /// JSON file to write
    pub output_file: PathBuf,
}

/// Usage banner printed by `parse_bulletins` on bad arguments.
pub const PARSE_USAGE: &str = "\
Adobe Security Bulletin Parser
Usage: parse_bulletins <input-file> <output-file>

Input file should contain bulletin lines like:
APSB25-85 - Security update available for Adobe Acrobat Reader - September 9, 2025
APSB25-84 - Security update available for Adobe Photoshop - September 2, 2025

You can copy these lines from https://helpx.adobe.com/security/security-bulletin.html";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_cli_defaults() {
        let cli = FetchCli::parse_from(["fetch_adobe_list"]);
        let config = cli.fetch_config();

        assert_eq!(config.page_url, DEFAULT_PAGE_URL);
        assert_eq!(config.filter, LinkFilter::default());
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_fetch_cli_overrides() {
        let cli = FetchCli::parse_from([
            "fetch_adobe_list",
            "--url",
            "https://helpx.adobe.com/security/products/acrobat.html",
            "--path-filter",
            "/security/products/acrobat/",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.fetch_config();

        assert_eq!(config.filter.path_segment, "/security/products/acrobat/");
        assert_eq!(config.filter.marker, "APSB");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_fetch_cli_rejects_zero_timeout() {
        let result = FetchCli::try_parse_from(["fetch_adobe_list", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cli_positional() {
        let cli = ParseCli::parse_from(["parse_bulletins", "in.txt", "out.json"]);
        assert_eq!(cli.input_file, PathBuf::from("in.txt"));
        assert_eq!(cli.output_file, PathBuf::from("out.json"));
    }

    #[test]
    fn test_parse_cli_requires_both_paths() {
        assert!(ParseCli::try_parse_from(["parse_bulletins", "in.txt"]).is_err());
        assert!(ParseCli::try_parse_from(["parse_bulletins", "a", "b", "c"]).is_err());
    }
}
