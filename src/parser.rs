//! Parser for copy-pasted Adobe security bulletin lists.
//!
//! The bulletin overview page at
//! <https://helpx.adobe.com/security/security-bulletin.html> blocks automated
//! scraping, so its listing is copied by hand into a text file with one
//! bulletin per line:
//!
//! ```text
//! APSB25-85 - Security update available for Adobe Acrobat Reader - September 9, 2025
//! APSB25-84 - Security update available for Adobe Photoshop - September 2, 2025
//! ```
//!
//! Each line becomes a [`Bulletin`]. Lines that start with `APSB` but do not
//! have the `id - title - date` shape are reported as [`SkippedLine`]s;
//! everything else is ignored.

use crate::catalog::{infer_product_path, infer_products};
use crate::error::{DigestError, Result};
use crate::models::{Bulletin, BulletinImport, DEFAULT_SEVERITY};
use crate::utils::truncate_for_log;
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, instrument, warn};

/// Prefix every candidate line must start with.
pub const BULLETIN_PREFIX: &str = "APSB";

/// Base for generated bulletin URLs.
pub const BULLETIN_URL_BASE: &str = "https://helpx.adobe.com/security/products";

/// `<id> - <title> - <date>`, separated by a hyphen or an en dash.
static BULLETIN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(APSB\d{2}-\d{2,3})\s*[-–]\s*(.+?)\s*[-–]\s*(.+?)$")
        .expect("bulletin line pattern is valid")
});

/// Date layouts seen on the bulletin page, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y", // September 9, 2025
    "%b %d, %Y", // Sep 9, 2025
    "%Y-%m-%d",  // 2025-09-09
    "%m/%d/%Y",  // 09/09/2025
];

/// A candidate line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    /// The trimmed line.
    pub content: String,
}

/// What happened to one candidate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed { line_number: usize, bulletin: Bulletin },
    Skipped(SkippedLine),
}

/// Outcome of parsing a whole input text.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Number of lines read, including blank and ignored ones.
    pub total_lines: usize,
    /// One entry per `APSB` line, in input order.
    pub outcomes: Vec<LineOutcome>,
}

impl ParseReport {
    pub fn bulletins(&self) -> impl Iterator<Item = &Bulletin> {
        self.outcomes.iter().filter_map(|o| match o {
            LineOutcome::Parsed { bulletin, .. } => Some(bulletin),
            LineOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedLine> {
        self.outcomes.iter().filter_map(|o| match o {
            LineOutcome::Skipped(line) => Some(line),
            LineOutcome::Parsed { .. } => None,
        })
    }

    /// Build the importer document, keeping input order.
    pub fn into_import(self) -> BulletinImport {
        let bulletins = self
            .outcomes
            .into_iter()
            .filter_map(|o| match o {
                LineOutcome::Parsed { bulletin, .. } => Some(bulletin),
                LineOutcome::Skipped(_) => None,
            })
            .collect();
        BulletinImport { bulletins }
    }
}

/// Parse a single bulletin line.
///
/// Returns `None` when the line does not have the `id - title - date` shape.
/// An unrecognized date does not fail the line; see [`bulletin_date`].
pub fn parse_bulletin_line(line: &str) -> Option<Bulletin> {
    let caps = BULLETIN_LINE.captures(line.trim())?;

    let apsb = caps[1].to_string();
    let title = caps[2].trim();
    let date = bulletin_date(caps[3].trim());

    let products = infer_products(title);
    let url = format!(
        "{}/{}/{}.html",
        BULLETIN_URL_BASE,
        infer_product_path(title),
        apsb.to_lowercase()
    );
    let description = format!(
        "Adobe has released security updates for {}. More details in the security bulletin.",
        products.join(", ")
    );

    Some(Bulletin {
        title: format!("{}: {}", apsb, title),
        apsb,
        description,
        url,
        date,
        products,
        severity: DEFAULT_SEVERITY.to_string(),
    })
}

/// Try each known date layout; the result is midnight UTC.
pub fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_str, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Parse a date, falling back to the current time (whole seconds).
pub fn bulletin_date(date_str: &str) -> DateTime<Utc> {
    parse_date(date_str).unwrap_or_else(|| {
        debug!(date = %date_str, "Unrecognized date; using current time");
        Utc::now().trunc_subsecs(0)
    })
}

/// Parse every line of `text`.
///
/// Blank lines and lines not starting with `APSB` are ignored without a
/// diagnostic.
pub fn parse_text(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, raw) in text.lines().enumerate() {
        report.total_lines += 1;
        let line = raw.trim();
        if line.is_empty() || !line.starts_with(BULLETIN_PREFIX) {
            continue;
        }

        match parse_bulletin_line(line) {
            Some(bulletin) => {
                debug!(apsb = %bulletin.apsb, url = %bulletin.url, "Parsed bulletin");
                report.outcomes.push(LineOutcome::Parsed {
                    line_number: idx + 1,
                    bulletin,
                });
            }
            None => {
                warn!(
                    line_number = idx + 1,
                    line = %truncate_for_log(line, 120),
                    "Could not parse bulletin line"
                );
                report.outcomes.push(LineOutcome::Skipped(SkippedLine {
                    line_number: idx + 1,
                    content: line.to_string(),
                }));
            }
        }
    }

    info!(
        lines = report.total_lines,
        parsed = report.bulletins().count(),
        skipped = report.skipped().count(),
        "Parsed bulletin text"
    );
    report
}

/// Read a bulletin list and parse every line.
///
/// # Arguments
///
/// * `path` - UTF-8 text file with one bulletin per line; `-` reads
///   standard input instead
///
/// # Returns
///
/// A [`ParseReport`] with one outcome per `APSB` line, or
/// [`DigestError::Io`] if the input cannot be read. Malformed lines never
/// fail the whole parse.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn parse_file(path: &Path) -> Result<ParseReport> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .map_err(|e| DigestError::io(path, e))?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DigestError::io(path, e))?
    };

    Ok(parse_text(&text))
}
