//! Dependency extraction from CRAN package pages.
//!
//! A package page carries a table with `summary="Package <name> summary"`.
//! Its `Depends:` and `Imports:` rows list requirements; names that are links
//! point at other CRAN packages, while plain-text names (`R`, `methods`,
//! `utils`, ...) are part of base R and need no installation.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static SUMMARY_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<table[^>]*\bsummary\s*=\s*"Package\s[^"]+\ssummary""#)
        .expect("valid regex")
});

static TABLE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</table\s*>").expect("valid regex"));

static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<tr[^>]*>\s*<td[^>]*>\s*([A-Za-z]+):\s*</td>\s*<td[^>]*>(.*?)</td>")
        .expect("valid regex")
});

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>(.*?)</a>").expect("valid regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Rows whose linked names count as dependencies, in output order.
const DEPENDENCY_ROWS: [&str; 2] = ["Imports", "Depends"];

/// Direct dependency names listed on a package page: linked `Imports:`
/// entries followed by linked `Depends:` entries, first occurrence kept.
///
/// Returns `None` when the page has no package summary table, which is how
/// CRAN renders packages that have been archived or removed.
pub fn dependency_names(html: &str) -> Option<Vec<String>> {
    let table = summary_table(html)?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for label in DEPENDENCY_ROWS {
        for name in row_links(table, label) {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    Some(names)
}

/// The summary table, from its opening tag up to the first `</table>` after it.
/// An unterminated table runs to the end of the page.
fn summary_table(html: &str) -> Option<&str> {
    let start = SUMMARY_TABLE.find(html)?.start();
    let rest = &html[start..];
    let end = TABLE_END.find(rest).map_or(rest.len(), |m| m.end());
    Some(&rest[..end])
}

/// Text of every link in the row labelled `label`.
fn row_links(html: &str, label: &str) -> Vec<String> {
    ROW.captures_iter(html)
        .filter(|row| row[1].eq_ignore_ascii_case(label))
        .flat_map(|row| {
            LINK.captures_iter(&row[2])
                .map(|link| TAG.replace_all(&link[1], "").trim().to_string())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
