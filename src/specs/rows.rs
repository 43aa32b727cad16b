// src/specs/rows.rs
//! Numeric row extraction for the STAR and x-ray data pages.
//!
//! The data pages are preformatted ASCII tables wrapped in a little HTML.
//! Rows are located by matching the exact number layout the site prints,
//! never by walking the markup:
//!
//! ```text
//! 1.000E-02  1.649E+01  6.559E-03  1.650E+01  3.539E-04  3.680E-04  0.000E+00<br>
//! ```
//!
//! Anything that is not a complete row (headers, truncated lines, footnotes)
//! simply does not match and is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::table::DataKind;

/// One number as printed by the site: `-?[0-9]+\.?[0-9]*E[-+][0-9]+`.
pub const NUMBER: &str = r"-?[0-9]+\.?[0-9]*E[-+][0-9]+";

/// Plain decimal in (0, 1), used for the detour factor.
const RATIO: &str = r"0\.[0-9]+";

/// Column separator inside a row.
pub const SEP: &str = "  ";

pub(crate) static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| compile(NUMBER));

static ELECTRON_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"((?:{NUMBER}{SEP}){{6}}{NUMBER})(?i:<br>)")));

static HEAVY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"((?:{NUMBER}{SEP}){{6}}{RATIO})(?i:<br>)")));

static XRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"((?:{NUMBER}{SEP}){{2}}{NUMBER})")));

fn compile(pattern: &str) -> Regex {
    // Patterns are fixed at compile time; failing here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("bad row grammar {pattern:?}: {e}"))
}

/// Row layouts found on the data pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    /// ESTAR: seven scientific numbers, `<br>` terminated.
    Electron,
    /// PSTAR/ASTAR: six scientific numbers and a ratio, `<br>` terminated.
    HeavyParticle,
    /// X-ray: three scientific numbers, no terminator.
    Xray,
}

impl Grammar {
    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Electron => &ELECTRON_RE,
            Grammar::HeavyParticle => &HEAVY_RE,
            Grammar::Xray => &XRAY_RE,
        }
    }
}

/// Matched row substrings, in document order.
pub fn extract_rows(doc: &str, grammar: Grammar) -> impl Iterator<Item = &str> {
    let doc = match grammar {
        Grammar::Xray => xray_section(doc),
        _ => doc,
    };
    grammar
        .regex()
        .captures_iter(doc)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The x-ray pages keep the ASCII table in the third `</DIV>`-delimited
/// section; the earlier ones hold navigation and the edge legend. Only the
/// uppercase legacy tag counts, lowercase template `</div>`s are ignored.
/// Pages without that layout are scanned whole.
pub fn xray_section(doc: &str) -> &str {
    const CLOSE: &str = "</DIV>";
    let mut cuts = doc.match_indices(CLOSE).map(|(i, _)| i);

    let (Some(_), Some(second)) = (cuts.next(), cuts.next()) else {
        logd!("x-ray page has no table section, scanning whole document");
        return doc;
    };
    let start = second + CLOSE.len();
    let end = cuts.next().unwrap_or(doc.len());
    &doc[start..end]
}

/// Text of a STAR page ahead of its first table row, in either layout.
/// The whole page when it has no rows.
pub fn star_preamble(doc: &str) -> &str {
    let start = [&*ELECTRON_RE, &*HEAVY_RE]
        .into_iter()
        .filter_map(|re| re.find(doc))
        .map(|m| m.start())
        .min()
        .unwrap_or(doc.len());
    &doc[..start]
}

/// Split a matched row on the two-space separator and read every token.
///
/// `columns` is the arity the caller expects; a mismatch or a token that is
/// not a finite number is a [`Error::MalformedRow`].
pub fn parse_row(row: &str, columns: usize) -> Result<Vec<f64>> {
    let mut out = Vec::with_capacity(columns);
    for token in row.split(SEP) {
        let token = token.trim();
        let v: f64 = token.parse().map_err(|_| Error::malformed(row, token))?;
        if !v.is_finite() {
            return Err(Error::malformed(row, token));
        }
        out.push(v);
    }
    if out.len() != columns {
        return Err(Error::MalformedRow {
            row: s!(row),
            token: format!("{} fields, expected {columns}", out.len()),
        });
    }
    Ok(out)
}

/// Extract and parse every row of kind `K` from a data page.
pub fn parse_table<K: DataKind>(doc: &str, grammar: Grammar) -> Result<Vec<Vec<f64>>> {
    let rows = extract_rows(doc, grammar)
        .map(|r| parse_row(r, K::COLUMNS))
        .collect::<Result<Vec<_>>>()?;
    logd!("{}: parsed {} rows", K::NAME, rows.len());
    Ok(rows)
}
