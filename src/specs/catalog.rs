// src/specs/catalog.rs
//! Scraping *spec* for the x-ray material catalogs.
//!
//! Pages:
//! - `tab1.html`: one `<TR>` per element, six cells
//!   `Z | Symbol | Name | Z/A | I (eV) | Density (g/cm³)`.
//! - `tab4.html`: one `<TD>` per compound, holding the link to its data page
//!   `<A href="ComTab/adipose.html">Adipose Tissue</A> (ICRU-44)`.
//! - `tab2.html`: one `<TR>` per compound,
//!   `Name | <Z/A> | I (eV) | Density | composition`.
//!
//! The compound data page is keyed by the link's file stem (the *short
//! name*), which only tab4 carries, so tab2 rows are joined to tab4 links on
//! the display name. The match is exact, annotation included; rows that do
//! not join are returned in [`CompoundCatalog::unmatched`] instead of
//! failing the whole catalog.
//!
//! Header rows are skipped by position (see `config::consts`).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{CATALOG_HEADER_ROWS, FILLER_CELL, LINKS_HEADER_CELLS};
use crate::core::html::{row_cells, tag_blocks_ci};
use crate::core::sanitize::cell_text;
use crate::error::{Error, Result};
use crate::xray::{CompoundRecord, ElementRecord};

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<A[^>]*?/([^/"]*?)\.html">(.*?)</A>(.*)"#)
        .unwrap_or_else(|e| panic!("bad link pattern: {e}"))
});

static BR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>").unwrap_or_else(|e| panic!("bad line break pattern: {e}"))
});

/// Compounds that joined, plus the display names that did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompoundCatalog {
    pub records: Vec<CompoundRecord>,
    pub unmatched: Vec<String>,
}

/* ---------------- Elements ---------------- */

/// Parse the element catalog (tab1).
pub fn parse_elements(doc: &str) -> Result<Vec<ElementRecord>> {
    let mut out = Vec::new();
    for row in tag_blocks_ci(doc, "tr").skip(CATALOG_HEADER_ROWS) {
        let cells = row_cells(row, FILLER_CELL);
        if cells.is_empty() {
            continue;
        }
        out.push(element_from_cells(row, &cells)?);
    }
    logf!("Elements: parsed {} records", out.len());
    Ok(out)
}

fn element_from_cells(row: &str, cells: &[&str]) -> Result<ElementRecord> {
    let [z, symbol, name, mass_ratio, excitation, density] = cells else {
        return Err(Error::MalformedRow {
            row: s!(row.trim()),
            token: format!("{} cells, expected 6", cells.len()),
        });
    };
    let z_text = cell_text(z);
    let z: u32 = z_text
        .parse()
        .ok()
        .filter(|z| *z > 0)
        .ok_or_else(|| Error::malformed(row.trim(), &z_text))?;

    Ok(ElementRecord {
        z,
        symbol: cell_text(symbol),
        name: cell_text(name),
        mass_ratio: number(row, mass_ratio)?,
        excitation: number(row, excitation)?,
        density: number(row, density)?,
    })
}

/* ---------------- Compounds ---------------- */

/// Display name (`text + annotation`) → short name, from tab4.
pub fn parse_compound_links(doc: &str) -> HashMap<String, String> {
    let mut names = HashMap::new();
    let cells = tag_blocks_ci(doc, "td")
        .skip(LINKS_HEADER_CELLS)
        .map(str::trim)
        .filter(|c| *c != FILLER_CELL);

    for cell in cells {
        let Some(caps) = LINK_RE.captures(cell) else {
            logd!("Compound links: no link in cell {:?}", cell);
            continue;
        };
        let short = &caps[1];
        let display = join!(&caps[2], &caps[3]);
        names.insert(display, s!(short));
    }
    logd!("Compound links: {} names", names.len());
    names
}

/// Parse tab2 and join it against the tab4 name map.
pub fn parse_compounds(doc: &str, links: &HashMap<String, String>) -> Result<CompoundCatalog> {
    let mut catalog = CompoundCatalog::default();

    for row in tag_blocks_ci(doc, "tr").skip(CATALOG_HEADER_ROWS) {
        let cells = row_cells(row, FILLER_CELL);
        let Some(name) = cells.first() else { continue };

        let Some(short_name) = links.get(*name) else {
            catalog.unmatched.push(s!(*name));
            continue;
        };
        catalog.records.push(compound_from_cells(row, &cells, short_name)?);
    }

    if !catalog.unmatched.is_empty() {
        logw!(
            "Compounds: {} rows have no data page link and were skipped:",
            catalog.unmatched.len()
        );
        for name in &catalog.unmatched {
            logw!("- {}", name);
        }
    }
    logf!("Compounds: joined {} records", catalog.records.len());
    Ok(catalog)
}

fn compound_from_cells(row: &str, cells: &[&str], short_name: &str) -> Result<CompoundRecord> {
    if cells.len() < 4 {
        return Err(Error::MalformedRow {
            row: s!(row.trim()),
            token: format!("{} cells, expected at least 4", cells.len()),
        });
    }
    Ok(CompoundRecord {
        short_name: s!(short_name),
        name: s!(cells[0]),
        mass_ratio: number(row, cells[1])?,
        excitation: number(row, cells[2])?,
        density: number(row, cells[3])?,
        composition: cells.get(4).map(|c| composition(c)).unwrap_or_default(),
    })
}

/// Composition cell as `Z: fraction` entries joined with `; `.
fn composition(cell: &str) -> String {
    BR_RE
        .split(cell)
        .map(cell_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

fn number(row: &str, cell: &str) -> Result<f64> {
    let text = cell_text(cell);
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::malformed(row.trim(), &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB1: &str = r#"
<TABLE>
<TR><TH COLSPAN=6>Table 1</TH></TR>
<TR><TH>Z</TH><TH>Symbol</TH><TH>Element</TH></TR>
<TR><TH></TH><TH></TH><TH></TH></TR>
<TR><TD ALIGN="CENTER">1</TD><TD>&nbsp;</TD><TD>H </TD><TD>Hydrogen</TD><TD>0.99212</TD><TD>19.2</TD><TD>8.375E-05</TD></TR>
<TR><TD>13</TD><TD>Al</TD><TD>Aluminum</TD><TD>0.48181</TD><TD>166.0</TD><TD>2.699E+00</TD></TR>
<TR><TD>85</TD><TD>At</TD><TD>Astatine</TD><TD>0.40250</TD><TD>825.0</TD><TD>1.000E+01</TD></TR>
</TABLE>"#;

    #[test]
    fn elements_skip_headers_and_filler() {
        let els = parse_elements(TAB1).unwrap();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0].z, 1);
        assert_eq!(els[0].symbol, "H");
        assert_eq!(els[1].name, "Aluminum");
        assert_eq!(els[1].density, 2.699);
        // placeholder density kept as published
        assert_eq!(els[2].density, 10.0);
    }

    #[test]
    fn short_element_row_is_malformed() {
        let doc = "<tr></tr><tr></tr><tr></tr><tr><td>1</td><td>H</td></tr>";
        assert!(matches!(parse_elements(doc), Err(Error::MalformedRow { .. })));
    }

    const TAB4: &str = r#"
<TABLE><TR><TD>h1</TD><TD>h2</TD><TD>h3</TD><TD>h4</TD></TR>
<TR><TD><A href="ComTab/adipose.html">Adipose Tissue</A> (ICRU-44)</TD>
<TD>&nbsp;</TD>
<TD><A href="ComTab/water.html">Water, Liquid</A></TD></TR></TABLE>"#;

    #[test]
    fn links_keep_annotation_verbatim() {
        let links = parse_compound_links(TAB4);
        assert_eq!(links.len(), 2);
        assert_eq!(links["Adipose Tissue (ICRU-44)"], "adipose");
        assert_eq!(links["Water, Liquid"], "water");
    }

    #[test]
    fn compounds_join_and_report_misses() {
        let tab2 = r#"
<TR><TH>a</TH></TR><TR><TH>b</TH></TR><TR><TH>c</TH></TR>
<TR><TD>Adipose Tissue (ICRU-44)</TD><TD>0.55579</TD><TD>63.2</TD><TD>9.500E-01</TD><TD>1: 0.114000<BR>6: 0.598000</TD></TR>
<TR><TD>Adipose Tissue</TD><TD>0.55579</TD><TD>63.2</TD><TD>9.500E-01</TD><TD></TD></TR>
<TR><TD>Water, Liquid</TD><TD>0.55508</TD><TD>75.0</TD><TD>1.000E+00</TD><TD>1: 0.111894</TD></TR>"#;
        let links = parse_compound_links(TAB4);
        let cat = parse_compounds(tab2, &links).unwrap();

        assert_eq!(cat.records.len(), 2);
        assert_eq!(cat.records[0].short_name, "adipose");
        assert_eq!(cat.records[0].density, 0.95);
        assert_eq!(cat.records[0].composition, "1: 0.114000; 6: 0.598000");
        assert_eq!(cat.records[1].short_name, "water");
        assert_eq!(cat.unmatched, vec![s!("Adipose Tissue")]);
    }
}
