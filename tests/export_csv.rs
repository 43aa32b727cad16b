// tests/export_csv.rs
mod common;

use common::FakeSite;
use physdata::csv::{self, Delim};

#[test]
fn fetched_table_exports_with_unit_headers() {
    let site = FakeSite::nist();
    let t = site.client().xray_coefficients(13, 2.699).unwrap();

    let out = csv::table_to_string(Some(t.headers()), t.rows(), Delim::Csv.sep());
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Energy (MeV),mu (1/cm),mu_en (1/cm)"));
    assert_eq!(lines.count(), t.len());
}

#[test]
fn exported_values_read_back_exactly() {
    let site = FakeSite::nist();
    let t = site.client().electron_stopping(13, true).unwrap();

    let out = csv::table_to_string(None, t.rows(), Delim::Tsv.sep());
    let back: Vec<Vec<f64>> = out
        .lines()
        .map(|l| l.split('\t').map(|v| v.parse().unwrap()).collect())
        .collect();
    assert_eq!(back, t.rows());
}
