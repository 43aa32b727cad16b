// src/csv.rs
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a numeric table, optionally preceded by its headers.
///
/// Values use Rust's shortest round-trip formatting, so a written table
/// reads back to the same `f64`s.
pub fn write_table<W: Write>(
    mut w: W,
    headers: Option<&[&str]>,
    rows: &[Vec<f64>],
    sep: char,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        let cells: Vec<String> = r.iter().map(|v| v.to_string()).collect();
        write_row(&mut w, &cells, sep)?;
    }
    Ok(())
}

/// Same as [`write_table`], into a `String`.
pub fn table_to_string(headers: Option<&[&str]>, rows: &[Vec<f64>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, headers, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["Water, Liquid", "1"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Water, Liquid\",1\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["Water, Liquid", "1"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Water, Liquid\t1\n");
    }

    #[test]
    fn numeric_table() {
        let rows = vec![vec![0.001, 1185.0, 1183.0]];
        let s = table_to_string(Some(&["E", "mu", "mu_en"]), &rows, Delim::Csv.sep());
        assert_eq!(s, "E,mu,mu_en\n0.001,1185,1183\n");
    }
}
