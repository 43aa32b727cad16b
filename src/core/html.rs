// src/core/html.rs
// Low-level HTML string helpers for the catalog pages.
// Deliberately naive: the pages are flat legacy tables, so a tag block is
// "from `<tag` to the next `</tag>`" and nesting of the same tag is not
// supported. Tag names match case-insensitively.

/// Iterator over the inner HTML of successive `<tag ...>INNER</tag>` blocks.
///
/// Equivalent to a lazy `<TAG.*?>(.*?)</TAG>` scan over the whole document.
pub struct TagBlocks<'a> {
    s: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(s: &'a str, tag: &str) -> Self {
        let tag = to_lowercase_fast(tag);
        Self {
            s,
            lc: to_lowercase_fast(s),
            open: format!("<{tag}"),
            close: format!("</{tag}>"),
            pos: 0,
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.lc.get(self.pos..)?.find(&self.open)? + self.pos;
        // Jump past the '>' of the opening tag
        let after_open = self.s[start..].find('>')? + start + 1;
        let close_rel = self.lc[after_open..].find(&self.close)?;
        let inner_end = after_open + close_rel;
        self.pos = inner_end + self.close.len();
        Some(&self.s[after_open..inner_end])
    }
}

/// All `<tag>` inner blocks of `s`, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, tag: &str) -> TagBlocks<'a> {
    TagBlocks::new(s, tag)
}

/// Cells of one table row, trimmed, with `filler` cells dropped.
pub fn row_cells<'a>(row: &'a str, filler: &str) -> Vec<&'a str> {
    tag_blocks_ci(row, "td")
        .map(str::trim)
        .filter(|c| *c != filler)
        .collect()
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Fast ASCII-only lowercasing for tag matching. Keeps byte offsets intact.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_case_insensitive_and_lazy() {
        let doc = "<TR class=a><TD>1</TD><td> H </td></TR>\n<tr><TD>2</TD></tr>";
        let rows: Vec<&str> = tag_blocks_ci(doc, "tr").collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(row_cells(rows[0], "&nbsp;"), vec!["1", "H"]);
        assert_eq!(row_cells(rows[1], "&nbsp;"), vec!["2"]);
    }

    #[test]
    fn filler_cells_are_dropped() {
        let row = "<TD>&nbsp;</TD><TD>1</TD><TD> &nbsp; </TD><TD>H</TD>";
        assert_eq!(row_cells(row, "&nbsp;"), vec!["1", "H"]);
    }

    #[test]
    fn unterminated_block_ends_iteration() {
        let doc = "<tr><td>1</td></tr><tr><td>2</td>";
        assert_eq!(tag_blocks_ci(doc, "tr").count(), 1);
    }

    #[test]
    fn strip_tags_collapses_ws() {
        assert_eq!(strip_tags("<b>Adipose</b>\n  Tissue"), "Adipose Tissue");
    }
}
