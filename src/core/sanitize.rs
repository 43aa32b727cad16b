// src/core/sanitize.rs

/// Minimal HTML entity decoding: the catalog pages only use these.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&").replace("&lt;", "<").replace("&gt;", ">")
}

/// Collapse whitespace runs into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Visible text of a catalog cell: tags stripped, entities decoded.
pub fn cell_text(s: &str) -> String {
    normalize_ws(&normalize_entities(&super::html::strip_tags(s)))
}
