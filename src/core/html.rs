// src/core/html.rs
// Tag/attribute types produced by the scanner, plus the small matching
// helpers the extractor needs. Names are always ASCII-lowercased.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    /// Decoded value; empty for bare attributes like `<td nowrap>`.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<Attr>,
    pub self_closing: bool,
}

impl Tag {
    /// Value of attribute `name`. Duplicates: the last one wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// True if attribute `name` is a whitespace-separated list containing `token`.
    pub fn has_token(&self, name: &str, token: &str) -> bool {
        self.attr(name).is_some_and(|v| has_token(v, token))
    }
}

/// Exact token membership in a whitespace-separated list (not substring).
pub fn has_token(list: &str, token: &str) -> bool {
    list.split_whitespace().any(|t| t == token)
}

/// Case-insensitive (ASCII) byte search.
pub fn find_ci(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() { return Some(0); }
    if needle.len() > hay.len() { return None; }
    hay.windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}
