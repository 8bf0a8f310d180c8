// src/core/sanitize.rs
use std::borrow::Cow;

/// Decode character references: every HTML5 named reference plus
/// `&#NN;` / `&#xHH;`. Anything unrecognised is left as written.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}

/// Drop `front` chars from the start and `back` chars from the end.
/// Counts chars, not bytes; too-short input gives "".
pub fn drop_chars(s: &str, front: usize, back: usize) -> String {
    let total = s.chars().count();
    if front + back >= total {
        return s!();
    }
    s.chars().skip(front).take(total - front - back).collect()
}

/// Keep digits, sign and decimal point ("1,234 ft" → "1234").
pub fn keep_numeric(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect()
}

/// Minimal XML escaping for text content.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}
