// src/core/scanner.rs
// Tolerant single-pass tag scanner. Turns a whole document into a stream of
// start/end/text events; no tree, no validation.

use std::borrow::Cow;

use super::html::{find_ci, Attr, Tag};
use super::sanitize::decode_entities;

/// Elements whose body is raw text up to the matching close tag.
const RAW_TEXT: [&str; 2] = ["script", "style"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    Start(Tag),
    End { name: String },
    /// Text between two tags, character references decoded.
    Text(Cow<'a, str>),
}

pub struct Scanner<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    /// End event owed for a self-closing start tag.
    pending_end: Option<String>,
    /// Inside a raw-text element; holds its name.
    raw: Option<&'static str>,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len(), pending_end: None, raw: None }
    }

    #[inline]
    fn peek(&self, off: usize) -> Option<u8> {
        self.b.get(self.i + off).copied()
    }

    /// Does a '<' at `at` open markup (as opposed to being a literal '<')?
    #[inline]
    fn opens_markup(&self, at: usize) -> bool {
        matches!(self.b.get(at + 1).copied(), Some(c) if c.is_ascii_alphabetic() || matches!(c, b'/' | b'!' | b'?'))
    }

    #[inline]
    fn skip_ws(&mut self) {
        while self.i < self.n && self.b[self.i].is_ascii_whitespace() {
            self.i += 1;
        }
    }

    /// Move past the next `pat`, or to the end of input.
    fn skip_past(&mut self, pat: &str) {
        match self.s[self.i..].find(pat) {
            Some(p) => self.i += p + pat.len(),
            None => self.i = self.n,
        }
    }

    /// Read while `keep` holds; returns the slice read.
    fn read_while(&mut self, keep: impl Fn(u8) -> bool) -> &'a str {
        let start = self.i;
        while self.i < self.n && keep(self.b[self.i]) {
            self.i += 1;
        }
        &self.s[start..self.i]
    }

    fn text(&mut self) -> Event<'a> {
        let start = self.i;
        // a literal '<' at the start belongs to this text
        let mut j = if self.b[start] == b'<' { start + 1 } else { start };
        let end = loop {
            match self.s[j..].find('<') {
                Some(p) if self.opens_markup(j + p) => break j + p,
                Some(p) => j += p + 1,
                None => break self.n,
            }
        };
        self.i = end;
        Event::Text(decode_entities(&self.s[start..end]))
    }

    /// Body of a raw-text element, up to its close tag.
    fn raw_text(&mut self, name: &str) -> Option<Event<'a>> {
        let close = join!("</", name);
        let start = self.i;
        let end = find_ci(&self.b[start..], close.as_bytes()).map_or(self.n, |p| start + p);
        self.i = end;
        (end > start).then(|| Event::Text(Cow::Borrowed(&self.s[start..end])))
    }

    /// Called at `<x`. None means the tag ran off the end of input.
    fn start_tag(&mut self) -> Option<Tag> {
        self.i += 1;
        let name = self
            .read_while(|c| !c.is_ascii_whitespace() && c != b'/' && c != b'>')
            .to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            self.skip_ws();
            match self.peek(0)? {
                b'>' => { self.i += 1; break; }
                b'/' => {
                    self.i += 1;
                    if self.peek(0) == Some(b'>') {
                        self.i += 1;
                        self_closing = true;
                        break;
                    }
                    continue;
                }
                _ => {}
            }

            let attr_name = self
                .read_while(|c| !c.is_ascii_whitespace() && !matches!(c, b'=' | b'>' | b'/'))
                .to_ascii_lowercase();
            if attr_name.is_empty() {
                // stray '=' or similar
                self.i += 1;
                continue;
            }
            self.skip_ws();

            let mut value = s!();
            if self.peek(0) == Some(b'=') {
                self.i += 1;
                self.skip_ws();
                let raw = match self.peek(0)? {
                    q @ (b'"' | b'\'') => {
                        self.i += 1;
                        let v = self.read_while(|c| c != q);
                        self.peek(0)?; // unterminated quote
                        self.i += 1;
                        v
                    }
                    _ => self.read_while(|c| !c.is_ascii_whitespace() && c != b'>'),
                };
                value = decode_entities(raw).into_owned();
            }
            attrs.push(Attr { name: attr_name, value });
        }

        Some(Tag { name, attrs, self_closing })
    }

    /// Called at `</`. None means the tag ran off the end of input.
    fn end_tag(&mut self) -> Option<String> {
        self.i += 2;
        let name = self
            .read_while(|c| !c.is_ascii_whitespace() && c != b'>')
            .to_ascii_lowercase();
        // attributes on end tags are ignored
        let close = self.s[self.i..].find('>')?;
        self.i += close + 1;
        Some(name)
    }

    /// Emit the rest of the input as text (unterminated markup).
    fn rest_as_text(&mut self, from: usize) -> Event<'a> {
        self.i = self.n;
        Event::Text(decode_entities(&self.s[from..]))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.pending_end.take() {
            return Some(Event::End { name });
        }
        if let Some(name) = self.raw.take() {
            if let Some(ev) = self.raw_text(name) {
                return Some(ev);
            }
        }

        while self.i < self.n {
            let at = self.i;
            if self.b[at] != b'<' || !self.opens_markup(at) {
                return Some(self.text());
            }

            match self.b[at + 1] {
                b'!' => {
                    if self.s[at..].starts_with("<!--") {
                        self.i += 4;
                        self.skip_past("-->");
                    } else {
                        self.skip_past(">");
                    }
                }
                b'?' => self.skip_past(">"),
                b'/' => match self.end_tag() {
                    Some(name) if name.is_empty() => {} // "</>"
                    Some(name) => return Some(Event::End { name }),
                    None => return Some(self.rest_as_text(at)),
                },
                _ => match self.start_tag() {
                    Some(tag) => {
                        if tag.self_closing {
                            self.pending_end = Some(tag.name.clone());
                        } else {
                            self.raw = RAW_TEXT.iter().copied().find(|r| *r == tag.name);
                        }
                        return Some(Event::Start(tag));
                    }
                    None => return Some(self.rest_as_text(at)),
                },
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(doc: &str) -> Vec<Event<'_>> {
        Scanner::new(doc).collect()
    }

    fn start(name: &str, attrs: &[(&str, &str)]) -> Event<'static> {
        Event::Start(Tag {
            name: s!(name),
            attrs: attrs
                .iter()
                .map(|(n, v)| Attr { name: s!(*n), value: s!(*v) })
                .collect(),
            self_closing: false,
        })
    }

    fn end(name: &str) -> Event<'static> {
        Event::End { name: s!(name) }
    }

    fn text(t: &str) -> Event<'_> {
        Event::Text(Cow::Borrowed(t))
    }

    #[test]
    fn basic_tags_and_text() {
        assert_eq!(
            events("<TD Class=\"a b\">x &amp; y</td>"),
            vec![start("td", &[("class", "a b")]), text("x & y"), end("td")]
        );
    }

    #[test]
    fn attribute_quoting_styles() {
        let ev = events("<table id='tracklogTable' border=0 nowrap data-x=\"a>b\">");
        assert_eq!(
            ev,
            vec![start(
                "table",
                &[("id", "tracklogTable"), ("border", "0"), ("nowrap", ""), ("data-x", "a>b")]
            )]
        );
    }

    #[test]
    fn whitespace_between_tags_is_text() {
        assert_eq!(
            events("<tr>\n  <td>"),
            vec![start("tr", &[]), text("\n  "), start("td", &[])]
        );
    }

    #[test]
    fn comments_and_doctype_are_skipped() {
        assert_eq!(
            events("<!DOCTYPE html><!-- <td>hidden</td> --><p>hi</p>"),
            vec![start("p", &[]), text("hi"), end("p")]
        );
    }

    #[test]
    fn self_closing_emits_start_and_end() {
        let ev = events("a<br/>b");
        assert_eq!(ev.len(), 4);
        assert_eq!(ev[0], text("a"));
        assert!(matches!(&ev[1], Event::Start(t) if t.name == "br" && t.self_closing));
        assert_eq!(ev[2], end("br"));
        assert_eq!(ev[3], text("b"));
    }

    #[test]
    fn script_body_is_raw() {
        assert_eq!(
            events("<script>if (a<b) { x = '<td>'; }</SCRIPT><td>"),
            vec![
                start("script", &[]),
                text("if (a<b) { x = '<td>'; }"),
                end("script"),
                start("td", &[]),
            ]
        );
    }

    #[test]
    fn literal_lt_stays_in_text() {
        assert_eq!(events("1 < 2 <b>"), vec![text("1 < 2 "), start("b", &[])]);
    }

    #[test]
    fn unterminated_tag_becomes_text() {
        assert_eq!(events("ok<td class=\"x"), vec![text("ok"), text("<td class=\"x")]);
        assert_eq!(events("</td"), vec![text("</td")]);
    }
}
