//! Line-level parsing for Paradox-style localisation files.
//!
//! Each line of a localisation file is either a record of the form
//! `key: "value"` (possibly with indentation and trailing text) or a
//! passthrough line (blank, comment, or anything that does not match the
//! record shape). Parsing splits a record around its quoted value so the
//! value can be replaced while every other byte of the line survives
//! untouched.

/// The result of parsing one raw input line.
///
/// Borrows from the raw line; nothing is copied until a record is rebuilt
/// with a replacement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// A line emitted unchanged: blank, a full-line `#` comment, or a line
    /// without a colon-separated quoted value.
    Passthrough(&'a str),
    /// A `key: "value"` record, split around its quoted value.
    Record(Envelope<'a>),
}

/// A record line split into the three pieces around its quoted value.
///
/// Invariant: `prefix + value + suffix` is exactly the raw line, line
/// terminator included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// Everything from the start of the line up to and including the
    /// opening quote.
    pub prefix: &'a str,
    /// The text strictly between the opening and closing quotes.
    pub value: &'a str,
    /// The closing quote and everything after it, terminator included.
    pub suffix: &'a str,
}

impl Envelope<'_> {
    /// Reconstructs the line with `new_value` in place of the original
    /// value.
    ///
    /// No escaping or validation is performed: a replacement value that
    /// itself contains a `"` produces a structurally invalid line. Callers
    /// supplying transformer output are expected to treat that as malformed
    /// input territory.
    pub fn rebuild(&self, new_value: &str) -> String {
        let mut line =
            String::with_capacity(self.prefix.len() + new_value.len() + self.suffix.len());
        line.push_str(self.prefix);
        line.push_str(new_value);
        line.push_str(self.suffix);
        line
    }
}

/// Parses one raw line, terminator included, into a [`ParsedLine`].
///
/// Record detection follows the shape of Paradox localisation lines:
/// the key ends at the first `:`, the value starts at the first `"` at or
/// after that colon, and ends at the last `"` on the line. Lines with fewer
/// than two quotes in that region are passed through rather than rejected.
pub fn parse(raw: &str) -> ParsedLine<'_> {
    let stripped = raw.trim_start();

    // Blank lines and comment-only lines are never scanned for quotes.
    if stripped.is_empty() || stripped.starts_with('#') {
        return ParsedLine::Passthrough(raw);
    }

    let Some(colon) = raw.find(':') else {
        return ParsedLine::Passthrough(raw);
    };

    // First quote at or after the colon. Starting the search at the colon
    // itself is safe (a colon is never a quote) and keeps any quote before
    // the colon from being mistaken for the value start.
    let Some(open) = raw[colon..].find('"').map(|i| colon + i) else {
        return ParsedLine::Passthrough(raw);
    };

    // Last quote on the whole line. If it is the opening quote, the line
    // has no closed value.
    let close = match raw.rfind('"') {
        Some(close) if close > open => close,
        _ => return ParsedLine::Passthrough(raw),
    };

    ParsedLine::Record(Envelope {
        prefix: &raw[..open + 1],
        value: &raw[open + 1..close],
        suffix: &raw[close..],
    })
}
