//! Filename tokenization
//!
//! Splits a filename into its maximal letter and digit runs. Digit runs are
//! kept as literal strings so zero-padding survives ("0001" is not 1 until a
//! range needs its numeric value), together with their byte spans so a run
//! can be stripped or substituted in place later.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digit run pattern"));
static LETTER_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("letter run pattern"));

/// Byte span of one digit run inside a filename, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Tokenized view of a single filename.
///
/// Invariant: `number_tokens` and `number_spans` have the same length and the
/// same left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameInfo {
    /// The filename exactly as given.
    pub base_name: String,
    /// Extension after the last dot, without the dot; empty when absent.
    pub extension: String,
    /// Maximal `[A-Za-z]+` runs, in order of occurrence.
    pub letter_tokens: Vec<String>,
    /// Maximal `[0-9]+` runs as literal strings, leading zeros preserved.
    pub number_tokens: Vec<String>,
    /// Byte span of each entry in `number_tokens`.
    pub number_spans: Vec<Span>,
}

impl FilenameInfo {
    /// True when the filename contains no digit run at all.
    pub fn has_numbers(&self) -> bool {
        !self.number_tokens.is_empty()
    }
}

/// Tokenize a filename. Always succeeds; a name with no letters or no digits
/// simply yields empty token lists.
pub fn tokenize(name: &str) -> FilenameInfo {
    let mut number_tokens = Vec::new();
    let mut number_spans = Vec::new();
    for m in DIGIT_RUNS.find_iter(name) {
        number_tokens.push(m.as_str().to_string());
        number_spans.push(Span {
            start: m.start(),
            end: m.end(),
        });
    }

    let letter_tokens = LETTER_RUNS
        .find_iter(name)
        .map(|m| m.as_str().to_string())
        .collect();

    FilenameInfo {
        base_name: name.to_string(),
        extension: extension_of(name),
        letter_tokens,
        number_tokens,
        number_spans,
    }
}

/// Extension after the last dot. A leading dot does not start an extension,
/// so hidden files like `.config` have none.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) => name[idx + 1..].to_string(),
    }
}

/// Rebuild `name` with the bytes of `span` replaced by `replacement`.
///
/// Returns `None` when the span does not land on character boundaries of
/// `name`. This happens when a span taken from one filename is applied to a
/// different, shorter or non-ASCII one, and callers treat it as a failed
/// comparison rather than an error.
pub(crate) fn splice(name: &str, span: Span, replacement: &str) -> Option<String> {
    let head = name.get(..span.start)?;
    let tail = name.get(span.end..)?;
    Some(format!("{head}{replacement}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_single_run() {
        let info = tokenize("d.0001.png");
        assert_eq!(info.base_name, "d.0001.png");
        assert_eq!(info.extension, "png");
        assert_eq!(info.letter_tokens, vec!["d", "png"]);
        assert_eq!(info.number_tokens, vec!["0001"]);
        assert_eq!(info.number_spans, vec![Span { start: 2, end: 6 }]);
    }

    #[test]
    fn test_tokenize_multiple_runs() {
        let info = tokenize("V3-0002_comp_01.jpg");
        assert_eq!(info.number_tokens, vec!["3", "0002", "01"]);
        assert_eq!(info.letter_tokens, vec!["V", "comp", "jpg"]);
        assert_eq!(info.number_tokens.len(), info.number_spans.len());
    }

    #[test]
    fn test_tokenize_no_digits() {
        let info = tokenize("elem.info");
        assert!(!info.has_numbers());
        assert!(info.number_spans.is_empty());
        assert_eq!(info.extension, "info");
    }

    #[test]
    fn test_tokenize_no_extension() {
        assert_eq!(tokenize("frame0001").extension, "");
        assert_eq!(tokenize(".config").extension, "");
        assert_eq!(tokenize("a.tar.gz").extension, "gz");
    }

    #[test]
    fn test_spans_address_the_runs() {
        let info = tokenize("sd_fx29.0101.rgb");
        for (token, span) in info.number_tokens.iter().zip(&info.number_spans) {
            assert_eq!(&info.base_name[span.start..span.end], token);
        }
    }

    #[test]
    fn test_splice_replaces_span() {
        let info = tokenize("d.0001.png");
        let span = info.number_spans[0];
        assert_eq!(splice("d.0001.png", span, "").as_deref(), Some("d..png"));
        assert_eq!(
            splice("d.0001.png", span, "%04d").as_deref(),
            Some("d.%04d.png")
        );
    }

    #[test]
    fn test_splice_rejects_foreign_span() {
        // span from a longer name applied to a shorter one
        let span = Span { start: 4, end: 12 };
        assert_eq!(splice("ab", span, ""), None);
    }
}
