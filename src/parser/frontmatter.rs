//! Front Matter Parser
//!
//! Handles the flat `key: value` preamble at the head of a documentation page:
//! - BOM (Byte Order Mark) skipping
//! - CRLF tolerant delimiter detection
//! - Unclosed blocks reported as [`FrontMatterError::Unclosed`]
//! - Single-key upsert that leaves every other byte of the document untouched

use std::borrow::Cow;

/// Literal delimiter line opening and closing a front-matter block
pub const DELIMITER: &str = "---";

const BOM: char = '\u{FEFF}';

/// Errors raised while locating a front-matter block
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontMatterError {
    #[error("Front matter opened with `---` but never closed")]
    Unclosed,
}

/// Ordered `key: value` pairs read from a front-matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, String)>,
}

impl FrontMatter {
    /// Parse the lines between the delimiters.
    ///
    /// The first colon splits key from value; both sides are trimmed.
    /// Lines without a colon, or with an empty key, are skipped.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Value of the first entry named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Byte layout of a closed front-matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockSpan {
    /// First byte after the opening delimiter line
    inner_start: usize,
    /// First byte of the closing delimiter line
    close_start: usize,
    /// First byte after the closing delimiter line
    body_start: usize,
}

fn bom_len(text: &str) -> usize {
    if text.starts_with(BOM) {
        BOM.len_utf8()
    } else {
        0
    }
}

/// A delimiter line may carry trailing whitespace and a CR
fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r', ' ', '\t']) == DELIMITER
}

/// Lines of `text` from byte `from`, each paired with its starting offset.
/// Line terminators stay attached.
fn lines_from(text: &str, from: usize) -> impl Iterator<Item = (usize, &str)> {
    text[from..].split_inclusive('\n').scan(from, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

fn locate(text: &str) -> Result<Option<BlockSpan>, FrontMatterError> {
    let mut lines = lines_from(text, bom_len(text));

    let Some((open_start, open_line)) = lines.next() else {
        return Ok(None);
    };
    if !is_delimiter(open_line) {
        return Ok(None);
    }
    // A lone `---` without a newline cannot be followed by a closing line
    if !open_line.ends_with('\n') {
        return Err(FrontMatterError::Unclosed);
    }

    let inner_start = open_start + open_line.len();
    for (start, line) in lines {
        if is_delimiter(line) {
            return Ok(Some(BlockSpan {
                inner_start,
                close_start: start,
                body_start: start + line.len(),
            }));
        }
    }

    Err(FrontMatterError::Unclosed)
}

/// Check whether a document opens with the delimiter line.
///
/// This says nothing about whether the block is closed; see
/// [`split_front_matter`] for that.
pub fn has_front_matter(content: &str) -> bool {
    lines_from(content, bom_len(content))
        .next()
        .is_some_and(|(_, line)| is_delimiter(line))
}

/// Split a document into its front matter and body
///
/// # Returns
/// * `Ok(Some((front_matter, body)))` for a closed block
/// * `Ok(None)` when the document does not open with `---`
///
/// # Errors
/// * [`FrontMatterError::Unclosed`] when the opening delimiter has no partner
pub fn split_front_matter(
    content: &str,
) -> Result<Option<(FrontMatter, &str)>, FrontMatterError> {
    Ok(locate(content)?.map(|span| {
        (
            FrontMatter::parse(&content[span.inner_start..span.close_start]),
            &content[span.body_start..],
        )
    }))
}

/// Read the front matter of a document.
///
/// Absent and unclosed blocks both read as `None`.
pub fn read_front_matter(content: &str) -> Option<FrontMatter> {
    split_front_matter(content).ok().flatten().map(|(fm, _)| fm)
}

/// Insert `key: value` into the document's front matter.
///
/// - No block (or an unclosed one): a fresh block holding only the pair is
///   prepended, followed by a blank line and the original text.
/// - Block without `key`: the pair is appended as the block's last line.
/// - Block that already has `key`: the document is returned unchanged.
pub fn upsert_front_matter(content: &str, key: &str, value: &str) -> String {
    match locate(content) {
        Ok(Some(span)) => {
            let inner = &content[span.inner_start..span.close_start];
            if FrontMatter::parse(inner).contains_key(key) {
                return content.to_string();
            }

            let eol = if content[..span.inner_start].ends_with("\r\n") {
                "\r\n"
            } else {
                "\n"
            };

            let mut updated = String::with_capacity(content.len() + key.len() + value.len() + 4);
            updated.push_str(&content[..span.close_start]);
            updated.push_str(key);
            updated.push_str(": ");
            updated.push_str(value);
            updated.push_str(eol);
            updated.push_str(&content[span.close_start..]);
            updated
        }
        Ok(None) | Err(FrontMatterError::Unclosed) => {
            let bom = bom_len(content);
            format!(
                "{}{DELIMITER}\n{key}: {value}\n{DELIMITER}\n\n{}",
                &content[..bom],
                &content[bom..]
            )
        }
    }
}

/// Drop a bare `key: legacy_value` line sitting at the very top of a document.
///
/// Older tooling wrote the version line without any delimiters; such a line
/// is removed so the proper block can take its place.
pub fn strip_legacy_line<'a>(content: &'a str, key: &str, legacy_value: &str) -> Cow<'a, str> {
    let bom = bom_len(content);
    let Some((_, first)) = lines_from(content, bom).next() else {
        return Cow::Borrowed(content);
    };

    let line = first.strip_suffix('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
    let legacy = format!("{key}: {legacy_value}");

    match line {
        Some(line) if line == legacy => {
            let mut stripped = String::with_capacity(content.len() - first.len());
            stripped.push_str(&content[..bom]);
            stripped.push_str(&content[bom + first.len()..]);
            Cow::Owned(stripped)
        }
        _ => Cow::Borrowed(content),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_front_matter() {
        let content = "---\ntitle: Quickstart\nversion: 1.0\n---\n\n# Hello World\n";
        let fm = read_front_matter(content).unwrap();
        assert_eq!(fm.get("title"), Some("Quickstart"));
        assert_eq!(fm.get("version"), Some("1.0"));
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn test_parse_keeps_order_and_skips_junk() {
        let fm = FrontMatter::parse("b: 2\nnot a pair\n: empty key\na: 1\nurl: http://x\n");
        let pairs: Vec<_> = fm.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "1"), ("url", "http://x")]);
    }

    #[test]
    fn test_first_colon_splits_value() {
        let fm = FrontMatter::parse("link: https://example.com/a\n");
        assert_eq!(fm.get("link"), Some("https://example.com/a"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let fm = FrontMatter::parse("Version: 2\n");
        assert_eq!(fm.get("version"), None);
        assert_eq!(fm.get("Version"), Some("2"));
    }

    #[test]
    fn test_split_front_matter_body() {
        let content = "---\nkey: value\n---\n\nBody content";
        let (fm, body) = split_front_matter(content).unwrap().unwrap();
        assert_eq!(fm.get("key"), Some("value"));
        assert_eq!(body, "\nBody content");
    }

    #[test]
    fn test_split_front_matter_missing_opening() {
        assert_eq!(split_front_matter("key: value\n---\n"), Ok(None));
        assert!(!has_front_matter("# No front matter"));
    }

    #[test]
    fn test_split_front_matter_missing_closing() {
        let content = "---\nkey: value\n";
        assert_eq!(split_front_matter(content), Err(FrontMatterError::Unclosed));
        assert!(has_front_matter(content));
        assert!(read_front_matter(content).is_none());
        assert_eq!(split_front_matter("---"), Err(FrontMatterError::Unclosed));
    }

    #[test]
    fn test_crlf_and_bom() {
        let content = "\u{FEFF}---\r\ntitle: X\r\n---\r\nBody";
        let fm = read_front_matter(content).unwrap();
        assert_eq!(fm.get("title"), Some("X"));
    }

    #[test]
    fn test_thematic_break_is_not_front_matter() {
        assert!(!has_front_matter("----\ntitle: X\n----\n"));
        assert!(!has_front_matter("Intro\n---\n"));
    }

    #[test]
    fn test_upsert_appends_to_existing_block() {
        let updated = upsert_front_matter("---\ntitle: X\n---\nBody", "version", "1.0");
        assert_eq!(updated, "---\ntitle: X\nversion: 1.0\n---\nBody");
    }

    #[test]
    fn test_upsert_into_empty_block() {
        let updated = upsert_front_matter("---\n---\nBody", "version", "1.0");
        assert_eq!(updated, "---\nversion: 1.0\n---\nBody");
    }

    #[test]
    fn test_upsert_prepends_when_absent() {
        let updated = upsert_front_matter("# Title\n", "version", "1.0");
        assert_eq!(updated, "---\nversion: 1.0\n---\n\n# Title\n");
        assert!(has_front_matter(&updated));
        assert_eq!(read_front_matter(&updated).unwrap().get("version"), Some("1.0"));
    }

    #[test]
    fn test_upsert_leaves_existing_key() {
        let content = "---\nversion: 2.3\n---\nBody";
        assert_eq!(upsert_front_matter(content, "version", "1.0"), content);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        for content in ["Body", "---\ntitle: X\n---\nBody", "---\nunclosed\nBody", ""] {
            let once = upsert_front_matter(content, "version", "1.0");
            let twice = upsert_front_matter(&once, "version", "1.0");
            assert_eq!(once, twice, "input: {content:?}");
        }
    }

    #[test]
    fn test_upsert_unclosed_block_falls_back_to_prepend() {
        let content = "---\ntitle: X\nBody";
        let updated = upsert_front_matter(content, "version", "1.0");
        assert_eq!(updated, "---\nversion: 1.0\n---\n\n---\ntitle: X\nBody");
        assert_eq!(read_front_matter(&updated).unwrap().get("version"), Some("1.0"));
    }

    #[test]
    fn test_upsert_keeps_crlf_style() {
        let updated = upsert_front_matter("---\r\ntitle: X\r\n---\r\nBody", "version", "1.0");
        assert_eq!(updated, "---\r\ntitle: X\r\nversion: 1.0\r\n---\r\nBody");
    }

    #[test]
    fn test_upsert_keeps_bom_first() {
        let updated = upsert_front_matter("\u{FEFF}Body", "version", "1.0");
        assert_eq!(updated, "\u{FEFF}---\nversion: 1.0\n---\n\nBody");
    }

    #[test]
    fn test_strip_legacy_line() {
        assert_eq!(strip_legacy_line("version: 1.0\nBody", "version", "1.0"), "Body");
        assert_eq!(strip_legacy_line("version: 1.0\r\nBody", "version", "1.0"), "Body");
        // Only the exact legacy pair at the top is touched
        assert_eq!(strip_legacy_line("version: 2.0\nBody", "version", "1.0"), "version: 2.0\nBody");
        assert_eq!(
            strip_legacy_line("Intro\nversion: 1.0\n", "version", "1.0"),
            "Intro\nversion: 1.0\n"
        );
        assert!(matches!(strip_legacy_line("Body", "version", "1.0"), Cow::Borrowed(_)));
    }
}
