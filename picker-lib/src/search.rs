//! Case-insensitive literal search.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Compiled-program budget per byte of escaped pattern. Case folding turns a
/// single letter into a class of up to three characters, so the default
/// budget runs out on long queries.
const SIZE_LIMIT_PER_BYTE: usize = 1024;

/// Lower bound for the compiled-program budget (regex's own default).
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// How a non-empty query is matched.
#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    /// Char-by-char case-insensitive comparison, used when the regex could
    /// not be compiled.
    Literal(Vec<char>),
}

/// A search query over node names.
///
/// The text is matched literally (regex metacharacters have no special
/// meaning) and case-insensitively. An empty query means "no search".
/// Building a query never fails.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    text: String,
    /// `None` for the empty query.
    matcher: Option<Matcher>,
}

impl SearchQuery {
    /// Create a query for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let matcher = if text.is_empty() {
            None
        } else {
            Some(Self::compile(&text))
        };
        Self { text, matcher }
    }

    fn compile(text: &str) -> Matcher {
        let escaped = regex::escape(text);
        let limit = escaped
            .len()
            .saturating_mul(SIZE_LIMIT_PER_BYTE)
            .max(MIN_SIZE_LIMIT);
        match RegexBuilder::new(&escaped)
            .case_insensitive(true)
            .size_limit(limit)
            .dfa_size_limit(limit)
            .build()
        {
            Ok(re) => Matcher::Regex(re),
            Err(e) => {
                log::warn!("Search pattern too large for regex, using literal matcher: {e}");
                Matcher::Literal(text.chars().collect())
            }
        }
    }

    /// Create the empty query.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the raw search text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if this is the empty query.
    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }

    /// Whether `haystack` contains the query. Everything contains the empty
    /// query.
    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.matcher {
            Some(Matcher::Regex(re)) => re.is_match(haystack),
            Some(Matcher::Literal(needle)) => literal_find(needle, haystack, 0).is_some(),
            None => true,
        }
    }

    /// Byte ranges of every non-overlapping occurrence, left to right.
    pub fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        match &self.matcher {
            Some(Matcher::Regex(re)) => re.find_iter(haystack).map(|m| m.range()).collect(),
            Some(Matcher::Literal(needle)) => {
                let mut ranges = Vec::new();
                let mut from = 0;
                while let Some(range) = literal_find(needle, haystack, from) {
                    from = range.end;
                    ranges.push(range);
                }
                ranges
            }
            None => Vec::new(),
        }
    }
}

impl PartialEq for SearchQuery {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for SearchQuery {}

/// First occurrence of `needle` in `haystack[from..]`, comparing one char
/// against one char, case-insensitively.
fn literal_find(needle: &[char], haystack: &str, from: usize) -> Option<Range<usize>> {
    let rest = &haystack[from..];
    for (start, _) in rest.char_indices() {
        let mut chars = rest[start..].char_indices();
        let mut end = start;
        let matched = needle.iter().all(|&n| match chars.next() {
            Some((offset, h)) if chars_eq_ignore_case(n, h) => {
                end = start + offset + h.len_utf8();
                true
            }
            _ => false,
        });
        if matched {
            return Some(from + start..from + end);
        }
    }
    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters_are_literal() {
        let query = SearchQuery::new("a.b");
        assert!(query.is_match("xa.bx"));
        assert!(!query.is_match("axb"));
    }

    #[test]
    fn test_find_ranges_case_insensitive() {
        let query = SearchQuery::new("ab");
        assert_eq!(query.find_ranges("AbxaB"), vec![0..2, 3..5]);
    }

    #[test]
    fn test_empty_query() {
        let query = SearchQuery::new("");
        assert!(query.is_empty());
        assert!(query.is_match("anything"));
        assert!(query.find_ranges("anything").is_empty());
    }

    #[test]
    fn test_literal_matcher_agrees_with_regex() {
        let literal = SearchQuery {
            text: "ab".into(),
            matcher: Some(Matcher::Literal(vec!['a', 'b'])),
        };
        assert!(literal.is_match("xAB"));
        assert!(!literal.is_match("a b"));
        assert_eq!(literal.find_ranges("AbxaB"), vec![0..2, 3..5]);
    }

    #[test]
    fn test_literal_matcher_multibyte() {
        let literal = SearchQuery {
            text: "三".into(),
            matcher: Some(Matcher::Literal(vec!['三'])),
        };
        assert_eq!(literal.find_ranges("张三丰三"), vec![3..6, 9..12]);
    }
}
