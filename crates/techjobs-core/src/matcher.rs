//! Whole-word, case-insensitive matching of a search term against cell text.

/// Returns true when `term` equals, ignoring case, one whitespace-delimited
/// word of `haystack`.
///
/// An absent haystack never matches. Words are split on any Unicode
/// whitespace, so tabs and runs of spaces separate words the same way a
/// single space does, and no empty word is ever produced: the empty term
/// matches nothing.
///
/// ```ignore
/// assert!(matches(Some("Enterprise Holdings, Inc"), "enterprise"));
/// assert!(!matches(Some("Enterprise Holdings, Inc"), "rise"));
/// ```
pub fn matches(haystack: Option<&str>, term: &str) -> bool {
    WordMatcher::new(term).is_match(haystack)
}

/// A search term lowercased once and reused across many cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatcher {
    term: String,
}

impl WordMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    /// The lowercased term.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, haystack: Option<&str>) -> bool {
        let Some(haystack) = haystack else {
            return false;
        };
        haystack
            .split_whitespace()
            .any(|word| word.to_lowercase() == self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_word_ignoring_case() {
        let employer = Some("Enterprise Holdings, Inc");
        assert!(matches(employer, "Enterprise"));
        assert!(matches(employer, "enterprise"));
        assert!(matches(employer, "ENTERPRISE"));
        assert!(matches(employer, "Inc"));
    }

    #[test]
    fn rejects_partial_words() {
        let employer = Some("Enterprise Holdings, Inc");
        assert!(!matches(employer, "rise"));
        assert!(!matches(employer, "Enter"));
        // Punctuation stays attached to its word.
        assert!(!matches(employer, "Holdings"));
        assert!(matches(employer, "holdings,"));
    }

    #[test]
    fn absent_haystack_never_matches() {
        assert!(!matches(None, "anything"));
        assert!(!matches(None, ""));
    }

    #[test]
    fn empty_term_matches_nothing() {
        assert!(!matches(Some("Web Developer"), ""));
        assert!(!matches(Some(""), ""));
        assert!(!matches(Some("a  b"), ""));
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert!(matches(Some("Web\tDeveloper"), "developer"));
        assert!(matches(Some("Web   Developer"), "developer"));
        assert!(matches(Some("  Ruby  "), "ruby"));
        assert!(matches(Some("Data\nScientist"), "scientist"));
    }

    #[test]
    fn multi_word_terms_never_match_a_single_word() {
        assert!(!matches(Some("Web Developer"), "Web Developer"));
    }

    #[test]
    fn non_ascii_case_folding() {
        assert!(matches(Some("Zürich Office"), "ZÜRICH"));
    }

    #[test]
    fn matcher_lowercases_term_once() {
        let matcher = WordMatcher::new("Ruby");
        assert_eq!(matcher.term(), "ruby");
        assert!(matcher.is_match(Some("Ruby on Rails")));
        assert!(!matcher.is_match(Some("Rubyist")));
    }
}
