//! Whole-word, case-insensitive keyword matching.

/// Returns true if `text` contains `keyword` as one of its whitespace-separated
/// words, ignoring case. `keyword` is expected to be lowercased already.
pub fn contains_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.split_whitespace()
        .any(|word| word.to_lowercase() == keyword)
}

/// Returns true if any keyword matches any value.
pub fn any_keyword_matches<'a, I>(values: I, keywords: &[String]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().any(|value| {
        keywords
            .iter()
            .any(|keyword| contains_word(value, keyword.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        assert!(contains_word("Alice Pauline", "alice"));
        assert!(contains_word("  alice\tpauline ", "pauline"));
        assert!(!contains_word("Alicia", "alice"));
        assert!(!contains_word("Alice Pauline", "alice pauline"));
        assert!(!contains_word("Alice", ""));
    }

    #[test]
    fn any_of_any() {
        let keywords = vec!["science".to_string(), "law".to_string()];
        assert!(any_keyword_matches(["Computing", "Law"], &keywords));
        assert!(!any_keyword_matches(["Computing"], &keywords));
        assert!(!any_keyword_matches(Vec::<&str>::new(), &keywords));
    }
}
