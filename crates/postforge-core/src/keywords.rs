use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Default number of hashtags per post.
pub const DEFAULT_HASHTAG_COUNT: usize = 5;

/// Words too common to be worth tagging.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "in", "is", "it", "and", "of", "to", "for", "on", "with", "as", "by", "that",
    "this",
];

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Pick the `count` most frequent meaningful words in `text` and format
/// them as a hashtag line, e.g. `#Startups #Funding #Growth`.
///
/// Tokens are lowercased `\w+` runs; stopwords and words of three or fewer
/// characters are dropped. Frequency ties keep first-encountered order, so
/// the result is deterministic for identical input.
pub fn hashtag_line(text: &str, count: usize) -> String {
    let lowered = text.to_lowercase();

    let mut freq: IndexMap<&str, usize> = IndexMap::new();
    for token in WORD_RE.find_iter(&lowered) {
        let word = token.as_str();
        if STOPWORDS.contains(&word) || word.chars().count() <= 3 {
            continue;
        }
        *freq.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    // Stable sort: equal counts stay in insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .iter()
        .take(count)
        .map(|(word, _)| format!("#{}", capitalize(word)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_at_most_count_tags() {
        let text = "rust tokio axum serde tracing hyper tower reqwest";
        let line = hashtag_line(text, 5);
        assert_eq!(line.split(' ').count(), 5);

        let line = hashtag_line("rust rust tokio", 5);
        assert_eq!(line.split(' ').count(), 2);
    }

    #[test]
    fn test_tags_are_present_in_input() {
        let text = "Startups need funding and funding needs startups";
        let line = hashtag_line(text, 5);
        for tag in line.split(' ') {
            let word = tag.trim_start_matches('#').to_lowercase();
            assert!(text.to_lowercase().contains(&word), "{word} not in input");
        }
    }

    #[test]
    fn test_stopwords_and_short_words_dropped() {
        let line = hashtag_line("the cat sat on a mat with it and they waited", 10);
        assert!(!line.contains("#The"));
        assert!(!line.contains("#Cat"), "3-char word must be dropped");
        assert!(!line.contains("#With"));
        assert!(line.contains("#They"));
        assert!(line.contains("#Waited"));
    }

    #[test]
    fn test_most_frequent_first() {
        let text = "alpha beta beta gamma gamma gamma";
        assert_eq!(hashtag_line(text, 3), "#Gamma #Beta #Alpha");
    }

    #[test]
    fn test_ties_break_by_first_encounter() {
        let text = "zebra apple zebra apple mango mango";
        assert_eq!(hashtag_line(text, 3), "#Zebra #Apple #Mango");
    }

    #[test]
    fn test_empty_text_gives_empty_line() {
        assert_eq!(hashtag_line("", 5), "");
    }
}
