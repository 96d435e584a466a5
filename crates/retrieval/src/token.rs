//! Query and section tokenization.
//!
//! Normalization rules:
//! - lowercase the input
//! - every character outside `[a-z0-9]` and whitespace becomes a space
//! - split on whitespace runs
//! - drop tokens shorter than 3 characters
//! - drop stopwords
//!
//! The stopword set is fixed and enumerated in full below so scoring is
//! reproducible across runs and in tests. Many entries are already caught
//! by the length filter; they are kept anyway so the list stands on its
//! own as documentation of what never counts as a content word.

/// Minimum token length. Shorter fragments carry no signal.
const MIN_TOKEN_LEN: usize = 3;

/// Common English function words, excluded from scoring.
///
/// Kept sorted so membership is a binary search.
static STOPWORDS: &[&str] = &[
    "a", "about", "also", "an", "and", "are", "as", "at", "be", "been", "being", "but", "by",
    "could", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her", "him", "how",
    "i", "if", "in", "is", "it", "its", "just", "may", "me", "might", "my", "no", "not", "of",
    "on", "or", "our", "she", "should", "so", "than", "that", "the", "their", "then", "these",
    "they", "this", "those", "to", "us", "was", "we", "were", "what", "when", "where", "which",
    "who", "why", "will", "with", "would", "you", "your",
];

fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}

/// Tokenize text into normalized content words.
///
/// Total over all string input. Tokens are not deduplicated here —
/// scoring decides whether repetition matters.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|w| w.len() >= MIN_TOKEN_LEN && !is_stopword(w))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopword_list_is_sorted() {
        // binary_search depends on this
        assert!(STOPWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = tokenize("Is the LORD my shepherd?");
        assert_eq!(tokens, vec!["lord", "shepherd"]);
    }

    #[test]
    fn drops_short_fragments() {
        // "a", "i", "be" and punctuation-split fragments never survive
        let tokens = tokenize("a b cd efg I'm ok");
        assert_eq!(tokens, vec!["efg"]);
    }

    #[test]
    fn drops_stopwords() {
        assert!(tokenize("the and of about from their").is_empty());
    }

    #[test]
    fn keeps_digits() {
        let tokens = tokenize("John 3:16 says");
        assert_eq!(tokens, vec!["john", "says"]);
    }

    #[test]
    fn numeric_tokens_survive_length_filter() {
        let tokens = tokenize("psalm 119 meditation");
        assert_eq!(tokens, vec!["psalm", "119", "meditation"]);
    }

    #[test]
    fn non_ascii_becomes_separator() {
        let tokens = tokenize("café prayer");
        assert_eq!(tokens, vec!["caf", "prayer"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn repeated_words_not_deduplicated() {
        let tokens = tokenize("prayer prayer prayer");
        assert_eq!(tokens.len(), 3);
    }
}
