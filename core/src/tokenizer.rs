use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref EDGE_PUNCT: Regex = Regex::new(r"^[[:punct:]]+|[[:punct:]]+$").expect("valid regex");
}

/// Normalize a raw word into an index term: strip punctuation from both ends,
/// lowercase the letters, keep interior non-letter characters as-is.
/// Returns `None` for words left empty or letterless after stripping.
pub fn normalize(raw: &str) -> Option<String> {
    let stripped = EDGE_PUNCT.replace_all(raw, "");
    if !stripped.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(stripped.chars().map(|c| c.to_ascii_lowercase()).collect())
}

/// Split body text on whitespace and normalize each word, collecting the
/// distinct terms. A page contributes a term once no matter how often it
/// repeats in the body.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split_whitespace().filter_map(normalize).collect()
}
