use crate::index::{InvertedIndex, Url};
use crate::tokenizer::normalize;
use std::collections::BTreeSet;

/// Resolve a query sentence against the index, left to right.
///
/// The first word seeds the result with its posting set. Every later word
/// dispatches on its raw first character: `+` intersects, `-` subtracts,
/// anything else unions. The whole word, sign included, then goes through
/// `normalize`, which strips the sign along with any other edge punctuation.
///
/// The operators treat invalid or unindexed words asymmetrically: after
/// `+` such a word clears the running result, while after `-` or a bare
/// word it is silently ignored. Malformed query text never errors.
pub fn find_matches(index: &InvertedIndex, sentence: &str) -> BTreeSet<Url> {
    let mut result: BTreeSet<Url> = BTreeSet::new();
    for (pos, word) in sentence.split_whitespace().enumerate() {
        if pos == 0 {
            if let Some(term) = normalize(word) {
                result = index.postings(&term).cloned().unwrap_or_default();
            }
        } else {
            match word.chars().next() {
                Some('+') => intersect(index, &mut result, word),
                Some('-') => subtract(index, &mut result, word),
                _ => unite(index, &mut result, word),
            }
        }
    }
    result
}

fn lookup<'a>(index: &'a InvertedIndex, word: &str) -> Option<&'a BTreeSet<Url>> {
    normalize(word).and_then(|term| index.postings(&term))
}

fn intersect(index: &InvertedIndex, result: &mut BTreeSet<Url>, word: &str) {
    match lookup(index, word) {
        Some(postings) => result.retain(|url| postings.contains(url)),
        None => result.clear(),
    }
}

fn subtract(index: &InvertedIndex, result: &mut BTreeSet<Url>, word: &str) {
    if let Some(postings) = lookup(index, word) {
        result.retain(|url| !postings.contains(url));
    }
}

fn unite(index: &InvertedIndex, result: &mut BTreeSet<Url>, word: &str) {
    if let Some(postings) = lookup(index, word) {
        result.extend(postings.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use std::io::Cursor;

    fn sample_index() -> InvertedIndex {
        let corpus = "www.a.com\ncat dog CAT.\nwww.b.com\ndog bird\n";
        build_index(Cursor::new(corpus)).0
    }

    fn matches(index: &InvertedIndex, sentence: &str) -> Vec<String> {
        find_matches(index, sentence).into_iter().collect()
    }

    #[test]
    fn single_word() {
        let index = sample_index();
        assert_eq!(matches(&index, "cat"), ["www.a.com"]);
        assert_eq!(matches(&index, "dog"), ["www.a.com", "www.b.com"]);
    }

    #[test]
    fn intersection() {
        let index = sample_index();
        assert_eq!(matches(&index, "dog +cat"), ["www.a.com"]);
    }

    #[test]
    fn difference() {
        let index = sample_index();
        assert_eq!(matches(&index, "dog -cat"), ["www.b.com"]);
    }

    #[test]
    fn implicit_union() {
        let index = sample_index();
        assert_eq!(matches(&index, "cat bird"), ["www.a.com", "www.b.com"]);
    }

    #[test]
    fn intersect_with_unknown_word_clears() {
        let index = sample_index();
        assert!(matches(&index, "dog +zzz").is_empty());
        assert!(matches(&index, "dog +---").is_empty());
    }

    #[test]
    fn subtract_and_union_ignore_unknown_words() {
        let index = sample_index();
        assert_eq!(matches(&index, "dog -zzz"), ["www.a.com", "www.b.com"]);
        assert_eq!(matches(&index, "dog zzz"), ["www.a.com", "www.b.com"]);
        assert_eq!(matches(&index, "dog ---"), ["www.a.com", "www.b.com"]);
    }

    #[test]
    fn first_word_unknown_or_invalid_yields_empty() {
        let index = sample_index();
        assert!(matches(&index, "zzz").is_empty());
        assert!(matches(&index, "---").is_empty());
        assert!(matches(&index, "").is_empty());
    }

    #[test]
    fn operator_sign_is_stripped_by_normalization() {
        let index = sample_index();
        // "+CAT." normalizes to "cat" the same as a bare word would.
        assert_eq!(matches(&index, "dog +CAT."), ["www.a.com"]);
    }

    #[test]
    fn left_to_right_chaining() {
        let index = sample_index();
        // union brings b back in after the intersection narrowed to a.
        assert_eq!(matches(&index, "dog +cat bird"), ["www.a.com", "www.b.com"]);
        assert_eq!(matches(&index, "dog bird -cat"), ["www.b.com"]);
    }

    #[test]
    fn empty_index_answers_empty() {
        let index = InvertedIndex::new();
        assert!(matches(&index, "cat +dog -bird").is_empty());
    }
}
