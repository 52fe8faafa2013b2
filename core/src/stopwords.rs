use crate::index::InvertedIndex;
use crate::tokenizer::normalize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a stop-word list, one word per line, normalizing each the same way
/// as index terms. Lines that normalize to nothing are skipped.
pub fn load_stop_words<R: BufRead>(reader: R) -> BTreeSet<String> {
    reader
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| normalize(&line))
        .collect()
}

/// Load a stop-word file from disk. An unreadable file yields the empty set.
pub fn load_stop_words_from_path<P: AsRef<Path>>(path: P) -> BTreeSet<String> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => load_stop_words(BufReader::new(file)),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "stop-word list unreadable, nothing to remove");
            BTreeSet::new()
        }
    }
}

/// Delete every stop word's key from the index outright, posting set and
/// all. Returns how many terms were removed; stop words absent from the
/// index are ignored.
pub fn remove_stop_words(index: &mut InvertedIndex, stop_words: &BTreeSet<String>) -> usize {
    let mut removed = 0;
    for word in stop_words {
        if index.remove_term(word) {
            removed += 1;
        }
    }
    removed
}
