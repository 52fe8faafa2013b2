use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub type Url = String;

/// Term -> set of page URLs containing that term. BTree containers keep
/// enumeration in ascending order, so query output is deterministic without
/// a separate sort step.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<Url>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique terms in the index.
    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Posting set for a term, `None` if the term is not indexed.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<Url>> {
        self.postings.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Remove a term and its whole posting set. Returns whether it existed.
    /// A term never stays behind with an empty posting set.
    pub fn remove_term(&mut self, term: &str) -> bool {
        self.postings.remove(term).is_some()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    fn add_posting(&mut self, term: String, url: &str) {
        self.postings.entry(term).or_default().insert(url.to_string());
    }
}

/// Build an inverted index from a corpus of alternating lines: a page URL,
/// then its body text. Returns the index and the number of URL/body pairs
/// processed. A trailing URL with no body line is neither counted nor
/// indexed; a read error mid-stream ends the corpus at the last good pair.
pub fn build_index<R: BufRead>(reader: R) -> (InvertedIndex, usize) {
    let mut index = InvertedIndex::new();
    let mut num_pages = 0usize;
    let mut lines = reader.lines();
    while let Some(Ok(url)) = lines.next() {
        let Some(Ok(body)) = lines.next() else { break };
        num_pages += 1;
        for term in tokenize(&body) {
            index.add_posting(term, &url);
        }
    }
    (index, num_pages)
}

/// Build from a corpus file on disk. An unreadable file is not fatal: the
/// caller gets an empty index and a zero page count.
pub fn build_index_from_path<P: AsRef<Path>>(path: P) -> (InvertedIndex, usize) {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => build_index(BufReader::new(file)),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "corpus unreadable, starting empty");
            (InvertedIndex::new(), 0)
        }
    }
}
