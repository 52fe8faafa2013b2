pub mod index;
pub mod query;
pub mod stopwords;
pub mod tokenizer;

pub use index::{build_index, build_index_from_path, InvertedIndex, Url};
pub use query::find_matches;
pub use stopwords::{load_stop_words, load_stop_words_from_path, remove_stop_words};
