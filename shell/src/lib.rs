use anyhow::Result;
use core::{build_index_from_path, find_matches, load_stop_words_from_path, remove_stop_words};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct SessionConfig {
    /// Corpus file: alternating URL and body-text lines.
    pub corpus: PathBuf,
    /// Stop-word list to prune from the index before searching, if any.
    pub stop_words: Option<PathBuf>,
    /// Print query responses as JSON objects instead of plain text.
    pub json: bool,
}

#[derive(Serialize)]
struct QueryResponse<'a> {
    query: &'a str,
    total_hits: usize,
    results: &'a BTreeSet<String>,
}

/// Build the index, then prompt for query sentences until an empty line
/// or end of input.
pub fn run_session<R: BufRead, W: Write>(
    config: &SessionConfig,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Stand by while building index...")?;
    let (mut index, num_pages) = build_index_from_path(&config.corpus);
    let num_removed = config.stop_words.as_deref().map(|path| {
        let stop_words = load_stop_words_from_path(path);
        remove_stop_words(&mut index, &stop_words)
    });
    tracing::info!(num_pages, num_terms = index.num_terms(), "index ready");

    writeln!(
        out,
        "Indexed {} pages containing {} unique terms",
        num_pages,
        index.num_terms()
    )?;
    if let Some(removed) = num_removed {
        writeln!(out, "{removed} stop words removed from index")?;
    }
    writeln!(out)?;

    loop {
        write!(out, "Enter query sentence (press enter to quit): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.is_empty() {
            break;
        }
        let results = find_matches(&index, query);
        if config.json {
            let response = QueryResponse {
                query,
                total_hits: results.len(),
                results: &results,
            };
            writeln!(out, "{}", serde_json::to_string(&response)?)?;
        } else {
            writeln!(out, "Found {} matching pages", results.len())?;
            for url in &results {
                writeln!(out, "{url}")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "Thank you for searching!")?;
    Ok(())
}
