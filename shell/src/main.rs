use anyhow::Result;
use clap::Parser;
use shell::{run_session, SessionConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "shell")]
#[command(about = "Interactive boolean keyword search over a URL/body corpus file", long_about = None)]
struct Args {
    /// Corpus file: alternating URL and body-text lines
    corpus: PathBuf,
    /// Remove the words in FILE from the index before searching
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "stopWords.txt")]
    stop_words: Option<PathBuf>,
    /// Print query responses as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = SessionConfig {
        corpus: args.corpus,
        stop_words: args.stop_words,
        json: args.json,
    };
    let stdin = io::stdin();
    run_session(&config, stdin.lock(), io::stdout().lock())
}
