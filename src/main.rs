//! ptrie - Main entrypoint.
//!
//! Diagnostic front end for the frequency trie. It loads configuration,
//! initializes logging, builds a trie from a word list and runs completions
//! or dumps the stored words.

use clap::{Parser, Subcommand};
use ptrie_lib::config::{self, ConfigLoader, LogConfig, PtrieConfig};
use ptrie_lib::data_structures::{FrequencyTrie, FrequencyTrieConfig, FrequencyTrieError};
use ptrie_lib::error::{
    report, set_error_reporter, ErrorContext, PtrieError, PtrieResult, TracingErrorReporter,
};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for ptrie.
#[derive(Parser, Debug)]
#[clap(name = "ptrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best completion for each prefix
    Complete {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Prefixes to complete
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Print every stored word with its count
    Dump {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> PtrieResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| PtrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from a word list file.
///
/// Blank lines are skipped. Lines with characters the trie rejects are logged
/// and skipped; running out of node budget aborts the load.
fn load_words(path: &Path, trie_config: FrequencyTrieConfig) -> PtrieResult<FrequencyTrie> {
    let contents = std::fs::read_to_string(path)?;
    let mut trie = FrequencyTrie::with_config(trie_config);
    let mut skipped = 0usize;

    for (line_no, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match trie.insert(line) {
            Ok(()) => {}
            Err(e @ FrequencyTrieError::InvalidCharacter { .. }) => {
                warn!(line = line_no + 1, error = %e, "skipping word");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        path = %path.display(),
        words = trie.len(),
        nodes = trie.node_count(),
        skipped,
        "word list loaded"
    );
    Ok(trie)
}

fn run(command: Command, config: &PtrieConfig) -> PtrieResult<()> {
    match command {
        Command::Complete { words, prefixes } => {
            let trie = load_words(&words, FrequencyTrieConfig::from(&config.trie))?;
            for prefix in prefixes {
                println!("{}", trie.autocomplete(&prefix)?);
            }
            trie.destroy();
            Ok(())
        }
        Command::Dump { words } => {
            let trie = load_words(&words, FrequencyTrieConfig::from(&config.trie))?;
            trie.for_each_word(|word, count| println!("{word} - {count}"));
            trie.destroy();
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&PtrieConfig::default())
                .map_err(|e| PtrieError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config = match &args.command {
        Command::GenConfig { .. } => PtrieConfig::default(),
        _ => match ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                process::exit(1);
            }
        },
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let component = format!("{:?}", args.command);
    if let Err(e) = run(args.command, &config) {
        report(&ErrorContext::new(e, component));
        process::exit(1);
    }
}
