//! Makani Substring Index - Main entrypoint.
//!
//! This is the main entry point for the Makani Substring Index application.
//! It initializes the logging system, loads configuration, indexes a wordlist
//! file, and runs substring queries against it.

mod config;
mod data_structures;
mod error;
mod wordlist;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use data_structures::{LehuaTrie, LehuaTrieConfig};
use error::{set_error_reporter, MakaniError, MakaniResult, TracingErrorReporter};

/// Command line arguments for the Makani Substring Index.
#[derive(Parser, Debug)]
#[clap(name = "Makani Substring Index", version, author, about)]
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
    /// Index a wordlist and search it for substring-containment matches
    Search {
        /// Path to the wordlist file, one token per line
        #[clap(short, long, value_parser)]
        wordlist: PathBuf,

        /// Search keys to run against the index
        #[clap(required = true)]
        keys: Vec<String>,
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
fn init_logging() -> MakaniResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MakaniError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> MakaniResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "MAKANI";
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command {
        Command::Search { wordlist, keys } => {
            // Load and validate configuration
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            // Initialize global configuration
            config::init_global_config(config);
            let config = config::get_global_config();
            let index_config = &config.get().index;

            info!(wordlist = %wordlist.display(), "Indexing wordlist");
            let mut trie = LehuaTrie::with_config(LehuaTrieConfig {
                dedupe_results: index_config.dedupe_results,
            });
            let stats =
                wordlist::index_file(&wordlist, &mut trie, index_config.progress_interval)?;
            info!(
                lines = stats.lines,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "Wordlist indexed"
            );

            for key in &keys {
                print_results(key, &trie);
            }

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::MakaniConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaniError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaniError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaniError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Runs one search key against the index and prints the timed result line.
fn print_results(key: &str, trie: &LehuaTrie) {
    let start = Instant::now();
    let results = trie.search(key);
    let elapsed = start.elapsed();

    println!(
        "{} ({} found in {}ms): {}",
        key,
        results.len(),
        elapsed.as_millis(),
        results.join(", ")
    );
}
