//! Wordlist loading for the Makani Substring Index.
//!
//! This module feeds a line-oriented text source into the index, one token
//! per line, reporting progress at a configurable interval. It is the driver
//! side of the system: reading, counting, and timing happen here, never in
//! the index core, and I/O failures stop at this boundary as [`MakaniError`]
//! values.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::data_structures::LehuaTrie;
use crate::error::MakaniResult;

/// Statistics from an indexing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordlistStats {
    /// Number of lines fed into the index
    pub lines: u64,

    /// Wall-clock time the run took
    pub elapsed: Duration,
}

/// Indexes every line of a reader into the trie.
///
/// Emits a progress log entry every `progress_interval` lines. The counter is
/// local to this call; concurrent or repeated runs do not share state.
///
/// # Arguments
///
/// * `reader` - The line-oriented source of tokens
/// * `trie` - The trie receiving one `index` call per line
/// * `progress_interval` - Lines between progress log entries; 0 disables
///   progress logging
///
/// # Returns
///
/// * `Ok(WordlistStats)` with the line count and elapsed time
/// * `Err(MakaniError)` if reading a line fails
pub fn index_reader<R: BufRead>(
    reader: R,
    trie: &mut LehuaTrie,
    progress_interval: u64,
) -> MakaniResult<WordlistStats> {
    let start = Instant::now();
    let mut lines: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        trie.index(&line);

        lines += 1;
        if progress_interval != 0 && lines % progress_interval == 0 {
            tracing::info!(lines, "indexing in progress");
        }
    }

    let stats = WordlistStats {
        lines,
        elapsed: start.elapsed(),
    };

    tracing::info!(
        lines = stats.lines,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        tokens = trie.len(),
        nodes = trie.node_count(),
        "indexing complete"
    );

    Ok(stats)
}

/// Indexes every line of a file into the trie.
///
/// Opens the file read-only and delegates to [`index_reader`].
pub fn index_file<P: AsRef<Path>>(
    path: P,
    trie: &mut LehuaTrie,
    progress_interval: u64,
) -> MakaniResult<WordlistStats> {
    let file = OpenOptions::new().read(true).open(path.as_ref())?;
    index_reader(BufReader::new(file), trie, progress_interval)
}
