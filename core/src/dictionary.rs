use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, info};

use crate::{
    error::{CrackError, CrackResult},
    hash::{HashFunction, TargetDigest, Verifier},
    outcome::{Found, SearchOutcome},
    DEFAULT_DELAY, PROGRESS_INTERVAL,
};

/// A dictionary attack: tests the lines of a word list in order, until one matches.
#[derive(Clone, Debug)]
pub struct DictionaryAttack {
    verifier: Verifier,
    delay: Duration,
}

impl DictionaryAttack {
    /// Creates a new dictionary attack against the given digest.
    pub fn new(hash_function: HashFunction, target: impl Into<TargetDigest>) -> Self {
        Self {
            verifier: Verifier::new(hash_function, target),
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets a pause applied after each tested candidate.
    /// A zero delay disables throttling.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;

        self
    }

    /// Opens the word list at the given path and searches it.
    /// The file is closed on every exit path.
    pub fn search_file(&self, path: &Path) -> CrackResult<SearchOutcome> {
        let file = File::open(path).map_err(|source| CrackError::SourceUnavailable {
            path: path.to_owned(),
            source,
        })?;

        self.search_reader(BufReader::new(file))
            .map_err(|source| CrackError::SourceUnavailable {
                path: path.to_owned(),
                source,
            })
    }

    /// Searches a line-oriented source in a single forward pass.
    /// Invalid UTF-8 sequences are replaced instead of aborting the read.
    pub fn search_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<SearchOutcome> {
        info!(
            hash_function = %self.verifier.hash_function(),
            delay = ?self.delay,
            "Starting dictionary attack"
        );

        let start = Instant::now();
        let mut attempts = 0;
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&line);
            let candidate = text.trim();
            if candidate.is_empty() {
                continue;
            }

            attempts += 1;

            if self.verifier.matches(candidate) {
                let elapsed = start.elapsed();
                info!(attempts, ?elapsed, "Found a matching word");

                return Ok(SearchOutcome::Found(Found {
                    plaintext: candidate.to_owned(),
                    attempts,
                    elapsed,
                }));
            }

            if attempts % PROGRESS_INTERVAL == 0 {
                debug!(attempts, last_candidate = candidate, "Dictionary attack in progress");
            }

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        let elapsed = start.elapsed();
        info!(attempts, ?elapsed, "Word list exhausted without a match");

        Ok(SearchOutcome::NotFound { attempts, elapsed })
    }
}
