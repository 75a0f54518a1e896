use std::{iter, time::Instant};

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::{
    error::{CrackError, CrackResult},
    hash::{HashFunction, TargetDigest, Verifier},
    outcome::{Found, SearchOutcome},
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_PASSWORD_LENGTH, DIGITS_LOWERCASE, PROGRESS_INTERVAL,
};

/// Returns the size of the declared search space: the sum of `charset_len^length`
/// for every length from 1 to `max_length`. Saturates instead of overflowing.
pub fn search_space(charset_len: usize, max_length: usize) -> u128 {
    (1..=max_length).fold(0u128, |space, length| {
        let count = u32::try_from(length)
            .ok()
            .and_then(|length| (charset_len as u128).checked_pow(length))
            .unwrap_or(u128::MAX);
        space.saturating_add(count)
    })
}

/// Lazily enumerates every string over `charset` from length 1 to `max_length`.
///
/// Shorter strings come first. Within a length, the rightmost position cycles fastest,
/// following the order of the characters in `charset`.
pub fn candidates(charset: &[char], max_length: usize) -> impl Iterator<Item = String> + '_ {
    (1..=max_length).flat_map(move |length| {
        iter::repeat_n(charset.iter().copied(), length)
            .multi_cartesian_product()
            .map(|chars| chars.into_iter().collect::<String>())
    })
}

/// A builder for a brute force attack.
#[derive(Clone, Debug)]
pub struct BruteForceAttackBuilder {
    hash_function: HashFunction,
    target: TargetDigest,
    charset: Vec<char>,
    max_length: usize,
    max_attempts: u64,
}

impl BruteForceAttackBuilder {
    /// Creates a new builder against the given digest, with the default parameters.
    pub fn new(hash_function: HashFunction, target: impl Into<TargetDigest>) -> Self {
        Self {
            hash_function,
            target: target.into(),
            charset: DIGITS_LOWERCASE.chars().collect(),
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the charset. Its order defines the enumeration order.
    pub fn charset(mut self, charset: &str) -> Self {
        self.charset = charset.chars().collect();

        self
    }

    /// Sets the maximum length of the candidates.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;

        self
    }

    /// Sets the maximum number of candidates tested, across all lengths combined.
    pub fn max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;

        self
    }

    /// Builds a BruteForceAttack with the specified parameters.
    pub fn build(self) -> CrackResult<BruteForceAttack> {
        if self.charset.is_empty() {
            return Err(CrackError::InvalidParameters(
                "the charset must not be empty".to_owned(),
            ));
        }

        if let Some(duplicate) = self.charset.iter().duplicates().next() {
            return Err(CrackError::InvalidParameters(format!(
                "the charset contains '{duplicate}' more than once"
            )));
        }

        if self.max_length == 0 {
            return Err(CrackError::InvalidParameters(
                "the maximum length must be at least 1".to_owned(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(CrackError::InvalidParameters(
                "the maximum number of attempts must be at least 1".to_owned(),
            ));
        }

        Ok(BruteForceAttack {
            verifier: Verifier::new(self.hash_function, self.target),
            charset: self.charset,
            max_length: self.max_length,
            max_attempts: self.max_attempts,
        })
    }
}

/// A bounded brute force attack.
#[derive(Clone, Debug)]
pub struct BruteForceAttack {
    verifier: Verifier,
    charset: Vec<char>,
    max_length: usize,
    max_attempts: u64,
}

impl BruteForceAttack {
    pub fn builder(
        hash_function: HashFunction,
        target: impl Into<TargetDigest>,
    ) -> BruteForceAttackBuilder {
        BruteForceAttackBuilder::new(hash_function, target)
    }

    /// The size of the declared search space.
    pub fn search_space(&self) -> u128 {
        search_space(self.charset.len(), self.max_length)
    }

    /// Tests every candidate until one matches, the space is exhausted
    /// or `max_attempts` candidates have been tested.
    ///
    /// The attempt limit is checked after every failed candidate, so a space exactly
    /// as large as the budget ends with `SafetyLimitReached` when nothing matches.
    pub fn search(&self) -> SearchOutcome {
        info!(
            hash_function = %self.verifier.hash_function(),
            charset_len = self.charset.len(),
            max_length = self.max_length,
            max_attempts = self.max_attempts,
            search_space = %self.search_space(),
            "Starting brute force attack"
        );

        let start = Instant::now();
        let mut attempts = 0;

        for candidate in candidates(&self.charset, self.max_length) {
            attempts += 1;

            if self.verifier.matches(&candidate) {
                let elapsed = start.elapsed();
                info!(attempts, ?elapsed, "Found a matching candidate");

                return SearchOutcome::Found(Found {
                    plaintext: candidate,
                    attempts,
                    elapsed,
                });
            }

            if attempts >= self.max_attempts {
                let elapsed = start.elapsed();
                warn!(attempts, ?elapsed, "Maximum number of attempts reached");

                return SearchOutcome::SafetyLimitReached { attempts, elapsed };
            }

            if attempts % PROGRESS_INTERVAL == 0 {
                debug!(attempts, last_candidate = %candidate, "Brute force attack in progress");
            }
        }

        let elapsed = start.elapsed();
        info!(attempts, ?elapsed, "Search space exhausted without a match");

        SearchOutcome::NotFound { attempts, elapsed }
    }
}
