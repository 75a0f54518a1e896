//! Recovers the plaintext behind an unsalted digest, using a dictionary attack,
//! a bounded brute force attack or a precomputed rainbow table.

pub mod brute_force;
pub mod dictionary;
pub mod error;
pub mod hash;
pub mod outcome;
pub mod rainbow_table;

use std::time::Duration;

pub use brute_force::{BruteForceAttack, BruteForceAttackBuilder};
pub use dictionary::DictionaryAttack;
pub use error::{CrackError, CrackResult};
pub use hash::{digest, matches, HashFunction, TargetDigest, Verifier};
pub use outcome::{Found, SearchOutcome};
pub use rainbow_table::RainbowTable;

/// The default maximum number of candidates tested by a brute force attack.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 500_000;

/// The default maximum password length of a brute force attack.
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 4;

/// The default pause between two dictionary candidates.
pub const DEFAULT_DELAY: Duration = Duration::ZERO;

/// Number of attempts between two progress logs.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Digits charset.
pub const DIGITS: &str = "0123456789";

/// Lowercase letters charset.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The default charset: digits followed by lowercase letters.
pub const DIGITS_LOWERCASE: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Common passwords used to build a rainbow table when no word list is given.
pub const DEMO_WORDS: [&str; 7] = [
    "password", "123456", "admin", "qwerty", "letmein", "welcome", "abc123",
];
