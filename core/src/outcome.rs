use std::time::Duration;

/// A plaintext recovered by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found {
    /// The recovered plaintext.
    pub plaintext: String,
    /// The 1-based index of the matching candidate among all tested candidates.
    pub attempts: u64,
    /// The wall-clock time spent searching.
    pub elapsed: Duration,
}

/// The result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A candidate matched the target digest.
    Found(Found),
    /// Every candidate was tested without a match.
    NotFound { attempts: u64, elapsed: Duration },
    /// The attempt budget ran out before the candidate space did.
    SafetyLimitReached { attempts: u64, elapsed: Duration },
}

impl SearchOutcome {
    /// Returns the recovered plaintext, if any.
    pub fn plaintext(&self) -> Option<&str> {
        match self {
            Self::Found(found) => Some(&found.plaintext),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The number of candidates tested.
    pub fn attempts(&self) -> u64 {
        match self {
            Self::Found(found) => found.attempts,
            Self::NotFound { attempts, .. } | Self::SafetyLimitReached { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Found(found) => found.elapsed,
            Self::NotFound { elapsed, .. } | Self::SafetyLimitReached { elapsed, .. } => *elapsed,
        }
    }
}
