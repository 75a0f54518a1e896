use std::collections::HashMap;

use tracing::{debug, info};

use crate::hash::{HashFunction, TargetDigest};

/// A precomputed mapping from hexadecimal digests to the plaintexts producing them.
///
/// Every entry satisfies `hash_function.digest(plaintext) == digest`.
#[derive(Clone)]
pub struct RainbowTable {
    /// The digests and their plaintexts.
    entries: HashMap<String, String>,
    /// The hash function used.
    hash_function: HashFunction,
}

impl RainbowTable {
    /// Creates a new rainbow table by hashing every candidate.
    /// When two candidates share a digest, the later one wins.
    pub fn build<I>(candidates: I, hash_function: HashFunction) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut table = Self {
            entries: HashMap::new(),
            hash_function,
        };
        table.rebuild(candidates);

        table
    }

    /// Replaces all the entries of the table with the digests of new candidates.
    pub fn rebuild<I>(&mut self, candidates: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let hash_function = self.hash_function;
        self.fill(candidates.into_iter().map(|candidate| {
            let candidate = candidate.into();
            (hash_function.digest(&candidate), candidate)
        }));

        info!(
            hash_function = %self.hash_function,
            entries = self.entries.len(),
            "Rainbow table built"
        );
    }

    fn fill(&mut self, entries: impl Iterator<Item = (String, String)>) {
        self.entries.clear();
        self.entries.reserve(entries.size_hint().0);

        for (digest, plaintext) in entries {
            if let Some(previous) = self.entries.insert(digest, plaintext) {
                debug!(overwritten = %previous, "Digest collision in rainbow table");
            }
        }
    }

    /// Returns the plaintext producing the given digest, if the table contains it.
    pub fn lookup(&self, target: impl Into<TargetDigest>) -> Option<&str> {
        let target = target.into();
        self.entries.get(target.as_str()).map(String::as_str)
    }

    /// Returns the number of entries stored in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Returns an iterator over the (digest, plaintext) pairs of the table.
    /// The pairs are not returned in a particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(digest, plaintext)| (digest.as_str(), plaintext.as_str()))
    }
}

impl std::fmt::Debug for RainbowTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} rainbow table", self.hash_function)?;

        for (digest, plaintext) in self.iter().take(10) {
            writeln!(f, "{digest} -> {plaintext}")?;
        }

        if self.len() > 10 {
            writeln!(f, "...")?;
        }

        Ok(())
    }
}
