use std::{fmt::Display, str::FromStr};

use ::digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::{CrackError, CrackResult};

/// All the supported hash functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashFunction {
    /// Every supported hash function, from the narrowest digest to the widest.
    pub const ALL: [HashFunction; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Hashes a byte slice using the right hash function.
    #[inline]
    pub fn hash(&self, input: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(input).to_vec(),
            Self::Sha1 => Sha1::digest(input).to_vec(),
            Self::Sha256 => Sha256::digest(input).to_vec(),
            Self::Sha512 => Sha512::digest(input).to_vec(),
        }
    }

    /// Hashes the UTF-8 bytes of a text and returns the lowercase hexadecimal digest.
    #[inline]
    pub fn digest(&self, text: &str) -> String {
        hex::encode(self.hash(text.as_bytes()))
    }

    /// Gets the digest size in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => <Md5 as Digest>::output_size(),
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
        }
    }

    /// Gets the length of the hexadecimal digest.
    pub fn hex_len(&self) -> usize {
        self.digest_size() * 2
    }

    /// The identifier used to select this hash function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for HashFunction {
    type Err = CrackError;

    fn from_str(s: &str) -> CrackResult<Self> {
        Self::ALL
            .into_iter()
            .find(|hash_function| hash_function.name() == s)
            .ok_or_else(|| CrackError::UnsupportedAlgorithm(s.to_owned()))
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the hexadecimal digest of a text.
pub fn digest(text: &str, hash_function: HashFunction) -> String {
    hash_function.digest(text)
}

/// A digest to recover a plaintext for, normalized to lowercase hexadecimal.
///
/// The length is not checked against the hash function: a digest of the wrong width
/// simply never matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetDigest(String);

impl TargetDigest {
    pub fn new(digest: &str) -> Self {
        Self(digest.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetDigest {
    fn from(digest: &str) -> Self {
        Self::new(digest)
    }
}

impl From<String> for TargetDigest {
    fn from(digest: String) -> Self {
        Self::new(&digest)
    }
}

impl Display for TargetDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single predicate used by every search strategy.
#[derive(Clone, Debug)]
pub struct Verifier {
    hash_function: HashFunction,
    target: TargetDigest,
}

impl Verifier {
    pub fn new(hash_function: HashFunction, target: impl Into<TargetDigest>) -> Self {
        Self {
            hash_function,
            target: target.into(),
        }
    }

    /// Returns true if the candidate hashes to the target digest.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.hash_function.digest(candidate) == self.target.as_str()
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn target(&self) -> &TargetDigest {
        &self.target
    }
}

/// Returns true if `candidate` hashes to `target_digest`, ignoring the case of the target.
pub fn matches(candidate: &str, target_digest: &str, hash_function: HashFunction) -> bool {
    Verifier::new(hash_function, target_digest).matches(candidate)
}
