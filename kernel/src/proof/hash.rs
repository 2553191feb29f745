//! Canonical hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Result format:
//! `"sha256:<hex>"`. This is the only place digests are computed.

use sha2::{Digest, Sha256};

/// Typed domain separator for [`canonical_hash`].
///
/// Every variant maps to a unique, null-terminated byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Problem description (graph, layout, target, bounds, policy).
    Problem,
    /// Solution record (path and values).
    Solution,
    /// Run report.
    Report,
}

impl HashDomain {
    pub const ALL: [HashDomain; 3] = [Self::Problem, Self::Solution, Self::Report];

    /// The raw domain-separator bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Problem => b"REVWALK::PROBLEM::V1\0",
            Self::Solution => b"REVWALK::SOLUTION::V1\0",
            Self::Report => b"REVWALK::REPORT::V1\0",
        }
    }
}

/// A content-addressed hash, rendered as `"sha256:<hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash {
        full: format!("sha256:{}", hex::encode(hasher.finalize())),
    }
}
