//! Run identifier and random hex tokens

use std::fmt;

use rand::Rng;

/// Number of random bytes behind a run id or commit message suffix
pub const TOKEN_BYTES: usize = 3;

/// Generate a short lowercase hex token from `TOKEN_BYTES` random bytes
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill(&mut bytes);
    hex::encode(bytes)
}

/// Identifier of a single run (6 hex characters)
///
/// Generated once per run and embedded in the run log name and every log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    /// Generate a fresh identifier
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(random_hex(rng))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
